//! Model artifacts forwarded as multipart uploads.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};

use crate::api::ClientError;

/// An in-memory file destined for a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    /// MIME type declared by the sender, if any.
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            data,
        }
    }

    /// Build a form carrying this file as the single field `field`.
    ///
    /// Fails only if the declared content type is not a valid MIME string.
    pub fn into_form(self, field: &'static str) -> Result<Form, ClientError> {
        let part = Part::bytes(self.data.to_vec()).file_name(self.filename);
        let part = match self.content_type {
            Some(content_type) => part.mime_str(&content_type)?,
            None => part,
        };
        Ok(Form::new().part(field, part))
    }
}

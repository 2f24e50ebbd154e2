//! Client for the model-serving service.

use packetbase_core::flow::NetworkFlow;

use crate::api::{ClientError, UpstreamApi, UpstreamBody};
use crate::upload::UploadFile;

/// Multipart field name the model service reads uploaded artifacts from.
pub const UPLOAD_FIELD: &str = "upload_file";

/// Endpoints of the model-serving service.
///
/// Activation toggles are plain GETs on the service side and are issued
/// that way here.
#[derive(Debug, Clone)]
pub struct ModelServiceApi {
    api: UpstreamApi,
}

impl ModelServiceApi {
    pub fn new(api: UpstreamApi) -> Self {
        Self { api }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// `GET /models`
    pub async fn list_models(&self) -> Result<UpstreamBody, ClientError> {
        self.api.get(&["models"]).await
    }

    /// `GET /models/{name}`
    pub async fn get_model(&self, name: &str) -> Result<UpstreamBody, ClientError> {
        self.api.get(&["models", name]).await
    }

    /// `GET /models/activate/{name}`
    pub async fn activate_model(&self, name: &str) -> Result<UpstreamBody, ClientError> {
        self.api.get(&["models", "activate", name]).await
    }

    /// `GET /models/deactivate/{name}`
    pub async fn deactivate_model(&self, name: &str) -> Result<UpstreamBody, ClientError> {
        self.api.get(&["models", "deactivate", name]).await
    }

    /// `POST /models/predict/{name}` with the flow as JSON body.
    pub async fn predict(
        &self,
        name: &str,
        flow: &NetworkFlow,
    ) -> Result<UpstreamBody, ClientError> {
        self.api
            .post_json(&["models", "predict", name], flow)
            .await
    }

    /// `DELETE /models/delete/{name}`
    pub async fn delete_model(&self, name: &str) -> Result<UpstreamBody, ClientError> {
        self.api.delete(&["models", "delete", name]).await
    }

    /// `POST /models/{filename}/upload` as multipart, field [`UPLOAD_FIELD`].
    pub async fn upload_model(&self, file: UploadFile) -> Result<UpstreamBody, ClientError> {
        let filename = file.filename.clone();
        let form = file.into_form(UPLOAD_FIELD)?;
        self.api
            .post_multipart(&["models", filename.as_str(), "upload"], form)
            .await
    }
}

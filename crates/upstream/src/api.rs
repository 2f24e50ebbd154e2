//! Base REST client shared by every upstream wrapper.
//!
//! Requests are issued exactly once: no retries and no client-side
//! timeout. Whatever status the upstream answers with is kept on the
//! returned [`UpstreamBody`] so callers can relay it.

use bytes::Bytes;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use url::Url;

/// Errors from the upstream HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered, but not with the JSON we expected.
    #[error("Upstream returned an invalid JSON body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot carry a path.
    #[error("Invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),

    /// A path parameter that would escape its position in the URL.
    #[error("Invalid path segment: '{0}'")]
    InvalidPathSegment(String),

    /// A local file to be uploaded could not be read.
    #[error("Failed to read upload file: {0}")]
    File(#[from] std::io::Error),
}

/// Raw upstream response: status plus undecoded body bytes.
#[derive(Debug, Clone)]
pub struct UpstreamBody {
    pub status: StatusCode,
    pub bytes: Bytes,
}

impl UpstreamBody {
    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.bytes).map_err(|source| ClientError::Decode {
            status: self.status.as_u16(),
            source,
        })
    }

    /// Check that the body is well-formed JSON without building a value,
    /// returning it untouched so the bytes can be relayed as-is.
    pub fn ensure_json(self) -> Result<Self, ClientError> {
        self.json::<IgnoredAny>()?;
        Ok(self)
    }
}

/// HTTP client bound to a single upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamApi {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamApi {
    /// Create a client for `base_url` (e.g. `http://host:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (shares the connection pool between upstreams).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for the path made of `segments`.
    ///
    /// Each segment is percent-encoded on its own, so a caller-supplied
    /// name containing `/` stays a single path segment. `.` and `..` are
    /// refused rather than resolved.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ClientError::InvalidPathSegment(dot.to_string()));
        }

        let invalid = || ClientError::InvalidBaseUrl(self.base_url.clone());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str]) -> Result<UpstreamBody, ClientError> {
        self.send(self.client.get(self.url(segments)?)).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<UpstreamBody, ClientError> {
        self.send(self.client.delete(self.url(segments)?)).await
    }

    pub async fn post_json<T>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> Result<UpstreamBody, ClientError>
    where
        T: Serialize + ?Sized,
    {
        self.send(self.client.post(self.url(segments)?).json(body))
            .await
    }

    pub async fn put_json<T>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> Result<UpstreamBody, ClientError>
    where
        T: Serialize + ?Sized,
    {
        self.send(self.client.put(self.url(segments)?).json(body))
            .await
    }

    pub async fn post_multipart(
        &self,
        segments: &[&str],
        form: reqwest::multipart::Form,
    ) -> Result<UpstreamBody, ClientError> {
        self.send(self.client.post(self.url(segments)?).multipart(form))
            .await
    }

    // ---- private helpers ----

    async fn send(&self, request: RequestBuilder) -> Result<UpstreamBody, ClientError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%method, %url, error = %e, "Upstream request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%method, %url, %status, len = bytes.len(), "Upstream responded");

        Ok(UpstreamBody { status, bytes })
    }
}

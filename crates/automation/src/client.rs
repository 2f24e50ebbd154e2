//! HTTP implementation of [`PacketBaseOps`] against the PacketBase gateway.

use async_trait::async_trait;
use packetbase_core::flow::NetworkFlow;
use packetbase_upstream::{ClientError, UploadFile, UpstreamApi, UpstreamBody};
use serde_json::Value;

use crate::ops::PacketBaseOps;

/// Multipart field the gateway's upload route reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Client bound to a single PacketBase API base URL.
#[derive(Debug, Clone)]
pub struct PacketBaseClient {
    api: UpstreamApi,
}

impl PacketBaseClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api: UpstreamApi::new(api_url),
        }
    }

    pub fn api_url(&self) -> &str {
        self.api.base_url()
    }
}

fn parse(body: UpstreamBody) -> Result<Value, ClientError> {
    body.json()
}

#[async_trait]
impl PacketBaseOps for PacketBaseClient {
    async fn get_models(&self) -> Result<Value, ClientError> {
        parse(self.api.get(&["models"]).await?)
    }

    async fn get_model(&self, model_name: &str) -> Result<Value, ClientError> {
        parse(self.api.get(&["models", model_name]).await?)
    }

    async fn activate_model(&self, model_name: &str) -> Result<Value, ClientError> {
        parse(self.api.get(&["models", "activate", model_name]).await?)
    }

    async fn deactivate_model(&self, model_name: &str) -> Result<Value, ClientError> {
        parse(self.api.get(&["models", "deactivate", model_name]).await?)
    }

    async fn predict(&self, model_name: &str, flow: &NetworkFlow) -> Result<Value, ClientError> {
        parse(
            self.api
                .post_json(&["models", "predict", model_name], flow)
                .await?,
        )
    }

    async fn delete_model(&self, model_name: &str) -> Result<Value, ClientError> {
        parse(self.api.delete(&["models", "delete", model_name]).await?)
    }

    async fn upload_model(&self, file: UploadFile) -> Result<Value, ClientError> {
        let form = file.into_form(UPLOAD_FIELD)?;
        parse(self.api.post_multipart(&["models", "upload"], form).await?)
    }

    async fn get_flows(&self) -> Result<Value, ClientError> {
        parse(self.api.get(&["network_flows"]).await?)
    }

    async fn get_flow(&self, flow_id: &str) -> Result<Value, ClientError> {
        parse(self.api.get(&["network_flows", flow_id]).await?)
    }

    async fn update_flow(&self, flow_id: &str, flow: &NetworkFlow) -> Result<Value, ClientError> {
        parse(self.api.put_json(&["network_flows", flow_id], flow).await?)
    }
}

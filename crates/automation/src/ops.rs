use async_trait::async_trait;
use packetbase_core::flow::NetworkFlow;
use packetbase_upstream::{ClientError, UploadFile};
use serde_json::Value;

/// The operations the automation commands are built on.
///
/// Each call performs exactly one HTTP request and returns the parsed
/// response body without reshaping it.
#[async_trait]
pub trait PacketBaseOps: Send + Sync {
    async fn get_models(&self) -> Result<Value, ClientError>;

    async fn get_model(&self, model_name: &str) -> Result<Value, ClientError>;

    async fn activate_model(&self, model_name: &str) -> Result<Value, ClientError>;

    async fn deactivate_model(&self, model_name: &str) -> Result<Value, ClientError>;

    async fn predict(&self, model_name: &str, flow: &NetworkFlow) -> Result<Value, ClientError>;

    async fn delete_model(&self, model_name: &str) -> Result<Value, ClientError>;

    async fn upload_model(&self, file: UploadFile) -> Result<Value, ClientError>;

    /// Raw search response; hits are not flattened.
    async fn get_flows(&self) -> Result<Value, ClientError>;

    async fn get_flow(&self, flow_id: &str) -> Result<Value, ClientError>;

    async fn update_flow(&self, flow_id: &str, flow: &NetworkFlow) -> Result<Value, ClientError>;
}

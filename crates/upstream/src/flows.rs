//! Client for the network-flow database service.

use packetbase_core::flow::NetworkFlowFull;

use crate::api::{ClientError, UpstreamApi, UpstreamBody};

#[derive(Debug, Clone)]
pub struct FlowStoreApi {
    api: UpstreamApi,
}

impl FlowStoreApi {
    pub fn new(api: UpstreamApi) -> Self {
        Self { api }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// `GET /network_flows`. The body is the store's raw search response.
    pub async fn search_flows(&self) -> Result<UpstreamBody, ClientError> {
        self.api.get(&["network_flows"]).await
    }

    /// `GET /network_flows/{id}`
    pub async fn get_flow(&self, id: &str) -> Result<UpstreamBody, ClientError> {
        self.api.get(&["network_flows", id]).await
    }

    /// `PUT /network_flows/{id}` with the full record as JSON body.
    pub async fn update_flow(
        &self,
        id: &str,
        flow: &NetworkFlowFull,
    ) -> Result<UpstreamBody, ClientError> {
        self.api.put_json(&["network_flows", id], flow).await
    }
}

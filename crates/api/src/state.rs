use std::sync::Arc;

use packetbase_upstream::{FlowStoreApi, ModelServiceApi, UpstreamApi};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the config is behind `Arc` and the upstream
/// clients share one `reqwest` connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Model-serving service client.
    pub models: ModelServiceApi,
    /// Flow database service client.
    pub flows: FlowStoreApi,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let client = reqwest::Client::new();
        let models = ModelServiceApi::new(UpstreamApi::with_client(
            client.clone(),
            config.ml_api_url.clone(),
        ));
        let flows = FlowStoreApi::new(UpstreamApi::with_client(
            client,
            config.db_api_url.clone(),
        ));

        Self {
            config: Arc::new(config),
            models,
            flows,
        }
    }
}

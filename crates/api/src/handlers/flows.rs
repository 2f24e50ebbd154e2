//! Handlers for the `/network_flows` resource, forwarded to the flow database.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use packetbase_core::flow::{NetworkFlow, NetworkFlowFull};
use packetbase_core::search::SearchResponse;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::response::{relay, RelayJson};
use crate::state::AppState;

/// GET /network_flows
///
/// Flattens every search hit into `{ "id": _id, ..._source }`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Map<String, Value>>>> {
    let body = state.flows.search_flows().await?;
    let flows = body.json::<SearchResponse>()?.into_flows();
    tracing::debug!(count = flows.len(), "Listed network flows");
    Ok(Json(flows))
}

/// GET /network_flows/{id}
///
/// A JSON object body is relayed as-is with the upstream status. Anything
/// else yields an empty record instead of an error. Transport failures
/// still surface as errors.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let body = state.flows.get_flow(&id).await?;

    if let Err(e) = NetworkFlow::from_slice(&body.bytes) {
        tracing::warn!(
            flow_id = %id,
            upstream_status = %body.status,
            error = %e,
            "Flow body did not decode, returning empty record"
        );
        return Ok(Json(NetworkFlow::default()).into_response());
    }

    Ok(relay(body)?.into_response())
}

/// PUT /network_flows/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(flow): Json<NetworkFlowFull>,
) -> AppResult<RelayJson> {
    relay(state.flows.update_flow(&id, &flow).await?)
}

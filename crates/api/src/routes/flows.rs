//! Route definitions for the `/network_flows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flows;
use crate::state::AppState;

/// Routes mounted at `/network_flows`.
///
/// ```text
/// GET    /        -> list      (search hits flattened)
/// GET    /{id}    -> get_by_id (empty record on undecodable body)
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flows::list))
        .route("/{id}", get(flows::get_by_id).put(flows::update))
}

pub mod flows;
pub mod health;
pub mod models;

use axum::Router;

use crate::state::AppState;

/// Build the gateway route tree.
///
/// Paths mirror the upstream services, so there is no version prefix.
///
/// ```text
/// /models                                  list
/// /models/upload                           upload (multipart)
/// /models/{name}                           get
/// /models/activate/{name}/activate         activate
/// /models/deactivate/{name}                deactivate
/// /models/predict/{name}                   predict
/// /models/delete/{name}                    delete
///
/// /network_flows                           list (flattened)
/// /network_flows/{id}                      get, update
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .nest("/models", models::router(max_upload_bytes))
        .nest("/network_flows", flows::router())
}

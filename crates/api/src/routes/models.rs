//! Route definitions for the `/models` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::models;
use crate::state::AppState;

/// Routes mounted at `/models`.
///
/// ```text
/// GET    /                            -> list
/// POST   /upload                      -> upload   (multipart)
/// GET    /upload                      -> get_by_name (a model named "upload")
/// GET    /{name}                      -> get_by_name
/// GET    /activate/{name}/activate    -> activate
/// GET    /deactivate/{name}           -> deactivate
/// POST   /predict/{name}              -> predict
/// DELETE /delete/{name}               -> delete
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(models::list))
        .route(
            "/upload",
            get(models::get_by_name)
                .post(models::upload)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/{name}", get(models::get_by_name))
        .route("/activate/{name}/activate", get(models::activate))
        .route("/deactivate/{name}", get(models::deactivate))
        .route("/predict/{name}", post(models::predict))
        .route("/delete/{name}", delete(models::delete))
}

//! Handlers for the `/models` resource, forwarded to the model-serving service.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use packetbase_core::flow::NetworkFlow;
use packetbase_upstream::UploadFile;

use crate::error::{AppError, AppResult};
use crate::response::{relay, RelayJson};
use crate::state::AppState;

/// Multipart field the gateway reads the uploaded model from.
pub const UPLOAD_FORM_FIELD: &str = "file";

/// GET /models
pub async fn list(State(state): State<AppState>) -> AppResult<RelayJson> {
    relay(state.models.list_models().await?)
}

/// GET /models/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<RelayJson> {
    relay(state.models.get_model(&name).await?)
}

/// GET /models/activate/{name}/activate
pub async fn activate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<RelayJson> {
    tracing::info!(model = %name, "Activating model");
    relay(state.models.activate_model(&name).await?)
}

/// GET /models/deactivate/{name}
pub async fn deactivate(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<RelayJson> {
    tracing::info!(model = %name, "Deactivating model");
    relay(state.models.deactivate_model(&name).await?)
}

/// POST /models/predict/{name}
pub async fn predict(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(flow): Json<NetworkFlow>,
) -> AppResult<RelayJson> {
    relay(state.models.predict(&name, &flow).await?)
}

/// DELETE /models/delete/{name}
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<RelayJson> {
    tracing::info!(model = %name, "Deleting model");
    relay(state.models.delete_model(&name).await?)
}

/// POST /models/upload
///
/// Accepts a multipart form with a required `file` field and re-posts it
/// to the model service under the filename it was uploaded with. Other
/// fields are ignored.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<RelayJson> {
    let mut file: Option<UploadFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FORM_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("Uploaded file has no filename".into()))?;
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        file = Some(UploadFile::new(filename, content_type, data));
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    tracing::info!(
        filename = %file.filename,
        size = file.data.len(),
        "Forwarding model upload"
    );

    relay(state.models.upload_model(file).await?)
}

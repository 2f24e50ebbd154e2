use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use packetbase_upstream::ClientError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{ "error": message, "code": CODE }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure talking to one of the upstream services.
    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Upstream(err) => classify_client_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an upstream client error into an HTTP status, error code, and message.
///
/// - Transport failures map to 502 `UPSTREAM_UNAVAILABLE`.
/// - Undecodable bodies map to 502 `UPSTREAM_INVALID_RESPONSE`.
/// - `.`/`..` path parameters map to 400 `BAD_REQUEST`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_client_error(err: &ClientError) -> (StatusCode, &'static str, String) {
    match err {
        ClientError::Request(e) if e.is_builder() => {
            tracing::error!(error = %e, "Failed to build upstream request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        ClientError::Request(e) => {
            tracing::error!(error = %e, "Upstream service unavailable");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                "Upstream service unavailable".to_string(),
            )
        }
        ClientError::Decode { status, source } => {
            tracing::error!(upstream_status = status, error = %source, "Upstream body is not JSON");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_INVALID_RESPONSE",
                "Upstream service returned an invalid response".to_string(),
            )
        }
        ClientError::InvalidPathSegment(segment) => (
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            format!("Invalid path parameter '{segment}'"),
        ),
        ClientError::InvalidBaseUrl(base_url) => {
            tracing::error!(%base_url, "Upstream base URL cannot carry a path");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        ClientError::File(e) => {
            tracing::error!(error = %e, "Upload file error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

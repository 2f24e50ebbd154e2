/// Domain errors shared by the gateway and the automation adapter.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

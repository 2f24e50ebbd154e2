use axum::http::HeaderValue;

/// Default body limit for model uploads (512 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

/// Gateway configuration loaded from environment variables.
///
/// Built once at startup and shared through [`AppState`](crate::state::AppState);
/// handlers never read the environment themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Base URL of the model-serving service, e.g. `http://ml:8001`.
    pub ml_api_url: String,
    /// Base URL of the flow database service, e.g. `http://db:8000`.
    pub db_api_url: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<HeaderValue>,
    /// Inbound request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
    /// Maximum accepted multipart upload size in bytes.
    pub max_upload_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `ML_API`               | `localhost` |
    /// | `ML_API_PORT`          | `8001`      |
    /// | `DB_API`               | `localhost` |
    /// | `DB_API_PORT`          | `8000`      |
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `API_PORT`             | `8080`      |
    /// | `CORS_ORIGINS`         | `*`         |
    /// | `REQUEST_TIMEOUT_SECS` | unset       |
    /// | `MAX_UPLOAD_BYTES`     | 512 MiB     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let ml_host = var("ML_API", "localhost");
        let ml_port: u16 = parse("ML_API_PORT", "port", &var("ML_API_PORT", "8001"))?;
        let db_host = var("DB_API", "localhost");
        let db_port: u16 = parse("DB_API_PORT", "port", &var("DB_API_PORT", "8000"))?;

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse("API_PORT", "port", &var("API_PORT", "8080"))?;

        let cors_origins = parse_origins(&var("CORS_ORIGINS", "*"))?;

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .map(|raw| parse("REQUEST_TIMEOUT_SECS", "number of seconds", &raw))
            .transpose()?;

        let max_upload_bytes = lookup("MAX_UPLOAD_BYTES")
            .map(|raw| parse("MAX_UPLOAD_BYTES", "byte count", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self {
            host,
            port,
            ml_api_url: format!("http://{ml_host}:{ml_port}"),
            db_api_url: format!("http://{db_host}:{db_port}"),
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
        })
    }
}

fn parse<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: &str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}

/// `*` (anywhere in the list) opens CORS to every origin.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.contains(&"*") {
        return Ok(Vec::new());
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "origin list",
                value: raw.to_string(),
            })
        })
        .collect()
}

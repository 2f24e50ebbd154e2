/// Adapter configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AutomationConfig {
    /// Base URL of the PacketBase API (`API_URL`, required).
    pub api_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

impl AutomationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("API_URL"))?;

        Ok(Self { api_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_is_required() {
        let err = AutomationConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "API_URL environment variable is required");
    }

    #[test]
    fn blank_api_url_counts_as_missing() {
        assert!(AutomationConfig::from_lookup(|_| Some("  ".into())).is_err());
    }

    #[test]
    fn api_url_is_read() {
        let config =
            AutomationConfig::from_lookup(|key| (key == "API_URL").then(|| "http://gw:8080".into()))
                .unwrap();
        assert_eq!(config.api_url, "http://gw:8080");
    }
}

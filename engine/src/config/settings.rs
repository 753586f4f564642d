// Engine settings, loaded from environment variables with sensible defaults.
use crate::error::EngineError;
use serde::Deserialize;
use shared::utils::DEFAULT_RESOLUTION_SECS;

/// Environment variable overriding the exchange base address.
pub const API_BASE_URL_ENV: &str = "DVOL_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "https://www.deribit.com";

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    /// Base address of the exchange REST API, without a trailing slash.
    pub api_base_url: String,
    /// Bucket width of the requested series, in seconds.
    pub resolution_secs: u32,
}

impl EngineSettings {
    /// Settings from the process environment; anything unset falls back to
    /// the defaults. An override that is set but blank is a configuration
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self, EngineError> {
        let api_base_url = match std::env::var(API_BASE_URL_ENV) {
            Ok(value) => {
                let trimmed = value.trim().trim_end_matches('/').to_string();
                if trimmed.is_empty() {
                    return Err(EngineError::ConfigError(format!(
                        "{} is set but empty",
                        API_BASE_URL_ENV
                    )));
                }
                trimmed
            }
            Err(_) => DEFAULT_API_BASE_URL.to_string(),
        };
        Ok(EngineSettings {
            api_base_url,
            resolution_secs: DEFAULT_RESOLUTION_SECS,
        })
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            resolution_secs: DEFAULT_RESOLUTION_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.api_base_url, "https://www.deribit.com");
        assert_eq!(settings.resolution_secs, 43_200);
    }

    // Single test for every from_env branch: the cases share one process
    // environment, so they must run sequentially.
    #[test]
    fn test_from_env_override_and_validation() {
        std::env::set_var(API_BASE_URL_ENV, "https://test.deribit.com/");
        let settings = EngineSettings::from_env().unwrap();
        assert_eq!(settings.api_base_url, "https://test.deribit.com");

        std::env::set_var(API_BASE_URL_ENV, "   ");
        assert!(matches!(
            EngineSettings::from_env(),
            Err(EngineError::ConfigError(_))
        ));

        std::env::remove_var(API_BASE_URL_ENV);
        let settings = EngineSettings::from_env().unwrap();
        assert_eq!(settings.api_base_url, "https://www.deribit.com");
        assert_eq!(settings.resolution_secs, 43_200);
    }
}

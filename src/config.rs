//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default so the CLI works out of the box
//! against the hosted backend; a `.env` file can override any of it.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend deployment, matching the original frontend's baseURL.
const DEFAULT_API_URL: &str = "https://bmihealthplanner-backend-1.onrender.com";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the meal API
    pub api_base_url: String,
    /// Directory holding the per-user meal caches and the identity file
    pub data_dir: PathBuf,
    /// HTTP request timeout
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("MEAL_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if api_base_url.is_empty() {
            return Err(ConfigError::Invalid("MEAL_API_URL"));
        }

        let data_dir = env::var("MEALSYNC_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./.mealsync"));

        let timeout_secs: u64 = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_TIMEOUT_SECS"))?;

        Ok(Self {
            api_base_url,
            data_dir,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("./.mealsync-test"),
            http_timeout: Duration::from_secs(5),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

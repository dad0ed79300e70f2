use std::time::Duration;

use config::{Config as ConfigLoader, Environment};
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};

const ENV_PREFIX: &str = "CRPT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // General
    #[serde(default = "default_log_level")]
    pub log_level: String,

    // Registry endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_auth_token")]
    pub auth_token: String,
    /// Product group passed as the `pg` query parameter.
    #[serde(default = "default_product_group")]
    pub product_group: String,

    // Rate limiting
    /// Submissions admitted per window.
    #[serde(default = "default_request_limit")]
    pub request_limit: usize,
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// When set, callers wait up to this long for a permit instead of
    /// probing and throttling immediately.
    #[serde(default)]
    pub acquire_timeout_ms: Option<u64>,

    // HTTP
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // Demo harness
    #[serde(default = "default_demo_requests")]
    pub demo_requests: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    "http://localhost:8080/api/v3/lk/documents/create".to_string()
}

fn default_auth_token() -> String {
    "12345".to_string()
}

fn default_product_group() -> String {
    "lp".to_string()
}

fn default_request_limit() -> usize {
    2
}

fn default_window_ms() -> u64 {
    1000
}

fn default_http_timeout_ms() -> u64 {
    5000
}

fn default_demo_requests() -> usize {
    5
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let config: Config = ConfigLoader::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.request_limit == 0 {
            return Err(AppError::InvalidConfig(
                "request_limit must be greater than 0".into(),
            ));
        }
        if self.window_ms == 0 {
            return Err(AppError::InvalidConfig(
                "window_ms must be greater than 0".into(),
            ));
        }
        self.endpoint()?;
        Ok(())
    }

    pub fn endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&self.api_url)?)
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    pub fn acquire_timeout(&self) -> Option<Duration> {
        self.acquire_timeout_ms.map(Duration::from_millis)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }
}

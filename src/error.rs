use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Registry error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Rate limiter stopped: permits are no longer replenished")]
    LimiterStopped,
}

pub type Result<T> = std::result::Result<T, AppError>;

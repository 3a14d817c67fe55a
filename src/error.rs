use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cafe-data operations
pub type Result<T> = std::result::Result<T, CafeDataError>;

/// Errors raised while setting up the data layer.
///
/// Failures of individual fetches never surface here: they are modelled by
/// [`crate::http::TransportFailure`] and absorbed by the fetch controller.
#[derive(Debug, Error)]
pub enum CafeDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CafeDataError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Message suitable for printing to a terminal user
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigNotFound { path } => format!(
                "Configuration file not found at {}. Run `cafe-data init` to create one.",
                path.display()
            ),
            Self::InvalidConfig { message } => format!("Configuration is invalid: {message}"),
            Self::UrlParse(err) => format!("Base URL is not a valid URL: {err}"),
            other => other.to_string(),
        }
    }
}

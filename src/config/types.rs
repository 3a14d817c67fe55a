use crate::context::{Locale, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

/// Default request timeout handed to the transport
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Main configuration structure for the data layer
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CafeDataConfig {
    /// Remote API settings
    pub api: ApiConfig,
    /// User-facing fallback messages
    #[serde(default)]
    pub messages: MessagesConfig,
    /// Fetch controller behavior
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API root, e.g. `https://cafes.example.com/api/`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Locale used when the host does not supply one
    pub default_locale: Option<String>,
    /// Value of the `User-Agent` header
    pub user_agent: Option<String>,
}

/// Messages shown when the server gives none
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessagesConfig {
    /// Toast text for infrastructure failures
    #[serde(default = "default_server_error")]
    pub server_error: String,
    /// Inline text for client errors without a server message
    #[serde(default = "default_generic_error")]
    pub generic_error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ControllerConfig {
    #[serde(default)]
    pub stale_policy: StalePolicy,
}

/// What happens when a superseded request resolves after a newer one was issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Only the most recently issued request may write state
    #[default]
    DiscardStale,
    /// Whichever request resolves last writes state
    LastResolvedWins,
}

fn default_server_error() -> String {
    "Something went wrong on our side. Please try again in a moment.".to_string()
}

fn default_generic_error() -> String {
    "We couldn't load this right now.".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            server_error: default_server_error(),
            generic_error: default_generic_error(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/".to_string(),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
            default_locale: Some(DEFAULT_LOCALE.to_string()),
            user_agent: None,
        }
    }
}

impl CafeDataConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn default_locale(&self) -> Locale {
        self.api
            .default_locale
            .as_deref()
            .map(Locale::new)
            .unwrap_or_default()
    }

    /// API root with a trailing slash so relative paths join beneath it
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.api.base_url.trim();
        if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        }
    }
}

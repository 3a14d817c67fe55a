use crate::config::types::{CafeDataConfig, StalePolicy};
use crate::error::Result;

/// Builder for CafeDataConfig to improve API ergonomics
#[derive(Debug, Default)]
pub struct CafeDataConfigBuilder {
    config: CafeDataConfig,
}

impl CafeDataConfigBuilder {
    /// Create a new config builder seeded with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.api.base_url = base_url.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.api.timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn default_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.config.api.default_locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.api.user_agent = Some(user_agent.into());
        self
    }

    /// Toast text for server failures
    #[must_use]
    pub fn server_error_message<S: Into<String>>(mut self, message: S) -> Self {
        self.config.messages.server_error = message.into();
        self
    }

    /// Inline fallback when a client error carries no message
    #[must_use]
    pub fn generic_error_message<S: Into<String>>(mut self, message: S) -> Self {
        self.config.messages.generic_error = message.into();
        self
    }

    #[must_use]
    pub fn stale_policy(mut self, policy: StalePolicy) -> Self {
        self.config.controller.stale_policy = policy;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<CafeDataConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

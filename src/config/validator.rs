use crate::config::types::CafeDataConfig;
use crate::context::Locale;
use crate::error::{CafeDataError, Result};
use std::path::Path;
use url::Url;

/// Configuration validator
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate configuration (uses enhanced validation with default context)
    pub fn validate(&self, config: &CafeDataConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }

    /// Validation with the config file named in every message
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &CafeDataConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        let base_url = Url::parse(&config.normalized_base_url()).map_err(|e| {
            CafeDataError::invalid_config(format!(
                "api.base_url '{}' in {} is not a valid URL: {}",
                config.api.base_url, config_path_str, e
            ))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CafeDataError::invalid_config(format!(
                "api.base_url in {} must use http or https, found '{}'",
                config_path_str,
                base_url.scheme()
            )));
        }

        if config.api.timeout_seconds == Some(0) {
            return Err(CafeDataError::invalid_config(format!(
                "api.timeout_seconds in {} must be greater than zero",
                config_path_str
            )));
        }

        if let Some(tag) = &config.api.default_locale {
            if !Locale::new(tag).is_well_formed() {
                return Err(CafeDataError::invalid_config(format!(
                    "api.default_locale '{}' in {} is not a two-letter language code",
                    tag, config_path_str
                )));
            }
        }

        for (field, value) in [
            ("messages.server_error", &config.messages.server_error),
            ("messages.generic_error", &config.messages.generic_error),
        ] {
            if value.trim().is_empty() {
                return Err(CafeDataError::invalid_config(format!(
                    "{} in {} must not be empty",
                    field, config_path_str
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CafeDataConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut config = CafeDataConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "ftp://cafes.example.com/api/".to_string();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("http or https"));
    }

    #[test]
    fn test_rejects_zero_timeout_and_bad_locale() {
        let mut config = CafeDataConfig::default();
        config.api.timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        let mut config = CafeDataConfig::default();
        config.api.default_locale = Some("deu".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_messages() {
        let mut config = CafeDataConfig::default();
        config.messages.generic_error = "  ".to_string();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("messages.generic_error"));
    }
}

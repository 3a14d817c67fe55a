use crate::config::types::CafeDataConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{CafeDataError, Result};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CafeDataConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<CafeDataConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a cafe-data.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CafeDataConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CafeDataError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            },
            _ => CafeDataError::Io(e),
        })?;

        let config: CafeDataConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, then validate it with the file path as context
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<CafeDataConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(CafeDataError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(CafeDataError::Io)?;

        let config: CafeDataConfig = toml::from_str(&content).map_err(|e| {
            CafeDataError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidator::new().validate_with_context(&config, path_ref)?;
        tracing::debug!(path = %path_ref.display(), base_url = %config.api.base_url, "configuration loaded");

        Ok(config)
    }
}

// Convenience functions maintaining the API
impl CafeDataConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::CafeDataConfigBuilder {
        crate::config::builder::CafeDataConfigBuilder::new()
    }

    /// Load configuration from a cafe-data.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration and validate it
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Validate without file context
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::new().validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = CafeDataConfig::load_with_validation(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CafeDataError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_from_file_separates_missing_from_unreadable() {
        let dir = TempDir::new().unwrap();
        let missing = CafeDataConfig::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(CafeDataError::ConfigNotFound { .. })));

        let path = dir.path().join("cafe-data.toml");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let unreadable = CafeDataConfig::load_from_file(&path);
        assert!(matches!(unreadable, Err(CafeDataError::Io(_))));
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cafe-data.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let error = CafeDataConfig::load_with_validation(&path).unwrap_err();
        assert!(error.to_string().contains("cafe-data.toml"));
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cafe-data.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"https://cafes.example.com/api/\"\ntimeout_seconds = 5\n",
        )
        .unwrap();

        let config = CafeDataConfig::load_with_validation(&path).unwrap();
        assert_eq!(config.timeout_seconds(), 5);

        let unvalidated = CafeDataConfig::load_from_file(&path).unwrap();
        assert_eq!(config, unvalidated);
    }
}

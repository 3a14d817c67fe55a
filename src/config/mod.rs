pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{ApiConfig, CafeDataConfig, ControllerConfig, MessagesConfig, StalePolicy};
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use builder::CafeDataConfigBuilder;
pub use validator::ConfigValidator;
pub use templates::{generate_default_config_template, ensure_config_file_exists};

/// TOML configuration (`hireai.toml`) and its manager.
pub mod toml_config;

pub use toml_config::{ConfigError, ConfigManager, HireConfig};

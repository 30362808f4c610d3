//! TOML-based configuration for HireAI
//!
//! Configuration lives in `hireai.toml`. Every field has a default, so an empty
//! file (or no file at all, see [`HireConfig::load_or_default`]) yields a
//! working demo setup.
//!
//! Use [`ConfigManager`] for lock-free shared access to the current config.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::filters::UnknownKeyPolicy;
use crate::routing::View;
use crate::types::Role;

/// Root configuration structure loaded from hireai.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HireConfig {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub filters: FilterConfig,
}

// ============= Application Configuration =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

// ============= Authentication Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated round trip for a login exchange, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub login_latency_ms: u64,

    /// Simulated round trip for a sign-up exchange, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub signup_latency_ms: u64,

    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Display name given to every fabricated demo identity
    #[serde(default = "default_demo_display_name")]
    pub demo_display_name: String,

    #[serde(default = "default_demo_role")]
    pub demo_role: String,
}

fn default_latency_ms() -> u64 {
    1500
}

fn default_min_password_length() -> usize {
    8
}

fn default_demo_display_name() -> String {
    "Demo User".to_string()
}

fn default_demo_role() -> String {
    "admin".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: default_latency_ms(),
            signup_latency_ms: default_latency_ms(),
            min_password_length: default_min_password_length(),
            demo_display_name: default_demo_display_name(),
            demo_role: default_demo_role(),
        }
    }
}

impl AuthConfig {
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    pub fn signup_latency(&self) -> Duration {
        Duration::from_millis(self.signup_latency_ms)
    }

    /// Role for demo identities. Falls back to admin; `validate` rejects
    /// unknown values before this is reached.
    pub fn role(&self) -> Role {
        Role::parse(&self.demo_role).unwrap_or_default()
    }
}

// ============= Routing Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Where the guard sends anonymous visitors of protected views
    #[serde(default = "default_fallback_view")]
    pub fallback_view: View,
}

fn default_fallback_view() -> View {
    View::Login
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fallback_view: default_fallback_view(),
        }
    }
}

// ============= Filter Configuration =============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub unknown_key: UnknownKeyPolicy,
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl HireConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Like [`HireConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::FileNotFound(missing)) => {
                info!("No configuration at {:?}, using defaults", missing);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: HireConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.min_password_length == 0 {
            return Err(ConfigError::ValidationError(
                "auth.min_password_length must be at least 1".to_string(),
            ));
        }

        if Role::parse(&self.auth.demo_role).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "auth.demo_role '{}' is not one of admin, recruiter, interviewer",
                self.auth.demo_role
            )));
        }

        if self.auth.demo_display_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.demo_display_name must not be empty".to_string(),
            ));
        }

        if self.routing.fallback_view.is_protected() {
            return Err(ConfigError::ValidationError(format!(
                "routing.fallback_view '{}' is itself protected",
                self.routing.fallback_view.path()
            )));
        }

        Ok(())
    }
}

/// Thread-safe configuration holder with lock-free reads
pub struct ConfigManager {
    config: Arc<ArcSwap<HireConfig>>,
    config_path: PathBuf,
    required: bool,
}

impl ConfigManager {
    /// Create a manager and load the initial config, defaulting when the
    /// file is absent
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::open(path, false)
    }

    /// Create a manager for a file that must exist, on startup and on reload
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let config = Self::read(&path, required)?;

        Ok(Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: path,
            required,
        })
    }

    fn read(path: &Path, required: bool) -> Result<HireConfig, ConfigError> {
        if required {
            HireConfig::load(path)
        } else {
            HireConfig::load_or_default(path)
        }
    }

    /// Create a config manager directly from a config (useful for testing)
    pub fn from_config(config: HireConfig) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: PathBuf::from("hireai.toml"),
            required: false,
        }
    }

    /// Get the current configuration (lockless read)
    pub fn config(&self) -> Arc<HireConfig> {
        self.config.load_full()
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Reload from disk. On failure the previous configuration stays active.
    pub fn reload(&self) -> Result<(), ConfigError> {
        info!("Reloading configuration from {:?}", self.config_path);

        let new_config = Self::read(&self.config_path, self.required)?;
        self.config.store(Arc::new(new_config));

        info!("Configuration reloaded successfully");
        Ok(())
    }
}

impl Clone for ConfigManager {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            config_path: self.config_path.clone(),
            required: self.required,
        }
    }
}

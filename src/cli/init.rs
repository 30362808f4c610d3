//! Init command implementation
//!
//! Writes a commented `hireai.toml` holding every setting at its default.

use super::output::Output;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "hireai.toml";

/// Result of the init operation
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    Success,
    /// hireai.toml already exists and --force was not given
    AlreadyExists,
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite an existing hireai.toml
    pub force: bool,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing HireAI");

    let config_path = config.path.join(CONFIG_FILE);
    if config_path.exists() && !config.force {
        output.warning(&format!("{} already exists!", CONFIG_FILE));
        output.hint("Use --force to overwrite it");
        return InitResult::AlreadyExists;
    }

    if !config.path.exists() {
        if let Err(e) = fs::create_dir_all(&config.path) {
            return InitResult::Error(format!("Failed to create {}: {}", config.path.display(), e));
        }
    }

    if let Err(e) = fs::write(&config_path, DEFAULT_CONFIG) {
        return InitResult::Error(format!("Failed to create {}: {}", config_path.display(), e));
    }
    output.success(&format!("Created {}", config_path.display()));

    output.header("Next Steps");
    output.info("Open the dashboard with demo credentials:");
    output.command("hireai --email demo@example.com --password secret dashboard");
    output.info("Or keep them in the environment:");
    output.command("export HIREAI_EMAIL=demo@example.com HIREAI_PASSWORD=secret");
    output.hint("Set [auth] login_latency_ms = 0 to skip the simulated network delay");

    InitResult::Success
}

const DEFAULT_CONFIG: &str = r#"# HireAI configuration
#
# Every setting is optional; the values below are the defaults.

[app]
# Log level: trace, debug, info, warn or error (RUST_LOG takes precedence)
log_level = "info"
# Log output: "pretty" or "json"
log_format = "pretty"

[auth]
# Simulated network round trip for login and sign-up, in milliseconds
login_latency_ms = 1500
signup_latency_ms = 1500
min_password_length = 8
# Identity handed out by the demo login
demo_display_name = "Demo User"
# admin, recruiter or interviewer
demo_role = "admin"

[routing]
# Where anonymous visitors of protected pages are sent: "login" or "landing"
fallback_view = "login"

[filters]
# Unknown filter keys: "reject" fails the command, "all" falls back to the
# broadest key and logs a warning
unknown_key = "reject"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::HireConfig;
    use tempfile::TempDir;

    fn init_config(temp_dir: &TempDir, force: bool) -> InitConfig {
        InitConfig {
            path: temp_dir.path().to_path_buf(),
            force,
        }
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let parsed = HireConfig::parse(DEFAULT_CONFIG).expect("template should parse");
        assert_eq!(parsed, HireConfig::default());
    }

    #[test]
    fn test_init_writes_config() {
        let temp_dir = TempDir::new().unwrap();
        let result = run(init_config(&temp_dir, false), &Output::no_color());

        assert_eq!(result, InitResult::Success);
        let written = fs::read_to_string(temp_dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.contains("[auth]"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "# mine\n").unwrap();

        let result = run(init_config(&temp_dir, false), &Output::no_color());

        assert_eq!(result, InitResult::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "# mine\n").unwrap();

        let result = run(init_config(&temp_dir, true), &Output::no_color());

        assert_eq!(result, InitResult::Success);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested/project");

        let result = run(
            InitConfig {
                path: nested.clone(),
                force: false,
            },
            &Output::no_color(),
        );

        assert_eq!(result, InitResult::Success);
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_init_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let result = run(
            InitConfig {
                path: blocker,
                force: false,
            },
            &Output::no_color(),
        );

        match result {
            InitResult::Error(message) => assert!(message.starts_with("Failed to create")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

//! CLI module for HireAI
//!
//! Drives the session store, route guard and filter engine from the command
//! line. Uses clap for argument parsing and owo-colors for colored output.

pub mod commands;
pub mod init;
pub mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// HireAI - recruitment dashboard
///
/// Browse jobs, candidates and interviews from the demo data set. Protected
/// pages need a signed-in session: pass --email and --password (or set
/// HIREAI_EMAIL and HIREAI_PASSWORD) to sign in first.
#[derive(Parser, Debug)]
#[command(
    name = "hireai",
    author = "HireAI Team",
    version,
    about = "HireAI - recruitment dashboard",
    long_about = "Browse the HireAI recruitment dashboard from the terminal.\n\n\
                  Protected pages (dashboard, jobs, candidates, interviews, settings)\n\
                  redirect to the login page unless credentials are supplied.",
    after_help = "EXAMPLES:\n    \
                  hireai init                                    # Write a default hireai.toml\n    \
                  hireai open /candidates                        # See where the guard sends you\n    \
                  hireai --email me@acme.io --password s3cret candidates --stage screening\n    \
                  hireai --today 2024-05-15 interviews --view past"
)]
pub struct Cli {
    /// Path to the configuration file [default: hireai.toml, used only if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Email to sign in with
    #[arg(long, env = "HIREAI_EMAIL", global = true)]
    pub email: Option<String>,

    /// Password to sign in with
    #[arg(long, env = "HIREAI_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Pin today's date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day, global = true)]
    pub today: Option<NaiveDate>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default hireai.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing hireai.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Navigate to a path and report what the route guard mounts
    Open {
        /// Path such as /candidates or /login
        path: String,
    },

    /// Sign in with --email and --password
    Login,

    /// Create an account with --email and --password
    Signup {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Show the dashboard overview
    Dashboard,

    /// List job positions
    Jobs {
        /// all, active, draft or closed
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// List candidates
    Candidates {
        /// all, applied, screening, interview, assessment, offer or rejected
        #[arg(long, default_value = "all")]
        stage: String,
    },

    /// Show the interview schedule
    Interviews {
        /// upcoming or past
        #[arg(long, default_value = "upcoming")]
        view: String,

        /// Selected date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show a settings tab
    Settings {
        /// profile, company, security, notifications, integrations,
        /// job-settings, branding or teams
        #[arg(long, default_value = "profile")]
        tab: String,
    },
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    crate::filters::interviews::parse_selected_date(raw).map_err(|e| e.to_string())
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The `--config` file, or `hireai.toml` in the working directory.
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(init::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hireai",
            "candidates",
            "--stage",
            "offer",
            "--today",
            "2024-05-15",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 5, 15));
        match cli.command {
            Some(Commands::Candidates { stage }) => assert_eq!(stage, "offer"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_explicit_config_path() {
        let cli = Cli::try_parse_from(["hireai", "--config", "conf/team.toml", "jobs"]).unwrap();
        assert_eq!(cli.config_path(), Path::new("conf/team.toml"));
    }

    #[test]
    fn test_bad_today_is_rejected() {
        assert!(Cli::try_parse_from(["hireai", "--today", "15/05/2024", "dashboard"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["hireai", "interviews"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.config_path(), Path::new("hireai.toml"));
        match cli.command {
            Some(Commands::Interviews { view, date }) => {
                assert_eq!(view, "upcoming");
                assert!(date.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

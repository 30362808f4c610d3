use anyhow::{anyhow, Context, Result};
use hireai::cli::commands::{show_config, App};
use hireai::cli::init::{self, InitConfig, InitResult};
use hireai::cli::output::Output;
use hireai::cli::{Cli, Commands};
use hireai::utils::toml_config::{ConfigManager, HireConfig, LogFormat};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Some(Commands::Init { path, force }) = &cli.command {
        init_tracing(&HireConfig::default(), cli.verbose);
        let config = InitConfig {
            path: path.clone(),
            force: *force,
        };
        return match init::run(config, &output) {
            InitResult::Success | InitResult::AlreadyExists => Ok(()),
            InitResult::Error(e) => Err(anyhow!(e)),
        };
    }

    // An explicit --config must exist; the implicit hireai.toml is optional.
    let path = cli.config_path();
    let manager = match &cli.config {
        Some(_) => ConfigManager::from_file(path),
        None => ConfigManager::new(path),
    }
    .with_context(|| format!("Failed to load {}", path.display()))?;
    let config = manager.config();
    init_tracing(&config, cli.verbose);
    tracing::debug!(path = %manager.path().display(), "Configuration loaded");

    if let Some(Commands::Config { validate }) = &cli.command {
        return show_config(manager.path(), &config, *validate, &output, cli.json);
    }

    let mut app = App::new(&cli, &config, output);
    app.run(cli.command).await
}

/// RUST_LOG wins, then --verbose, then `[app].log_level`. Logs go to stderr
/// so `--json` output stays clean.
fn init_tracing(config: &HireConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.app.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

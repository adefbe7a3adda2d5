//! KBridge hit analysis CLI

use anyhow::Result;
use clap::Parser;
use kbridge_cli::cli::Cli;
use kbridge_cli::commands;
use kbridge_cli::config::CliConfig;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply command line overrides
    let mut config = CliConfig::load()?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.log_json {
        config.log_json = true;
    }

    // Initialize tracing
    init_tracing(&config)?;
    debug!("Loaded configuration: {:?}", config);

    let output = commands::run(&cli.command, &config)?;
    print!("{}", output);

    Ok(())
}

/// Initialize tracing subscriber; logs go to stderr so reports stay clean
fn init_tracing(config: &CliConfig) -> Result<()> {
    let json = config.log_json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

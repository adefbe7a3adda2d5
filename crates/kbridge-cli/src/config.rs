//! CLI configuration

use kbridge_sdk::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file stem, resolved relative to the working directory
pub const DEFAULT_CONFIG_STEM: &str = "config/kbridge";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KBRIDGE";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level for the kbridge crates
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,

    /// Report format when no --format flag is given
    pub default_format: ReportFormat,

    /// Analyzer configuration file (YAML or JSON)
    pub analyzer_config: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            default_format: ReportFormat::Text,
            analyzer_config: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from(DEFAULT_CONFIG_STEM)
    }

    /// Load from a config file stem (any extension the config crate knows)
    /// plus `KBRIDGE_` environment variables
    pub fn load_from(stem: &str) -> anyhow::Result<Self> {
        let config_result = config::Config::builder()
            .add_source(config::File::with_name(stem).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::debug!(error = %e, "config sources unreadable, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Default tracing filter for this configuration
    pub fn log_filter(&self) -> String {
        let level = &self.log_level;
        format!(
            "kbridge={level},kbridge_cli={level},kbridge_sdk={level},kbridge_runtime={level}"
        )
    }
}

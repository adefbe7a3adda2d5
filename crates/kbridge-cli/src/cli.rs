//! Command line definition

use clap::{Parser, Subcommand};
use kbridge_sdk::ReportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kbridge")]
#[command(about = "Score how Korean market performance carries over to Japan")]
#[command(version)]
pub struct Cli {
    /// Log level for the kbridge crates (overrides config)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze every product of a dataset file
    Analyze {
        /// Dataset file (.yaml, .yml or .json)
        file: PathBuf,

        /// Output format: json, yaml or text
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// Analyzer configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Analyze a generated synthetic dataset
    Demo {
        /// Number of products
        #[arg(long, default_value_t = 5)]
        products: usize,

        /// Number of periods per series
        #[arg(long, default_value_t = 12)]
        periods: usize,

        /// Random seed
        #[arg(long, env = "KBRIDGE_SEED", default_value_t = 42)]
        seed: u64,

        /// Output format: json, yaml or text
        #[arg(short, long)]
        format: Option<ReportFormat>,
    },

    /// Score precomputed stage outputs
    Score {
        /// Rank correlation (usually |rho|)
        #[arg(long, allow_negative_numbers = true)]
        rank: f64,

        /// Time-series correlation at the optimal lag
        #[arg(long, allow_negative_numbers = true)]
        time: f64,

        /// Category similarity in [0, 1]
        #[arg(long)]
        category: f64,

        /// Output format: json, yaml or text
        #[arg(short, long)]
        format: Option<ReportFormat>,

        /// Analyzer configuration file (for weights)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
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
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["kbridge", "analyze", "data.yaml", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Analyze { file, format, config } => {
                assert_eq!(file, PathBuf::from("data.yaml"));
                assert_eq!(format, Some(ReportFormat::Json));
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_score_with_negative_time() {
        let cli = Cli::try_parse_from([
            "kbridge", "score", "--rank", "0.8", "--time", "-0.3", "--category", "0.9",
        ])
        .unwrap();
        match cli.command {
            Commands::Score { rank, time, .. } => {
                assert_eq!(rank, 0.8);
                assert_eq!(time, -0.3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["kbridge", "demo", "--format", "csv"]).is_err());
    }
}

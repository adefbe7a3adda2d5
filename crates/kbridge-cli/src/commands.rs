//! Command handlers
//!
//! Each handler returns the rendered report so `main` owns stdout.

use crate::cli::Commands;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use kbridge_sdk::synthetic::generate_dataset;
use kbridge_sdk::{
    render_batch, render_score, Dataset, HitAnalyzer, HitAnalyzerBuilder, ReportFormat,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Run a parsed command
pub fn run(command: &Commands, config: &CliConfig) -> Result<String> {
    match command {
        Commands::Analyze {
            file,
            format,
            config: analyzer_config,
        } => {
            let analyzer = build_analyzer(analyzer_path(analyzer_config, config))?;
            run_analyze(&analyzer, file, format.unwrap_or(config.default_format))
        }
        Commands::Demo {
            products,
            periods,
            seed,
            format,
        } => {
            let analyzer = build_analyzer(config.analyzer_config.as_deref())?;
            run_demo(
                &analyzer,
                *products,
                *periods,
                *seed,
                format.unwrap_or(config.default_format),
            )
        }
        Commands::Score {
            rank,
            time,
            category,
            format,
            config: analyzer_config,
        } => {
            let analyzer = build_analyzer(analyzer_path(analyzer_config, config))?;
            let result = analyzer.try_score(*rank, *time, *category)?;
            Ok(render_score(&result, format.unwrap_or(config.default_format))?)
        }
    }
}

/// Analyze every product of a dataset file
pub fn run_analyze(analyzer: &HitAnalyzer, file: &Path, format: ReportFormat) -> Result<String> {
    let dataset = Dataset::load(file)
        .with_context(|| format!("Failed to load dataset {}", file.display()))?;
    let batch = analyzer.analyze_batch(&dataset.products)?;
    info!(file = %file.display(), products = batch.reports.len(), "analysis complete");
    Ok(render_batch(&batch, format)?)
}

/// Analyze a seeded synthetic dataset
pub fn run_demo(
    analyzer: &HitAnalyzer,
    products: usize,
    periods: usize,
    seed: u64,
    format: ReportFormat,
) -> Result<String> {
    info!(products, periods, seed, "running on synthetic data");
    let dataset = generate_dataset(products, periods, seed)?;
    let batch = analyzer.analyze_batch(&dataset.products)?;
    Ok(render_batch(&batch, format)?)
}

/// Build an analyzer, optionally from a configuration file
pub fn build_analyzer(config_file: Option<&Path>) -> Result<HitAnalyzer> {
    let builder = match config_file {
        Some(path) => {
            info!(path = %path.display(), "using analyzer configuration");
            HitAnalyzerBuilder::new().with_config_file(path)
        }
        None => HitAnalyzerBuilder::new(),
    };
    builder.build().context("Failed to build analyzer")
}

// The --config flag wins over the configured default
fn analyzer_path<'a>(flag: &'a Option<PathBuf>, config: &'a CliConfig) -> Option<&'a Path> {
    flag.as_deref().or(config.analyzer_config.as_deref())
}

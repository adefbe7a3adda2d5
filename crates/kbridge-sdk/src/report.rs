//! Report rendering
//!
//! Reports render as pretty JSON, YAML, or a plain-text table for terminals.

use crate::analyzer::{AnalysisReport, BatchReport};
use crate::error::{Result, SdkError};
use kbridge_core::ScoreResult;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SdkError::ConfigError(format!(
                "unknown report format '{}' (expected json, yaml or text)",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        })
    }
}

/// Render a single product report
pub fn render_analysis(report: &AnalysisReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Text => Ok(analysis_text(report)),
    }
}

/// Render a batch report
pub fn render_batch(batch: &BatchReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(batch)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(batch)?),
        ReportFormat::Text => Ok(batch_text(batch)),
    }
}

// Writing into a String cannot fail, so the fmt::Results below are ignored.

/// Render a bare score record
pub fn render_score(result: &ScoreResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(result)?),
        ReportFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "Hit score: {:.3} [rank {:.3} + time {:.3} + category {:.3}]",
                result.score,
                result.components.rank,
                result.components.time,
                result.components.category
            );
            let _ = writeln!(
                out,
                "Confidence: {} ({})",
                result.confidence_tier.label(),
                result.coarse_confidence().label()
            );
            let _ = writeln!(out, "Recommendation: {}", result.recommendation.text());
            Ok(out)
        }
    }
}

fn analysis_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let rank = &report.rank_analysis;
    let lag = &report.time_series_analysis;
    let prediction = &report.prediction;

    let _ = writeln!(out, "Product: {}", report.product);
    let _ = writeln!(
        out,
        "  Rank correlation:  {:+.3} (p = {:.4}, {}, {})",
        rank.correlation,
        rank.p_value,
        rank.strength.label(),
        if rank.significant { "significant" } else { "not significant" }
    );
    let _ = writeln!(
        out,
        "  Optimal lag:       {} ({:+.3}) - {}",
        lag.optimal_lag, lag.optimal_correlation, report.lag_interpretation
    );
    let _ = writeln!(out, "  Category score:    {:.2}", report.category_score);
    let _ = writeln!(
        out,
        "  Hit score:         {:.3} [rank {:.3} + time {:.3} + category {:.3}]",
        prediction.score,
        prediction.components.rank,
        prediction.components.time,
        prediction.components.category
    );
    let _ = writeln!(out, "  Confidence:        {}", prediction.confidence_tier.label());
    let _ = writeln!(out, "  Recommendation:    {}", prediction.recommendation.text());

    if let Some(sns) = &report.sns {
        let _ = writeln!(
            out,
            "  SNS score:         {:.1} ({}, {})",
            sns.score.score,
            sns.score.confidence_tier.label(),
            sns.score.recommendation.text()
        );
    }
    out
}

fn batch_text(batch: &BatchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>7} {:>5} {:<10} {}",
        "PRODUCT", "SCORE", "LAG", "CONFIDENCE", "RECOMMENDATION"
    );
    for report in &batch.reports {
        let _ = writeln!(
            out,
            "{:<24} {:>7.3} {:>5} {:<10} {}",
            report.product,
            report.prediction.score,
            report.time_series_analysis.optimal_lag,
            report.prediction.confidence_tier.label(),
            report.prediction.recommendation.text()
        );
    }
    let summary = &batch.summary;
    let _ = writeln!(
        out,
        "\n{} products: {} high, {} medium, {} low potential",
        summary.total(),
        summary.high,
        summary.medium,
        summary.low
    );
    out
}

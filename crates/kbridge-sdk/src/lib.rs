//! KBridge Hit Analysis SDK
//!
//! High-level API for scoring how likely a product that performs in the
//! Korean market is to succeed in the Japanese market.

pub mod analyzer;
pub mod builder;
pub mod config;
pub mod dataset;
mod document;
pub mod error;
pub mod report;
pub mod synthetic;

// Re-export main types
pub use analyzer::{
    AnalysisReport, BatchReport, HitAnalyzer, Potential, PotentialSummary, SnsReport,
};
pub use builder::HitAnalyzerBuilder;
pub use config::{AnalyzerConfig, SnsConfig, DEFAULT_MAX_LAG, MAX_LAG_LIMIT};
pub use dataset::{Dataset, MarketPair};
pub use error::{Result, SdkError};
pub use report::{render_analysis, render_batch, render_score, ReportFormat};

// Re-export commonly used types from dependencies
pub use kbridge_core::{
    ConfidenceTier, Market, MarketSeries, Observation, PlatformWeights, Recommendation,
    ScoreResult, ScoreWeights, SnsBlend,
};
pub use kbridge_runtime::{CategoryPair, SignificanceCriteria, SnsSnapshot};

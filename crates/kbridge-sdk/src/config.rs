//! Configuration types for HitAnalyzer

use crate::document::{self, DocumentFormat};
use crate::error::{Result, SdkError};
use kbridge_core::{PlatformWeights, ScoreWeights, SnsBlend};
use kbridge_runtime::{CategoryPair, CategorySimilarityTable, SignificanceCriteria};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of periods scanned by the cross-correlation stage
pub const DEFAULT_MAX_LAG: usize = 6;

/// Largest accepted `max_lag`; ten years of weekly periods
pub const MAX_LAG_LIMIT: usize = 520;

/// Main analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Stage weights of the composite score
    pub weights: ScoreWeights,

    /// Largest lag tried by the cross-correlation stage
    pub max_lag: usize,

    /// Significance thresholds of the rank stage
    pub significance: SignificanceCriteria,

    /// Category similarity table; the built-in table is used when absent
    pub category_table: Option<Vec<CategoryPair>>,

    /// SNS scorer configuration
    pub sns: SnsConfig,
}

impl AnalyzerConfig {
    /// Create a configuration with the default weight profile
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
            max_lag: DEFAULT_MAX_LAG,
            significance: SignificanceCriteria::default(),
            category_table: None,
            sns: SnsConfig::default(),
        }
    }

    /// Set stage weights
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set maximum lag
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Set category similarity table
    pub fn with_category_table(mut self, pairs: Vec<CategoryPair>) -> Self {
        self.category_table = Some(pairs);
        self
    }

    /// Parse a YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        document::parse_str(content, DocumentFormat::Yaml)
    }

    /// Parse a JSON configuration
    pub fn from_json_str(content: &str) -> Result<Self> {
        document::parse_str(content, DocumentFormat::Json)
    }

    /// Load a configuration file (.yaml, .yml or .json)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        document::load(path.as_ref(), "config")
    }

    /// Check every invariant; called once when an analyzer is built
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.sns.platform_weights.validate()?;
        self.sns.blend.validate()?;

        if self.max_lag > MAX_LAG_LIMIT {
            return Err(SdkError::ConfigError(format!(
                "max_lag must be at most {}, got {}",
                MAX_LAG_LIMIT, self.max_lag
            )));
        }

        let alpha = self.significance.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(SdkError::ConfigError(format!(
                "significance.alpha must be in (0, 1], got {}",
                alpha
            )));
        }
        let min_abs = self.significance.min_abs_correlation;
        if !(0.0..1.0).contains(&min_abs) {
            return Err(SdkError::ConfigError(format!(
                "significance.min_abs_correlation must be in [0, 1), got {}",
                min_abs
            )));
        }

        self.similarity_table()?;
        Ok(())
    }

    /// Build the configured similarity table, if any
    pub fn similarity_table(&self) -> Result<Option<CategorySimilarityTable>> {
        match &self.category_table {
            Some(pairs) => Ok(Some(CategorySimilarityTable::from_pairs(pairs)?)),
            None => Ok(None),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// SNS scorer configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnsConfig {
    /// Per-platform weights (must sum to 1)
    pub platform_weights: PlatformWeights,

    /// SNS vs sales blend
    pub blend: SnsBlend,
}

//! Builder pattern for HitAnalyzer

use crate::analyzer::HitAnalyzer;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use kbridge_core::{PlatformWeights, ScoreWeights, SnsBlend};
use kbridge_runtime::{CategoryPair, SignificanceCriteria};
use std::path::PathBuf;

/// Builder for HitAnalyzer
///
/// # Example
///
/// ```rust,ignore
/// use kbridge_sdk::{HitAnalyzerBuilder, ScoreWeights};
///
/// // Default weights with a custom category table
/// let analyzer = HitAnalyzerBuilder::new()
///     .with_max_lag(4)
///     .add_category_pair("skincare", "skincare", 0.92)
///     .build()?;
///
/// // From a configuration file, with overrides
/// let analyzer = HitAnalyzerBuilder::new()
///     .with_config_file("config/analyzer.yaml")
///     .with_weights(ScoreWeights::new(0.2, 0.6, 0.2)?)
///     .build()?;
/// ```
pub struct HitAnalyzerBuilder {
    config: AnalyzerConfig,
    config_file: Option<PathBuf>,
    overrides: Overrides,
}

/// Options set explicitly on the builder
#[derive(Debug, Default)]
struct Overrides {
    weights: Option<ScoreWeights>,
    max_lag: Option<usize>,
    significance: Option<SignificanceCriteria>,
    category_pairs: Option<Vec<CategoryPair>>,
    platform_weights: Option<PlatformWeights>,
    sns_blend: Option<SnsBlend>,
}

impl HitAnalyzerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::new(),
            config_file: None,
            overrides: Overrides::default(),
        }
    }

    // ========== Base Configuration ==========

    /// Replace the base configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the base configuration from a file at build time
    ///
    /// The file replaces any base set with [`Self::with_config`]. Options set
    /// on the builder are applied on top of it, whatever order they were
    /// called in.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    // ========== Correlation Stages ==========

    /// Set stage weights
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.overrides.weights = Some(weights);
        self
    }

    /// Set maximum lag for the cross-correlation stage
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.overrides.max_lag = Some(max_lag);
        self
    }

    /// Set significance criteria for the rank stage
    pub fn with_significance(mut self, significance: SignificanceCriteria) -> Self {
        self.overrides.significance = Some(significance);
        self
    }

    /// Add a category similarity entry
    ///
    /// Entries extend the base table. When the base has no table, the first
    /// entry switches the analyzer from the built-in table to a custom one.
    pub fn add_category_pair(
        mut self,
        korea: impl Into<String>,
        japan: impl Into<String>,
        similarity: f64,
    ) -> Self {
        self.overrides
            .category_pairs
            .get_or_insert_with(Vec::new)
            .push(CategoryPair {
                korea: korea.into(),
                japan: japan.into(),
                similarity,
            });
        self
    }

    // ========== SNS Scoring ==========

    /// Set per-platform weights
    pub fn with_platform_weights(mut self, weights: PlatformWeights) -> Self {
        self.overrides.platform_weights = Some(weights);
        self
    }

    /// Set the SNS vs sales blend
    pub fn with_sns_blend(mut self, blend: SnsBlend) -> Self {
        self.overrides.sns_blend = Some(blend);
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<HitAnalyzer> {
        let base = match self.config_file {
            Some(path) => AnalyzerConfig::from_file(&path)?,
            None => self.config,
        };
        HitAnalyzer::new(self.overrides.apply(base))
    }
}

impl Default for HitAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Overrides {
    fn apply(self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if let Some(weights) = self.weights {
            config.weights = weights;
        }
        if let Some(max_lag) = self.max_lag {
            config.max_lag = max_lag;
        }
        if let Some(significance) = self.significance {
            config.significance = significance;
        }
        if let Some(pairs) = self.category_pairs {
            config
                .category_table
                .get_or_insert_with(Vec::new)
                .extend(pairs);
        }
        if let Some(weights) = self.platform_weights {
            config.sns.platform_weights = weights;
        }
        if let Some(blend) = self.sns_blend {
            config.sns.blend = blend;
        }
        config
    }
}

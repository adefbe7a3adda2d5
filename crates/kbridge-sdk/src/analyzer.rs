//! HitAnalyzer - full three-stage analysis of paired market data
//!
//! The analyzer owns validated scorers built from an [`AnalyzerConfig`] and
//! runs the rank, lag and category stages over a [`MarketPair`], then
//! combines them into a hit prediction. It holds no mutable state, so a
//! single instance can be shared across threads.

use crate::config::AnalyzerConfig;
use crate::dataset::MarketPair;
use crate::error::{Result, SdkError};
use kbridge_core::{
    LagCorrelationResult, Market, PlatformScores, ScoreResult, SnsScoreResult,
};
use kbridge_runtime::{
    category_similarity, cross_correlation, rank_correlation_with, CategorySimilarityTable,
    HitScorer, RankCorrelation, SnsAnalysis, SnsScorer,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Score at or above which a product counts as high potential
pub const HIGH_POTENTIAL: f64 = 0.7;

/// Score at or above which a product counts as medium potential
pub const MEDIUM_POTENTIAL: f64 = 0.4;

/// Result of analyzing one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub product: String,

    /// Rank stage output
    pub rank_analysis: RankCorrelation,

    /// Lagged cross-correlation of the sales columns
    pub time_series_analysis: LagCorrelationResult,

    /// Human readable lead/lag description
    pub lag_interpretation: String,

    /// Category similarity in [0, 1]
    pub category_score: f64,

    /// Composite hit prediction
    pub prediction: ScoreResult,

    /// SNS scoring, present when the product carries SNS statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sns: Option<SnsReport>,
}

impl AnalysisReport {
    /// Potential bucket of the prediction
    pub fn potential(&self) -> Potential {
        Potential::from_score(self.prediction.score)
    }
}

/// SNS analysis attached to a product report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnsReport {
    pub analysis: SnsAnalysis,
    pub score: SnsScoreResult,
}

/// Market potential bucket used by batch summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    High,
    Medium,
    Low,
}

impl Potential {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_POTENTIAL {
            Potential::High
        } else if score >= MEDIUM_POTENTIAL {
            Potential::Medium
        } else {
            Potential::Low
        }
    }
}

/// Count of products per potential bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PotentialSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PotentialSummary {
    fn record(&mut self, potential: Potential) {
        match potential {
            Potential::High => self.high += 1,
            Potential::Medium => self.medium += 1,
            Potential::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Result of scoring many products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Reports sorted by descending score, ties by product name
    pub reports: Vec<AnalysisReport>,
    pub summary: PotentialSummary,
}

impl BatchReport {
    /// Best scoring product, if any
    pub fn top(&self) -> Option<&AnalysisReport> {
        self.reports.first()
    }
}

/// Hit analyzer
#[derive(Debug, Clone)]
pub struct HitAnalyzer {
    config: AnalyzerConfig,
    scorer: HitScorer,
    sns_scorer: SnsScorer,
    category_table: Option<CategorySimilarityTable>,
}

impl HitAnalyzer {
    /// Create an analyzer, validating the configuration once
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let scorer = HitScorer::new(config.weights)?;
        let sns_scorer = SnsScorer::new(config.sns.platform_weights, config.sns.blend)?;
        let category_table = config.similarity_table()?;

        debug!(
            max_lag = config.max_lag,
            custom_categories = category_table.is_some(),
            "hit analyzer created"
        );

        Ok(Self {
            config,
            scorer,
            sns_scorer,
            category_table,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Spearman correlation of the two rank columns
    pub fn rank_stage(&self, pair: &MarketPair) -> Result<RankCorrelation> {
        Ok(rank_correlation_with(
            &pair.korea.ranks(),
            &pair.japan.ranks(),
            &self.config.significance,
        )?)
    }

    /// Cross-correlation of the two sales columns, Korea leading
    pub fn lag_stage(&self, pair: &MarketPair) -> Result<LagCorrelationResult> {
        Ok(cross_correlation(
            &pair.korea.sales(),
            &pair.japan.sales(),
            self.config.max_lag,
        )?)
    }

    /// Category similarity using the configured or built-in table
    pub fn category_stage(&self, korea: &str, japan: &str) -> f64 {
        category_similarity(korea, japan, self.category_table.as_ref())
    }

    /// Composite score from the stage outputs
    pub fn score(&self, rank: f64, time: f64, category: f64) -> ScoreResult {
        self.scorer.score(rank, time, category)
    }

    /// Hit score from caller-supplied values, checked for range first
    pub fn try_score(&self, rank: f64, time: f64, category: f64) -> Result<ScoreResult> {
        Ok(self.scorer.try_score(rank, time, category)?)
    }

    /// SNS score from platform sub-scores and a sales correlation
    pub fn score_sns(&self, sub_scores: &PlatformScores, sales_correlation: f64) -> SnsScoreResult {
        self.sns_scorer.score(sub_scores, sales_correlation)
    }

    /// Run every stage over one product
    pub fn analyze(&self, pair: &MarketPair) -> Result<AnalysisReport> {
        pair.korea.ensure_aligned(&pair.japan, "market_pair")?;

        let rank_analysis = self.rank_stage(pair)?;
        let time_series_analysis = self.lag_stage(pair)?;
        let category_score = self.category_stage(&pair.category, pair.japan_category());

        let prediction = self.score(
            rank_analysis.correlation.abs(),
            time_series_analysis.optimal_correlation,
            category_score,
        );
        let lag_interpretation = time_series_analysis.interpretation(Market::Korea, Market::Japan);

        let sns = pair.sns.as_ref().map(|snapshot| {
            let analysis = SnsAnalysis::from_snapshot(snapshot);
            let score = self.score_sns(
                &analysis.platform_scores(),
                time_series_analysis.optimal_correlation,
            );
            SnsReport { analysis, score }
        });

        info!(
            product = %pair.product,
            periods = pair.korea.len(),
            score = prediction.score,
            tier = %prediction.confidence_tier,
            optimal_lag = time_series_analysis.optimal_lag,
            "product analyzed"
        );

        Ok(AnalysisReport {
            product: pair.product.clone(),
            rank_analysis,
            time_series_analysis,
            lag_interpretation,
            category_score,
            prediction,
            sns,
        })
    }

    /// Analyze many products; the first failure aborts the batch
    pub fn analyze_batch(&self, pairs: &[MarketPair]) -> Result<BatchReport> {
        let mut reports = pairs
            .iter()
            .map(|pair| {
                self.analyze(pair).map_err(|source| SdkError::ProductError {
                    product: pair.product.clone(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        reports.sort_by(|a, b| {
            b.prediction
                .score
                .total_cmp(&a.prediction.score)
                .then_with(|| a.product.cmp(&b.product))
        });

        let mut summary = PotentialSummary::default();
        for report in &reports {
            summary.record(report.potential());
        }

        info!(
            products = reports.len(),
            high = summary.high,
            medium = summary.medium,
            low = summary.low,
            "batch analyzed"
        );

        Ok(BatchReport { reports, summary })
    }
}

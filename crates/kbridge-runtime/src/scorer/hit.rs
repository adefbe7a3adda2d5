//! Hit prediction scorer (rank / time-series / category blend)

use super::composite::CompositeScorer;
use crate::error::{Result, RuntimeError};
use kbridge_core::{ScoreComponents, ScoreResult, ScoreScale, ScoreWeights};
use tracing::debug;

/// Composite scorer over the three correlation stages.
///
/// Scores are on the unit scale. The weight profile is fixed per instance,
/// so several scorers with different profiles can coexist.
#[derive(Debug, Clone, PartialEq)]
pub struct HitScorer {
    weights: ScoreWeights,
    composite: CompositeScorer<3>,
}

impl HitScorer {
    /// Create a scorer, rejecting malformed weights
    pub fn new(weights: ScoreWeights) -> Result<Self> {
        let composite = CompositeScorer::new(weights.named(), ScoreScale::Unit)?;
        Ok(Self { weights, composite })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Combine the stage outputs.
    ///
    /// `rank_correlation` is usually |rho|; `category_score` is in [0, 1].
    pub fn score(
        &self,
        rank_correlation: f64,
        time_correlation: f64,
        category_score: f64,
    ) -> ScoreResult {
        let blend = self
            .composite
            .blend([rank_correlation, time_correlation, category_score]);
        let [rank, time, category] = blend.contributions;

        let result = ScoreResult::new(
            blend.total,
            ScoreComponents {
                rank,
                time,
                category,
            },
            self.composite.scale(),
        );

        debug!(
            score = result.score,
            tier = %result.confidence_tier,
            recommendation = %result.recommendation,
            "hit score computed"
        );

        result
    }

    /// Like [`HitScorer::score`], for inputs that did not come from the stages.
    ///
    /// Rejects non-finite values, correlations outside [-1, 1] and a category
    /// score outside [0, 1].
    pub fn try_score(
        &self,
        rank_correlation: f64,
        time_correlation: f64,
        category_score: f64,
    ) -> Result<ScoreResult> {
        check_range("rank", rank_correlation, -1.0, 1.0)?;
        check_range("time", time_correlation, -1.0, 1.0)?;
        check_range("category", category_score, 0.0, 1.0)?;
        Ok(self.score(rank_correlation, time_correlation, category_score))
    }
}

fn check_range(name: &str, value: f64, low: f64, high: f64) -> Result<()> {
    if value.is_finite() && (low..=high).contains(&value) {
        return Ok(());
    }
    Err(RuntimeError::InvalidInput {
        stage: "composite_score",
        reason: format!("{} must be a number in [{}, {}], got {}", name, low, high, value),
    })
}

impl Default for HitScorer {
    fn default() -> Self {
        let weights = ScoreWeights::default();
        Self {
            weights,
            composite: CompositeScorer::from_validated(weights.named(), ScoreScale::Unit),
        }
    }
}

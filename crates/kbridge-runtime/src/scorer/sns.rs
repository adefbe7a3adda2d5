//! SNS multi-platform scorer
//!
//! Platform sub-scores are all on the 0-100 scale. The sales correlation
//! (in [-1, 1]) is converted to a percentage before the final blend so both
//! sides of the blend share a unit.

use super::composite::CompositeScorer;
use crate::error::Result;
use kbridge_core::{PlatformScores, PlatformWeights, ScoreScale, SnsBlend, SnsScoreResult};
use tracing::debug;

/// Weighted platform aggregate blended with the sales correlation
#[derive(Debug, Clone, PartialEq)]
pub struct SnsScorer {
    platforms: CompositeScorer<4>,
    blend: CompositeScorer<2>,
}

impl SnsScorer {
    /// Create a scorer; platform weights must sum to one
    pub fn new(platform_weights: PlatformWeights, blend: SnsBlend) -> Result<Self> {
        Ok(Self {
            platforms: CompositeScorer::with_unit_sum(platform_weights.named(), ScoreScale::Percent)?,
            blend: CompositeScorer::new(blend.named(), ScoreScale::Percent)?,
        })
    }

    /// Score platform sub-scores (0-100) together with a sales correlation
    pub fn score(&self, sub_scores: &PlatformScores, sales_correlation: f64) -> SnsScoreResult {
        let platforms = self.platforms.blend(sub_scores.to_array());
        let final_blend = self
            .blend
            .blend([platforms.total, sales_correlation * 100.0]);
        let [sns_contribution, sales_contribution] = final_blend.contributions;

        let result = SnsScoreResult {
            score: final_blend.total,
            sns_contribution,
            sales_contribution,
            platform_contributions: PlatformScores::from_array(platforms.contributions),
            confidence_tier: self.blend.confidence(final_blend.total),
            recommendation: self.blend.recommendation(final_blend.total),
        };

        debug!(
            score = result.score,
            sns_aggregate = platforms.total,
            tier = %result.confidence_tier,
            "sns score computed"
        );

        result
    }
}

impl Default for SnsScorer {
    fn default() -> Self {
        Self {
            platforms: CompositeScorer::from_validated(
                PlatformWeights::default().named(),
                ScoreScale::Percent,
            ),
            blend: CompositeScorer::from_validated(SnsBlend::default().named(), ScoreScale::Percent),
        }
    }
}

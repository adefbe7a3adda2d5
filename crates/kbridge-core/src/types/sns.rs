//! SNS aggregation records
//!
//! Every platform sub-score is on the 0-100 scale; the SNS result is tiered
//! with `ScoreScale::Percent`.

use super::score::{ConfidenceTier, Recommendation};
use serde::{Deserialize, Serialize};

/// One value per platform
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformScores {
    /// Video viral score
    pub youtube: f64,

    /// Reel (or post) engagement rate
    pub instagram: f64,

    /// Short-video virality coefficient
    pub tiktok: f64,

    /// Text sentiment score
    pub twitter: f64,
}

impl PlatformScores {
    /// Values in platform order (youtube, instagram, tiktok, twitter)
    pub fn to_array(&self) -> [f64; 4] {
        [self.youtube, self.instagram, self.tiktok, self.twitter]
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        let [youtube, instagram, tiktok, twitter] = values;
        Self {
            youtube,
            instagram,
            tiktok,
            twitter,
        }
    }
}

/// Result of the SNS + sales blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnsScoreResult {
    /// Final blended score (0-100)
    pub score: f64,

    /// Share contributed by the platform aggregate
    pub sns_contribution: f64,

    /// Share contributed by the sales correlation
    pub sales_contribution: f64,

    /// Weighted per-platform contributions to the aggregate
    pub platform_contributions: PlatformScores,

    pub confidence_tier: ConfidenceTier,

    pub recommendation: Recommendation,
}

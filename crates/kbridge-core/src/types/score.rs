//! Score records, confidence tiers and recommendations
//!
//! Tiers and recommendations are both derived from the same score with
//! inclusive lower bounds. The bounds nest so that a very-high tier always
//! comes with "launch immediately" and "do not launch" only ever comes with
//! a low or very-low tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit convention of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// Scores in 0..=1
    #[default]
    Unit,
    /// Scores in 0..=100
    Percent,
}

impl ScoreScale {
    /// Multiplier applied to the unit thresholds
    pub fn factor(&self) -> f64 {
        match self {
            ScoreScale::Unit => 1.0,
            ScoreScale::Percent => 100.0,
        }
    }
}

/// Five-tier confidence, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceTier {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceTier {
    /// Unit-scale lower bounds, highest first
    pub const THRESHOLDS: [(f64, ConfidenceTier); 4] = [
        (0.8, ConfidenceTier::VeryHigh),
        (0.6, ConfidenceTier::High),
        (0.4, ConfidenceTier::Medium),
        (0.2, ConfidenceTier::Low),
    ];

    /// Classify a score
    pub fn from_score(score: f64, scale: ScoreScale) -> Self {
        let factor = scale.factor();
        Self::THRESHOLDS
            .iter()
            .find(|(bound, _)| score >= bound * factor)
            .map(|(_, tier)| *tier)
            .unwrap_or(ConfidenceTier::VeryLow)
    }

    /// Three-tier view of this tier
    pub fn coarse(&self) -> CoarseConfidence {
        match self {
            ConfidenceTier::VeryHigh | ConfidenceTier::High => CoarseConfidence::High,
            ConfidenceTier::Medium => CoarseConfidence::Medium,
            ConfidenceTier::Low | ConfidenceTier::VeryLow => CoarseConfidence::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::VeryLow => "very-low",
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
            ConfidenceTier::VeryHigh => "very-high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-tier confidence for lightweight callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseConfidence {
    Low,
    Medium,
    High,
}

impl CoarseConfidence {
    pub fn label(&self) -> &'static str {
        match self {
            CoarseConfidence::Low => "low",
            CoarseConfidence::Medium => "medium",
            CoarseConfidence::High => "high",
        }
    }
}

impl fmt::Display for CoarseConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Launch recommendation, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "do not launch at this time")]
    DoNotLaunch,
    #[serde(rename = "needs further analysis")]
    NeedsFurtherAnalysis,
    #[serde(rename = "test market first")]
    TestMarketFirst,
    #[serde(rename = "launch immediately")]
    LaunchImmediately,
}

impl Recommendation {
    /// Unit-scale lower bounds, highest first
    pub const THRESHOLDS: [(f64, Recommendation); 3] = [
        (0.7, Recommendation::LaunchImmediately),
        (0.5, Recommendation::TestMarketFirst),
        (0.3, Recommendation::NeedsFurtherAnalysis),
    ];

    /// Derive the recommendation for a score
    pub fn from_score(score: f64, scale: ScoreScale) -> Self {
        let factor = scale.factor();
        Self::THRESHOLDS
            .iter()
            .find(|(bound, _)| score >= bound * factor)
            .map(|(_, rec)| *rec)
            .unwrap_or(Recommendation::DoNotLaunch)
    }

    /// Recommendation text shown to humans
    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::LaunchImmediately => "launch immediately",
            Recommendation::TestMarketFirst => "test market first",
            Recommendation::NeedsFurtherAnalysis => "needs further analysis",
            Recommendation::DoNotLaunch => "do not launch at this time",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Weighted contribution of each stage (weight x sub-score)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub rank: f64,
    pub time: f64,
    pub category: f64,
}

/// Result of one composite scoring call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Composite score
    pub score: f64,

    /// Five-tier confidence
    pub confidence_tier: ConfidenceTier,

    /// Launch recommendation
    pub recommendation: Recommendation,

    /// Per-stage contributions
    pub components: ScoreComponents,
}

impl ScoreResult {
    /// Build a result, deriving tier and recommendation from the score
    pub fn new(score: f64, components: ScoreComponents, scale: ScoreScale) -> Self {
        Self {
            score,
            confidence_tier: ConfidenceTier::from_score(score, scale),
            recommendation: Recommendation::from_score(score, scale),
            components,
        }
    }

    /// Three-tier view of the confidence
    pub fn coarse_confidence(&self) -> CoarseConfidence {
        self.confidence_tier.coarse()
    }
}

//! Type definitions for KBridge
//!
//! This module contains the data model shared by every scoring stage:
//! market series, weight profiles, lag results and score records.

pub mod lag;
pub mod score;
pub mod series;
pub mod sns;
pub mod weights;

pub use lag::LagCorrelationResult;
pub use score::{
    CoarseConfidence, ConfidenceTier, Recommendation, ScoreComponents, ScoreResult, ScoreScale,
};
pub use series::{CategoryLabel, Market, MarketSeries, Observation};
pub use sns::{PlatformScores, SnsScoreResult};
pub use weights::{validate_weight_vector, PlatformWeights, ScoreWeights, SnsBlend};

//! KBridge Core - Core types and definitions for the KBridge hit scoring engine
//!
//! This crate provides the fundamental types used across the KBridge ecosystem:
//! - Market series (paired Korea/Japan observations)
//! - Weight configurations for the composite scorers
//! - Score, tier and recommendation types
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{
    validate_weight_vector, CategoryLabel, CoarseConfidence, ConfidenceTier,
    LagCorrelationResult, Market, MarketSeries, Observation, PlatformScores, PlatformWeights,
    Recommendation, ScoreComponents, ScoreResult, ScoreScale, ScoreWeights, SnsBlend,
    SnsScoreResult,
};

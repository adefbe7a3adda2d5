//! KBridge Runtime - Deterministic scoring core
//!
//! This crate provides the three correlation stages (rank, lagged
//! cross-correlation, category similarity), the composite scorers that
//! combine them, and SNS signal extraction. Every function is a pure
//! function of its inputs; scorers hold only read-only configuration and
//! can be shared freely across threads.

pub mod error;
pub mod scorer;
pub mod signals;
pub mod stages;
pub mod stats;

// Re-export main types
pub use error::{Result, RuntimeError};
pub use scorer::{Blend, CompositeScorer, HitScorer, SnsScorer};
pub use signals::{SnsAnalysis, SnsSnapshot};
pub use stages::{
    builtin_categories, category_similarity, cross_correlation, rank_correlation,
    rank_correlation_with, CategoryPair, CategorySimilarityTable, CorrelationStrength,
    RankCorrelation, SignificanceCriteria, NEUTRAL_SIMILARITY,
};

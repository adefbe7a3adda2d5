//! The three correlation stages feeding the composite scorer

pub mod category;
pub mod lag;
pub mod rank;

pub use category::{
    builtin_categories, category_similarity, CategoryPair, CategorySimilarityTable,
    NEUTRAL_SIMILARITY,
};
pub use lag::cross_correlation;
pub use rank::{
    rank_correlation, rank_correlation_with, CorrelationStrength, RankCorrelation,
    SignificanceCriteria,
};

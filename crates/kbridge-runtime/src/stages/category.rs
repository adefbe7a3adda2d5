//! Category similarity stage
//!
//! Looks up how comparable a Korean product category is to a Japanese one.
//! A missing pair never fails the pipeline: it resolves to the neutral
//! similarity of 0.5.

use crate::error::{Result, RuntimeError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

const STAGE: &str = "category_similarity";

/// Similarity used when a pair is not listed
pub const NEUTRAL_SIMILARITY: f64 = 0.5;

/// Built-in same-category similarities
const BUILTIN_SAME_CATEGORY: [(&str, f64); 5] = [
    ("skincare", 0.9),
    ("makeup", 0.85),
    ("cleansing", 0.8),
    ("mask-pack", 0.95),
    ("base-makeup", 0.88),
];

/// Category labels known to the built-in table
pub fn builtin_categories() -> impl Iterator<Item = &'static str> {
    BUILTIN_SAME_CATEGORY.iter().map(|(name, _)| *name)
}

/// One entry of a similarity table, as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPair {
    /// Category in the leading (Korean) market
    pub korea: String,

    /// Category in the following (Japanese) market
    pub japan: String,

    /// Similarity in [0, 1]
    pub similarity: f64,
}

/// Lookup table keyed by (korea category, japan category)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySimilarityTable {
    entries: HashMap<(String, String), f64>,
}

impl CategorySimilarityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of same-category pairs
    pub fn builtin() -> Self {
        let entries = BUILTIN_SAME_CATEGORY
            .iter()
            .map(|(name, sim)| ((name.to_string(), name.to_string()), *sim))
            .collect();
        Self { entries }
    }

    /// Build a table from configuration entries
    pub fn from_pairs(pairs: &[CategoryPair]) -> Result<Self> {
        let mut table = Self::new();
        for pair in pairs {
            table.insert(&pair.korea, &pair.japan, pair.similarity)?;
        }
        Ok(table)
    }

    /// Insert or replace a pair
    pub fn insert(&mut self, korea: &str, japan: &str, similarity: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&similarity) {
            return Err(RuntimeError::InvalidInput {
                stage: STAGE,
                reason: format!(
                    "similarity for ({}, {}) must be in [0, 1], got {}",
                    korea, japan, similarity
                ),
            });
        }
        self.entries
            .insert((korea.to_string(), japan.to_string()), similarity);
        Ok(())
    }

    /// Exact lookup
    pub fn get(&self, korea: &str, japan: &str) -> Option<f64> {
        self.entries
            .get(&(korea.to_string(), japan.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Similarity between two categories.
///
/// Uses `table` when supplied, otherwise the built-in same-category table.
/// Unlisted pairs give `NEUTRAL_SIMILARITY`.
pub fn category_similarity(
    korea: &str,
    japan: &str,
    table: Option<&CategorySimilarityTable>,
) -> f64 {
    let found = match table {
        Some(table) => table.get(korea, japan),
        None => BUILTIN_SAME_CATEGORY
            .iter()
            .find(|(name, _)| korea == *name && japan == *name)
            .map(|(_, sim)| *sim),
    };

    match found {
        Some(similarity) => similarity,
        None => {
            warn!(
                stage = STAGE,
                korea, japan, "category pair not listed, using neutral similarity"
            );
            NEUTRAL_SIMILARITY
        }
    }
}

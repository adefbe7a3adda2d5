//! Rank correlation stage (Spearman)
//!
//! Position i of one sequence is paired with position i of the other; the
//! sequences are expected to be the same time-aligned samples.

use crate::error::Result;
use crate::stats;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const STAGE: &str = "rank_correlation";

/// Qualitative bucket of |correlation|
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorrelationStrength {
    Negligible,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    /// Bucket a correlation coefficient by its absolute value
    pub fn from_correlation(correlation: f64) -> Self {
        let abs = correlation.abs();
        if abs >= 0.9 {
            CorrelationStrength::VeryStrong
        } else if abs >= 0.7 {
            CorrelationStrength::Strong
        } else if abs >= 0.5 {
            CorrelationStrength::Moderate
        } else if abs >= 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorrelationStrength::VeryStrong => "very strong",
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::Moderate => "moderate",
            CorrelationStrength::Weak => "weak",
            CorrelationStrength::Negligible => "negligible",
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds a rank correlation must pass to be flagged significant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceCriteria {
    /// p-value must be strictly below this level
    pub alpha: f64,

    /// |correlation| must be strictly above this value
    pub min_abs_correlation: f64,
}

impl Default for SignificanceCriteria {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            min_abs_correlation: 0.6,
        }
    }
}

impl SignificanceCriteria {
    /// Both conditions are required
    pub fn is_significant(&self, correlation: f64, p_value: f64) -> bool {
        p_value < self.alpha && correlation.abs() > self.min_abs_correlation
    }
}

/// Output of the rank correlation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankCorrelation {
    /// Spearman's rho
    pub correlation: f64,

    /// Two-sided p-value
    pub p_value: f64,

    pub significant: bool,

    pub strength: CorrelationStrength,

    /// Number of paired samples
    pub sample_size: usize,
}

/// Spearman rank correlation with the default significance criteria
pub fn rank_correlation(a: &[f64], b: &[f64]) -> Result<RankCorrelation> {
    rank_correlation_with(a, b, &SignificanceCriteria::default())
}

/// Spearman rank correlation.
///
/// Fails on mismatched lengths or non-finite values. Fewer than two pairs or
/// a constant sequence give rho = 0 with p = 1.
pub fn rank_correlation_with(
    a: &[f64],
    b: &[f64],
    criteria: &SignificanceCriteria,
) -> Result<RankCorrelation> {
    stats::ensure_same_length(STAGE, a, b)?;
    stats::ensure_finite(STAGE, a)?;
    stats::ensure_finite(STAGE, b)?;

    let n = a.len();
    let correlation = stats::pearson(&stats::average_ranks(a), &stats::average_ranks(b));
    let p_value = if correlation == 0.0 {
        1.0
    } else {
        stats::correlation_p_value(correlation, n)
    };

    let result = RankCorrelation {
        correlation,
        p_value,
        significant: criteria.is_significant(correlation, p_value),
        strength: CorrelationStrength::from_correlation(correlation),
        sample_size: n,
    };

    debug!(
        stage = STAGE,
        n,
        correlation,
        p_value,
        significant = result.significant,
        "rank correlation computed"
    );

    Ok(result)
}

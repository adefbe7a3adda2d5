//! Weighted linear combination shared by every scorer
//!
//! A `CompositeScorer<N>` holds N named, validated weights and a score
//! scale. Blending is a pure function of its inputs; the input count is
//! fixed by the type so a call can never fail.

use crate::error::Result;
use kbridge_core::{validate_weight_vector, ConfidenceTier, Recommendation, ScoreScale};

/// Weighted sum of N sub-scores
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeScorer<const N: usize> {
    names: [&'static str; N],
    weights: [f64; N],
    scale: ScoreScale,
}

/// Output of one blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blend<const N: usize> {
    /// Sum of all contributions
    pub total: f64,

    /// weight x sub-score, in input order
    pub contributions: [f64; N],
}

impl<const N: usize> CompositeScorer<N> {
    /// Create a scorer from named weights.
    ///
    /// Weights must be finite and non-negative with at least one positive.
    pub fn new(named: [(&'static str, f64); N], scale: ScoreScale) -> Result<Self> {
        validate_weight_vector(&named, false)?;
        Ok(Self::from_validated(named, scale))
    }

    /// Create a scorer whose weights must also sum to one
    pub fn with_unit_sum(named: [(&'static str, f64); N], scale: ScoreScale) -> Result<Self> {
        validate_weight_vector(&named, true)?;
        Ok(Self::from_validated(named, scale))
    }

    pub(crate) fn from_validated(named: [(&'static str, f64); N], scale: ScoreScale) -> Self {
        Self {
            names: named.map(|(name, _)| name),
            weights: named.map(|(_, weight)| weight),
            scale,
        }
    }

    pub fn names(&self) -> &[&'static str; N] {
        &self.names
    }

    pub fn weights(&self) -> &[f64; N] {
        &self.weights
    }

    pub fn scale(&self) -> ScoreScale {
        self.scale
    }

    /// Combine sub-scores given in the same order as the weights
    pub fn blend(&self, inputs: [f64; N]) -> Blend<N> {
        let mut contributions = [0.0; N];
        for (slot, (weight, input)) in contributions
            .iter_mut()
            .zip(self.weights.iter().zip(inputs.iter()))
        {
            *slot = weight * input;
        }
        Blend {
            total: contributions.iter().sum(),
            contributions,
        }
    }

    /// Tier of a blended total on this scorer's scale
    pub fn confidence(&self, total: f64) -> ConfidenceTier {
        ConfidenceTier::from_score(total, self.scale)
    }

    /// Recommendation for a blended total on this scorer's scale
    pub fn recommendation(&self, total: f64) -> Recommendation {
        Recommendation::from_score(total, self.scale)
    }
}

//! Weight profiles for the composite scorers
//!
//! Weights are validated once, when a scorer is built, never per call.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Tolerance used when a weight vector must sum to one
const UNIT_SUM_TOLERANCE: f64 = 1e-6;

/// Validate a named weight vector.
///
/// Every weight must be finite and non-negative and at least one must be
/// positive. When `require_unit_sum` is set the weights must also sum to 1.
pub fn validate_weight_vector(entries: &[(&str, f64)], require_unit_sum: bool) -> Result<()> {
    if entries.is_empty() {
        return Err(CoreError::InvalidWeights("weight vector is empty".to_string()));
    }
    for (name, weight) in entries {
        if !weight.is_finite() {
            return Err(CoreError::InvalidWeights(format!(
                "{} weight must be finite, got {}",
                name, weight
            )));
        }
        if *weight < 0.0 {
            return Err(CoreError::InvalidWeights(format!(
                "{} weight is negative: {}",
                name, weight
            )));
        }
    }
    let total: f64 = entries.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return Err(CoreError::InvalidWeights(
            "at least one weight must be positive".to_string(),
        ));
    }
    if require_unit_sum && (total - 1.0).abs() > UNIT_SUM_TOLERANCE {
        return Err(CoreError::InvalidWeights(format!(
            "weights must sum to 1, got {}",
            total
        )));
    }
    Ok(())
}

/// Weights of the three correlation stages.
///
/// The weights are applied as given; they are not normalized and need not
/// sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the rank correlation sub-score
    pub rank: f64,

    /// Weight of the lagged sales correlation sub-score
    pub time_series: f64,

    /// Weight of the category similarity sub-score
    pub category: f64,
}

impl ScoreWeights {
    /// Create a validated weight profile
    pub fn new(rank: f64, time_series: f64, category: f64) -> Result<Self> {
        let weights = Self {
            rank,
            time_series,
            category,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check the weight invariants
    pub fn validate(&self) -> Result<()> {
        validate_weight_vector(&self.named(), false)
    }

    /// Weights paired with their component names, in scoring order
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("rank", self.rank),
            ("time_series", self.time_series),
            ("category", self.category),
        ]
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.rank + self.time_series + self.category
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rank: 0.3,
            time_series: 0.5,
            category: 0.2,
        }
    }
}

/// Per-platform weights of the SNS aggregate (must sum to 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformWeights {
    pub youtube: f64,
    pub instagram: f64,
    pub tiktok: f64,
    pub twitter: f64,
}

impl PlatformWeights {
    /// Check the weight invariants
    pub fn validate(&self) -> Result<()> {
        validate_weight_vector(&self.named(), true)
    }

    /// Weights paired with platform names, in scoring order
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("youtube", self.youtube),
            ("instagram", self.instagram),
            ("tiktok", self.tiktok),
            ("twitter", self.twitter),
        ]
    }
}

impl Default for PlatformWeights {
    fn default() -> Self {
        Self {
            youtube: 0.25,
            instagram: 0.30,
            tiktok: 0.35,
            twitter: 0.10,
        }
    }
}

/// Blend of the SNS aggregate with the sales correlation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnsBlend {
    /// Share of the platform aggregate
    pub sns_share: f64,

    /// Share of the sales correlation (expressed as a percentage)
    pub sales_share: f64,
}

impl SnsBlend {
    /// Check the weight invariants
    pub fn validate(&self) -> Result<()> {
        validate_weight_vector(&self.named(), false)
    }

    /// Shares paired with their names
    pub fn named(&self) -> [(&'static str, f64); 2] {
        [("sns", self.sns_share), ("sales", self.sales_share)]
    }
}

impl Default for SnsBlend {
    fn default() -> Self {
        Self {
            sns_share: 0.6,
            sales_share: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(ScoreWeights::default().validate().is_ok());
        assert!(PlatformWeights::default().validate().is_ok());
        assert!(SnsBlend::default().validate().is_ok());
        assert!((ScoreWeights::default().total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_weights_need_not_sum_to_one() {
        let weights = ScoreWeights::new(1.0, 2.0, 0.0).unwrap();
        assert_eq!(weights.total(), 3.0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = ScoreWeights::new(-0.1, 0.5, 0.2).unwrap_err();
        assert!(err.to_string().contains("rank weight is negative"));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        assert!(ScoreWeights::new(0.3, f64::NAN, 0.2).is_err());
        assert!(ScoreWeights::new(0.3, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let err = ScoreWeights::new(0.0, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("at least one weight must be positive"));
    }

    #[test]
    fn test_platform_weights_must_sum_to_one() {
        let weights = PlatformWeights {
            youtube: 0.5,
            instagram: 0.5,
            tiktok: 0.5,
            twitter: 0.0,
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 1"));
    }

    #[test]
    fn test_weights_yaml_shape() {
        let weights: ScoreWeights =
            serde_json::from_str(r#"{"rank":0.4,"time_series":0.4,"category":0.2}"#).unwrap();
        assert_eq!(weights.rank, 0.4);
        assert_eq!(weights.category, 0.2);
    }
}

//! Lagged cross-correlation result

use super::series::Market;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Correlation per lag plus the selected optimal lag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagCorrelationResult {
    /// Pearson correlation for each lag in 0..=max_lag
    pub correlations_by_lag: BTreeMap<usize, f64>,

    /// Lag with the largest absolute correlation (smallest lag on ties)
    pub optimal_lag: usize,

    /// Signed correlation at the optimal lag
    pub optimal_correlation: f64,
}

impl LagCorrelationResult {
    /// Correlation at a given lag
    pub fn correlation_at(&self, lag: usize) -> Option<f64> {
        self.correlations_by_lag.get(&lag).copied()
    }

    /// Largest lag evaluated
    pub fn max_lag(&self) -> usize {
        self.correlations_by_lag.keys().next_back().copied().unwrap_or(0)
    }

    /// Describe the lead/lag relationship, given which market was passed as
    /// the leading (first) series
    pub fn interpretation(&self, leader: Market, follower: Market) -> String {
        match self.optimal_lag {
            0 => format!("{} and {} markets move together", leader, follower),
            1 => format!("{} leads {} by 1 period", leader, follower),
            lag => format!("{} leads {} by {} periods", leader, follower, lag),
        }
    }
}

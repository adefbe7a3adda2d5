//! Lagged cross-correlation stage
//!
//! Both series are z-scored first so differing sales magnitudes between
//! markets do not matter. For lag L the first N-L points of `a` are
//! correlated with the last N-L points of `b`: "does `a` at t predict `b`
//! at t+L".

use crate::error::Result;
use crate::stats;
use kbridge_core::LagCorrelationResult;
use std::collections::BTreeMap;
use tracing::{debug, warn};

const STAGE: &str = "cross_correlation";

/// A later lag only replaces the current best when it is larger by more
/// than this, so near-equal maxima resolve to the smallest lag.
const TIE_EPSILON: f64 = 1e-12;

/// Correlate `a` against `b` shifted by every lag in `0..=max_lag`.
///
/// Fails on mismatched lengths or non-finite values. Lags whose overlap
/// has fewer than two points, and constant series, give 0.0.
pub fn cross_correlation(a: &[f64], b: &[f64], max_lag: usize) -> Result<LagCorrelationResult> {
    stats::ensure_same_length(STAGE, a, b)?;
    stats::ensure_finite(STAGE, a)?;
    stats::ensure_finite(STAGE, b)?;

    let n = a.len();
    let standardized = match (stats::standardize(a), stats::standardize(b)) {
        (Some(za), Some(zb)) => Some((za, zb)),
        _ => {
            warn!(stage = STAGE, n, "series has zero variance, correlations set to 0");
            None
        }
    };

    let mut correlations_by_lag = BTreeMap::new();
    for lag in 0..=max_lag {
        let corr = match &standardized {
            Some((za, zb)) if n > lag => stats::pearson(&za[..n - lag], &zb[lag..]),
            _ => 0.0,
        };
        correlations_by_lag.insert(lag, corr);
    }

    let (optimal_lag, optimal_correlation) = select_optimal(&correlations_by_lag);

    debug!(
        stage = STAGE,
        n,
        max_lag,
        optimal_lag,
        optimal_correlation,
        "cross correlation computed"
    );

    Ok(LagCorrelationResult {
        correlations_by_lag,
        optimal_lag,
        optimal_correlation,
    })
}

/// Left-to-right scan for the largest |correlation|, sign preserved
fn select_optimal(correlations: &BTreeMap<usize, f64>) -> (usize, f64) {
    let mut best = (0, 0.0_f64);
    let mut first = true;
    for (&lag, &corr) in correlations {
        if first || corr.abs() > best.1.abs() + TIE_EPSILON {
            best = (lag, corr);
            first = false;
        }
    }
    best
}

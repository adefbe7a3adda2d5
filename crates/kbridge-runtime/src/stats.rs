//! Statistics helpers shared by the correlation stages
//!
//! Degenerate inputs (fewer than two points, zero variance) yield a
//! correlation of 0.0 instead of NaN.

use crate::error::{Result, RuntimeError};
use kbridge_core::CoreError;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Fail if the two paired sequences differ in length
pub fn ensure_same_length(stage: &'static str, a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(CoreError::InputLengthMismatch {
            stage,
            left: a.len(),
            right: b.len(),
        }
        .into());
    }
    Ok(())
}

/// Fail on NaN or infinite values, naming the first offending index
pub fn ensure_finite(stage: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(RuntimeError::InvalidInput {
            stage,
            reason: format!("value at index {} is {}", index, values[index]),
        }),
        None => Ok(()),
    }
}

/// Arithmetic mean (0.0 for an empty slice)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator, 0.0 below two points)
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Z-score standardization, `None` when the series has zero variance
pub fn standardize(values: &[f64]) -> Option<Vec<f64>> {
    if values.len() < 2 || is_constant(values) {
        return None;
    }
    let m = mean(values);
    let sd = sample_std(values);
    if !sd.is_finite() || sd <= 0.0 {
        return None;
    }
    Some(values.iter().map(|v| (v - m) / sd).collect())
}

/// Pearson correlation of two equal-length slices.
///
/// Returns 0.0 below two points or when either side is constant.
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return 0.0;
    }
    let (a, b) = (&a[..n], &b[..n]);
    if is_constant(a) || is_constant(b) {
        return 0.0;
    }

    let ma = mean(a);
    let mb = mean(b);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - ma;
        let dy = y - mb;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if !denom.is_finite() || denom <= 0.0 {
        return 0.0;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

/// 1-based ranks with ties replaced by their average rank
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end (0-based) share ranks start+1..=end
        let avg = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = avg;
        }
        start = end;
    }
    ranks
}

/// Two-sided p-value of a correlation coefficient over `n` pairs, using
/// Student's t with n - 2 degrees of freedom
pub fn correlation_p_value(r: f64, n: usize) -> f64 {
    if n < 3 || !r.is_finite() {
        return 1.0;
    }
    let r_abs = r.abs();
    if r_abs >= 1.0 {
        return 0.0;
    }
    let df = (n - 2) as f64;
    let t = r_abs * (df / (1.0 - r * r)).sqrt();
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

/// Quantile with linear interpolation between closest ranks
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

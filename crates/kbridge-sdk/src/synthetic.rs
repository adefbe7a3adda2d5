//! Synthetic market data for demos
//!
//! Everything produced here is random and labelled synthetic. Japanese
//! series follow the Korean ones with a per-product lead of 0, 1 or 2
//! periods plus noise, so the lag stage has something to find.

use crate::dataset::{Dataset, MarketPair};
use crate::error::{Result, SdkError};
use kbridge_core::MarketSeries;
use kbridge_runtime::builtin_categories;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Product name prefix marking generated data
pub const SYNTHETIC_PREFIX: &str = "synthetic-product";

const KOREA_SALES: (f64, f64) = (1000.0, 5000.0);
const JAPAN_SALES: (f64, f64) = (800.0, 4000.0);
const MAX_RANK: u32 = 20;

/// Generate a seeded synthetic dataset
pub fn generate_dataset(products: usize, periods: usize, seed: u64) -> Result<Dataset> {
    if periods == 0 {
        return Err(SdkError::DatasetError(
            "synthetic dataset needs at least one period".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let categories: Vec<&str> = builtin_categories().collect();

    let pairs = (0..products)
        .map(|index| {
            let lead = index % 3;
            let category = categories[index % categories.len()];
            generate_pair(&mut rng, index, category, periods, lead)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(products, periods, seed, "synthetic dataset generated");
    Ok(Dataset::new(pairs))
}

fn generate_pair(
    rng: &mut StdRng,
    index: usize,
    category: &str,
    periods: usize,
    lead: usize,
) -> Result<MarketPair> {
    let korea_sales: Vec<f64> = (0..periods)
        .map(|_| rng.gen_range(KOREA_SALES.0..KOREA_SALES.1))
        .collect();
    let korea_ranks: Vec<u32> = (0..periods).map(|_| rng.gen_range(1..=MAX_RANK)).collect();

    // Rescale the lagged Korean value into the Japanese range, then jitter.
    let scale = (JAPAN_SALES.1 - JAPAN_SALES.0) / (KOREA_SALES.1 - KOREA_SALES.0);
    let japan_sales: Vec<f64> = (0..periods)
        .map(|t| match t.checked_sub(lead) {
            Some(source) => {
                let followed = JAPAN_SALES.0 + (korea_sales[source] - KOREA_SALES.0) * scale;
                let noise = rng.gen_range(-150.0..150.0);
                (followed + noise).clamp(JAPAN_SALES.0, JAPAN_SALES.1)
            }
            None => rng.gen_range(JAPAN_SALES.0..JAPAN_SALES.1),
        })
        .collect();
    let japan_ranks: Vec<u32> = (0..periods)
        .map(|t| match t.checked_sub(lead) {
            Some(source) => {
                let shift: i64 = rng.gen_range(-2..=2);
                (i64::from(korea_ranks[source]) + shift).clamp(1, i64::from(MAX_RANK)) as u32
            }
            None => rng.gen_range(1..=MAX_RANK),
        })
        .collect();

    Ok(MarketPair::new(
        format!("{}-{}", SYNTHETIC_PREFIX, index + 1),
        category,
        MarketSeries::from_columns(&korea_sales, &korea_ranks)?,
        MarketSeries::from_columns(&japan_sales, &japan_ranks)?,
    ))
}

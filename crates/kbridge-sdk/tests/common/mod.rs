//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use kbridge_sdk::{MarketPair, MarketSeries};

/// Korean sales with a clear trend and some wobble
pub const KOREA_SALES: [f64; 12] = [
    1200.0, 1500.0, 1400.0, 2100.0, 2600.0, 2300.0, 3100.0, 3600.0, 3300.0, 4200.0, 4000.0, 4800.0,
];

/// Korean ranks, improving as sales grow
pub const KOREA_RANKS: [u32; 12] = [18, 15, 16, 11, 8, 9, 6, 4, 5, 2, 3, 1];

/// Build a pair where Japan repeats Korea `lead` periods later at `ratio` size
pub fn following_pair(product: &str, category: &str, lead: usize, ratio: f64) -> MarketPair {
    let n = KOREA_SALES.len();
    let japan_sales: Vec<f64> = (0..n)
        .map(|t| match t.checked_sub(lead) {
            Some(source) => KOREA_SALES[source] * ratio,
            None => 900.0 - 50.0 * t as f64,
        })
        .collect();
    let japan_ranks: Vec<u32> = (0..n)
        .map(|t| match t.checked_sub(lead) {
            Some(source) => KOREA_RANKS[source],
            None => 20,
        })
        .collect();

    MarketPair::new(
        product,
        category,
        MarketSeries::from_columns(&KOREA_SALES, &KOREA_RANKS).unwrap(),
        MarketSeries::from_columns(&japan_sales, &japan_ranks).unwrap(),
    )
}

/// Build a pair with no relationship between the markets
pub fn unrelated_pair(product: &str) -> MarketPair {
    let japan_sales = [
        3000.0, 1000.0, 2800.0, 1200.0, 3100.0, 900.0, 2900.0, 1100.0, 3050.0, 950.0, 2950.0,
        1050.0,
    ];
    let japan_ranks = [3, 17, 4, 16, 2, 18, 5, 15, 1, 19, 6, 14];
    MarketPair::new(
        product,
        "cleansing",
        MarketSeries::from_columns(&KOREA_SALES, &KOREA_RANKS).unwrap(),
        MarketSeries::from_columns(&japan_sales, &japan_ranks).unwrap(),
    )
    .with_japan_category("mask-pack")
}

/// YAML dataset with two products, one carrying SNS statistics
pub const DATASET_YAML: &str = r#"
products:
  - product: cica-cream
    category: skincare
    korea:
      - { period: 1, sales: 1200.0, rank: 9 }
      - { period: 2, sales: 1800.0, rank: 6 }
      - { period: 3, sales: 1500.0, rank: 7 }
      - { period: 4, sales: 2600.0, rank: 3 }
      - { period: 5, sales: 3100.0, rank: 1 }
    japan:
      - { period: 1, sales: 800.0, rank: 12 }
      - { period: 2, sales: 900.0, rank: 9 }
      - { period: 3, sales: 1350.0, rank: 6 }
      - { period: 4, sales: 1120.0, rank: 7 }
      - { period: 5, sales: 1950.0, rank: 3 }
    sns:
      youtube:
        - { title: "cica routine", views: 200000, likes: 9000, comments: 1000 }
      tiktok:
        - { views: 500000, likes: 40000, shares: 10000, duration_secs: 20 }
      twitter:
        - { text: "great", retweets: 10, likes: 30, sentiment: positive }
        - { text: "meh", retweets: 1, likes: 2, sentiment: neutral }
  - product: lip-tint
    category: makeup
    korea:
      - { period: 1, sales: 2000.0, rank: 4 }
      - { period: 2, sales: 2000.0, rank: 4 }
      - { period: 3, sales: 2000.0, rank: 4 }
    japan:
      - { period: 1, sales: 900.0, rank: 10 }
      - { period: 2, sales: 1000.0, rank: 11 }
      - { period: 3, sales: 1100.0, rank: 12 }
"#;

use kbridge_core::{ConfidenceTier, Recommendation, ScoreWeights};
use kbridge_runtime::{cross_correlation, rank_correlation, HitScorer};
use proptest::prelude::*;

fn weights() -> impl Strategy<Value = ScoreWeights> {
    (0.01f64..2.0, 0.01f64..2.0, 0.01f64..2.0).prop_map(|(rank, time_series, category)| {
        ScoreWeights {
            rank,
            time_series,
            category,
        }
    })
}

proptest! {
    #[test]
    fn score_is_monotonic_in_each_input(
        w in weights(),
        rank in 0.0f64..1.0,
        time in -1.0f64..1.0,
        category in 0.0f64..1.0,
        bump in 0.0f64..0.5,
    ) {
        let scorer = HitScorer::new(w).unwrap();
        let base = scorer.score(rank, time, category).score;
        prop_assert!(scorer.score(rank + bump, time, category).score >= base);
        prop_assert!(scorer.score(rank, time + bump, category).score >= base);
        prop_assert!(scorer.score(rank, time, category + bump).score >= base);
    }

    #[test]
    fn tier_and_recommendation_never_contradict(
        rank in 0.0f64..1.0,
        time in -1.0f64..1.0,
        category in 0.0f64..1.0,
    ) {
        let result = HitScorer::default().score(rank, time, category);
        if result.confidence_tier == ConfidenceTier::VeryHigh {
            prop_assert_eq!(result.recommendation, Recommendation::LaunchImmediately);
        }
        if result.recommendation == Recommendation::DoNotLaunch {
            prop_assert!(result.confidence_tier <= ConfidenceTier::Low);
        }
    }

    #[test]
    fn contributions_sum_to_score(
        w in weights(),
        rank in 0.0f64..1.0,
        time in -1.0f64..1.0,
        category in 0.0f64..1.0,
    ) {
        let result = HitScorer::new(w).unwrap().score(rank, time, category);
        let sum = result.components.rank + result.components.time + result.components.category;
        prop_assert!((sum - result.score).abs() < 1e-12);
    }

    #[test]
    fn rank_self_correlation_is_one(values in prop::collection::vec(1u32..50, 3..30)) {
        let ranks: Vec<f64> = values.iter().map(|v| f64::from(*v)).collect();
        prop_assume!(ranks.windows(2).any(|w| w[0] != w[1]));
        let result = rank_correlation(&ranks, &ranks).unwrap();
        prop_assert!((result.correlation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cross_correlation_is_deterministic_and_bounded(
        a in prop::collection::vec(0.0f64..10_000.0, 2..24),
        seed in 0.0f64..10_000.0,
        max_lag in 0usize..8,
    ) {
        let b: Vec<f64> = a.iter().enumerate().map(|(i, v)| (v + seed * i as f64) % 9_973.0).collect();
        let first = cross_correlation(&a, &b, max_lag).unwrap();
        let second = cross_correlation(&a, &b, max_lag).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.correlations_by_lag.len(), max_lag + 1);
        for corr in first.correlations_by_lag.values() {
            prop_assert!(corr.abs() <= 1.0);
            prop_assert!(corr.abs() <= first.optimal_correlation.abs() + 1e-12);
        }
    }
}

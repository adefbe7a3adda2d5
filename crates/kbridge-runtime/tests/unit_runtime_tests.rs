//! Unit tests for kbridge-runtime
//!
//! Exercises the stages together the way the analyzer chains them.

use kbridge_core::{ConfidenceTier, MarketSeries, Recommendation, ScoreWeights};
use kbridge_runtime::signals::{
    InstagramPost, PostType, Sentiment, ShortVideo, TextPost, Video,
};
use kbridge_runtime::{
    category_similarity, cross_correlation, rank_correlation, HitScorer, RuntimeError,
    SnsAnalysis, SnsScorer, SnsSnapshot,
};

// ========== Stage Chain Tests ==========

#[test]
fn test_stage_chain_on_leading_market() {
    // Japan follows Korea one period later with a smaller market size
    let korea_sales = [
        1200.0, 1500.0, 1400.0, 2100.0, 2600.0, 2300.0, 3100.0, 3600.0, 3300.0, 4200.0, 4000.0,
        4800.0,
    ];
    let mut japan_sales = vec![900.0];
    japan_sales.extend(korea_sales[..11].iter().map(|v| v * 0.6));
    let korea_ranks = [18, 15, 16, 11, 8, 9, 6, 4, 5, 2, 3, 1];
    let mut japan_ranks = vec![20];
    japan_ranks.extend_from_slice(&korea_ranks[..11]);

    let korea = MarketSeries::from_columns(&korea_sales, &korea_ranks).unwrap();
    let japan = MarketSeries::from_columns(&japan_sales, &japan_ranks).unwrap();
    korea.ensure_aligned(&japan, "market_pair").unwrap();

    let rank = rank_correlation(&korea.ranks(), &japan.ranks()).unwrap();
    let lag = cross_correlation(&korea.sales(), &japan.sales(), 6).unwrap();
    let category = category_similarity("skincare", "skincare", None);

    assert_eq!(lag.optimal_lag, 1);
    assert!((lag.optimal_correlation - 1.0).abs() < 1e-9);
    assert!(rank.correlation > 0.8);
    assert!(rank.significant);

    let result = HitScorer::default().score(rank.correlation.abs(), lag.optimal_correlation, category);
    assert!(result.score > 0.8);
    assert_eq!(result.confidence_tier, ConfidenceTier::VeryHigh);
    assert_eq!(result.recommendation, Recommendation::LaunchImmediately);
}

#[test]
fn test_mismatched_markets_fail_with_stage_name() {
    let err = cross_correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0], 2).unwrap_err();
    match err {
        RuntimeError::Core(core) => assert!(core.to_string().contains("cross_correlation")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_independent_scorer_profiles_coexist() {
    let time_heavy = HitScorer::new(ScoreWeights::new(0.1, 0.8, 0.1).unwrap()).unwrap();
    let rank_heavy = HitScorer::new(ScoreWeights::new(0.8, 0.1, 0.1).unwrap()).unwrap();
    let a = time_heavy.score(0.2, 0.9, 0.5);
    let b = rank_heavy.score(0.2, 0.9, 0.5);
    assert!(a.score > b.score);
    assert_eq!(time_heavy.weights().time_series, 0.8);
}

// ========== SNS Tests ==========

#[test]
fn test_sns_snapshot_to_score() {
    let snapshot = SnsSnapshot {
        youtube: vec![
            Video {
                title: "skincare routine".to_string(),
                views: 500_000,
                likes: 25_000,
                comments: 3_000,
            },
            Video {
                title: "cica review".to_string(),
                views: 300_000,
                likes: 18_000,
                comments: 2_500,
            },
        ],
        instagram: vec![InstagramPost {
            followers: 50_000,
            likes: 5_000,
            engagement_rate: 10.0,
            post_type: PostType::Reel,
            hashtags: vec!["#kbeauty".to_string()],
        }],
        tiktok: vec![ShortVideo {
            views: 1_000_000,
            likes: 100_000,
            shares: 20_000,
            duration_secs: 15,
            music: None,
        }],
        twitter: vec![TextPost {
            text: "love it".to_string(),
            retweets: 500,
            likes: 1_000,
            sentiment: Sentiment::Positive,
        }],
    };

    let analysis = SnsAnalysis::from_snapshot(&snapshot);
    let scores = analysis.platform_scores();
    assert_eq!(scores.instagram, 10.0);
    assert!((scores.tiktok - 2.0).abs() < 1e-12);
    assert_eq!(scores.twitter, 100.0);

    let result = SnsScorer::default().score(&scores, 0.75);
    let aggregate = 0.25 * scores.youtube + 0.30 * 10.0 + 0.35 * 2.0 + 0.10 * 100.0;
    assert!((result.sns_contribution - 0.6 * aggregate).abs() < 1e-9);
    assert!((result.sales_contribution - 30.0).abs() < 1e-9);
    assert!(result.score > 0.0 && result.score < 100.0);
}

#[test]
fn test_sns_snapshot_defaults_missing_platforms() {
    let json = r#"{
        "youtube": [{"title": "routine", "views": 1000, "likes": 50, "comments": 10}],
        "twitter": [{"retweets": 3, "likes": 4, "sentiment": "negative"}]
    }"#;
    let snapshot: SnsSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.youtube.len(), 1);
    assert!(snapshot.instagram.is_empty());
    assert_eq!(snapshot.twitter[0].sentiment, Sentiment::Negative);

    let scores = SnsAnalysis::from_snapshot(&snapshot).platform_scores();
    assert_eq!(scores.twitter, -100.0);
    assert_eq!(scores.tiktok, 0.0);
}

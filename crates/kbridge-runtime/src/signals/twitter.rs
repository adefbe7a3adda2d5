//! Text-post platform analysis

use super::sentiment_score;
use crate::stats;
use serde::{Deserialize, Serialize};

/// Retweet quantile above which a post counts as an influencer mention
const INFLUENCER_QUANTILE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Statistics of one text post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPost {
    #[serde(default)]
    pub text: String,
    pub retweets: u64,
    pub likes: u64,
    pub sentiment: Sentiment,
}

/// Aggregated text-post signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwitterAnalysis {
    /// (positive share - negative share) x 100, in -100..=100
    pub sentiment_score: f64,
    pub positive_rate: f64,
    pub negative_rate: f64,

    /// Posts above the 90th retweet percentile
    pub influencer_mentions: usize,

    /// Mean retweets per post
    pub avg_amplification: f64,
}

pub fn analyze_twitter(posts: &[TextPost]) -> TwitterAnalysis {
    if posts.is_empty() {
        return TwitterAnalysis::default();
    }

    let total = posts.len() as f64;
    let count = |s: Sentiment| posts.iter().filter(|p| p.sentiment == s).count() as f64;
    let positive_rate = count(Sentiment::Positive) / total;
    let negative_rate = count(Sentiment::Negative) / total;

    let retweets: Vec<f64> = posts.iter().map(|p| p.retweets as f64).collect();
    let cutoff = stats::quantile(&retweets, INFLUENCER_QUANTILE);

    TwitterAnalysis {
        sentiment_score: sentiment_score(positive_rate, negative_rate),
        positive_rate,
        negative_rate,
        influencer_mentions: retweets.iter().filter(|r| **r > cutoff).count(),
        avg_amplification: stats::mean(&retweets),
    }
}

//! Image-post platform analysis

use crate::stats;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const TOP_HASHTAGS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Reel,
    Post,
}

/// Account size bucket by follower count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfluencerTier {
    Nano,
    Micro,
    Mid,
    Macro,
    Mega,
}

impl InfluencerTier {
    /// Upper bounds are inclusive: 1k, 10k, 100k, 1M
    pub fn from_followers(followers: u64) -> Self {
        match followers {
            0..=1_000 => InfluencerTier::Nano,
            1_001..=10_000 => InfluencerTier::Micro,
            10_001..=100_000 => InfluencerTier::Mid,
            100_001..=1_000_000 => InfluencerTier::Macro,
            _ => InfluencerTier::Mega,
        }
    }
}

/// Statistics of one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstagramPost {
    pub followers: u64,
    pub likes: u64,
    /// Engagement per 100 followers, as reported by the platform
    pub engagement_rate: f64,
    pub post_type: PostType,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Aggregated image-post signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstagramAnalysis {
    pub influencer_distribution: BTreeMap<InfluencerTier, usize>,

    /// Most used hashtags with their counts
    pub trending_hashtags: Vec<(String, usize)>,

    /// Mean engagement rate of reels
    pub reel_performance: Option<f64>,

    /// Mean engagement rate of regular posts
    pub post_performance: Option<f64>,

    pub optimal_format: Option<PostType>,
}

impl InstagramAnalysis {
    /// Reel performance, or regular posts when there are no reels
    pub fn sub_score(&self) -> f64 {
        self.reel_performance
            .or(self.post_performance)
            .unwrap_or(0.0)
    }
}

fn mean_engagement(posts: &[InstagramPost], post_type: PostType) -> Option<f64> {
    let rates: Vec<f64> = posts
        .iter()
        .filter(|p| p.post_type == post_type && p.engagement_rate.is_finite())
        .map(|p| p.engagement_rate)
        .collect();
    (!rates.is_empty()).then(|| stats::mean(&rates))
}

pub fn analyze_instagram(posts: &[InstagramPost]) -> InstagramAnalysis {
    let mut influencer_distribution = BTreeMap::new();
    let mut hashtag_counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        *influencer_distribution
            .entry(InfluencerTier::from_followers(post.followers))
            .or_insert(0) += 1;
        for tag in &post.hashtags {
            *hashtag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut trending_hashtags: Vec<(String, usize)> = hashtag_counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    trending_hashtags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    trending_hashtags.truncate(TOP_HASHTAGS);

    let reel_performance = mean_engagement(posts, PostType::Reel);
    let post_performance = mean_engagement(posts, PostType::Post);
    let optimal_format = match (reel_performance, post_performance) {
        (Some(reel), Some(post)) if reel > post => Some(PostType::Reel),
        (Some(_), Some(_)) => Some(PostType::Post),
        (Some(_), None) => Some(PostType::Reel),
        (None, Some(_)) => Some(PostType::Post),
        (None, None) => None,
    };

    InstagramAnalysis {
        influencer_distribution,
        trending_hashtags,
        reel_performance,
        post_performance,
        optimal_format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(followers: u64, rate: f64, post_type: PostType, tags: &[&str]) -> InstagramPost {
        InstagramPost {
            followers,
            likes: 0,
            engagement_rate: rate,
            post_type,
            hashtags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_reel_vs_post() {
        let posts = vec![
            post(50_000, 10.0, PostType::Reel, &["#kbeauty"]),
            post(100_000, 12.0, PostType::Reel, &["#cica", "#kbeauty"]),
            post(25_000, 12.0, PostType::Post, &["#skincare"]),
        ];
        let analysis = analyze_instagram(&posts);
        assert_eq!(analysis.reel_performance, Some(11.0));
        assert_eq!(analysis.post_performance, Some(12.0));
        assert_eq!(analysis.optimal_format, Some(PostType::Post));
        assert_eq!(analysis.sub_score(), 11.0);
        assert_eq!(analysis.trending_hashtags[0], ("#kbeauty".to_string(), 2));
        assert_eq!(analysis.influencer_distribution[&InfluencerTier::Mid], 3);
    }

    #[test]
    fn test_falls_back_to_posts() {
        let analysis = analyze_instagram(&[post(500, 4.0, PostType::Post, &[])]);
        assert_eq!(analysis.reel_performance, None);
        assert_eq!(analysis.sub_score(), 4.0);
        assert_eq!(analysis.optimal_format, Some(PostType::Post));
    }

    #[test]
    fn test_tiers() {
        assert_eq!(InfluencerTier::from_followers(1_000), InfluencerTier::Nano);
        assert_eq!(InfluencerTier::from_followers(1_001), InfluencerTier::Micro);
        assert_eq!(InfluencerTier::from_followers(100_000), InfluencerTier::Mid);
        assert_eq!(InfluencerTier::from_followers(1_000_000), InfluencerTier::Macro);
        assert_eq!(InfluencerTier::from_followers(5_000_000), InfluencerTier::Mega);
    }

    #[test]
    fn test_empty() {
        let analysis = analyze_instagram(&[]);
        assert_eq!(analysis.sub_score(), 0.0);
        assert_eq!(analysis.optimal_format, None);
    }
}

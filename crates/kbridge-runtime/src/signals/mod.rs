//! SNS signal extraction
//!
//! Each platform analyzer turns raw post statistics into one sub-score on
//! the 0-100 scale:
//!
//! - YouTube: viral score from normalized views and engagement rate
//! - Instagram: mean engagement rate of reels (all posts if there are none)
//! - TikTok: mean virality coefficient (shares per 100 views)
//! - Twitter: sentiment score, (positive share - negative share) x 100
//!
//! Sentiment can be negative; every other sub-score is non-negative.

pub mod instagram;
pub mod tiktok;
pub mod twitter;
pub mod youtube;

pub use instagram::{analyze_instagram, InfluencerTier, InstagramAnalysis, InstagramPost, PostType};
pub use tiktok::{analyze_tiktok, DurationBucket, ShortVideo, TikTokAnalysis};
pub use twitter::{analyze_twitter, Sentiment, TextPost, TwitterAnalysis};
pub use youtube::{analyze_youtube, Video, YouTubeAnalysis};

use kbridge_core::PlatformScores;
use serde::{Deserialize, Serialize};

/// Engagement per 100 views; 0 when there are no views
pub fn engagement_rate(likes: u64, comments: u64, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    (likes + comments) as f64 / views as f64 * 100.0
}

/// Shares per 100 views; 0 when there are no views
pub fn virality_coefficient(shares: u64, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    shares as f64 / views as f64 * 100.0
}

/// Net sentiment as a percentage, from shares in [0, 1]
pub fn sentiment_score(positive_rate: f64, negative_rate: f64) -> f64 {
    (positive_rate - negative_rate) * 100.0
}

/// Raw statistics for all four platforms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnsSnapshot {
    #[serde(default)]
    pub youtube: Vec<Video>,
    #[serde(default)]
    pub instagram: Vec<InstagramPost>,
    #[serde(default)]
    pub tiktok: Vec<ShortVideo>,
    #[serde(default)]
    pub twitter: Vec<TextPost>,
}

/// Per-platform analyses of one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnsAnalysis {
    pub youtube: YouTubeAnalysis,
    pub instagram: InstagramAnalysis,
    pub tiktok: TikTokAnalysis,
    pub twitter: TwitterAnalysis,
}

impl SnsAnalysis {
    /// Run every platform analyzer
    pub fn from_snapshot(snapshot: &SnsSnapshot) -> Self {
        Self {
            youtube: analyze_youtube(&snapshot.youtube),
            instagram: analyze_instagram(&snapshot.instagram),
            tiktok: analyze_tiktok(&snapshot.tiktok),
            twitter: analyze_twitter(&snapshot.twitter),
        }
    }

    /// The sub-scores fed to the SNS scorer
    pub fn platform_scores(&self) -> PlatformScores {
        PlatformScores {
            youtube: self.youtube.viral_score,
            instagram: self.instagram.sub_score(),
            tiktok: self.tiktok.avg_viral_coefficient,
            twitter: self.twitter.sentiment_score,
        }
    }
}

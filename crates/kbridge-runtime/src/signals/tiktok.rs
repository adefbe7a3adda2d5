//! Short-video platform analysis

use super::virality_coefficient;
use crate::stats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Video length bucket (upper bounds inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    UpTo15s,
    UpTo30s,
    UpTo60s,
    Over60s,
}

impl DurationBucket {
    pub fn from_seconds(seconds: u32) -> Self {
        match seconds {
            0..=15 => DurationBucket::UpTo15s,
            16..=30 => DurationBucket::UpTo30s,
            31..=60 => DurationBucket::UpTo60s,
            _ => DurationBucket::Over60s,
        }
    }
}

/// Statistics of one short video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortVideo {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub duration_secs: u32,
    #[serde(default)]
    pub music: Option<String>,
}

/// Aggregated short-video signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TikTokAnalysis {
    /// Mean shares per 100 views
    pub avg_viral_coefficient: f64,

    /// Duration bucket with the highest mean likes
    pub optimal_duration: Option<DurationBucket>,

    /// Most used sounds with their counts
    pub trending_music: Vec<(String, usize)>,
}

pub fn analyze_tiktok(videos: &[ShortVideo]) -> TikTokAnalysis {
    if videos.is_empty() {
        return TikTokAnalysis::default();
    }

    let coefficients: Vec<f64> = videos
        .iter()
        .map(|v| virality_coefficient(v.shares, v.views))
        .collect();

    let mut likes_by_bucket: BTreeMap<DurationBucket, Vec<f64>> = BTreeMap::new();
    let mut music_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for video in videos {
        likes_by_bucket
            .entry(DurationBucket::from_seconds(video.duration_secs))
            .or_default()
            .push(video.likes as f64);
        if let Some(music) = &video.music {
            *music_counts.entry(music.as_str()).or_insert(0) += 1;
        }
    }

    // First bucket wins ties
    let mut optimal_duration = None;
    let mut best_likes = f64::NEG_INFINITY;
    for (bucket, likes) in &likes_by_bucket {
        let avg = stats::mean(likes);
        if avg > best_likes {
            best_likes = avg;
            optimal_duration = Some(*bucket);
        }
    }

    let mut trending_music: Vec<(String, usize)> = music_counts
        .into_iter()
        .map(|(music, count)| (music.to_string(), count))
        .collect();
    trending_music.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    trending_music.truncate(10);

    TikTokAnalysis {
        avg_viral_coefficient: stats::mean(&coefficients),
        optimal_duration,
        trending_music,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(views: u64, likes: u64, shares: u64, duration_secs: u32, music: &str) -> ShortVideo {
        ShortVideo {
            views,
            likes,
            shares,
            duration_secs,
            music: Some(music.to_string()),
        }
    }

    #[test]
    fn test_viral_coefficient_and_duration() {
        let videos = vec![
            clip(1_000_000, 100_000, 20_000, 15, "song-1"),
            clip(800_000, 90_000, 15_000, 30, "song-2"),
            clip(1_200_000, 150_000, 30_000, 20, "song-1"),
        ];
        let analysis = analyze_tiktok(&videos);
        let expected = (2.0 + 1.875 + 2.5) / 3.0;
        assert!((analysis.avg_viral_coefficient - expected).abs() < 1e-9);
        // 16-30s bucket holds the 150k and 90k clips: mean 120k
        assert_eq!(analysis.optimal_duration, Some(DurationBucket::UpTo30s));
        assert_eq!(analysis.trending_music[0], ("song-1".to_string(), 2));
    }

    #[test]
    fn test_buckets() {
        assert_eq!(DurationBucket::from_seconds(15), DurationBucket::UpTo15s);
        assert_eq!(DurationBucket::from_seconds(16), DurationBucket::UpTo30s);
        assert_eq!(DurationBucket::from_seconds(60), DurationBucket::UpTo60s);
        assert_eq!(DurationBucket::from_seconds(61), DurationBucket::Over60s);
    }
}

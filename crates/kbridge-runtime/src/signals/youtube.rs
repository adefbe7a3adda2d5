//! Long-form video platform analysis

use super::engagement_rate;
use crate::stats;
use serde::{Deserialize, Serialize};

/// Statistics of one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Aggregated video signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YouTubeAnalysis {
    /// Mean engagement rate (per 100 views)
    pub avg_engagement: f64,

    /// Videos with more than three times the median views
    pub trending_videos: usize,

    /// (mean normalized views + mean engagement / 100) x 50, in 0..=100
    pub viral_score: f64,
}

pub fn analyze_youtube(videos: &[Video]) -> YouTubeAnalysis {
    if videos.is_empty() {
        return YouTubeAnalysis::default();
    }

    let rates: Vec<f64> = videos
        .iter()
        .map(|v| engagement_rate(v.likes, v.comments, v.views))
        .collect();
    let views: Vec<f64> = videos.iter().map(|v| v.views as f64).collect();

    let median = stats::quantile(&views, 0.5);
    let trending_videos = views.iter().filter(|v| **v > median * 3.0).count();

    let max_views = views.iter().copied().fold(0.0, f64::max);
    let normalized_views = if max_views > 0.0 {
        stats::mean(&views.iter().map(|v| v / max_views).collect::<Vec<_>>())
    } else {
        0.0
    };
    let avg_engagement = stats::mean(&rates);

    YouTubeAnalysis {
        avg_engagement,
        trending_videos,
        viral_score: (normalized_views + avg_engagement / 100.0) * 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(views: u64, likes: u64, comments: u64) -> Video {
        Video {
            title: String::new(),
            views,
            likes,
            comments,
        }
    }

    #[test]
    fn test_viral_score() {
        let videos = vec![
            video(500_000, 25_000, 3_000),
            video(300_000, 18_000, 2_500),
            video(450_000, 30_000, 4_000),
        ];
        let analysis = analyze_youtube(&videos);
        let expected_engagement = (5.6 + 20_500.0 / 3_000.0 + 34_000.0 / 4_500.0) / 3.0;
        assert!((analysis.avg_engagement - expected_engagement).abs() < 1e-9);
        let expected_viral = ((1.0 + 0.6 + 0.9) / 3.0 + expected_engagement / 100.0) * 50.0;
        assert!((analysis.viral_score - expected_viral).abs() < 1e-9);
        assert_eq!(analysis.trending_videos, 0);
    }

    #[test]
    fn test_trending_detection() {
        let videos = vec![
            video(1_000, 10, 1),
            video(1_200, 10, 1),
            video(900, 10, 1),
            video(10_000, 10, 1),
        ];
        assert_eq!(analyze_youtube(&videos).trending_videos, 1);
    }

    #[test]
    fn test_zero_views() {
        let analysis = analyze_youtube(&[video(0, 0, 0)]);
        assert_eq!(analysis.viral_score, 0.0);
    }
}

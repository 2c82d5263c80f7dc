//! Recent-upload scanner
//!
//! One scan per subscribed channel: search for video ids published after the
//! cutoff, then resolve full metadata for the whole batch in a single
//! combined request. Each channel's scan succeeds or fails on its own;
//! outcomes are collected rather than short-circuiting the run.

use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::video::{VideoEntry, VideoPlatform};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// A video discovered by the scan, tagged with the channel it came from
///
/// The channel tag is informational only; merge decisions never consult it.
#[derive(Debug, Clone)]
pub struct CandidateVideo {
    pub video: VideoEntry,
    pub channel_id: String,
}

/// A channel whose scan failed
#[derive(Debug, Clone, Serialize)]
pub struct ChannelFailure {
    pub channel_id: String,
    pub error: String,
}

/// Scan one channel for uploads published strictly after `published_after`
///
/// The batch-resolve step is skipped entirely when the search yields no ids;
/// an empty-id batch query would be wasted work at best.
pub(crate) async fn scan_channel(
    platform: &dyn VideoPlatform,
    channel_id: &str,
    published_after: DateTime<Utc>,
) -> BridgeResult<Vec<CandidateVideo>> {
    let video_ids = platform.search_recent(channel_id, published_after).await?;

    if video_ids.is_empty() {
        debug!(channel_id, "No recent uploads in window");
        return Ok(Vec::new());
    }

    let videos = platform.get_videos(&video_ids).await?;

    debug!(
        channel_id,
        searched = video_ids.len(),
        resolved = videos.len(),
        "Scanned channel"
    );

    Ok(videos
        .into_iter()
        .map(|video| CandidateVideo {
            video,
            channel_id: channel_id.to_string(),
        })
        .collect())
}

impl ChannelFailure {
    pub(crate) fn new(channel_id: &str, error: &BridgeError) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Minimal platform that records how often each call is made
    #[derive(Default)]
    struct CountingPlatform {
        search_results: Vec<String>,
        get_videos_calls: AtomicUsize,
    }

    #[async_trait]
    impl VideoPlatform for CountingPlatform {
        async fn list_playlist_page(
            &self,
            _playlist_id: &str,
            _cursor: Option<String>,
        ) -> BridgeResult<(Vec<VideoEntry>, Option<String>)> {
            Ok((Vec::new(), None))
        }

        async fn list_subscriptions_page(
            &self,
            _cursor: Option<String>,
        ) -> BridgeResult<(Vec<String>, Option<String>)> {
            Ok((Vec::new(), None))
        }

        async fn search_recent(
            &self,
            _channel_id: &str,
            _published_after: DateTime<Utc>,
        ) -> BridgeResult<Vec<String>> {
            Ok(self.search_results.clone())
        }

        async fn get_videos(&self, video_ids: &[String]) -> BridgeResult<Vec<VideoEntry>> {
            self.get_videos_calls.fetch_add(1, Ordering::SeqCst);
            Ok(video_ids
                .iter()
                .map(|id| VideoEntry::new(id.clone(), format!("title of {id}")))
                .collect())
        }

        async fn insert_playlist_item(
            &self,
            _playlist_id: &str,
            _video_id: &str,
        ) -> BridgeResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_empty_search_skips_resolve() {
        let platform = CountingPlatform::default();

        let candidates = scan_channel(&platform, "UC1", Utc::now()).await.unwrap();

        assert!(candidates.is_empty());
        assert_eq!(platform.get_videos_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_candidates_tagged_with_channel() {
        let platform = CountingPlatform {
            search_results: vec!["vid1".to_string(), "vid2".to_string()],
            ..Default::default()
        };

        let candidates = scan_channel(&platform, "UC1", Utc::now()).await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.channel_id == "UC1"));
        assert_eq!(candidates[0].video.id, "vid1");
        assert_eq!(platform.get_videos_calls.load(Ordering::SeqCst), 1);
    }
}

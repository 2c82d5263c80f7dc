//! # Sync Pipeline
//!
//! Orchestrates the four-stage subscription → playlist merge.
//!
//! ## Workflow
//!
//! 1. Paginate the target playlist into a [`PlaylistIndex`]
//! 2. Paginate the authenticated user's subscriptions
//! 3. Scan each channel for uploads inside the lookback window
//! 4. Merge: drop candidates already indexed or already queued, then insert
//!    the remainder sequentially in discovery order
//!
//! The run is fully sequential: no remote call is issued while another is
//! outstanding, so insertion order in the playlist follows batch order.
//! Stage 1 completes before any merge decision is made; the index and the
//! queued set are owned by the single run and never shared.
//!
//! ## Usage
//!
//! ```ignore
//! use core_sync::{SyncConfig, SyncPipeline};
//! use std::sync::Arc;
//!
//! # async fn example(platform: Arc<dyn bridge_traits::VideoPlatform>) {
//! let config = SyncConfig::new("PL123").with_lookback_days(3);
//! let pipeline = SyncPipeline::new(platform, config);
//!
//! let report = pipeline.run().await.expect("sync failed");
//! println!("added {} videos", report.added_video_ids.len());
//! # }
//! ```

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::index::{collect_pages, PlaylistIndex};
use crate::scanner::{self, CandidateVideo, ChannelFailure};
use bridge_traits::time::{Clock, SystemClock};
use bridge_traits::video::{VideoEntry, VideoPlatform};
use chrono::Duration;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Outcome of one sync run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Identifiers of the videos added (or, in a dry run, that would be
    /// added), in insertion order
    pub added_video_ids: Vec<String>,

    /// Number of videos indexed from the target playlist
    pub indexed: usize,

    /// Number of subscribed channels the scan visited
    pub channels_scanned: usize,

    /// Total candidates the scan produced across all channels
    pub candidates_seen: usize,

    /// Candidates dropped because the playlist already contained them
    pub already_present: usize,

    /// Candidates dropped because an earlier channel already queued them
    pub already_queued: usize,

    /// Channels whose scan failed (empty unless failures were tolerated)
    pub channel_failures: Vec<ChannelFailure>,

    /// Whether the publish step was skipped
    pub dry_run: bool,
}

/// Sequential subscription → playlist sync pipeline
///
/// Owns nothing but its collaborators and configuration; all run state lives
/// inside [`run`](Self::run) for the duration of one invocation.
pub struct SyncPipeline {
    /// Video platform collaborator
    platform: Arc<dyn VideoPlatform>,

    /// Time source for the lookback cutoff
    clock: Arc<dyn Clock>,

    /// Run configuration
    config: SyncConfig,
}

impl SyncPipeline {
    /// Create a pipeline over the system clock
    pub fn new(platform: Arc<dyn VideoPlatform>, config: SyncConfig) -> Self {
        Self::with_clock(platform, Arc::new(SystemClock), config)
    }

    /// Create a pipeline with an injected time source
    pub fn with_clock(
        platform: Arc<dyn VideoPlatform>,
        clock: Arc<dyn Clock>,
        config: SyncConfig,
    ) -> Self {
        Self {
            platform,
            clock,
            config,
        }
    }

    /// Execute one sync run
    ///
    /// Returns the report on success. The run aborts on the first failure of
    /// indexing, subscription listing, or insertion; channel-scan failures
    /// abort only when `abort_on_channel_error` is set.
    #[instrument(skip(self), fields(playlist_id = %self.config.playlist_id))]
    pub async fn run(&self) -> Result<SyncReport> {
        // Stage 1: index what is already there
        let index = self.build_index().await?;
        info!(indexed = index.len(), "Playlist indexed");

        // Stage 2: who are we subscribed to
        let channels = self.list_subscriptions().await?;
        info!(channels = channels.len(), "Subscriptions listed");

        // Stage 3: scan each channel inside the lookback window
        let lookback = Duration::try_days(self.config.lookback_days).ok_or_else(|| {
            SyncError::InvalidConfig(format!(
                "lookback_days {} is out of range",
                self.config.lookback_days
            ))
        })?;
        let published_after = self.clock.now() - lookback;
        let mut candidates: Vec<CandidateVideo> = Vec::new();
        let mut channel_failures: Vec<ChannelFailure> = Vec::new();

        for channel_id in &channels {
            match scanner::scan_channel(self.platform.as_ref(), channel_id, published_after).await
            {
                Ok(found) => candidates.extend(found),
                Err(source) if self.config.abort_on_channel_error => {
                    return Err(SyncError::ChannelScan {
                        channel_id: channel_id.clone(),
                        source,
                    });
                }
                Err(source) => {
                    warn!(channel_id = %channel_id, error = %source, "Channel scan failed");
                    channel_failures.push(ChannelFailure::new(channel_id, &source));
                }
            }
        }

        // Stage 4: merge against the snapshot, then publish
        let candidates_seen = candidates.len();
        let (batch, already_present, already_queued) = merge(&index, candidates);

        if self.config.push_to_playlist {
            self.publish(&batch).await?;
        } else {
            debug!(batch = batch.len(), "Dry run, skipping insertions");
        }

        Ok(SyncReport {
            added_video_ids: batch.into_iter().map(|entry| entry.id).collect(),
            indexed: index.len(),
            channels_scanned: channels.len(),
            candidates_seen,
            already_present,
            already_queued,
            channel_failures,
            dry_run: !self.config.push_to_playlist,
        })
    }

    /// Stage 1: paginate the playlist into a complete index
    ///
    /// Any page failure aborts the run; merging against a partial index
    /// risks duplicate insertion.
    async fn build_index(&self) -> Result<PlaylistIndex> {
        let platform = Arc::clone(&self.platform);
        let playlist_id = self.config.playlist_id.clone();

        let entries = collect_pages(move |cursor| {
            let platform = Arc::clone(&platform);
            let playlist_id = playlist_id.clone();
            async move { platform.list_playlist_page(&playlist_id, cursor).await }
        })
        .await
        .map_err(SyncError::Indexing)?;

        for entry in &entries {
            debug!(video_id = %entry.id, title = %entry.title, "Existing video");
        }

        Ok(entries.into_iter().collect())
    }

    /// Stage 2: paginate the full subscription list
    async fn list_subscriptions(&self) -> Result<Vec<String>> {
        let platform = Arc::clone(&self.platform);

        collect_pages(move |cursor| {
            let platform = Arc::clone(&platform);
            async move { platform.list_subscriptions_page(cursor).await }
        })
        .await
        .map_err(SyncError::Subscriptions)
    }

    /// Publish the batch, one sequential insertion per entry
    ///
    /// The first failure aborts the remaining insertions.
    async fn publish(&self, batch: &[VideoEntry]) -> Result<()> {
        for entry in batch {
            info!(video_id = %entry.id, title = %entry.title, "Video to be added");

            self.platform
                .insert_playlist_item(&self.config.playlist_id, &entry.id)
                .await
                .map_err(|source| SyncError::Insertion {
                    video_id: entry.id.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}

/// Merge policy: keep a candidate iff it is neither in the stage-1 snapshot
/// nor already queued by an earlier candidate
///
/// The queued set is distinct from the index on purpose: the same video
/// surfacing from two channels must be inserted at most once.
fn merge(
    index: &PlaylistIndex,
    candidates: Vec<CandidateVideo>,
) -> (Vec<VideoEntry>, usize, usize) {
    let mut queued: HashSet<String> = HashSet::new();
    let mut batch: Vec<VideoEntry> = Vec::new();
    let mut already_present = 0;
    let mut already_queued = 0;

    for candidate in candidates {
        let CandidateVideo { video, channel_id } = candidate;

        if index.contains(&video.id) {
            info!(
                video_id = %video.id,
                title = %video.title,
                channel_id = %channel_id,
                "Video already in playlist"
            );
            already_present += 1;
        } else if queued.contains(&video.id) {
            debug!(video_id = %video.id, "Video already queued by another channel");
            already_queued += 1;
        } else {
            queued.insert(video.id.clone());
            batch.push(video);
        }
    }

    (batch, already_present, already_queued)
}

//! Video Platform Abstraction
//!
//! The boundary between the sync core and the video-hosting service. Every
//! remote operation the pipeline needs is expressed here as one trait method;
//! the concrete API wiring (URLs, field shapes, pagination cursor format)
//! lives in a provider crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A video as the pipeline sees it: opaque identifier plus display title.
///
/// Identity is the id alone; the title is carried for logging and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Opaque video identifier
    pub id: String,

    /// Video title
    pub title: String,
}

impl VideoEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Video-hosting platform operations
///
/// Paginated listings return one page per call together with an optional
/// continuation cursor; `None` means the listing is complete. Callers drive
/// the loop and own the accumulator, so implementations stay stateless.
///
/// All methods operate on the identity the underlying transport is
/// authenticated as.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// List one page of items in a playlist
    ///
    /// Returns at most the platform's page-size limit of entries plus the
    /// cursor for the next page, if any.
    async fn list_playlist_page(
        &self,
        playlist_id: &str,
        cursor: Option<String>,
    ) -> Result<(Vec<VideoEntry>, Option<String>)>;

    /// List one page of the authenticated user's channel subscriptions
    ///
    /// Returns channel identifiers in the order the remote source yields
    /// them, plus the cursor for the next page, if any.
    async fn list_subscriptions_page(
        &self,
        cursor: Option<String>,
    ) -> Result<(Vec<String>, Option<String>)>;

    /// Search for videos a channel published strictly after an instant
    ///
    /// Returns up to one page of matching video identifiers in the remote
    /// source's own ranking order.
    async fn search_recent(
        &self,
        channel_id: &str,
        published_after: DateTime<Utc>,
    ) -> Result<Vec<String>>;

    /// Resolve full metadata for a batch of video identifiers
    ///
    /// Issues a single combined request; results come back in
    /// response order.
    async fn get_videos(&self, video_ids: &[String]) -> Result<Vec<VideoEntry>>;

    /// Insert one video into a playlist
    async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()>;
}

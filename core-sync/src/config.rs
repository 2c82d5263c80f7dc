//! Sync run configuration

/// Configuration for one sync run
///
/// Only the playlist id is required; everything else has a documented
/// default.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Target playlist identifier
    ///
    /// Assumed valid; an invalid value surfaces as a lookup failure from the
    /// remote API, not as local validation.
    pub playlist_id: String,

    /// Trailing window for the recent-upload scan, in days
    ///
    /// A video qualifies when published strictly after
    /// `now - lookback_days`.
    pub lookback_days: i64,

    /// Whether to issue insertion requests
    ///
    /// When false the run is a dry run: the addition batch is computed and
    /// returned, but nothing is written remotely.
    pub push_to_playlist: bool,

    /// Whether a single failing channel scan aborts the whole run
    ///
    /// When false (default), per-channel failures are collected into the
    /// report and the remaining channels are still scanned.
    pub abort_on_channel_error: bool,
}

impl SyncConfig {
    /// Create a configuration with defaults for the given playlist
    pub fn new(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            lookback_days: 3,
            push_to_playlist: true,
            abort_on_channel_error: false,
        }
    }

    /// Set the lookback window in days
    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    /// Enable or disable the publish step
    pub fn with_push_to_playlist(mut self, push: bool) -> Self {
        self.push_to_playlist = push;
        self
    }

    /// Make per-channel scan failures fatal to the run
    pub fn with_abort_on_channel_error(mut self, abort: bool) -> Self {
        self.abort_on_channel_error = abort;
        self
    }
}

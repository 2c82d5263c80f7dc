use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Errors that abort a sync run
///
/// Remote-call variants name the stage that failed, so a caller can tell a
/// failed playlist listing from a failed insertion from the diagnostic alone.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Playlist indexing failed: {0}")]
    Indexing(#[source] BridgeError),

    #[error("Subscription listing failed: {0}")]
    Subscriptions(#[source] BridgeError),

    #[error("Scan of channel {channel_id} failed: {source}")]
    ChannelScan {
        channel_id: String,
        #[source]
        source: BridgeError,
    },

    #[error("Insertion of video {video_id} failed: {source}")]
    Insertion {
        video_id: String,
        #[source]
        source: BridgeError,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;

//! # Subscription → Playlist Sync
//!
//! Orchestrates one directional merge from a user's channel subscriptions
//! into a target playlist.
//!
//! ## Overview
//!
//! A run is a single sequential pipeline of four stages:
//! 1. **Playlist Indexer** - paginate the target playlist and build the set
//!    of video ids already present
//! 2. **Subscription Lister** - paginate the authenticated user's channel
//!    subscriptions
//! 3. **Recent-Upload Scanner** - per channel, search videos published within
//!    the lookback window and batch-resolve their metadata
//! 4. **Merge & Publish** - filter candidates against the index, deduplicate
//!    across channels, and insert the remainder in discovery order
//!
//! Data flows strictly forward; nothing persists between runs except the
//! remote playlist state itself.
//!
//! ## Components
//!
//! - **Playlist Index** (`index`): id set + title map built by an explicit
//!   pagination fold
//! - **Scanner** (`scanner`): per-channel scan with isolated outcomes
//! - **Pipeline** (`pipeline`): stage orchestration, merge policy, publish
//! - **Config** (`config`): run options with documented defaults

pub mod config;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod scanner;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use index::{collect_pages, PlaylistIndex};
pub use pipeline::{SyncPipeline, SyncReport};
pub use scanner::{CandidateVideo, ChannelFailure};

//! # YouTube Provider
//!
//! Implements the `VideoPlatform` trait for YouTube Data API v3.
//!
//! ## Overview
//!
//! This module provides:
//! - Paginated playlist-item listing
//! - Paginated subscription listing for the authenticated user
//! - Recent-upload search per channel with a published-after cutoff
//! - Batch video metadata lookup in a single combined request
//! - Playlist-item insertion
//!
//! OAuth token acquisition is out of scope; an access token is injected at
//! construction and attached to every request.

pub mod connector;
pub mod error;
pub mod types;

pub use connector::YouTubeConnector;
pub use error::{Result, YouTubeError};

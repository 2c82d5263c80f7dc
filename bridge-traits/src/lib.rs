//! # Host Bridge Traits
//!
//! Abstraction traits sitting between the sync core and its external
//! collaborators.
//!
//! ## Overview
//!
//! This crate defines the contract between the core pipeline and everything
//! it treats as a black box: the authenticated HTTP transport, the
//! video-hosting platform's API surface, and the system clock. Each trait
//! represents a capability the core requires but deliberately does not
//! implement itself.
//!
//! ## Traits
//!
//! ### Networking
//! - [`HttpClient`](http::HttpClient) - Async HTTP operations with retry policy
//!
//! ### Platform
//! - [`VideoPlatform`](video::VideoPlatform) - Playlist, subscription, search
//!   and insertion operations against the video-hosting service
//!
//! ### Utilities
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Implementations should:
//!
//! - Convert transport-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Include error context (e.g., URLs, response status)
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks.

pub mod error;
pub mod http;
pub mod time;
pub mod video;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use time::{Clock, FixedClock, SystemClock};
pub use video::{VideoEntry, VideoPlatform};

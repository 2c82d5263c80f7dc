//! Workspace facade crate.
//!
//! Re-exports the pieces a host needs to wire one sync run: the transport,
//! the YouTube connector, the pipeline, and logging setup. Hosts can depend
//! on `subsync` alone instead of wiring each workspace crate individually.
//!
//! ```ignore
//! use std::sync::Arc;
//! use subsync::{
//!     init_logging, LoggingConfig, ReqwestHttpClient, SyncConfig, SyncPipeline,
//!     YouTubeConnector,
//! };
//!
//! # async fn example(access_token: String) -> Result<(), Box<dyn std::error::Error>> {
//! init_logging(LoggingConfig::default())?;
//!
//! let http = Arc::new(ReqwestHttpClient::new());
//! let connector = Arc::new(YouTubeConnector::new(http, access_token));
//! let pipeline = SyncPipeline::new(connector, SyncConfig::new("PL123"));
//!
//! let report = pipeline.run().await?;
//! println!("added: {:?}", report.added_video_ids);
//! # Ok(())
//! # }
//! ```

pub use bridge_desktop::ReqwestHttpClient;
pub use bridge_traits::{BridgeError, Clock, HttpClient, SystemClock, VideoEntry, VideoPlatform};
pub use core_runtime::{init_logging, LogFormat, LoggingConfig};
pub use core_sync::{SyncConfig, SyncError, SyncPipeline, SyncReport};
pub use provider_youtube::YouTubeConnector;

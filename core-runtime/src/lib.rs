//! # Core Runtime
//!
//! Runtime infrastructure shared by every binary or host embedding the sync
//! core. Currently this is the logging/tracing setup.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};

//! # Desktop Bridge Implementations
//!
//! Desktop-native implementations of the bridge traits.
//!
//! Currently provides:
//! - [`ReqwestHttpClient`](http::ReqwestHttpClient) - HTTP transport backed
//!   by `reqwest` with retry-on-429/5xx and connection pooling

pub mod http;

pub use http::ReqwestHttpClient;

//! Error types for the YouTube provider

use thiserror::Error;

/// YouTube provider errors
#[derive(Error, Debug)]
pub enum YouTubeError {
    /// API request returned a non-success status
    #[error("YouTube API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Bridge error
    #[error(transparent)]
    BridgeError(#[from] bridge_traits::error::BridgeError),
}

/// Result type for YouTube operations
pub type Result<T> = std::result::Result<T, YouTubeError>;

impl From<YouTubeError> for bridge_traits::error::BridgeError {
    fn from(error: YouTubeError) -> Self {
        match error {
            YouTubeError::ApiError {
                status_code,
                message,
            } => bridge_traits::error::BridgeError::RemoteStatus {
                status: status_code,
                message,
            },
            YouTubeError::ParseError(msg) => {
                bridge_traits::error::BridgeError::OperationFailed(format!("Parse error: {}", msg))
            }
            YouTubeError::BridgeError(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = YouTubeError::ApiError {
            status_code: 404,
            message: "Playlist not found".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "YouTube API error (status 404): Playlist not found"
        );
    }

    #[test]
    fn test_error_conversion_keeps_status() {
        let error = YouTubeError::ApiError {
            status_code: 403,
            message: "quotaExceeded".to_string(),
        };
        let bridge_error: bridge_traits::error::BridgeError = error.into();

        assert!(matches!(
            bridge_error,
            bridge_traits::error::BridgeError::RemoteStatus { status: 403, .. }
        ));
    }
}

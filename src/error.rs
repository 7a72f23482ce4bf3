//! Helix Error Types
//!
//! Error handling for the Helix client library.

use thiserror::Error;

/// Main error type for Helix operations
#[derive(Debug, Error)]
pub enum HelixError {
    /// Configuration errors (missing credentials, invalid header values, etc.)
    #[error("configuration error: {0}")]
    Config(String),

    /// A reservation whose cost can never fit inside one quota window
    #[error("request cost {cost} can never be satisfied by a quota of {max_points} points")]
    CostExceedsQuota { cost: u32, max_points: u32 },

    /// HTTP request failed at the transport level
    #[error("request failed: {0}")]
    Request(String),

    /// Request timed out
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Helix answered with a non-success status
    #[error("helix returned status {status} for '{endpoint}': {body}")]
    Status {
        status: u16,
        endpoint: String,
        body: String,
    },

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for HelixError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HelixError::Timeout(err.to_string())
        } else if err.is_connect() {
            HelixError::Request(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            HelixError::Decode(format!("Failed to decode response: {}", err))
        } else {
            HelixError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HelixError {
    fn from(err: serde_json::Error) -> Self {
        HelixError::Decode(format!("JSON parsing error: {}", err))
    }
}

/// Result type alias for Helix operations
pub type Result<T> = std::result::Result<T, HelixError>;

//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl SdkError {
    /// True when the server answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::Api { status: 404, .. })
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            SdkError::Connection(e.to_string())
        } else if e.is_decode() {
            SdkError::Decode(e.to_string())
        } else {
            SdkError::Transport(e.to_string())
        }
    }
}

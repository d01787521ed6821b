//! lyricfetch error types

/// lyricfetch error types
#[derive(Debug, thiserror::Error)]
pub enum LyricError {
    // Input errors
    /// The input could not be classified into a provider, resource type and id.
    #[error("invalid input: {0}")]
    InputInvalid(String),

    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An impossible or unexpected state. Fatal to the current operation.
    #[error("system error: {0}")]
    System(String),
}

impl LyricError {
    /// Shorthand for [`LyricError::InputInvalid`] carrying the rejected input.
    pub fn input_invalid(input: impl Into<String>) -> Self {
        LyricError::InputInvalid(input.into())
    }
}

impl From<reqwest::Error> for LyricError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LyricError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => LyricError::Http(err.to_string()),
        }
    }
}

/// Result type alias for lyricfetch operations
pub type Result<T> = std::result::Result<T, LyricError>;

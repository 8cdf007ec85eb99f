//! Error type shared by every backend call.

use thiserror::Error;

/// Errors produced while configuring or calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    /// Raised by [`crate::MemoryBackend`] when configured to refuse a call.
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

//! Error types shared between the common crate and the client.
//!
//! The `QuoteError` enum unifies fetch failures, malformed payloads, user input
//! problems, and channel plumbing so every layer can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The quote service answered with a non-success HTTP status.
    #[error("Failed to fetch quote: HTTP status {0}")]
    Status(u16),

    /// The request never produced a response (DNS, connect, TLS, timeout, ...).
    #[error("Failed to fetch quote: {0}")]
    Network(String),

    /// The response body was not a non-empty JSON array of quotes.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A line typed by the user could not be turned into an intent.
    #[error("Invalid command: {0}")]
    InvalidIntent(String),

    /// I/O error originating from the standard library (stdin, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Channel receive failed (e.g., all senders closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl QuoteError {
    /// Returns `true` for failures of the HTTP exchange itself: a bad status or
    /// a transport error.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, QuoteError::Status(_) | QuoteError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = QuoteError::Status(503);
        assert_eq!(err.to_string(), "Failed to fetch quote: HTTP status 503");
        assert!(err.is_fetch_error());
    }

    #[test]
    fn malformed_response_is_not_a_fetch_error() {
        let err = QuoteError::MalformedResponse("empty array".into());
        assert!(!err.is_fetch_error());
        assert!(err.to_string().contains("empty array"));
    }
}

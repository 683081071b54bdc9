//! Error type for transfer feed loads.

use thiserror::Error;

/// A fetch of the transfer feed failed.
///
/// This is the only failure the feed knows about: timeouts, transport errors
/// and malformed payloads are all reported the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransferFeedLoadFailure {
    message: String,
}

impl TransferFeedLoadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Generic failure reported by the simulated source.
    pub fn network() -> Self {
        Self::new("Network error")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

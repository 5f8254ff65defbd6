//! # Error Types
//!
//! Failures of the test collection fetch, as seen by the view.

use thiserror::Error;

/// Why loading the test collection failed.
///
/// Each variant ends up as a visible, retryable state instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Connection refused, timed out or otherwise never got a response.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status.
    #[error("Server responded with status {code}")]
    Status { code: u16 },

    /// Body was not a JSON array of test descriptors.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            LoadError::Transport(_) => "OFFLINE",
            LoadError::Status { .. } => "HTTP ERROR",
            LoadError::Malformed(_) => "BAD DATA",
        }
    }
}

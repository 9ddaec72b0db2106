//! Submission error definitions.

use thiserror::Error;

use crate::transport::TransportError;

/// Shown instead of the error text when the endpoint could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Could not connect to the server. Please check your internet connection and try again.";

/// Errors that end a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint could not be reached.
    #[error("{0}")]
    Network(String),

    /// Any other transport failure.
    #[error("{0}")]
    Transport(String),

    /// The response body was not JSON.
    #[error("Invalid response from server")]
    InvalidResponse,

    /// The server answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    /// Text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        if e.is_network() {
            SubmitError::Network(e.to_string())
        } else {
            SubmitError::Transport(e.to_string())
        }
    }
}

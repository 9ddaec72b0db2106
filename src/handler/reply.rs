//! Server reply parsing.

use serde_json::Value;

use crate::handler::SubmitError;

/// Reply status that marks a created task.
pub const SUCCESS_STATUS: &str = "success";

/// Parsed response body. Missing or non-string fields read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerReply {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl ServerReply {
    /// Parse a response body. Empty text counts as an empty object; any
    /// other text must be valid JSON.
    pub fn parse(text: &str) -> Result<Self, SubmitError> {
        if text.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse response as JSON");
            SubmitError::InvalidResponse
        })?;

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        Ok(Self {
            status: field("status"),
            message: field("message"),
        })
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    /// Failure text for a non-success reply. Empty messages fall back to
    /// the default.
    pub fn failure_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(super::DEFAULT_FAILURE_MESSAGE)
    }
}

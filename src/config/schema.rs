//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the submitter.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the task submitter.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SubmitterConfig {
    /// Remote endpoint the submissions are sent to.
    pub endpoint: EndpointConfig,

    /// Transport behavior (opaque delivery policy).
    pub transport: TransportConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Submit button labels.
    pub form: FormConfig,

    /// Status message settings.
    pub presenter: PresenterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Web app URL of the scripting backend.
    pub url: String,

    /// Query parameter carrying the cache-busting timestamp.
    pub cache_bust_param: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "https://script.google.com/macros/s/AKfycbxgRKVN5bzSsUCQhOiuk26DroDYiHPyGVtGe7iOoWbinLVrvsbmLXfWunVwq6Szt6OZUw/exec".to_string(),
            cache_bust_param: "t".to_string(),
        }
    }
}

/// What a completed opaque send means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpaquePolicy {
    /// Report the attempt as sent but unconfirmed.
    #[default]
    Trust,
    /// Fall through to the readable transport for a verdict.
    Verify,
}

/// Transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TransportConfig {
    pub opaque_policy: OpaquePolicy,
}

/// Timeout configuration for transport calls.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-transport request timeout in seconds. Unset means wait forever.
    pub request_secs: Option<u64>,
}

/// Submit button labels.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    /// Label while the form is idle.
    pub idle_label: String,

    /// Label while a submission is in flight.
    pub busy_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            idle_label: "Create Task".to_string(),
            busy_label: "Saving...".to_string(),
        }
    }
}

/// Status message configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Delay before a shown message is hidden, in milliseconds.
    pub hide_after_ms: u64,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self { hide_after_ms: 5000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

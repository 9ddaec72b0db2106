//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint is an absolute http(s) URL
//! - Validate value ranges (delays > 0, labels non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SubmitterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::SubmitterConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint.url is not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("endpoint.url must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("endpoint.cache_bust_param must not be empty")]
    EmptyCacheBustParam,

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,

    #[error("presenter.hide_after_ms must be greater than 0")]
    ZeroHideDelay,

    #[error("form.{0} must not be empty")]
    EmptyLabel(&'static str),
}

pub fn validate_config(config: &SubmitterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl(e.to_string())),
    }

    if config.endpoint.cache_bust_param.is_empty() {
        errors.push(ValidationError::EmptyCacheBustParam);
    }

    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.presenter.hide_after_ms == 0 {
        errors.push(ValidationError::ZeroHideDelay);
    }

    if config.form.idle_label.trim().is_empty() {
        errors.push(ValidationError::EmptyLabel("idle_label"));
    }
    if config.form.busy_label.trim().is_empty() {
        errors.push(ValidationError::EmptyLabel("busy_label"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

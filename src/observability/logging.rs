//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber
//! - Configure log level from config, overridable through `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a given level.
pub fn default_directive(level: &str) -> String {
    format!("task_submitter={}", level)
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(level).into());

    // Logs go to stderr so stdout only carries the status message.
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        tracing::debug!(error = %e, "Subscriber already installed");
    }
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler, transports, presenter produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters via the `metrics` facade)
//! ```
//!
//! # Design Decisions
//! - Every log line of a submission carries its `attempt_id`
//! - Metrics are recorded through the facade; installing a recorder is
//!   left to the embedding application

pub mod logging;
pub mod metrics;

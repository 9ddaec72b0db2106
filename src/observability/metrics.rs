//! Metrics collection.
//!
//! # Metrics
//! - `task_submissions_total` (counter): submit calls by outcome
//! - `task_transport_fallbacks_total` (counter): readable GET attempts
//! - `task_transport_errors_total` (counter): transport errors by transport

/// Record the outcome of one submit call.
pub fn record_submission(outcome: &'static str) {
    ::metrics::counter!("task_submissions_total", "outcome" => outcome).increment(1);
}

/// Record a switch to the readable transport.
pub fn record_fallback() {
    ::metrics::counter!("task_transport_fallbacks_total").increment(1);
}

/// Record a failed transport call.
pub fn record_transport_error(transport: &'static str) {
    ::metrics::counter!("task_transport_errors_total", "transport" => transport).increment(1);
}

//! Form submission handling.
//!
//! # Data Flow
//! ```text
//! handle_submit(&mut TaskForm)
//!     → button disabled, busy label shown (restored on drop)
//!     → TaskSubmission snapshot (status = "Pending")
//!     → opaque POST to <endpoint>?t=<millis>
//!         → completed: Unconfirmed (trust) or continue (verify)
//!         → error: continue
//!     → readable GET to <endpoint>?<fields>
//!     → ServerReply → Confirmed | SubmitError
//!     → message presented, form reset on success
//! ```

pub mod error;
pub mod reply;

use std::time::Duration;

pub use error::{SubmitError, NETWORK_ERROR_MESSAGE};
pub use reply::ServerReply;

use crate::config::{OpaquePolicy, SubmitterConfig};
use crate::form::TaskForm;
use crate::observability::metrics;
use crate::presenter::{Category, MessagePresenter};
use crate::submission::TaskSubmission;
use crate::transport::endpoint::now_millis;
use crate::transport::{with_timeout, Endpoint, OpaqueTransport, ReadableTransport};

pub const SUCCESS_MESSAGE: &str = "Task created successfully!";
pub const UNCONFIRMED_MESSAGE: &str = "Task sent, but the server did not confirm receipt.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to create task";

/// How a submit call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server replied with a success status.
    Confirmed,
    /// The opaque request was sent; the server's verdict is unknown.
    Unconfirmed,
    Failed(SubmitError),
    /// The submit button was already disabled.
    Ignored,
}

impl SubmitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::Confirmed => "confirmed",
            SubmitOutcome::Unconfirmed => "unconfirmed",
            SubmitOutcome::Failed(_) => "failed",
            SubmitOutcome::Ignored => "ignored",
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed | SubmitOutcome::Unconfirmed)
    }
}

enum Delivery {
    Confirmed,
    Unconfirmed,
}

pub struct SubmissionHandler<A, B> {
    endpoint: Endpoint,
    opaque: A,
    readable: B,
    presenter: MessagePresenter,
    policy: OpaquePolicy,
    timeout: Option<Duration>,
}

impl<A, B> SubmissionHandler<A, B>
where
    A: OpaqueTransport,
    B: ReadableTransport,
{
    pub fn new(
        config: &SubmitterConfig,
        endpoint: Endpoint,
        opaque: A,
        readable: B,
        presenter: MessagePresenter,
    ) -> Self {
        Self {
            endpoint,
            opaque,
            readable,
            presenter,
            policy: config.transport.opaque_policy,
            timeout: config.timeouts.request_secs.map(Duration::from_secs),
        }
    }

    /// Submit the form once.
    ///
    /// The submit button stays disabled until this future completes or is
    /// dropped. Every outcome except `Ignored` presents a message.
    pub async fn handle_submit(&self, form: &mut TaskForm) -> SubmitOutcome {
        let (fields, button) = form.split_mut();
        let Some(_busy) = button.begin() else {
            tracing::debug!("Submit button disabled, ignoring submit");
            return SubmitOutcome::Ignored;
        };

        let submission = TaskSubmission::from_fields(fields);
        tracing::info!(
            attempt_id = %submission.attempt_id(),
            employee_name = submission.employee_name(),
            task_title = submission.task_title(),
            "Sending data"
        );

        let outcome = match self.deliver(&submission).await {
            Ok(Delivery::Confirmed) => {
                tracing::info!(attempt_id = %submission.attempt_id(), "Task created");
                self.presenter.present(SUCCESS_MESSAGE, Category::Success);
                fields.reset();
                SubmitOutcome::Confirmed
            }
            Ok(Delivery::Unconfirmed) => {
                tracing::warn!(
                    attempt_id = %submission.attempt_id(),
                    "Opaque request sent; server-side result unknown"
                );
                self.presenter.present(UNCONFIRMED_MESSAGE, Category::Success);
                fields.reset();
                SubmitOutcome::Unconfirmed
            }
            Err(e) => {
                tracing::error!(
                    attempt_id = %submission.attempt_id(),
                    error = %e,
                    "Failed to submit form"
                );
                self.presenter.present(&e.user_message(), Category::Error);
                SubmitOutcome::Failed(e)
            }
        };

        metrics::record_submission(outcome.label());
        outcome
    }

    async fn deliver(&self, submission: &TaskSubmission) -> Result<Delivery, SubmitError> {
        let attempt_id = submission.attempt_id();
        let url = self.endpoint.submit_url(now_millis());
        tracing::debug!(%attempt_id, transport = "opaque", url = %url, "Sending POST");

        match with_timeout(self.timeout, self.opaque.send(&url, submission)).await {
            Ok(()) => match self.policy {
                OpaquePolicy::Trust => return Ok(Delivery::Unconfirmed),
                OpaquePolicy::Verify => {
                    tracing::info!(
                        %attempt_id,
                        transport = "opaque",
                        "Opaque request cannot be confirmed, trying GET"
                    );
                }
            },
            Err(e) => {
                metrics::record_transport_error("opaque");
                tracing::warn!(
                    %attempt_id,
                    transport = "opaque",
                    error = %e,
                    "POST failed, trying GET"
                );
            }
        }

        metrics::record_fallback();
        let url = self.endpoint.query_url(submission);
        // The query string holds the submitted fields; log the bare endpoint.
        tracing::debug!(
            %attempt_id,
            transport = "readable",
            url = %self.endpoint.base(),
            "Sending GET"
        );
        let response = with_timeout(self.timeout, self.readable.fetch(&url))
            .await
            .map_err(|e| {
                metrics::record_transport_error("readable");
                SubmitError::from(e)
            })?;

        tracing::debug!(
            %attempt_id,
            transport = "readable",
            status = response.status,
            text = %response.text,
            "Response received"
        );

        let reply = ServerReply::parse(&response.text)?;
        if reply.is_success() {
            Ok(Delivery::Confirmed)
        } else {
            Err(SubmitError::Rejected(reply.failure_message().to_string()))
        }
    }
}

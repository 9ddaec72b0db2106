//! Task submission client library.

pub mod config;
pub mod form;
pub mod handler;
pub mod observability;
pub mod presenter;
pub mod submission;
pub mod transport;

pub use config::schema::SubmitterConfig;
pub use form::TaskForm;
pub use handler::{SubmissionHandler, SubmitError, SubmitOutcome};
pub use presenter::{Category, MessagePresenter};
pub use submission::TaskSubmission;

//! Task submitter CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags ──▶ TaskForm ──▶ SubmissionHandler ──▶ opaque POST ──┐
//!                                   │                              │ error
//!                                   │                              ▼
//!                                   │                        readable GET
//!                                   ▼                              │
//!                           MessagePresenter ◀── ServerReply ◀─────┘
//!                                   │
//!                                   ▼
//!                            TerminalSurface
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use task_submitter::config::{resolve_config, ObservabilityConfig};
use task_submitter::observability::logging::init_logging;
use task_submitter::presenter::{MessagePresenter, TerminalSurface};
use task_submitter::transport::{Endpoint, HttpTransport};
use task_submitter::{SubmissionHandler, TaskForm};

#[derive(Parser)]
#[command(name = "task-submit")]
#[command(about = "Submit a new task to the task-tracking endpoint", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint URL, overriding the configuration.
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Log level when RUST_LOG is unset.
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long)]
    employee_name: String,

    #[arg(long)]
    task_title: String,

    #[arg(long, default_value = "")]
    task_description: String,

    /// Due date, e.g. 2024-05-01.
    #[arg(long, default_value = "")]
    due_date: String,

    #[arg(long, default_value = "Medium")]
    priority: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The subscriber goes in before anything can fail; the level comes from
    // the flag, then the config file, then the default.
    let resolved = resolve_config(cli.config.as_deref(), cli.endpoint.clone());
    let level = cli
        .log_level
        .clone()
        .or_else(|| resolved.as_ref().ok().map(|c| c.observability.log_level.clone()))
        .unwrap_or_else(|| ObservabilityConfig::default().log_level);
    init_logging(&level);

    let config = match resolved {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        endpoint = %config.endpoint.url,
        opaque_policy = ?config.transport.opaque_policy,
        request_timeout_secs = ?config.timeouts.request_secs,
        "Configuration loaded"
    );

    let endpoint = Endpoint::from_config(&config.endpoint)?;
    let transport = HttpTransport::default();
    let presenter = MessagePresenter::new(Arc::new(TerminalSurface), &config.presenter);
    // Counters go through the `metrics` facade; the CLI installs no
    // recorder, so they are no-ops here. Embedders wire their own exporter.
    let handler = SubmissionHandler::new(
        &config,
        endpoint,
        transport.clone(),
        transport,
        presenter,
    );

    let mut form = TaskForm::new(&config.form)
        .with_field("employeeName", cli.employee_name)
        .with_field("taskTitle", cli.task_title)
        .with_field("taskDescription", cli.task_description)
        .with_field("dueDate", cli.due_date)
        .with_field("priority", cli.priority);

    let outcome = handler.handle_submit(&mut form).await;

    if outcome.is_delivered() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

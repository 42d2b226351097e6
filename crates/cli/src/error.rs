//! CLI error types.

use crewplan_core::calendar::DateError;
use crewplan_core::events::{FormErrors, TaskError};
use crewplan_core::hours::HoursError;
use crewplan_core::notifications::NotificationError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Event not found: {0}")]
    EventNotFound(u32),

    #[error("Staff member not found: {0}")]
    StaffNotFound(u32),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("Invalid event: {0}")]
    Form(#[from] FormErrors),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Hours(#[from] HoursError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

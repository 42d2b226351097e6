//! Event CLI commands.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use crewplan_core::events::{EventKind, Priority};
use crewplan_core::serde::parse_datetime_local;

// Re-export core EventStatus for filtering
pub use crewplan_core::events::EventStatus as CoreEventStatus;

/// Event commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Home feed tab (with clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventStatus {
    Pending,
    Assigned,
}

impl From<EventStatus> for CoreEventStatus {
    fn from(s: EventStatus) -> Self {
        match s {
            EventStatus::Pending => CoreEventStatus::Pending,
            EventStatus::Assigned => CoreEventStatus::Assigned,
        }
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events on the home feed.
    List {
        /// Search title and location.
        #[arg(long)]
        search: Option<String>,
        /// Only show one tab.
        #[arg(long, value_enum)]
        status: Option<EventStatus>,
    },
    /// Show one event.
    Show {
        /// Event ID.
        id: u32,
    },
    /// Fill in and validate the new-event form.
    New {
        /// Event title.
        #[arg(long, default_value = "")]
        title: String,
        /// Event kind: warehouse, event or appointment.
        #[arg(long, default_value = "warehouse")]
        kind: EventKind,
        /// Location (required for warehouse and appointment).
        #[arg(long)]
        location: Option<String>,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
        /// Start (YYYY-MM-DDTHH:MM).
        #[arg(long, value_parser = parse_datetime, required_unless_present = "from_json")]
        start: Option<NaiveDateTime>,
        /// End (YYYY-MM-DDTHH:MM).
        #[arg(long, value_parser = parse_datetime, required_unless_present = "from_json")]
        end: Option<NaiveDateTime>,
        /// Priority: low, medium or high.
        #[arg(long, default_value = "medium")]
        priority: Priority,
        /// Predefined task ID; repeat for several.
        #[arg(long = "task")]
        tasks: Vec<String>,
        /// Custom task name; repeat for several.
        #[arg(long = "custom-task")]
        custom_tasks: Vec<String>,
        /// Read the whole form from a JSON file instead of flags.
        #[arg(
            long,
            conflicts_with_all = [
                "title", "kind", "location", "description", "start", "end",
                "priority", "tasks", "custom_tasks",
            ]
        )]
        from_json: Option<PathBuf>,
    },
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    parse_datetime_local(s)
        .ok_or_else(|| format!("invalid date-time '{s}' (expected YYYY-MM-DDTHH:MM)"))
}

//! Assignment CLI commands.

use clap::{Parser, Subcommand};

/// Staff assignment commands.
#[derive(Debug, Parser)]
pub struct AssignCommand {
    #[command(subcommand)]
    pub action: AssignAction,
}

/// Available assignment actions.
#[derive(Debug, Subcommand)]
pub enum AssignAction {
    /// List staff with their availability on the event day.
    List {
        /// Event ID (defaults to CREWPLAN_EVENT_ID or 1).
        #[arg(long)]
        event: Option<u32>,
        /// Staff ID to select; repeat for several.
        #[arg(long = "select")]
        select: Vec<u32>,
    },
    /// Show a staff member's schedule for the event month.
    Preview {
        /// Staff ID.
        staff_id: u32,
        /// Event ID (defaults to CREWPLAN_EVENT_ID or 1).
        #[arg(long)]
        event: Option<u32>,
    },
}

//! Working-hours CLI commands.

use clap::{ArgGroup, Parser, Subcommand};

/// Working-hours summary. Without a subcommand, prints one card per person.
#[derive(Debug, Parser)]
#[command(group(ArgGroup::new("period").args(["week", "month"])))]
pub struct SummaryCommand {
    #[command(subcommand)]
    pub action: Option<SummaryAction>,

    /// Year for --week or --month (defaults to the current year).
    #[arg(long, requires = "period")]
    pub year: Option<i32>,

    /// Sunday-first week number.
    #[arg(long)]
    pub week: Option<u32>,

    /// Month number (1-12).
    #[arg(long)]
    pub month: Option<u32>,
}

/// Available summary actions.
#[derive(Debug, Subcommand)]
pub enum SummaryAction {
    /// Show the daily breakdown for one staff member.
    Show {
        /// Staff ID.
        staff_id: u32,
    },
}

//! CLI command definitions.

pub mod assign;
pub mod events;
pub mod notifications;
pub mod settings;
pub mod summary;

use clap::{Parser, Subcommand, ValueEnum};
use crewplan_core::calendar::CalendarDate;
use crewplan_core::theme::ThemeMode;

/// Staff scheduling and event assignment from the terminal.
#[derive(Debug, Parser)]
#[command(name = "crewplan")]
#[command(about = "Staff scheduling and event assignment", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "CREWPLAN_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Colour theme used for pretty output (default: light).
    #[arg(long, env = "CREWPLAN_THEME")]
    pub theme: Option<ThemeMode>,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs as JSON lines.
    #[arg(long, env = "CREWPLAN_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output with colors.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Home feed and the new-event form.
    Events(events::EventsCommand),
    /// Assign staff to an event.
    Assign(assign::AssignCommand),
    /// Show a classified month grid.
    Calendar {
        /// Any day of the month to show (YYYY-MM-DD).
        date: CalendarDate,
        /// Event day to highlight (defaults to DATE).
        #[arg(long)]
        event_date: Option<CalendarDate>,
        /// A day off; repeat for several days.
        #[arg(long = "time-off")]
        time_off: Vec<CalendarDate>,
    },
    /// Show the Sunday-first week number of a day.
    Week {
        /// Day to look up (defaults to today).
        date: Option<CalendarDate>,
    },
    /// Working-hours summary.
    Summary(summary::SummaryCommand),
    /// Approval requests from contractors.
    Notifications(notifications::NotificationsCommand),
    /// App settings.
    Settings(settings::SettingsCommand),
}

//! Settings CLI commands.

use clap::{Parser, Subcommand};

/// Settings commands.
#[derive(Debug, Parser)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Available settings actions.
#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show the current settings and theme palette.
    Show,
}

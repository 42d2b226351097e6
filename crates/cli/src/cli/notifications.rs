//! Notification CLI commands.

use clap::{Parser, Subcommand};

/// Approval request commands.
#[derive(Debug, Parser)]
pub struct NotificationsCommand {
    #[command(subcommand)]
    pub action: NotificationsAction,
}

/// Available notification actions.
#[derive(Debug, Subcommand)]
pub enum NotificationsAction {
    /// List all notifications.
    List,
    /// Approve a pending request.
    Approve {
        /// Notification ID.
        id: u32,
    },
    /// Reject a pending request.
    Reject {
        /// Notification ID.
        id: u32,
    },
}

//! Application state for one CLI invocation.
//!
//! Holds the demo data set and the active settings. Every command reads from
//! and mutates this value; nothing is persisted between runs.

use crewplan_core::events::{find_event, Event};
use crewplan_core::hours::StaffHours;
use crewplan_core::mock_data::{mock_events, mock_notifications, mock_staff, mock_staff_hours};
use crewplan_core::notifications::Inbox;
use crewplan_core::settings::Settings;
use crewplan_core::staff::{find_staff, StaffMember};
use crewplan_core::theme::Palette;

use crate::config::Config;
use crate::error::{CliError, Result};

/// State shared by all command handlers.
#[derive(Debug, Clone)]
pub struct App {
    pub config: Config,
    pub settings: Settings,
    pub events: Vec<Event>,
    pub staff: Vec<StaffMember>,
    pub hours: Vec<StaffHours>,
    pub inbox: Inbox,
}

impl App {
    /// Creates state populated with the built-in demo data.
    pub fn with_demo_data(config: Config, settings: Settings) -> Self {
        let app = Self {
            config,
            settings,
            events: mock_events(),
            staff: mock_staff(),
            hours: mock_staff_hours(),
            inbox: Inbox::new(mock_notifications()),
        };
        tracing::debug!(
            events = app.events.len(),
            staff = app.staff.len(),
            notifications = app.inbox.all().len(),
            "loaded demo data"
        );
        app
    }

    pub fn palette(&self) -> Palette {
        self.settings.palette()
    }

    pub fn event(&self, id: u32) -> Result<&Event> {
        find_event(&self.events, id).ok_or(CliError::EventNotFound(id))
    }

    pub fn staff_member(&self, id: u32) -> Result<&StaffMember> {
        find_staff(&self.staff, id).ok_or(CliError::StaffNotFound(id))
    }

    /// ID for a newly created event.
    pub fn next_event_id(&self) -> u32 {
        self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

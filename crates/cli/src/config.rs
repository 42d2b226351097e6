use std::env;

use chrono::Local;
use crewplan_core::calendar::CalendarDate;
use crewplan_core::mock_data::ASSIGN_EVENT_ID;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reference date for "this week" / "this month" defaults.
    pub today: CalendarDate,
    /// Event used by the assignment commands when `--event` is omitted.
    pub default_event_id: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CREWPLAN_TODAY` - Reference date, `YYYY-MM-DD` (default: local date)
    /// - `CREWPLAN_EVENT_ID` - Default event for assignment (default: 1)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            today: lookup("CREWPLAN_TODAY")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| CalendarDate::from_datetime(&Local::now())),
            default_event_id: lookup("CREWPLAN_EVENT_ID")
                .and_then(|v| v.parse().ok())
                .unwrap_or(ASSIGN_EVENT_ID),
        }
    }

    /// Overrides the reference date.
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;

/// Urgency tag shown on an event card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Card label, e.g. "High Priority".
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

/// Where an event sits in the assignment workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Assigned,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Pending => "Pending",
            EventStatus::Assigned => "Assigned",
        }
    }
}

/// The kind of event created through the new-event form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Warehouse,
    Event,
    Appointment,
}

impl EventKind {
    /// Warehouse jobs and appointments happen somewhere specific.
    pub fn requires_location(&self) -> bool {
        matches!(self, EventKind::Warehouse | EventKind::Appointment)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Warehouse => "Warehouse",
            EventKind::Event => "Events",
            EventKind::Appointment => "Appointment",
        }
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warehouse" => Ok(EventKind::Warehouse),
            "event" | "events" => Ok(EventKind::Event),
            "appointment" => Ok(EventKind::Appointment),
            other => Err(format!("unknown event kind '{other}'")),
        }
    }
}

/// An event card on the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: CalendarDate,
    pub time: NaiveTime,
    pub location: String,
    pub attendees: u32,
    pub priority: Option<Priority>,
    pub status: EventStatus,
    /// Avatar URLs of staff already attached to the event.
    pub avatars: Vec<String>,
}

impl Event {
    /// Creates a pending event with no priority and no avatars.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        date: CalendarDate,
        time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            time,
            location: location.into(),
            attendees: 0,
            priority: None,
            status: EventStatus::Pending,
            avatars: Vec::new(),
        }
    }

    pub fn with_attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_avatars<I, S>(mut self, avatars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avatars = avatars.into_iter().map(Into::into).collect();
        self
    }

    /// Formats the start time as "10:00 AM".
    pub fn time_label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }

    /// Formats date and time as "Mar 15, 2025 • 10:00 AM".
    pub fn when_label(&self) -> String {
        format!("{} • {}", self.date.long_label(), self.time_label())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.when_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event() -> Event {
        Event::new(
            1,
            "Winter Wonderland",
            CalendarDate::from_ymd(2025, 3, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            "Belgium",
        )
    }

    #[test]
    fn test_event_builder() {
        let event = make_event()
            .with_attendees(50)
            .with_priority(Priority::High)
            .with_avatars(["a.jpg", "b.jpg"]);

        assert_eq!(event.attendees, 50);
        assert_eq!(event.priority, Some(Priority::High));
        assert_eq!(event.status, EventStatus::Pending);
        assert_eq!(event.avatars.len(), 2);
    }

    #[test]
    fn test_event_labels() {
        let event = make_event();
        assert_eq!(event.time_label(), "10:00 AM");
        assert_eq!(event.when_label(), "Mar 15, 2025 • 10:00 AM");

        let afternoon = Event {
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            ..make_event()
        };
        assert_eq!(afternoon.time_label(), "2:30 PM");
    }

    #[test]
    fn test_kind_requires_location() {
        assert!(EventKind::Warehouse.requires_location());
        assert!(EventKind::Appointment.requires_location());
        assert!(!EventKind::Event.requires_location());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!("events".parse::<EventKind>(), Ok(EventKind::Event));
        assert_eq!(Priority::Low.label(), "Low Priority");
    }

    #[test]
    fn test_event_serializes_date_as_string() {
        let json = serde_json::to_value(make_event()).unwrap();
        assert_eq!(json["date"], "2025-03-15");
        assert_eq!(json["status"], "pending");
    }
}

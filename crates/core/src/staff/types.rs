use serde::{Deserialize, Serialize};

use crate::calendar::{classify, CalendarDate, DayClassification, TimeOffSet};

/// A staff member who can be assigned to events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    /// Number of events already assigned to this person.
    pub assigned_events: u32,
    #[serde(default)]
    pub time_off: TimeOffSet,
}

impl StaffMember {
    /// Creates a staff member with no assignments and no time-off.
    pub fn new(id: u32, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
            assigned_events: 0,
            time_off: TimeOffSet::new(),
        }
    }

    pub fn with_assigned_events(mut self, count: u32) -> Self {
        self.assigned_events = count;
        self
    }

    pub fn with_time_off(mut self, time_off: TimeOffSet) -> Self {
        self.time_off = time_off;
        self
    }

    pub fn has_time_off(&self) -> bool {
        !self.time_off.is_empty()
    }

    /// Classifies `day` for this person against `event_date`.
    pub fn classify_day(&self, day: CalendarDate, event_date: CalendarDate) -> DayClassification {
        classify(day, event_date, &self.time_off)
    }

    /// Returns true if the event day is one of this person's days off.
    pub fn conflicts_with(&self, event_date: CalendarDate) -> bool {
        self.classify_day(event_date, event_date).is_conflict()
    }
}

/// Finds a staff member by ID.
pub fn find_staff(staff: &[StaffMember], id: u32) -> Option<&StaffMember> {
    staff.iter().find(|member| member.id == id)
}

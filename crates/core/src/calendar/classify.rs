use serde::{Deserialize, Serialize};

use super::date::{CalendarDate, TimeOffSet};

/// How a single day relates to an event and a staff member's time-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    /// Neither the event day nor a time-off day.
    Plain,
    /// The event day, and the staff member is available.
    EventOnly,
    /// A time-off day that is not the event day.
    TimeOffOnly,
    /// The event day falls on a time-off day.
    Conflict,
}

impl DayClassification {
    /// Every classification, in legend order.
    pub const ALL: [DayClassification; 4] = [
        DayClassification::Plain,
        DayClassification::TimeOffOnly,
        DayClassification::EventOnly,
        DayClassification::Conflict,
    ];

    /// Combines the two membership flags. Conflict wins when both hold.
    pub fn from_flags(is_event: bool, is_time_off: bool) -> Self {
        match (is_event, is_time_off) {
            (true, true) => DayClassification::Conflict,
            (false, true) => DayClassification::TimeOffOnly,
            (true, false) => DayClassification::EventOnly,
            (false, false) => DayClassification::Plain,
        }
    }

    /// Returns true if the day is the event day (with or without conflict).
    pub fn is_event(&self) -> bool {
        matches!(
            self,
            DayClassification::EventOnly | DayClassification::Conflict
        )
    }

    /// Returns true if the day is a time-off day (with or without conflict).
    pub fn is_time_off(&self) -> bool {
        matches!(
            self,
            DayClassification::TimeOffOnly | DayClassification::Conflict
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DayClassification::Conflict)
    }

    /// Stable presentation token for this classification.
    pub fn token(&self) -> &'static str {
        match self {
            DayClassification::Plain => "plain",
            DayClassification::EventOnly => "event",
            DayClassification::TimeOffOnly => "time-off",
            DayClassification::Conflict => "conflict",
        }
    }

    /// Human-readable legend label.
    pub fn label(&self) -> &'static str {
        match self {
            DayClassification::Plain => "Available",
            DayClassification::EventOnly => "Event Date",
            DayClassification::TimeOffOnly => "Time Off",
            DayClassification::Conflict => "Conflict",
        }
    }
}

/// Classifies `day` against the event date and a set of time-off days.
///
/// Whole-day comparison only. The event date does not have to fall in any
/// particular displayed range.
pub fn classify(
    day: CalendarDate,
    event_date: CalendarDate,
    time_off: &TimeOffSet,
) -> DayClassification {
    DayClassification::from_flags(day == event_date, time_off.contains(day))
}

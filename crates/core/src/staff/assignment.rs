use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::StaffMember;
use crate::calendar::{CalendarDate, DayClassification, MonthGrid};

/// Staff chosen in the assignment flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSelection {
    selected: BTreeSet<u32>,
}

impl AssignmentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects a staff member. Returns true if now selected.
    pub fn toggle(&mut self, staff_id: u32) -> bool {
        if self.selected.remove(&staff_id) {
            false
        } else {
            self.selected.insert(staff_id);
            true
        }
    }

    pub fn is_selected(&self, staff_id: u32) -> bool {
        self.selected.contains(&staff_id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Selected IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.selected.iter().copied()
    }

    /// Selected staff whose time-off covers the event day.
    pub fn conflicted<'a>(
        &self,
        staff: &'a [StaffMember],
        event_date: CalendarDate,
    ) -> Vec<&'a StaffMember> {
        staff
            .iter()
            .filter(|member| self.is_selected(member.id) && member.conflicts_with(event_date))
            .collect()
    }
}

/// One row of the assignment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffAvailability {
    pub staff_id: u32,
    pub name: String,
    pub assigned_events: u32,
    pub has_time_off: bool,
    /// How the event day looks for this person.
    pub event_day: DayClassification,
    pub selected: bool,
}

/// Builds the assignment list rows for an event day.
pub fn availability(
    staff: &[StaffMember],
    event_date: CalendarDate,
    selection: &AssignmentSelection,
) -> Vec<StaffAvailability> {
    staff
        .iter()
        .map(|member| StaffAvailability {
            staff_id: member.id,
            name: member.name.clone(),
            assigned_events: member.assigned_events,
            has_time_off: member.has_time_off(),
            event_day: member.classify_day(event_date, event_date),
            selected: selection.is_selected(member.id),
        })
        .collect()
}

/// The schedule preview opened from a row of the assignment list.
///
/// Shows the whole month of the event so time-off days around it are visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentPreview {
    pub staff_id: u32,
    pub staff_name: String,
    pub event_date: CalendarDate,
    pub grid: MonthGrid,
}

impl AssignmentPreview {
    pub fn build(member: &StaffMember, event_date: CalendarDate) -> Self {
        Self {
            staff_id: member.id,
            staff_name: member.name.clone(),
            event_date,
            grid: MonthGrid::build(event_date, event_date, &member.time_off),
        }
    }

    /// Modal heading, e.g. "Sarah Wilson's Schedule".
    pub fn title(&self) -> String {
        format!("{}'s Schedule", self.staff_name)
    }
}

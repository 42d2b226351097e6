//! The new-event form: task list editing and validation.
//!
//! Pure data and pure functions; the caller decides what to do with a
//! validated event.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{FormError, FormErrors, TaskError};
use super::types::{Event, EventKind, Priority};
use crate::serde::{deserialize_datetime_local, deserialize_optional_string};

/// A task template offered by the form's task picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedTask {
    pub id: &'static str,
    pub name: &'static str,
}

pub const CHECK_OUT_TASK_ID: &str = "check-out";

pub const PREDEFINED_TASKS: [PredefinedTask; 4] = [
    PredefinedTask {
        id: "check-in-warehouse",
        name: "Check in to warehouse",
    },
    PredefinedTask {
        id: "containerize-bottles",
        name: "Containerize Empty Bottles",
    },
    PredefinedTask {
        id: "stack-crates",
        name: "Stack crates into Truck",
    },
    PredefinedTask {
        id: CHECK_OUT_TASK_ID,
        name: "Check out of warehouse",
    },
];

/// A task attached to an event being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub predefined: bool,
    #[serde(default)]
    pub selected: bool,
}

/// Ordered list of tasks on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, TaskError> {
        self.0
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Adds a predefined task by ID. Each predefined task can appear once.
    pub fn add_predefined(&mut self, id: &str) -> Result<&Task, TaskError> {
        let template = PREDEFINED_TASKS
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| TaskError::UnknownPredefined(id.to_string()))?;
        if self.0.iter().any(|task| task.id == id) {
            return Err(TaskError::AlreadyAdded(id.to_string()));
        }
        self.0.push(Task {
            id: template.id.to_string(),
            name: template.name.to_string(),
            predefined: true,
            selected: false,
        });
        Ok(&self.0[self.0.len() - 1])
    }

    /// Adds a custom task with a freshly generated ID.
    pub fn add_custom(&mut self, name: &str) -> Result<&Task, TaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }
        self.0.push(Task {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            predefined: false,
            selected: false,
        });
        Ok(&self.0[self.0.len() - 1])
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<(), TaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::EmptyName);
        }
        let index = self.position(id)?;
        self.0[index].name = name.to_string();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Task, TaskError> {
        let index = self.position(id)?;
        Ok(self.0.remove(index))
    }

    /// Flips the checkbox of a task and returns its new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, TaskError> {
        let index = self.position(id)?;
        let task = &mut self.0[index];
        task.selected = !task.selected;
        Ok(task.selected)
    }

    /// Display name of a task; the check-out step is worded per event kind.
    pub fn display_name<'a>(task: &'a Task, kind: EventKind) -> &'a str {
        if task.id == CHECK_OUT_TASK_ID {
            checkout_label(kind)
        } else {
            &task.name
        }
    }
}

/// Wording of the check-out step for each event kind.
pub fn checkout_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Warehouse => "Check out of warehouse",
        EventKind::Event => "Check out of events",
        EventKind::Appointment => "Check out of appointment",
    }
}

/// Raw state of the new-event form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEventForm {
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime_local")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_datetime_local")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tasks: TaskList,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidEvent {
    pub kind: EventKind,
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub priority: Priority,
    pub tasks: Vec<Task>,
}

impl NewEventForm {
    /// Creates an empty form of the given kind spanning `start..end`.
    pub fn new(kind: EventKind, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            kind,
            title: String::new(),
            location: None,
            description: None,
            start,
            end,
            priority: Priority::default(),
            tasks: TaskList::new(),
        }
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<ValidEvent, FormErrors> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FormError::TitleRequired);
        }

        let location = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty());
        if self.kind.requires_location() && location.is_none() {
            errors.push(FormError::LocationRequired);
        }

        if self.end < self.start {
            errors.push(FormError::EndBeforeStart);
        }

        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "new event form rejected");
            return Err(FormErrors(errors));
        }

        Ok(ValidEvent {
            kind: self.kind,
            title: self.title.trim().to_string(),
            location: location.map(str::to_string),
            description: self.description.clone(),
            start: self.start,
            end: self.end,
            priority: self.priority,
            tasks: self.tasks.tasks().to_vec(),
        })
    }
}

impl ValidEvent {
    /// Turns the validated form into a pending feed event.
    pub fn into_event(self, id: u32) -> Event {
        Event::new(
            id,
            self.title,
            self.start.into(),
            self.start.time(),
            self.location.unwrap_or_default(),
        )
        .with_priority(self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarDate;
    use chrono::{NaiveDate, NaiveTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap())
    }

    fn filled_form(kind: EventKind) -> NewEventForm {
        let mut form = NewEventForm::new(kind, at(15, 10), at(15, 18));
        form.title = "Winter Wonderland".to_string();
        form.location = Some("Belgium".to_string());
        form
    }

    #[test]
    fn test_valid_form() {
        let valid = filled_form(EventKind::Warehouse).validate().unwrap();
        assert_eq!(valid.title, "Winter Wonderland");
        assert_eq!(valid.location.as_deref(), Some("Belgium"));
        assert_eq!(valid.priority, Priority::Medium);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut form = NewEventForm::new(EventKind::Appointment, at(15, 18), at(15, 10));
        form.title = "   ".to_string();
        form.location = Some("  ".to_string());

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("title"), Some(&FormError::TitleRequired));
        assert_eq!(errors.get("location"), Some(&FormError::LocationRequired));
        assert_eq!(errors.get("date"), Some(&FormError::EndBeforeStart));
    }

    #[test]
    fn test_location_optional_for_events() {
        let mut form = filled_form(EventKind::Event);
        form.location = None;
        assert!(form.validate().is_ok());

        form.kind = EventKind::Warehouse;
        assert_eq!(
            form.validate().unwrap_err().0,
            vec![FormError::LocationRequired]
        );
    }

    #[test]
    fn test_end_equal_to_start_is_allowed() {
        let mut form = filled_form(EventKind::Warehouse);
        form.end = form.start;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_add_predefined_rejects_duplicates_and_unknown() {
        let mut tasks = TaskList::new();
        assert_eq!(
            tasks.add_predefined("check-in-warehouse").unwrap().name,
            "Check in to warehouse"
        );
        assert_eq!(
            tasks.add_predefined("check-in-warehouse"),
            Err(TaskError::AlreadyAdded("check-in-warehouse".to_string()))
        );
        assert_eq!(
            tasks.add_predefined("check-in-spaceship"),
            Err(TaskError::UnknownPredefined("check-in-spaceship".to_string()))
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_custom_tasks_get_unique_ids() {
        let mut tasks = TaskList::new();
        let first = tasks.add_custom("Load van").unwrap().id.clone();
        let second = tasks.add_custom("Load van").unwrap().id.clone();
        assert_ne!(first, second);
        assert!(!tasks.tasks()[0].predefined);
        assert_eq!(tasks.add_custom("  "), Err(TaskError::EmptyName));
    }

    #[test]
    fn test_rename_toggle_remove() {
        let mut tasks = TaskList::new();
        tasks.add_predefined("stack-crates").unwrap();

        tasks.rename("stack-crates", "Stack crates into van").unwrap();
        assert_eq!(tasks.tasks()[0].name, "Stack crates into van");

        assert_eq!(tasks.toggle("stack-crates"), Ok(true));
        assert_eq!(tasks.toggle("stack-crates"), Ok(false));

        let removed = tasks.remove("stack-crates").unwrap();
        assert_eq!(removed.id, "stack-crates");
        assert!(tasks.is_empty());
        assert_eq!(
            tasks.remove("stack-crates"),
            Err(TaskError::NotFound("stack-crates".to_string()))
        );
    }

    #[test]
    fn test_checkout_wording_follows_kind() {
        let mut tasks = TaskList::new();
        tasks.add_predefined(CHECK_OUT_TASK_ID).unwrap();
        let task = &tasks.tasks()[0];

        assert_eq!(
            TaskList::display_name(task, EventKind::Event),
            "Check out of events"
        );
        assert_eq!(
            TaskList::display_name(task, EventKind::Appointment),
            "Check out of appointment"
        );
    }

    #[test]
    fn test_deserialize_form_from_json() {
        let json = r#"{
            "kind": "appointment",
            "title": "Dentist",
            "location": "",
            "start": "2025-03-15 10:00",
            "end": "2025-03-15T11:00"
        }"#;
        let form: NewEventForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.location, None);
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(
            form.validate().unwrap_err().0,
            vec![FormError::LocationRequired]
        );
    }

    #[test]
    fn test_into_event() {
        let event = filled_form(EventKind::Warehouse)
            .validate()
            .unwrap()
            .into_event(7);
        assert_eq!(event.id, 7);
        assert_eq!(event.date, CalendarDate::from_ymd(2025, 3, 15).unwrap());
        assert_eq!(event.time_label(), "10:00 AM");
        assert_eq!(event.priority, Some(Priority::Medium));
    }
}

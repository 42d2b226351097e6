use thiserror::Error;

/// A single invalid field on the new-event form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Event title is required")]
    TitleRequired,
    #[error("Location is required")]
    LocationRequired,
    #[error("End time must be after start time")]
    EndBeforeStart,
}

impl FormError {
    /// Name of the form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FormError::TitleRequired => "title",
            FormError::LocationRequired => "location",
            FormError::EndBeforeStart => "date",
        }
    }
}

/// Every field error found in one validation pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", describe(.0))]
pub struct FormErrors(pub Vec<FormError>);

impl FormErrors {
    /// Returns the error for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FormError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn describe(errors: &[FormError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field(), e))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from editing the task list of a new event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Unknown predefined task: {0}")]
    UnknownPredefined(String),
    #[error("Task already added: {0}")]
    AlreadyAdded(String),
    #[error("Task name cannot be empty")]
    EmptyName,
    #[error("Task not found: {0}")]
    NotFound(String),
}

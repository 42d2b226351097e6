mod error;
mod form;
mod operations;
mod types;

pub use error::{FormError, FormErrors, TaskError};
pub use form::{
    checkout_label, NewEventForm, PredefinedTask, Task, TaskList, ValidEvent, CHECK_OUT_TASK_ID,
    PREDEFINED_TASKS,
};
pub use operations::{count_by_status, filter_by_status, find_event, search_events, sort_by_date};
pub use types::{Event, EventKind, EventStatus, Priority};

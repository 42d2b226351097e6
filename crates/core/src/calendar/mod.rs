mod classify;
mod date;
mod error;
mod grid;
mod week;

pub use classify::{classify, DayClassification};
pub use date::{month_days, CalendarDate, TimeOffSet};
pub use error::DateError;
pub use grid::{DayCell, MonthGrid, WEEKDAY_HEADERS};
pub use week::{week_dates, week_number, weeks_in_year};

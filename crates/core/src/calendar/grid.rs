use serde::{Deserialize, Serialize};

use super::classify::{classify, DayClassification};
use super::date::{CalendarDate, TimeOffSet};

/// Column headers for the Sunday-first grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A classified day inside a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub classification: DayClassification,
}

/// A month laid out in Sunday-first weeks.
///
/// Cells before the first and after the last day of the month are `None`,
/// so every week has exactly seven cells and column `n` is always
/// `WEEKDAY_HEADERS[n]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Display title, e.g. "March 2025".
    pub title: String,
    pub weeks: Vec<Vec<Option<DayCell>>>,
}

impl MonthGrid {
    /// Builds the grid for the month containing `anchor`, classifying every
    /// day against `event_date` and `time_off`.
    pub fn build(anchor: CalendarDate, event_date: CalendarDate, time_off: &TimeOffSet) -> Self {
        let first = anchor.first_of_month();
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<Option<DayCell>> = vec![None; leading];
        cells.extend(anchor.month_days().into_iter().map(|date| {
            Some(DayCell {
                date,
                classification: classify(date, event_date, time_off),
            })
        }));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Self {
            year: first.year(),
            month: first.month(),
            title: first.naive().format("%B %Y").to_string(),
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
        }
    }

    /// Iterates over the real days of the month, skipping padding cells.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    /// Returns the classification of `date`, if it lies in this month.
    pub fn classification_of(&self, date: CalendarDate) -> Option<DayClassification> {
        self.days()
            .find(|cell| cell.date == date)
            .map(|cell| cell.classification)
    }

    /// Counts the days with the given classification.
    pub fn count(&self, classification: DayClassification) -> usize {
        self.days()
            .filter(|cell| cell.classification == classification)
            .count()
    }
}

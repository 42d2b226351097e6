//! Working-hours summary: per-day breakdowns and per-person totals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{week_number, CalendarDate};

/// Errors from working-hours lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("No working hours recorded for staff member {0}")]
    UnknownStaff(u32),
}

/// Hours worked on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyHours {
    pub date: CalendarDate,
    pub normal: f32,
    pub overtime: f32,
    pub standby: f32,
}

impl DailyHours {
    pub fn new(date: CalendarDate, normal: f32, overtime: f32, standby: f32) -> Self {
        Self {
            date,
            normal,
            overtime,
            standby,
        }
    }
}

/// Totals shown on a summary card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursTotals {
    /// Normal plus overtime hours. Standby is tracked separately.
    pub total: f32,
    pub overtime: f32,
    pub standby: f32,
}

/// Sums a set of daily records.
pub fn summarize(days: &[DailyHours]) -> HoursTotals {
    days.iter().fold(HoursTotals::default(), |acc, day| HoursTotals {
        total: acc.total + day.normal + day.overtime,
        overtime: acc.overtime + day.overtime,
        standby: acc.standby + day.standby,
    })
}

/// Days that fall in the given Sunday-first week of `year`.
pub fn filter_by_week(days: &[DailyHours], year: i32, week: u32) -> Vec<DailyHours> {
    days.iter()
        .filter(|day| day.date.year() == year && week_number(day.date) == week)
        .copied()
        .collect()
}

/// Days that fall in the given month.
pub fn filter_by_month(days: &[DailyHours], year: i32, month: u32) -> Vec<DailyHours> {
    days.iter()
        .filter(|day| day.date.year() == year && day.date.month() == month)
        .copied()
        .collect()
}

/// Period selected in the summary screen pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "period", rename_all = "snake_case")]
pub enum SummaryPeriod {
    All,
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl SummaryPeriod {
    /// Restricts `days` to this period.
    pub fn apply(&self, days: &[DailyHours]) -> Vec<DailyHours> {
        match *self {
            SummaryPeriod::All => days.to_vec(),
            SummaryPeriod::Week { year, week } => filter_by_week(days, year, week),
            SummaryPeriod::Month { year, month } => filter_by_month(days, year, month),
        }
    }

    pub fn label(&self) -> String {
        match *self {
            SummaryPeriod::All => "All recorded days".to_string(),
            SummaryPeriod::Week { year, week } => format!("Week {week}, {year}"),
            SummaryPeriod::Month { year, month } => CalendarDate::from_ymd(year, month, 1)
                .map(|d| d.naive().format("%B %Y").to_string())
                .unwrap_or_else(|_| format!("{year}-{month:02}")),
        }
    }
}

/// Recorded hours for one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffHours {
    pub staff_id: u32,
    pub name: String,
    pub days: Vec<DailyHours>,
}

/// One card on the summary screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub staff_id: u32,
    pub name: String,
    pub totals: HoursTotals,
}

/// Builds the summary cards for a period, one per staff member.
pub fn summary_rows(hours: &[StaffHours], period: SummaryPeriod) -> Vec<SummaryRow> {
    hours
        .iter()
        .map(|staff| SummaryRow {
            staff_id: staff.staff_id,
            name: staff.name.clone(),
            totals: summarize(&period.apply(&staff.days)),
        })
        .collect()
}

/// Looks up the daily breakdown for one staff member.
pub fn find_hours(hours: &[StaffHours], staff_id: u32) -> Result<&StaffHours, HoursError> {
    hours
        .iter()
        .find(|staff| staff.staff_id == staff_id)
        .ok_or(HoursError::UnknownStaff(staff_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_day(day: u32, normal: f32, overtime: f32, standby: f32) -> DailyHours {
        DailyHours::new(
            CalendarDate::from_ymd(2024, 3, day).unwrap(),
            normal,
            overtime,
            standby,
        )
    }

    fn sarah_days() -> Vec<DailyHours> {
        vec![
            make_day(15, 8.0, 2.0, 1.0),
            make_day(16, 8.0, 1.0, 0.0),
            make_day(17, 8.0, 2.0, 1.0),
            make_day(18, 8.0, 0.0, 0.0),
            make_day(19, 8.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_summarize() {
        let totals = summarize(&sarah_days());
        assert_eq!(totals.total, 45.0);
        assert_eq!(totals.overtime, 5.0);
        assert_eq!(totals.standby, 2.0);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), HoursTotals::default());
    }

    #[test]
    fn test_filter_by_week_splits_on_sunday() {
        // 2024-03-17 is a Sunday, which starts week 12.
        let days = sarah_days();
        let week11 = filter_by_week(&days, 2024, 11);
        let week12 = filter_by_week(&days, 2024, 12);
        assert_eq!(week11.len(), 2);
        assert_eq!(week12.len(), 3);
        assert!(filter_by_week(&days, 2025, 11).is_empty());
    }

    #[test]
    fn test_filter_by_month() {
        let days = sarah_days();
        assert_eq!(filter_by_month(&days, 2024, 3).len(), 5);
        assert!(filter_by_month(&days, 2024, 4).is_empty());
    }

    #[test]
    fn test_summary_rows_per_period() {
        let hours = vec![StaffHours {
            staff_id: 1,
            name: "Sarah Wilson".to_string(),
            days: sarah_days(),
        }];

        let all = summary_rows(&hours, SummaryPeriod::All);
        assert_eq!(all[0].totals.total, 45.0);

        let week = summary_rows(
            &hours,
            SummaryPeriod::Week {
                year: 2024,
                week: 11,
            },
        );
        assert_eq!(week[0].totals.total, 19.0);
        assert_eq!(week[0].totals.standby, 1.0);
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(
            SummaryPeriod::Week {
                year: 2024,
                week: 11
            }
            .label(),
            "Week 11, 2024"
        );
        assert_eq!(
            SummaryPeriod::Month {
                year: 2024,
                month: 3
            }
            .label(),
            "March 2024"
        );
    }

    #[test]
    fn test_find_hours() {
        let hours = vec![StaffHours {
            staff_id: 1,
            name: "Sarah Wilson".to_string(),
            days: sarah_days(),
        }];
        assert_eq!(find_hours(&hours, 1).unwrap().days.len(), 5);
        assert_eq!(find_hours(&hours, 5), Err(HoursError::UnknownStaff(5)));
        assert_eq!(
            HoursError::UnknownStaff(5).to_string(),
            "No working hours recorded for staff member 5"
        );
    }
}

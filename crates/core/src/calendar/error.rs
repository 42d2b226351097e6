use thiserror::Error;

/// Errors raised while constructing calendar dates or date ranges.
///
/// The classifier itself never fails; every invalid input is rejected here,
/// at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("Invalid week {week} for year {year}")]
    InvalidWeek { year: i32, week: u32 },
    #[error("Cannot parse date '{0}' (expected YYYY-MM-DD)")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        assert_eq!(
            DateError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            }
            .to_string(),
            "Invalid date: 2025-02-30"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (expected 1-12)"
        );
        assert_eq!(
            DateError::Parse("tomorrow".to_string()).to_string(),
            "Cannot parse date 'tomorrow' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_week_error_display() {
        assert_eq!(
            DateError::InvalidWeek {
                year: 2025,
                week: 54
            }
            .to_string(),
            "Invalid week 54 for year 2025"
        );
    }
}

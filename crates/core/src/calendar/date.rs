use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use super::error::DateError;

/// A plain calendar day.
///
/// Two values are equal when they name the same year, month and day. Any
/// time-of-day or timezone information is dropped when a `CalendarDate` is
/// built from a date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its components, rejecting days that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Input that is not in that shape is a `Parse` error; a well-formed
    /// string naming a day that does not exist is `InvalidDate`.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let malformed = || DateError::Parse(s.to_string());
        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if !(is_number(year) && is_number(month) && is_number(day)) {
            return Err(malformed());
        }

        Self::from_ymd(
            year.parse().map_err(|_| malformed())?,
            month.parse().map_err(|_| malformed())?,
            day.parse().map_err(|_| malformed())?,
        )
    }

    /// Keeps the calendar day of `datetime` as seen in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Zero-based day of the year (Jan 1 is 0).
    pub fn ordinal0(&self) -> u32 {
        self.0.ordinal0()
    }

    /// Returns the underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` days away (negative goes backwards).
    ///
    /// Saturates at chrono's supported range instead of panicking.
    pub fn add_days(&self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self(self.0 - Duration::days(i64::from(self.0.day0())))
    }

    /// Returns every day of this date's month, in order.
    pub fn month_days(&self) -> Vec<CalendarDate> {
        let month = self.month();
        self.first_of_month()
            .0
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(Self)
            .collect()
    }

    /// Formats as "Sat, Mar 15".
    pub fn short_label(&self) -> String {
        self.0.format("%a, %b %-d").to_string()
    }

    /// Formats as "Mar 15, 2025".
    pub fn long_label(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Days on which a staff member is unavailable.
///
/// Set semantics: inserting a day twice has no effect and iteration order is
/// always chronological regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOffSet(BTreeSet<CalendarDate>);

impl TimeOffSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `YYYY-MM-DD` strings.
    pub fn from_strs<S: AsRef<str>>(dates: &[S]) -> Result<Self, DateError> {
        dates
            .iter()
            .map(|s| CalendarDate::parse(s.as_ref()))
            .collect()
    }

    /// Adds a day. Returns false if it was already present.
    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.0.iter()
    }
}

impl FromIterator<CalendarDate> for TimeOffSet {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<CalendarDate> for TimeOffSet {
    fn extend<I: IntoIterator<Item = CalendarDate>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TimeOffSet {
    type Item = &'a CalendarDate;
    type IntoIter = std::collections::btree_set::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Returns every day of the given month.
pub fn month_days(year: i32, month: u32) -> Result<Vec<CalendarDate>, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    Ok(CalendarDate::from_ymd(year, month, 1)?.month_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime, Utc};

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_from_ymd_rejects_invalid_days() {
        assert_eq!(
            CalendarDate::from_ymd(2025, 2, 29),
            Err(DateError::InvalidDate {
                year: 2025,
                month: 2,
                day: 29
            })
        );
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(2025, 13, 1).is_err());
        assert!(CalendarDate::from_ymd(2025, 4, 31).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let date = CalendarDate::parse("2025-03-15").unwrap();
        assert_eq!(date, make_date(2025, 3, 15));
        assert_eq!(date.to_string(), "2025-03-15");
        assert_eq!(" 2025-03-15 ".parse::<CalendarDate>().unwrap(), date);
        assert_eq!(
            CalendarDate::parse("15/03/2025"),
            Err(DateError::Parse("15/03/2025".to_string()))
        );
        assert_eq!(
            CalendarDate::parse("2025-03"),
            Err(DateError::Parse("2025-03".to_string()))
        );
        assert_eq!(
            CalendarDate::parse("2025-03-1x"),
            Err(DateError::Parse("2025-03-1x".to_string()))
        );
    }

    #[test]
    fn test_parse_reports_nonexistent_days() {
        assert_eq!(
            CalendarDate::parse("2025-02-30"),
            Err(DateError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            })
        );
        assert_eq!(
            "2025-13-01".parse::<CalendarDate>(),
            Err(DateError::InvalidDate {
                year: 2025,
                month: 13,
                day: 1
            })
        );
        assert_eq!(
            TimeOffSet::from_strs(&["2025-04-30", "2025-04-31"]),
            Err(DateError::InvalidDate {
                year: 2025,
                month: 4,
                day: 31
            })
        );
    }

    #[test]
    fn test_from_datetime_ignores_time_of_day() {
        let morning = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2025, 3, 15, 23, 59, 59).unwrap();
        assert_eq!(
            CalendarDate::from_datetime(&morning),
            CalendarDate::from_datetime(&night)
        );
        assert_eq!(CalendarDate::from_datetime(&night), make_date(2025, 3, 15));
    }

    #[test]
    fn test_from_datetime_uses_local_day_of_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let tokyo = tz.with_ymd_and_hms(2025, 3, 16, 1, 0, 0).unwrap();
        assert_eq!(CalendarDate::from_datetime(&tokyo), make_date(2025, 3, 16));
    }

    #[test]
    fn test_from_naive_datetime() {
        let dt = make_date(2025, 3, 15)
            .naive()
            .and_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(CalendarDate::from(dt), make_date(2025, 3, 15));
    }

    #[test]
    fn test_month_days() {
        assert_eq!(month_days(2025, 2).unwrap().len(), 28);
        assert_eq!(month_days(2024, 2).unwrap().len(), 29);
        let march = month_days(2025, 3).unwrap();
        assert_eq!(march.len(), 31);
        assert_eq!(march[0], make_date(2025, 3, 1));
        assert_eq!(march[30], make_date(2025, 3, 31));
        assert_eq!(month_days(2025, 0), Err(DateError::InvalidMonth(0)));
    }

    #[test]
    fn test_first_of_month_and_add_days() {
        let date = make_date(2025, 3, 15);
        assert_eq!(date.first_of_month(), make_date(2025, 3, 1));
        assert_eq!(date.add_days(17), make_date(2025, 4, 1));
        assert_eq!(date.add_days(-15), make_date(2025, 2, 28));
    }

    #[test]
    fn test_labels() {
        let date = make_date(2025, 3, 15);
        assert_eq!(date.short_label(), "Sat, Mar 15");
        assert_eq!(date.long_label(), "Mar 15, 2025");
    }

    #[test]
    fn test_time_off_set_collapses_duplicates() {
        let set = TimeOffSet::from_strs(&["2025-03-15", "2025-03-16", "2025-03-15"]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(make_date(2025, 3, 15)));
        assert!(!set.contains(make_date(2025, 3, 17)));
    }

    #[test]
    fn test_time_off_set_iterates_chronologically() {
        let set: TimeOffSet = [make_date(2025, 3, 19), make_date(2025, 3, 18)]
            .into_iter()
            .collect();
        let days: Vec<_> = set.iter().copied().collect();
        assert_eq!(days, vec![make_date(2025, 3, 18), make_date(2025, 3, 19)]);
    }

    #[test]
    fn test_time_off_set_rejects_bad_strings() {
        assert_eq!(
            TimeOffSet::from_strs(&["2025-03-15", "nope"]),
            Err(DateError::Parse("nope".to_string()))
        );
    }

    #[test]
    fn test_serde_as_plain_strings() {
        let set = TimeOffSet::from_strs(&["2025-03-16", "2025-03-15"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["2025-03-15","2025-03-16"]"#);

        let back: TimeOffSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}

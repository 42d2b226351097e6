use super::date::CalendarDate;
use super::error::DateError;

/// Weekday of January 1st of `date`'s year, counted from Sunday (0..=6).
fn jan1_weekday_from_sunday(date: CalendarDate) -> u32 {
    let weekday = date.weekday().num_days_from_sunday();
    (weekday + 7 - date.ordinal0() % 7) % 7
}

/// Sunday-first week of the year.
///
/// Week 1 is the (possibly partial) week containing January 1st; every
/// following week starts on a Sunday. Years therefore have 53 weeks, or 54
/// when a leap year starts on a Saturday.
pub fn week_number(date: CalendarDate) -> u32 {
    (date.ordinal0() + jan1_weekday_from_sunday(date) + 1).div_ceil(7)
}

/// Number of Sunday-first weeks that touch `year`.
pub fn weeks_in_year(year: i32) -> Result<u32, DateError> {
    Ok(week_number(CalendarDate::from_ymd(year, 12, 31)?))
}

/// Days of `week` that fall inside `year`, Sunday first.
///
/// The first and last weeks of a year are usually partial.
pub fn week_dates(year: i32, week: u32) -> Result<Vec<CalendarDate>, DateError> {
    if week == 0 || week > weeks_in_year(year)? {
        return Err(DateError::InvalidWeek { year, week });
    }

    let jan1 = CalendarDate::from_ymd(year, 1, 1)?;
    let offset = i64::from(week - 1) * 7 - i64::from(jan1_weekday_from_sunday(jan1));
    let sunday = jan1.add_days(offset);

    Ok((0..7)
        .map(|i| sunday.add_days(i))
        .filter(|d| d.year() == year)
        .collect())
}

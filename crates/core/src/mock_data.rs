//! Built-in demo data.
//!
//! Pure functions returning the fixed events, staff, working hours and
//! notifications the app ships with. They have no side effects and are used
//! by the CLI as its data source and by tests as fixtures.

use chrono::NaiveTime;

use crate::calendar::{CalendarDate, TimeOffSet};
use crate::events::{Event, Priority};
use crate::hours::{DailyHours, StaffHours};
use crate::notifications::{Notification, NotificationKind};
use crate::staff::StaffMember;

/// Event used by the assignment flow when none is chosen.
pub const ASSIGN_EVENT_ID: u32 = 1;

const AVATAR_SARAH: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330";
const AVATAR_MICHAEL: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d";
const AVATAR_EMMA: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80";
const AVATAR_DAVID: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e";
const AVATAR_GUEST_1: &str = "https://images.unsplash.com/photo-1527980965255-d3b416303d12";
const AVATAR_GUEST_2: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e";

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("mock dates are valid")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("mock times are valid")
}

fn time_off(dates: &[&str]) -> TimeOffSet {
    TimeOffSet::from_strs(dates).expect("mock time-off dates are valid")
}

/// Events on the home feed.
pub fn mock_events() -> Vec<Event> {
    vec![
        Event::new(
            1,
            "Winter Wonderland",
            date(2025, 3, 15),
            time(10, 0),
            "Belgium",
        )
        .with_attendees(50)
        .with_priority(Priority::High)
        .with_avatars([AVATAR_SARAH, AVATAR_GUEST_1]),
        Event::new(2, "Tomorrowland", date(2024, 3, 18), time(14, 30), "Belgium")
            .with_attendees(2200)
            .with_priority(Priority::Medium)
            .with_avatars([AVATAR_MICHAEL, AVATAR_EMMA]),
        Event::new(
            3,
            "Football Tournament",
            date(2025, 3, 20),
            time(9, 0),
            "Training Room A",
        )
        .with_attendees(25)
        .with_priority(Priority::Low)
        .with_avatars([AVATAR_DAVID, AVATAR_GUEST_2]),
    ]
}

/// Staff available for assignment.
pub fn mock_staff() -> Vec<StaffMember> {
    vec![
        StaffMember::new(1, "Sarah Wilson", AVATAR_SARAH)
            .with_assigned_events(3)
            .with_time_off(time_off(&["2025-03-15", "2025-03-16"])),
        StaffMember::new(2, "Michael Chen", AVATAR_MICHAEL).with_assigned_events(1),
        StaffMember::new(3, "Emma Thompson", AVATAR_EMMA).with_assigned_events(4),
        StaffMember::new(4, "David Rodriguez", AVATAR_DAVID)
            .with_assigned_events(2)
            .with_time_off(time_off(&["2025-03-18", "2025-03-19"])),
    ]
}

/// Daily hours for five consecutive days starting 2024-03-15.
/// Each row is (normal, overtime, standby).
fn week_of(rows: [(f32, f32, f32); 5]) -> Vec<DailyHours> {
    let start = date(2024, 3, 15);
    rows.iter()
        .zip(0i64..)
        .map(|(&(normal, overtime, standby), offset)| {
            DailyHours::new(start.add_days(offset), normal, overtime, standby)
        })
        .collect()
}

/// Recorded working hours per staff member.
pub fn mock_staff_hours() -> Vec<StaffHours> {
    vec![
        StaffHours {
            staff_id: 1,
            name: "Sarah Wilson".to_string(),
            days: week_of([
                (8.0, 2.0, 1.0),
                (8.0, 1.0, 0.0),
                (8.0, 2.0, 1.0),
                (8.0, 0.0, 0.0),
                (8.0, 0.0, 0.0),
            ]),
        },
        StaffHours {
            staff_id: 2,
            name: "Michael Chen".to_string(),
            days: week_of([
                (8.0, 0.0, 0.0),
                (8.0, 0.0, 0.0),
                (8.0, 0.0, 0.0),
                (8.0, 0.0, 1.0),
                (6.0, 0.0, 0.0),
            ]),
        },
        StaffHours {
            staff_id: 3,
            name: "Emma Thompson".to_string(),
            days: week_of([
                (8.0, 1.0, 1.0),
                (8.0, 1.0, 1.0),
                (8.0, 0.0, 1.0),
                (8.0, 0.0, 0.0),
                (8.0, 0.0, 0.0),
            ]),
        },
        StaffHours {
            staff_id: 4,
            name: "David Rodriguez".to_string(),
            days: week_of([(8.0, 0.0, 0.0); 5]),
        },
    ]
}

/// Pending approval requests.
pub fn mock_notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, NotificationKind::CheckIn, "John Doe", "2 hours ago"),
        Notification::new(2, NotificationKind::Overtime, "Jane Smith", "1 hour ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DayClassification;
    use crate::events::find_event;
    use crate::hours::{summarize, summary_rows, SummaryPeriod};

    #[test]
    fn test_assign_event_exists() {
        let events = mock_events();
        let event = find_event(&events, ASSIGN_EVENT_ID).unwrap();
        assert_eq!(event.title, "Winter Wonderland");
        assert_eq!(event.when_label(), "Mar 15, 2025 • 10:00 AM");
    }

    #[test]
    fn test_staff_time_off_against_assign_event() {
        let events = mock_events();
        let event_date = find_event(&events, ASSIGN_EVENT_ID).unwrap().date;
        let staff = mock_staff();

        let conflicted: Vec<_> = staff
            .iter()
            .filter(|s| s.conflicts_with(event_date))
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(conflicted, vec!["Sarah Wilson"]);
        assert_eq!(
            staff[3].classify_day(date(2025, 3, 18), event_date),
            DayClassification::TimeOffOnly
        );
    }

    #[test]
    fn test_hours_match_summary_cards() {
        let rows = summary_rows(&mock_staff_hours(), SummaryPeriod::All);
        let totals: Vec<(f32, f32, f32)> = rows
            .iter()
            .map(|r| (r.totals.total, r.totals.overtime, r.totals.standby))
            .collect();
        assert_eq!(
            totals,
            vec![
                (45.0, 5.0, 2.0),
                (38.0, 0.0, 1.0),
                (42.0, 2.0, 3.0),
                (40.0, 0.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_hours_cover_five_days() {
        let hours = mock_staff_hours();
        assert!(hours.iter().all(|h| h.days.len() == 5));
        assert_eq!(hours[0].days[4].date, date(2024, 3, 19));
        assert_eq!(summarize(&hours[3].days).total, 40.0);
    }

    #[test]
    fn test_notifications_start_pending() {
        assert_eq!(mock_notifications().len(), 2);
    }
}

use super::types::{Event, EventStatus};

/// Case-insensitive search over title and location.
/// A blank query matches every event.
pub fn search_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.trim().to_lowercase();
    events
        .iter()
        .filter(|event| {
            needle.is_empty()
                || event.title.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Keeps the events in the given workflow status.
pub fn filter_by_status<'a>(events: &[&'a Event], status: EventStatus) -> Vec<&'a Event> {
    events
        .iter()
        .copied()
        .filter(|event| event.status == status)
        .collect()
}

/// Counts events per status, for the feed's tab labels.
pub fn count_by_status(events: &[Event], status: EventStatus) -> usize {
    events.iter().filter(|event| event.status == status).count()
}

/// Sorts events chronologically by date, then start time.
pub fn sort_by_date(events: &mut [&Event]) {
    events.sort_by_key(|event| (event.date, event.time));
}

/// Finds an event by ID.
pub fn find_event(events: &[Event], id: u32) -> Option<&Event> {
    events.iter().find(|event| event.id == id)
}

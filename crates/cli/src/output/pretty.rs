//! Pretty output formatting.

use crewplan_core::calendar::{CalendarDate, DayClassification, MonthGrid, WEEKDAY_HEADERS};
use crewplan_core::events::{count_by_status, Event, EventStatus, TaskList, ValidEvent};
use crewplan_core::hours::{summarize, StaffHours, SummaryPeriod, SummaryRow};
use crewplan_core::notifications::{Notification, NotificationStatus};
use crewplan_core::settings::Settings;
use crewplan_core::staff::{AssignmentPreview, StaffAvailability, StaffMember};
use crewplan_core::theme::{DayStyle, Palette};

use super::color::{bg, bold, fg};

fn header(title: &str) -> String {
    format!("{}\n{}", title, "-".repeat(40))
}

/// Format an event for display.
pub fn format_event(event: &Event, palette: &Palette) -> String {
    let mut output = bold(&event.title);
    if let Some(priority) = event.priority {
        let (background, _) = palette.priority_colors(priority);
        let tag = format!(" {} ", priority.label());
        output.push_str(&format!(" {}", bg(&tag, background)));
    }
    output.push_str(&format!(
        "\n  ID: {}\n  When: {}\n  Location: {}\n  Attendees: {}\n  Status: {}",
        event.id,
        event.when_label(),
        event.location,
        event.attendees,
        event.status.label()
    ));
    output
}

/// Format the home feed.
pub fn format_events(events: &[&Event], all: &[Event], palette: &Palette) -> String {
    let tabs = format!(
        "Pending ({}) | Assigned ({})",
        count_by_status(all, EventStatus::Pending),
        count_by_status(all, EventStatus::Assigned)
    );
    if events.is_empty() {
        return format!("{tabs}\nNo events found.");
    }
    let mut output = format!("{tabs}\n{}", header(&format!("EVENTS ({})", events.len())));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event, palette)));
        output.push('\n');
    }
    output
}

/// Format a validated new-event form.
pub fn format_valid_event(valid: &ValidEvent) -> String {
    let mut output = format!(
        "{} [{}]\n  Start: {}\n  End: {}\n  Priority: {}",
        valid.title,
        valid.kind.label(),
        valid.start.format("%b %-d, %Y %-I:%M %p"),
        valid.end.format("%b %-d, %Y %-I:%M %p"),
        valid.priority.label()
    );
    if let Some(location) = &valid.location {
        output.push_str(&format!("\n  Location: {}", location));
    }
    if let Some(description) = &valid.description {
        output.push_str(&format!("\n  Description: {}", description));
    }
    if !valid.tasks.is_empty() {
        output.push_str("\n  Tasks:");
        for task in &valid.tasks {
            let mark = if task.selected { "x" } else { " " };
            output.push_str(&format!(
                "\n    [{}] {}",
                mark,
                TaskList::display_name(task, valid.kind)
            ));
        }
    }
    output
}

/// Format the assignment list for an event.
pub fn format_assign_list(
    event: &Event,
    rows: &[StaffAvailability],
    conflicted: &[&StaffMember],
    palette: &Palette,
) -> String {
    let mut output = header(&format!(
        "ASSIGN STAFF: {} ({})",
        event.title,
        event.date.long_label()
    ));
    for row in rows {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        output.push_str(&format!(
            "\n{} {:<3} {:<20} {} assigned",
            mark, row.staff_id, row.name, row.assigned_events
        ));
        if row.event_day.is_conflict() {
            output.push_str(&format!("  {}", fg("time off on event day", palette.danger)));
        } else if row.has_time_off {
            output.push_str(&format!("  {}", fg("has time off", palette.warning)));
        }
    }
    let selected = rows.iter().filter(|r| r.selected).count();
    output.push_str(&format!("\n\nSelected: {}", selected));
    if !conflicted.is_empty() {
        let names: Vec<&str> = conflicted.iter().map(|m| m.name.as_str()).collect();
        output.push_str(&format!(
            "\n{}",
            fg(
                &format!("Warning: {} on time off that day", names.join(", ")),
                palette.danger
            )
        ));
    }
    output
}

fn format_grid(
    grid: &MonthGrid,
    palette: &Palette,
    style_of: fn(&Palette, DayClassification) -> DayStyle,
) -> String {
    let mut output = bold(&grid.title);
    output.push('\n');
    output.push_str(
        &WEEKDAY_HEADERS
            .iter()
            .map(|h| format!("{:>4}", h))
            .collect::<String>(),
    );
    for week in &grid.weeks {
        output.push('\n');
        for cell in week {
            let Some(cell) = cell else {
                output.push_str("    ");
                continue;
            };
            let style = style_of(palette, cell.classification);
            let marker = if style.badges.contains(&"!") { "!" } else { " " };
            let text = format!("{:>3}{}", cell.date.day(), marker);
            output.push_str(&match style.background {
                Some(color) => bg(&text, color),
                None => text,
            });
        }
    }
    output
}

fn format_legend(
    palette: &Palette,
    style_of: fn(&Palette, DayClassification) -> DayStyle,
) -> String {
    DayClassification::ALL
        .iter()
        .map(|c| format!("{} {}", fg("●", palette.legend_color(*c, style_of)), c.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a month grid with its legend.
pub fn format_month_grid(grid: &MonthGrid, palette: &Palette) -> String {
    format!(
        "{}\n\n{}",
        format_grid(grid, palette, Palette::day_style),
        format_legend(palette, Palette::day_style)
    )
}

/// Format the schedule preview of a staff member.
pub fn format_preview(preview: &AssignmentPreview, palette: &Palette) -> String {
    let mut output = header(&preview.title());
    output.push('\n');
    output.push_str(&format_grid(&preview.grid, palette, Palette::preview_style));
    output.push_str(&format!(
        "\n\n{}",
        format_legend(palette, Palette::preview_style)
    ));

    let marked: Vec<_> = preview
        .grid
        .days()
        .filter(|cell| cell.classification != DayClassification::Plain)
        .collect();
    if !marked.is_empty() {
        output.push('\n');
        for cell in marked {
            let style = palette.preview_style(cell.classification);
            output.push_str(&format!(
                "\n  {}  {}",
                cell.date.short_label(),
                style.badges.join(", ")
            ));
        }
    }
    output
}

/// Format a week lookup.
pub fn format_week(
    date: CalendarDate,
    week: u32,
    weeks_in_year: u32,
    dates: &[CalendarDate],
) -> String {
    let mut output = format!(
        "{}: week {} of {} ({})",
        date.long_label(),
        week,
        weeks_in_year,
        date.year()
    );
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        output.push_str(&format!(
            "\n  {} - {}",
            first.short_label(),
            last.short_label()
        ));
    }
    output
}

fn format_totals_line(total: f32, overtime: f32, standby: f32) -> String {
    format!(
        "Total: {:.1}h  Overtime: {:.1}h  Standby: {:.1}h",
        total, overtime, standby
    )
}

/// Format the summary cards.
pub fn format_summary(period: &SummaryPeriod, rows: &[SummaryRow]) -> String {
    if rows.is_empty() {
        return "No working hours recorded.".to_string();
    }
    let mut output = header(&format!("SUMMARY: {}", period.label()));
    for row in rows {
        output.push_str(&format!(
            "\n{} (ID {})\n  {}",
            row.name,
            row.staff_id,
            format_totals_line(row.totals.total, row.totals.overtime, row.totals.standby)
        ));
    }
    output
}

/// Format the daily breakdown for one staff member.
pub fn format_staff_hours(hours: &StaffHours) -> String {
    let mut output = header(&hours.name);
    for day in &hours.days {
        output.push_str(&format!(
            "\n{:<12} Normal: {:.1}h  Overtime: {:.1}h  Standby: {:.1}h",
            day.date.short_label(),
            day.normal,
            day.overtime,
            day.standby
        ));
    }
    let totals = summarize(&hours.days);
    output.push_str(&format!(
        "\n\n{}",
        format_totals_line(totals.total, totals.overtime, totals.standby)
    ));
    output
}

/// Format a notification for display.
pub fn format_notification(notification: &Notification, palette: &Palette) -> String {
    let status_color = match notification.status {
        NotificationStatus::Pending => palette.warning,
        NotificationStatus::Approved => palette.success,
        NotificationStatus::Rejected => palette.danger,
    };
    format!(
        "{} [{}]\n  ID: {}\n  From: {}\n  Received: {}",
        notification.kind.title(),
        fg(&notification.status.to_string(), status_color),
        notification.id,
        notification.contractor_name,
        notification.received
    )
}

/// Format notifications for display.
pub fn format_notifications(notifications: &[Notification], palette: &Palette) -> String {
    if notifications.is_empty() {
        return "No notifications.".to_string();
    }
    let mut output = header(&format!("NOTIFICATIONS ({})", notifications.len()));
    for notification in notifications {
        output.push_str(&format!("\n{}", format_notification(notification, palette)));
        output.push('\n');
    }
    output
}

/// Format the settings screen.
pub fn format_settings(settings: &Settings, palette: &Palette) -> String {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    let swatches = [
        ("primary", palette.primary),
        ("success", palette.success),
        ("warning", palette.warning),
        ("danger", palette.danger),
    ]
    .iter()
    .map(|(name, color)| format!("{} {}", bg("  ", color), name))
    .collect::<Vec<_>>()
    .join("  ");

    format!(
        "{}\n  Theme: {}\n  Event reminders: {}\n  Event visibility: {}\n  {}",
        header("SETTINGS"),
        settings.theme,
        on_off(settings.event_reminders),
        on_off(settings.event_visibility),
        swatches
    )
}

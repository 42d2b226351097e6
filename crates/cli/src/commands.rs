//! Command handlers.
//!
//! Each handler reads from and updates [`App`] and returns the text to print,
//! already formatted for the selected [`OutputFormat`].

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crewplan_core::calendar::{
    month_days, week_dates, week_number, weeks_in_year, CalendarDate, MonthGrid, TimeOffSet,
};
use crewplan_core::events::{
    filter_by_status, search_events, sort_by_date, Event, EventKind, NewEventForm, Priority,
    ValidEvent,
};
use crewplan_core::hours::{find_hours, summary_rows, SummaryPeriod, SummaryRow};
use crewplan_core::notifications::Notification;
use crewplan_core::settings::Settings;
use crewplan_core::staff::{
    availability, AssignmentPreview, AssignmentSelection, StaffAvailability,
};
use crewplan_core::theme::Palette;

use crate::app::App;
use crate::cli::assign::AssignAction;
use crate::cli::events::EventsAction;
use crate::cli::notifications::NotificationsAction;
use crate::cli::settings::SettingsAction;
use crate::cli::summary::{SummaryAction, SummaryCommand};
use crate::cli::{Commands, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::{json, pretty};

/// Output options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct CreatedEvent<'a> {
    form: &'a ValidEvent,
    event: &'a Event,
}

#[derive(Debug, Serialize)]
struct AssignReport<'a> {
    event: &'a Event,
    staff: Vec<StaffAvailability>,
    selected: Vec<u32>,
    conflicts: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct WeekReport {
    date: CalendarDate,
    week: u32,
    weeks_in_year: u32,
    dates: Vec<CalendarDate>,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    #[serde(flatten)]
    period: SummaryPeriod,
    label: String,
    rows: Vec<SummaryRow>,
}

#[derive(Debug, Serialize)]
struct SettingsReport<'a> {
    settings: &'a Settings,
    palette: &'a Palette,
}

/// Runs a command and returns its output. An empty string means there is
/// nothing to print.
pub fn run(app: &mut App, command: Commands, options: OutputOptions) -> Result<String> {
    match command {
        Commands::Events(cmd) => run_events(app, cmd.action, options),
        Commands::Assign(cmd) => run_assign(app, cmd.action, options),
        Commands::Calendar {
            date,
            event_date,
            time_off,
        } => {
            let time_off: TimeOffSet = time_off.into_iter().collect();
            let grid = MonthGrid::build(date, event_date.unwrap_or(date), &time_off);
            match options.format {
                OutputFormat::Json => json::format_json(&grid),
                OutputFormat::Pretty => Ok(pretty::format_month_grid(&grid, &app.palette())),
            }
        }
        Commands::Week { date } => {
            let date = date.unwrap_or(app.config.today);
            let week = week_number(date);
            let report = WeekReport {
                date,
                week,
                weeks_in_year: weeks_in_year(date.year())?,
                dates: week_dates(date.year(), week)?,
            };
            match options.format {
                OutputFormat::Json => json::format_json(&report),
                OutputFormat::Pretty => Ok(pretty::format_week(
                    report.date,
                    report.week,
                    report.weeks_in_year,
                    &report.dates,
                )),
            }
        }
        Commands::Summary(cmd) => run_summary(app, cmd, options),
        Commands::Notifications(cmd) => run_notifications(app, cmd.action, options),
        Commands::Settings(cmd) => match cmd.action {
            SettingsAction::Show => {
                let palette = app.palette();
                match options.format {
                    OutputFormat::Json => json::format_json(&SettingsReport {
                        settings: &app.settings,
                        palette: &palette,
                    }),
                    OutputFormat::Pretty => Ok(pretty::format_settings(&app.settings, &palette)),
                }
            }
        },
    }
}

fn run_events(app: &mut App, action: EventsAction, options: OutputOptions) -> Result<String> {
    match action {
        EventsAction::List { search, status } => {
            let mut events = search_events(&app.events, search.as_deref().unwrap_or(""));
            if let Some(status) = status {
                events = filter_by_status(&events, status.into());
            }
            sort_by_date(&mut events);
            match options.format {
                OutputFormat::Json => json::format_json(&events),
                OutputFormat::Pretty => Ok(pretty::format_events(
                    &events,
                    &app.events,
                    &app.palette(),
                )),
            }
        }
        EventsAction::Show { id } => {
            let event = app.event(id)?;
            match options.format {
                OutputFormat::Json => json::format_json(event),
                OutputFormat::Pretty => Ok(pretty::format_event(event, &app.palette())),
            }
        }
        EventsAction::New {
            title,
            kind,
            location,
            description,
            start,
            end,
            priority,
            tasks,
            custom_tasks,
            from_json,
        } => {
            let form = match from_json {
                Some(path) => read_form(&path)?,
                None => {
                    let fields = FormFields {
                        title,
                        kind,
                        location,
                        description,
                        priority,
                        tasks,
                        custom_tasks,
                    };
                    build_form(fields, start, end)?
                }
            };
            let valid = form.validate()?;
            let event = valid.clone().into_event(app.next_event_id());
            tracing::info!(id = event.id, title = %event.title, "event created");

            let output = match options.format {
                OutputFormat::Json => json::format_json(&CreatedEvent {
                    form: &valid,
                    event: &event,
                })?,
                OutputFormat::Pretty if options.quiet => String::new(),
                OutputFormat::Pretty => {
                    format!("Created:\n{}", pretty::format_valid_event(&valid))
                }
            };
            app.events.push(event);
            Ok(output)
        }
    }
}

struct FormFields {
    title: String,
    kind: EventKind,
    location: Option<String>,
    description: Option<String>,
    priority: Priority,
    tasks: Vec<String>,
    custom_tasks: Vec<String>,
}

fn build_form(
    fields: FormFields,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<NewEventForm> {
    let start = start.ok_or_else(|| CliError::InvalidInput("--start is required".to_string()))?;
    let end = end.ok_or_else(|| CliError::InvalidInput("--end is required".to_string()))?;

    let mut form = NewEventForm::new(fields.kind, start, end);
    form.title = fields.title;
    form.location = fields.location;
    form.description = fields.description;
    form.priority = fields.priority;
    for id in &fields.tasks {
        let id = form.tasks.add_predefined(id)?.id.clone();
        form.tasks.toggle(&id)?;
    }
    for name in &fields.custom_tasks {
        let id = form.tasks.add_custom(name)?.id.clone();
        form.tasks.toggle(&id)?;
    }
    Ok(form)
}

fn read_form(path: &Path) -> Result<NewEventForm> {
    tracing::debug!(path = %path.display(), "reading event form");
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run_assign(app: &App, action: AssignAction, options: OutputOptions) -> Result<String> {
    match action {
        AssignAction::List { event, select } => {
            let event = app.event(event.unwrap_or(app.config.default_event_id))?;
            let mut selection = AssignmentSelection::new();
            for id in select {
                app.staff_member(id)?;
                if !selection.is_selected(id) {
                    selection.toggle(id);
                }
            }

            let rows = availability(&app.staff, event.date, &selection);
            let conflicted = selection.conflicted(&app.staff, event.date);
            if !conflicted.is_empty() {
                tracing::debug!(
                    event = event.id,
                    count = conflicted.len(),
                    "selected staff are on time off"
                );
            }

            match options.format {
                OutputFormat::Json => json::format_json(&AssignReport {
                    event,
                    staff: rows,
                    selected: selection.ids().collect(),
                    conflicts: conflicted.iter().map(|m| m.id).collect(),
                }),
                OutputFormat::Pretty => Ok(pretty::format_assign_list(
                    event,
                    &rows,
                    &conflicted,
                    &app.palette(),
                )),
            }
        }
        AssignAction::Preview { staff_id, event } => {
            let event = app.event(event.unwrap_or(app.config.default_event_id))?;
            let member = app.staff_member(staff_id)?;
            let preview = AssignmentPreview::build(member, event.date);
            match options.format {
                OutputFormat::Json => json::format_json(&preview),
                OutputFormat::Pretty => Ok(pretty::format_preview(&preview, &app.palette())),
            }
        }
    }
}

/// Resolves the period flags, defaulting the year to the reference date's.
fn resolve_period(cmd: &SummaryCommand, today: CalendarDate) -> Result<SummaryPeriod> {
    let year = cmd.year.unwrap_or(today.year());
    match (cmd.week, cmd.month) {
        (Some(week), _) => {
            week_dates(year, week)?;
            Ok(SummaryPeriod::Week { year, week })
        }
        (None, Some(month)) => {
            month_days(year, month)?;
            Ok(SummaryPeriod::Month { year, month })
        }
        (None, None) => Ok(SummaryPeriod::All),
    }
}

fn run_summary(app: &App, cmd: SummaryCommand, options: OutputOptions) -> Result<String> {
    if let Some(SummaryAction::Show { staff_id }) = cmd.action {
        let hours = find_hours(&app.hours, staff_id)?;
        return match options.format {
            OutputFormat::Json => json::format_json(hours),
            OutputFormat::Pretty => Ok(pretty::format_staff_hours(hours)),
        };
    }

    let period = resolve_period(&cmd, app.config.today)?;
    let rows = summary_rows(&app.hours, period);
    match options.format {
        OutputFormat::Json => json::format_json(&SummaryReport {
            period,
            label: period.label(),
            rows,
        }),
        OutputFormat::Pretty => Ok(pretty::format_summary(&period, &rows)),
    }
}

fn run_notifications(
    app: &mut App,
    action: NotificationsAction,
    options: OutputOptions,
) -> Result<String> {
    let palette = app.palette();
    let (verb, decided): (&str, &Notification) = match action {
        NotificationsAction::List => {
            return match options.format {
                OutputFormat::Json => json::format_json(&app.inbox.all()),
                OutputFormat::Pretty => Ok(pretty::format_notifications(
                    app.inbox.all(),
                    &palette,
                )),
            };
        }
        NotificationsAction::Approve { id } => ("Approved", app.inbox.approve(id)?),
        NotificationsAction::Reject { id } => ("Rejected", app.inbox.reject(id)?),
    };

    match options.format {
        OutputFormat::Json => json::format_json(decided),
        OutputFormat::Pretty if options.quiet => Ok(String::new()),
        OutputFormat::Pretty => Ok(format!(
            "{}:\n{}",
            verb,
            pretty::format_notification(decided, &palette)
        )),
    }
}

use agendar_core::constants::DEFAULT_MAX_RESULTS;
use agendar_core::event::EventTime;
use agendar_core::window::ListWindow;
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

#[derive(Args)]
pub struct ListArgs {
    /// Account email (defaults to the configured one)
    #[arg(short, long)]
    pub account: Option<String>,

    /// Calendar id (defaults to "primary")
    #[arg(short, long)]
    pub calendar: Option<String>,

    /// Look this many days ahead
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    pub days: Option<i64>,

    /// Show events from this time (RFC 3339)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Show events until this time (RFC 3339)
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Maximum number of events to show
    #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub limit: usize,

    /// Print the events as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(account: &str, calendar_id: &str, window: &ListWindow, args: &ListArgs) -> Result<()> {
    let events = agendar_google::api::list_events(account, calendar_id, window, args.limit).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No se encontraron eventos próximos.".dimmed());
        return Ok(());
    }

    // Events arrive ordered by start time; group them by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = format_date_label(&event.start);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let time = format_time(&event.start);
        let summary = if event.summary.is_empty() {
            "(No title)"
        } else {
            &event.summary
        };
        println!("  {} {} {}", time, summary, event.id.dimmed());
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(time: &EventTime) -> String {
    let today = chrono::Local::now().date_naive();

    let date = match time {
        EventTime::Date(d) => *d,
        EventTime::DateTime(dt) => dt.with_timezone(&chrono::Local).date_naive(),
        EventTime::Zoned { datetime, .. } => datetime.date(),
    };

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time portion of an event (e.g. "15:00" or "all-day")
fn format_time(time: &EventTime) -> String {
    match time {
        EventTime::Date(_) => "all-day".to_string(),
        EventTime::DateTime(dt) => {
            format!("{:>7}", dt.with_timezone(&chrono::Local).format("%H:%M"))
        }
        EventTime::Zoned { datetime, .. } => format!("{:>7}", datetime.format("%H:%M")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    // --- format_time ---

    #[test]
    fn all_day_events_have_no_clock_time() {
        let time = EventTime::Date(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(format_time(&time), "all-day");
    }

    #[test]
    fn zoned_events_show_wall_clock_time() {
        let time = EventTime::Zoned {
            datetime: NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
            tzid: "America/Mexico_City".to_string(),
        };
        assert_eq!(format_time(&time), "  09:05");
    }

    // --- format_date_label ---

    #[test]
    fn today_and_tomorrow_get_named_labels() {
        let today = chrono::Local::now().date_naive();
        assert_eq!(format_date_label(&EventTime::Date(today)), "Today");
        assert_eq!(
            format_date_label(&EventTime::Date(today + Duration::days(1))),
            "Tomorrow"
        );
    }

    #[test]
    fn later_dates_get_weekday_labels() {
        let later = chrono::Local::now().date_naive() + Duration::days(30);
        let label = format_date_label(&EventTime::Date(later));
        assert_ne!(label, "Today");
        assert_ne!(label, "Tomorrow");
        assert!(label.contains(' '));
    }
}

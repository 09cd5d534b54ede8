use agendar_core::event::{Event, EventTime};
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(account: &str, calendar_id: &str, event_id: &str, json: bool) -> Result<()> {
    let event = agendar_google::api::get_event(account, calendar_id, event_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
        return Ok(());
    }

    print_event(&event);

    Ok(())
}

fn print_event(event: &Event) {
    let summary = if event.summary.is_empty() {
        "(No title)"
    } else {
        &event.summary
    };
    println!("{}", summary.bold());
    println!(
        "  {} - {}",
        format_event_time(&event.start),
        format_event_time(&event.end)
    );

    if let Some(location) = &event.location {
        println!("  at {}", location);
    }

    if let Some(recurrence) = &event.recurrence {
        for line in recurrence {
            println!("  {}", line.dimmed());
        }
    }

    if !event.attendees.is_empty() {
        println!("  with:");
        for attendee in &event.attendees {
            match &attendee.response_status {
                Some(status) => {
                    println!("    {} {}", attendee.email, format!("({})", status).dimmed())
                }
                None => println!("    {}", attendee.email),
            }
        }
    }

    if let Some(description) = &event.description {
        println!("\n{}", description);
    }

    if let Some(link) = &event.html_link {
        println!("\n  {}", link.dimmed());
    }
}

fn format_event_time(time: &EventTime) -> String {
    match time {
        EventTime::Date(date) => date.format("%Y-%m-%d").to_string(),
        EventTime::DateTime(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        EventTime::Zoned { datetime, tzid } => {
            format!("{} ({})", datetime.format("%Y-%m-%d %H:%M"), tzid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn all_day_times_show_only_the_date() {
        let time = EventTime::Date(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(format_event_time(&time), "2026-03-20");
    }

    #[test]
    fn zoned_times_name_their_zone() {
        let time = EventTime::Zoned {
            datetime: NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
            tzid: "America/Mexico_City".to_string(),
        };
        assert_eq!(
            format_event_time(&time),
            "2026-03-20 15:00 (America/Mexico_City)"
        );
    }
}

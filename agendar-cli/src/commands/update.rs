use agendar_core::event::{Attendee, EventChanges, EventTime};
use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

#[derive(Args)]
pub struct UpdateArgs {
    /// Event id (shown by `agendar list`)
    pub event_id: String,

    /// New title
    #[arg(long)]
    pub summary: Option<String>,

    /// New start date/time
    #[arg(long)]
    pub start: Option<String>,

    /// New end date/time
    #[arg(long)]
    pub end: Option<String>,

    /// IANA time zone for start/end (defaults to the system zone)
    #[arg(short, long)]
    pub timezone: Option<String>,

    /// Replace the attendee list with these emails (repeatable)
    #[arg(long = "attendee", value_name = "EMAIL")]
    pub attendees: Vec<String>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Account email (defaults to the configured one)
    #[arg(short, long)]
    pub account: Option<String>,

    /// Calendar id (defaults to "primary")
    #[arg(short, long)]
    pub calendar: Option<String>,
}

pub async fn run(account: &str, calendar_id: &str, args: &UpdateArgs) -> Result<()> {
    let changes = build_changes(args)?;

    if changes.is_empty() {
        anyhow::bail!(
            "Nothing to update. Pass at least one of --summary, --start, --end, \
            --attendee, --location or --description."
        );
    }

    let event =
        agendar_google::api::update_event(account, calendar_id, &args.event_id, &changes).await?;

    println!("{}", format!("Updated: {}", event.summary).green());

    Ok(())
}

fn build_changes(args: &UpdateArgs) -> Result<EventChanges> {
    let start = parse_time_arg(args.start.as_deref(), args.timezone.as_deref())?;
    let end = parse_time_arg(args.end.as_deref(), args.timezone.as_deref())?;

    let attendees = if args.attendees.is_empty() {
        None
    } else {
        Some(
            args.attendees
                .iter()
                .map(|email| Attendee::from_email(email.as_str()))
                .collect(),
        )
    };

    Ok(EventChanges {
        summary: args.summary.clone(),
        description: args.description.clone(),
        location: args.location.clone(),
        start,
        end,
        attendees,
    })
}

/// Parse an optional date/time flag. The system zone is only looked up
/// when a time was actually given.
fn parse_time_arg(input: Option<&str>, timezone: Option<&str>) -> Result<Option<EventTime>> {
    let Some(input) = input else {
        return Ok(None);
    };
    let timezone = super::resolve_timezone(timezone)?;
    Ok(Some(EventTime::parse(input, &timezone)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn empty_args() -> UpdateArgs {
        UpdateArgs {
            event_id: "evt123".to_string(),
            summary: None,
            start: None,
            end: None,
            timezone: None,
            attendees: Vec::new(),
            location: None,
            description: None,
            account: None,
            calendar: None,
        }
    }

    // --- build_changes ---

    #[test]
    fn no_flags_build_an_empty_change_set() {
        let changes = build_changes(&empty_args()).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn summary_flag_is_carried() {
        let args = UpdateArgs {
            summary: Some("Retro".to_string()),
            ..empty_args()
        };
        let changes = build_changes(&args).unwrap();
        assert!(!changes.is_empty());
        assert_eq!(changes.summary.as_deref(), Some("Retro"));
        assert!(changes.start.is_none());
    }

    #[test]
    fn attendee_flags_replace_the_list() {
        let args = UpdateArgs {
            attendees: vec!["ana@example.com".to_string(), "luis@example.com".to_string()],
            ..empty_args()
        };
        let changes = build_changes(&args).unwrap();
        assert_eq!(
            changes.attendees,
            Some(vec![
                Attendee::from_email("ana@example.com"),
                Attendee::from_email("luis@example.com"),
            ])
        );
    }

    #[test]
    fn start_flag_parses_in_the_given_zone() {
        let args = UpdateArgs {
            start: Some("2026-04-01T09:00".to_string()),
            timezone: Some("America/Mexico_City".to_string()),
            ..empty_args()
        };
        let changes = build_changes(&args).unwrap();
        assert_eq!(
            changes.start,
            Some(EventTime::Zoned {
                datetime: NaiveDate::from_ymd_opt(2026, 4, 1)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
                tzid: "America/Mexico_City".to_string(),
            })
        );
    }

    #[test]
    fn bad_start_is_rejected() {
        let args = UpdateArgs {
            start: Some("next tuesday".to_string()),
            timezone: Some("UTC".to_string()),
            ..empty_args()
        };
        assert!(build_changes(&args).is_err());
    }
}

use agendar_core::event::{Attendee, EventDraft, EventTime};
use agendar_core::frequency::Frequency;
use anyhow::{Context, Result};
use chrono::Duration;
use clap::Args;
use owo_colors::OwoColorize;

#[derive(Args)]
pub struct CreateArgs {
    /// Event title
    pub summary: String,

    /// Start date/time: "2026-03-20T15:00", or "2026-03-20" for all-day
    #[arg(short, long)]
    pub start: String,

    /// End date/time (defaults to start + 1 hour, or + 1 day for all-day)
    #[arg(short, long)]
    pub end: Option<String>,

    /// How long the event runs (e.g. "45m", "2h"), instead of --end
    #[arg(long, conflicts_with = "end")]
    pub duration: Option<String>,

    /// IANA time zone for start/end (defaults to the system zone)
    #[arg(short, long)]
    pub timezone: Option<String>,

    /// Attendee email to invite (repeatable)
    #[arg(long = "attendee", value_name = "EMAIL")]
    pub attendees: Vec<String>,

    /// Recurrence label, e.g. "Diario" or "Martes y Jueves"
    #[arg(short, long)]
    pub frequency: Option<String>,

    /// Where the event takes place
    #[arg(long)]
    pub location: Option<String>,

    /// Longer description
    #[arg(long)]
    pub description: Option<String>,

    /// Account email (defaults to the configured one)
    #[arg(short, long)]
    pub account: Option<String>,

    /// Calendar id (defaults to "primary")
    #[arg(short, long)]
    pub calendar: Option<String>,
}

pub async fn run(account: &str, calendar_id: &str, args: &CreateArgs) -> Result<()> {
    let draft = build_draft(args)?;

    let event = agendar_google::api::create_event(account, calendar_id, &draft).await?;

    println!("{}", format!("Created: {}", event.summary).green());
    if let Some(link) = &event.html_link {
        println!("  {}", link.dimmed());
    }

    Ok(())
}

fn build_draft(args: &CreateArgs) -> Result<EventDraft> {
    let timezone = super::resolve_timezone(args.timezone.as_deref())?;

    let start = EventTime::parse(&args.start, &timezone)?;
    let end = match (&args.end, &args.duration) {
        (Some(end), _) => EventTime::parse(end, &timezone)?,
        (None, Some(duration)) => apply_duration(&start, duration)?,
        (None, None) => start.default_end(),
    };

    // Google rejects events mixing an all-day date with a clock time
    if start.is_all_day() != end.is_all_day() {
        anyhow::bail!("Start and end must both be all-day dates or both be times.");
    }

    let frequency = args
        .frequency
        .as_deref()
        .map(resolve_frequency)
        .transpose()?;

    Ok(EventDraft {
        summary: args.summary.clone(),
        description: args.description.clone(),
        location: args.location.clone(),
        start,
        end,
        attendees: args
            .attendees
            .iter()
            .map(|email| Attendee::from_email(email.as_str()))
            .collect(),
        frequency,
    })
}

/// Shift the start by a duration string to get the end.
fn apply_duration(start: &EventTime, input: &str) -> Result<EventTime> {
    let std_duration = humantime::parse_duration(input)
        .map_err(|e| anyhow::anyhow!("Could not parse duration \"{}\": {}", input, e))?;
    let duration = Duration::from_std(std_duration).context("Duration too large")?;

    Ok(match start {
        EventTime::Date(date) => EventTime::Date(*date + duration),
        EventTime::DateTime(dt) => EventTime::DateTime(*dt + duration),
        EventTime::Zoned { datetime, tzid } => EventTime::Zoned {
            datetime: *datetime + duration,
            tzid: tzid.clone(),
        },
    })
}

fn resolve_frequency(label: &str) -> Result<Frequency> {
    Frequency::from_label(label).ok_or_else(|| {
        let available: Vec<_> = Frequency::ALL.iter().map(|f| f.label()).collect();
        anyhow::anyhow!(
            "Frequency '{}' not found. Available: {}",
            label,
            available.join(" | ")
        )
    })
}

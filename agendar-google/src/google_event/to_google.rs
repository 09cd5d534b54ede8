use agendar_core::event::{Attendee, EventChanges, EventDraft, EventTime};
use chrono::TimeZone;
use chrono_tz::Tz;

pub trait ToGoogle {
    fn to_google(&self) -> google_calendar::types::Event;
}

impl ToGoogle for EventDraft {
    fn to_google(&self) -> google_calendar::types::Event {
        let recurrence = self
            .frequency
            .map(|frequency| vec![frequency.rrule().to_string()])
            .unwrap_or_default();

        google_calendar::types::Event {
            // Let Google assign the ID
            // (Otherwise we'll get "Invalid resource id value")
            id: String::new(),
            summary: self.summary.clone(),
            description: self.description.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            start: Some(event_time_to_google(&self.start)),
            end: Some(event_time_to_google(&self.end)),
            status: "confirmed".to_string(),
            recurrence,
            attendees: self.attendees.iter().map(attendee_to_google).collect(),
            // New events take the calendar's default reminders
            reminders: Some(google_calendar::types::Reminders {
                use_default: true,
                overrides: vec![],
            }),
            ..Default::default()
        }
    }
}

/// Overwrite the fields named in `changes` on a fetched wire event; the
/// rest of the resource is written back as it came.
pub fn apply_changes(changes: &EventChanges, event: &mut google_calendar::types::Event) {
    if let Some(summary) = &changes.summary {
        event.summary = summary.clone();
    }
    if let Some(description) = &changes.description {
        event.description = description.clone();
    }
    if let Some(location) = &changes.location {
        event.location = location.clone();
    }
    if let Some(start) = &changes.start {
        event.start = Some(event_time_to_google(start));
    }
    if let Some(end) = &changes.end {
        event.end = Some(event_time_to_google(end));
    }
    if let Some(attendees) = &changes.attendees {
        event.attendees = attendees.iter().map(attendee_to_google).collect();
    }
}

fn attendee_to_google(attendee: &Attendee) -> google_calendar::types::EventAttendee {
    google_calendar::types::EventAttendee {
        email: attendee.email.clone(),
        display_name: attendee.name.clone().unwrap_or_default(),
        response_status: attendee
            .response_status
            .clone()
            .unwrap_or_else(|| "needsAction".to_string()),
        additional_guests: 0,
        comment: String::new(),
        id: String::new(),
        optional: false,
        organizer: false,
        resource: false,
        self_: false,
    }
}

fn event_time_to_google(time: &EventTime) -> google_calendar::types::EventDateTime {
    match time {
        EventTime::Date(d) => google_calendar::types::EventDateTime {
            date: Some(*d),
            date_time: None,
            time_zone: String::new(),
        },
        EventTime::DateTime(dt) => google_calendar::types::EventDateTime {
            date: None,
            date_time: Some(*dt),
            time_zone: String::new(),
        },
        EventTime::Zoned { datetime, tzid } => google_calendar::types::EventDateTime {
            date: None,
            date_time: Some(zoned_to_utc(datetime, tzid)),
            time_zone: tzid.clone(),
        },
    }
}

/// Resolve a wall-clock time in `tzid` to its UTC instant. Falls back to
/// reading the time as UTC when the zone is unknown or the local time does
/// not exist (DST gap).
fn zoned_to_utc(datetime: &chrono::NaiveDateTime, tzid: &str) -> chrono::DateTime<chrono::Utc> {
    match tzid.parse::<Tz>() {
        Ok(tz) => match tz.from_local_datetime(datetime).earliest() {
            Some(dt) => dt.with_timezone(&chrono::Utc),
            None => datetime.and_utc(),
        },
        Err(_) => datetime.and_utc(),
    }
}

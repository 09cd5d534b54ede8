//! Provider-neutral event types.
//!
//! These types represent calendar events independently of the Google wire
//! format. The client crate converts API responses into them, and everything
//! above the client (CLI, rendering) works exclusively with them.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AgendarError, AgendarResult};
use crate::frequency::Frequency;

/// A calendar event as known to the remote calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub status: EventStatus,

    /// RRULE lines for recurring master events
    pub recurrence: Option<Vec<String>>,

    /// Attendees invited to this event
    pub attendees: Vec<Attendee>,
    /// Reminder policy
    pub reminders: Reminders,

    /// Browser link to the event
    pub html_link: Option<String>,
    /// Last modification timestamp
    pub updated: Option<DateTime<Utc>>,
}

/// An event attendee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Response status: "accepted", "declined", "tentative", "needsAction"
    pub response_status: Option<String>,
}

impl Attendee {
    /// An attendee known only by email address, the shape invitations are
    /// issued with.
    pub fn from_email(email: impl Into<String>) -> Self {
        Attendee {
            email: email.into(),
            name: None,
            response_status: None,
        }
    }
}

/// Reminder policy for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Reminders {
    /// Use the calendar's default reminders
    #[default]
    UseDefault,
    /// Explicit overrides replacing the defaults
    Overrides(Vec<Reminder>),
}

/// A single reminder override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Minutes before the event to trigger
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    /// All-day event date
    Date(NaiveDate),
    /// Instant in UTC
    DateTime(DateTime<Utc>),
    /// Wall-clock time in a named IANA zone
    Zoned { datetime: NaiveDateTime, tzid: String },
}

impl EventTime {
    /// Parse user input into an event time.
    ///
    /// `YYYY-MM-DD` becomes an all-day date; `YYYY-MM-DDTHH:MM[:SS]` becomes
    /// a wall-clock time in `tzid`. The zone name is validated against the
    /// IANA database.
    pub fn parse(input: &str, tzid: &str) -> AgendarResult<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(EventTime::Date(date));
        }

        let datetime = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
            .map_err(|_| AgendarError::InvalidDateTime(input.to_string()))?;

        if tzid.parse::<chrono_tz::Tz>().is_err() {
            return Err(AgendarError::InvalidTimeZone(tzid.to_string()));
        }

        Ok(EventTime::Zoned {
            datetime,
            tzid: tzid.to_string(),
        })
    }

    /// Default end time: +1 hour for timed events, +1 day for all-day events.
    pub fn default_end(&self) -> EventTime {
        match self {
            EventTime::Date(d) => EventTime::Date(*d + Duration::days(1)),
            EventTime::DateTime(dt) => EventTime::DateTime(*dt + Duration::hours(1)),
            EventTime::Zoned { datetime, tzid } => EventTime::Zoned {
                datetime: *datetime + Duration::hours(1),
                tzid: tzid.clone(),
            },
        }
    }

    /// Whether this is an all-day date.
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum EventStatus {
    #[default]
    Confirmed,
    Tentative,
    Cancelled,
}

/// A new event to be created. Drafts never carry an id; the server assigns
/// one on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    /// Attendees to invite by email
    pub attendees: Vec<Attendee>,
    /// Recurrence schedule, if any
    pub frequency: Option<Frequency>,
}

/// A partial update to an existing event.
///
/// Fields left as `None` keep their current value on the remote event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventChanges {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
    pub attendees: Option<Vec<Attendee>>,
}

impl EventChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.attendees.is_none()
    }
}

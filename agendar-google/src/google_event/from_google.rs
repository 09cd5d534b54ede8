use agendar_core::event::{Attendee, Event, EventStatus, EventTime, Reminder, Reminders};
use anyhow::{Result, bail};

pub trait FromGoogle {
    fn from_google(event: google_calendar::types::Event) -> Result<Self>
    where
        Self: Sized;
}

impl FromGoogle for Event {
    fn from_google(event: google_calendar::types::Event) -> Result<Self> {
        let start = event_time_from_google(event.start.as_ref(), "start")?;
        let end = event_time_from_google(event.end.as_ref(), "end")?;

        let status = match event.status.as_str() {
            "tentative" => EventStatus::Tentative,
            "cancelled" => EventStatus::Cancelled,
            _ => EventStatus::Confirmed,
        };

        let reminders = match &event.reminders {
            Some(rem) if !rem.use_default => Reminders::Overrides(
                rem.overrides
                    .iter()
                    .map(|r| Reminder { minutes: r.minutes })
                    .collect(),
            ),
            _ => Reminders::UseDefault,
        };

        let attendees: Vec<Attendee> = event
            .attendees
            .iter()
            .map(|a| Attendee {
                email: a.email.clone(),
                name: if a.display_name.is_empty() {
                    None
                } else {
                    Some(a.display_name.clone())
                },
                response_status: if a.response_status.is_empty() {
                    None
                } else {
                    Some(a.response_status.clone())
                },
            })
            .collect();

        let recurrence = if event.recurrence.is_empty() {
            None
        } else {
            Some(event.recurrence)
        };

        Ok(Event {
            id: event.id,
            summary: event.summary,
            description: if event.description.is_empty() {
                None
            } else {
                Some(event.description)
            },
            location: if event.location.is_empty() {
                None
            } else {
                Some(event.location)
            },
            start,
            end,
            status,
            recurrence,
            attendees,
            reminders,
            html_link: if event.html_link.is_empty() {
                None
            } else {
                Some(event.html_link)
            },
            updated: event.updated,
        })
    }
}

fn event_time_from_google(
    time: Option<&google_calendar::types::EventDateTime>,
    which: &str,
) -> Result<EventTime> {
    if let Some(time) = time {
        if let Some(dt) = time.date_time {
            return Ok(EventTime::DateTime(dt));
        }
        if let Some(d) = time.date {
            return Ok(EventTime::Date(d));
        }
    }
    bail!("Event has no {} time", which)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_google_event() -> google_calendar::types::Event {
        google_calendar::types::Event {
            id: "evt123".to_string(),
            summary: "Reunión de Equipo".to_string(),
            description: "Weekly check-in".to_string(),
            status: "confirmed".to_string(),
            html_link: "https://www.google.com/calendar/event?eid=evt123".to_string(),
            start: Some(google_calendar::types::EventDateTime {
                date: None,
                date_time: Some(Utc.with_ymd_and_hms(2026, 1, 15, 21, 0, 0).unwrap()),
                time_zone: "America/Mexico_City".to_string(),
            }),
            end: Some(google_calendar::types::EventDateTime {
                date: None,
                date_time: Some(Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap()),
                time_zone: "America/Mexico_City".to_string(),
            }),
            ..Default::default()
        }
    }

    // EventAttendee has no Default; every field is spelled out
    fn make_google_attendee(
        email: &str,
        display_name: &str,
        response_status: &str,
    ) -> google_calendar::types::EventAttendee {
        google_calendar::types::EventAttendee {
            email: email.to_string(),
            display_name: display_name.to_string(),
            response_status: response_status.to_string(),
            additional_guests: 0,
            comment: String::new(),
            id: String::new(),
            optional: false,
            organizer: false,
            resource: false,
            self_: false,
        }
    }

    #[test]
    fn maps_core_fields() {
        let event = Event::from_google(make_google_event()).unwrap();
        assert_eq!(event.id, "evt123");
        assert_eq!(event.summary, "Reunión de Equipo");
        assert_eq!(event.description.as_deref(), Some("Weekly check-in"));
        assert_eq!(event.status, EventStatus::Confirmed);
        assert_eq!(
            event.html_link.as_deref(),
            Some("https://www.google.com/calendar/event?eid=evt123")
        );
        assert_eq!(
            event.start,
            EventTime::DateTime(Utc.with_ymd_and_hms(2026, 1, 15, 21, 0, 0).unwrap())
        );
    }

    #[test]
    fn empty_strings_become_none() {
        let mut google_event = make_google_event();
        google_event.description = String::new();
        google_event.html_link = String::new();

        let event = Event::from_google(google_event).unwrap();
        assert!(event.description.is_none());
        assert!(event.location.is_none());
        assert!(event.html_link.is_none());
    }

    #[test]
    fn cancelled_status_maps() {
        let mut google_event = make_google_event();
        google_event.status = "cancelled".to_string();
        let event = Event::from_google(google_event).unwrap();
        assert_eq!(event.status, EventStatus::Cancelled);
    }

    #[test]
    fn unknown_status_defaults_to_confirmed() {
        let mut google_event = make_google_event();
        google_event.status = "something-new".to_string();
        let event = Event::from_google(google_event).unwrap();
        assert_eq!(event.status, EventStatus::Confirmed);
    }

    #[test]
    fn allday_event_maps_to_date() {
        let mut google_event = make_google_event();
        google_event.start = Some(google_calendar::types::EventDateTime {
            date: Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()),
            date_time: None,
            time_zone: String::new(),
        });
        google_event.end = Some(google_calendar::types::EventDateTime {
            date: Some(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()),
            date_time: None,
            time_zone: String::new(),
        });

        let event = Event::from_google(google_event).unwrap();
        assert_eq!(
            event.start,
            EventTime::Date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
    }

    #[test]
    fn missing_start_is_an_error() {
        let mut google_event = make_google_event();
        google_event.start = None;
        assert!(Event::from_google(google_event).is_err());
    }

    #[test]
    fn attendee_fields_map() {
        let mut google_event = make_google_event();
        google_event.attendees = vec![make_google_attendee("ana@example.com", "Ana", "accepted")];

        let event = Event::from_google(google_event).unwrap();
        assert_eq!(
            event.attendees,
            vec![Attendee {
                email: "ana@example.com".to_string(),
                name: Some("Ana".to_string()),
                response_status: Some("accepted".to_string()),
            }]
        );
    }

    #[test]
    fn attendee_empty_fields_become_none() {
        let mut google_event = make_google_event();
        google_event.attendees = vec![make_google_attendee("luis@example.com", "", "")];

        let event = Event::from_google(google_event).unwrap();
        assert_eq!(event.attendees[0].email, "luis@example.com");
        assert!(event.attendees[0].name.is_none());
        assert!(event.attendees[0].response_status.is_none());
    }

    #[test]
    fn default_reminders_map() {
        let mut google_event = make_google_event();
        google_event.reminders = Some(google_calendar::types::Reminders {
            use_default: true,
            overrides: vec![],
        });
        let event = Event::from_google(google_event).unwrap();
        assert_eq!(event.reminders, Reminders::UseDefault);
    }

    #[test]
    fn override_reminders_map() {
        let mut google_event = make_google_event();
        google_event.reminders = Some(google_calendar::types::Reminders {
            use_default: false,
            overrides: vec![google_calendar::types::EventReminder {
                method: "popup".to_string(),
                minutes: 30,
            }],
        });
        let event = Event::from_google(google_event).unwrap();
        assert_eq!(
            event.reminders,
            Reminders::Overrides(vec![Reminder { minutes: 30 }])
        );
    }

    #[test]
    fn recurrence_lines_pass_through() {
        let mut google_event = make_google_event();
        google_event.recurrence = vec!["RRULE:FREQ=WEEKLY;BYDAY=TU,TH".to_string()];
        let event = Event::from_google(google_event).unwrap();
        assert_eq!(
            event.recurrence,
            Some(vec!["RRULE:FREQ=WEEKLY;BYDAY=TU,TH".to_string()])
        );
    }
}

//! Calendar operations against the Google API.
//!
//! Every function loads a valid session for the account, issues the API
//! call, and maps the wire types into core types. Nothing is cached; each
//! call stands alone.

use agendar_core::event::{Event, EventChanges, EventDraft, EventStatus};
use agendar_core::window::ListWindow;
use anyhow::{Context, Result};
use google_calendar::types::{MinAccessRole, OrderBy, SendUpdates};
use serde::{Deserialize, Serialize};

use crate::google_event::{FromGoogle, ToGoogle, apply_changes};
use crate::session::Session;

/// A calendar visible to the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarInfo {
    pub id: String,
    pub summary: String,
    pub primary: bool,
}

/// List events in `window`, ordered by start time, capped at `max_results`.
///
/// Recurring events are expanded into single instances; cancelled entries
/// are dropped.
pub async fn list_events(
    account: &str,
    calendar_id: &str,
    window: &ListWindow,
    max_results: usize,
) -> Result<Vec<Event>> {
    let client = Session::load_valid(account).await?.client()?;

    let time_min = window.from_rfc3339();
    let time_max = window.to_rfc3339();

    tracing::debug!(calendar_id, %time_min, %time_max, "listing events");

    let response = client
        .events()
        .list_all(
            calendar_id,
            "",
            0,
            OrderBy::StartTime,
            &[],
            "", // search query
            &[],
            false,
            false,
            true, // single_events: expand recurring events into instances
            &time_max,
            &time_min,
            "",
            "",
        )
        .await
        .context("Failed to fetch events")?;

    let events = response
        .body
        .into_iter()
        .map(Event::from_google)
        .collect::<Result<Vec<_>>>()?;

    Ok(trim_listing(events, max_results))
}

/// Fetch a single event by id.
pub async fn get_event(account: &str, calendar_id: &str, event_id: &str) -> Result<Event> {
    let client = Session::load_valid(account).await?.client()?;

    let response = client
        .events()
        .get(calendar_id, event_id, 0, "")
        .await
        .with_context(|| format!("Failed to fetch event: {}", event_id))?;

    Event::from_google(response.body)
}

/// Create an event from a draft. Attendees are emailed an invitation.
pub async fn create_event(account: &str, calendar_id: &str, draft: &EventDraft) -> Result<Event> {
    let client = Session::load_valid(account).await?.client()?;

    let google_event = draft.to_google();

    tracing::debug!(calendar_id, summary = %draft.summary, "creating event");

    let response = client
        .events()
        .insert(
            calendar_id,
            0,
            0,
            false,
            SendUpdates::All,
            false,
            &google_event,
        )
        .await
        .with_context(|| format!("Failed to create event: {}", draft.summary))?;

    Event::from_google(response.body)
}

/// Update the provided fields of an event, leaving the rest as they are.
///
/// The API updates the whole resource, so the current event is fetched,
/// the changes are applied to it, and the result is written back.
/// Attendees are notified of the change.
pub async fn update_event(
    account: &str,
    calendar_id: &str,
    event_id: &str,
    changes: &EventChanges,
) -> Result<Event> {
    let client = Session::load_valid(account).await?.client()?;

    let mut google_event = client
        .events()
        .get(calendar_id, event_id, 0, "")
        .await
        .with_context(|| format!("Failed to fetch event: {}", event_id))?
        .body;

    apply_changes(changes, &mut google_event);

    tracing::debug!(calendar_id, event_id, "updating event");

    let response = client
        .events()
        .update(
            calendar_id,
            event_id,
            0,
            0,
            false,
            SendUpdates::All,
            false,
            &google_event,
        )
        .await
        .with_context(|| format!("Failed to update event: {}", event_id))?;

    Event::from_google(response.body)
}

/// Delete an event. Deleting an already-deleted event succeeds.
pub async fn delete_event(account: &str, calendar_id: &str, event_id: &str) -> Result<()> {
    let client = Session::load_valid(account).await?.client()?;

    tracing::debug!(calendar_id, event_id, "deleting event");

    let result = client
        .events()
        .delete(calendar_id, event_id, false, SendUpdates::None)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) if already_gone(&e.to_string()) => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to delete event: {}", event_id)),
    }
}

/// List the calendars visible to the account.
pub async fn list_calendars(account: &str) -> Result<Vec<CalendarInfo>> {
    let client = Session::load_valid(account).await?.client()?;

    let google_calendars = client
        .calendar_list()
        .list_all(MinAccessRole::default(), false, false)
        .await
        .context("Failed to fetch calendars")?
        .body;

    Ok(google_calendars
        .into_iter()
        .map(|cal| CalendarInfo {
            id: cal.id,
            summary: cal.summary,
            primary: cal.primary,
        })
        .collect())
}

/// Drop cancelled entries, then cap the listing at `max_results`.
fn trim_listing(mut events: Vec<Event>, max_results: usize) -> Vec<Event> {
    events.retain(|event| event.status != EventStatus::Cancelled);
    events.truncate(max_results);
    events
}

/// 410 Gone: the event was already deleted.
fn already_gone(message: &str) -> bool {
    message.contains("410") || message.contains("Gone")
}

//! Google Calendar client for the agendar tools.
//!
//! Wraps the generated google-calendar API client with:
//! - the OAuth2 authorization-code flow with a local callback server (`auth`)
//! - per-account token persistence with transparent refresh (`session`)
//! - the calendar operations the CLI exposes (`api`)
//!
//! Callers work entirely in `agendar_core` types; the wire types stay
//! internal to this crate.

pub mod api;
pub mod app_config;
pub mod auth;
pub mod session;

mod google_event;

//! Core types for the agendar tools.
//!
//! This crate provides the types shared between agendar-cli and the
//! Google Calendar client:
//! - `Event` and related types for calendar events
//! - `Frequency` for the supported recurrence labels
//! - `ListWindow` for the time range of event listings
//! - `GlobalConfig` for the user-level configuration file

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod frequency;
pub mod window;

// Re-export the event types at crate root for convenience
pub use event::*;

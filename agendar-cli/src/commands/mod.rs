pub mod auth;
pub mod calendars;
pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

use anyhow::{Context, Result};

/// The zone wall-clock times are read in: the `--timezone` flag if given,
/// otherwise the system zone.
pub(crate) fn resolve_timezone(flag: Option<&str>) -> Result<String> {
    match flag {
        Some(timezone) => Ok(timezone.to_string()),
        None => iana_time_zone::get_timezone().context("Could not determine the system time zone"),
    }
}

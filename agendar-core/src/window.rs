//! Time window for event listings.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::constants::DEFAULT_LOOKAHEAD_DAYS;
use crate::error::{AgendarError, AgendarResult};

/// The time range a listing asks the API for (`timeMin`/`timeMax`).
#[derive(Debug, Clone, PartialEq)]
pub struct ListWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Default for ListWindow {
    fn default() -> Self {
        ListWindow::upcoming()
    }
}

impl ListWindow {
    /// The standard "what's coming up" window: now until the end of the day
    /// `DEFAULT_LOOKAHEAD_DAYS` ahead.
    pub fn upcoming() -> Self {
        let now = Utc::now();
        ListWindow {
            from: now,
            to: end_of_day(now + Duration::days(DEFAULT_LOOKAHEAD_DAYS)),
        }
    }

    /// Window from now until 23:59:00 of the day `days` ahead.
    ///
    /// The count must be positive and land within chrono's representable
    /// dates; anything else is an `InvalidWindow`.
    pub fn days(days: i64) -> AgendarResult<Self> {
        if days <= 0 {
            return Err(AgendarError::InvalidWindow(
                "days must be positive".to_string(),
            ));
        }

        let now = Utc::now();
        let to = Duration::try_days(days)
            .and_then(|ahead| now.checked_add_signed(ahead))
            .ok_or_else(|| AgendarError::InvalidWindow(format!("{days} days is out of range")))?;

        Ok(ListWindow {
            from: now,
            to: end_of_day(to),
        })
    }

    /// Window with explicit bounds.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> AgendarResult<Self> {
        if to <= from {
            return Err(AgendarError::InvalidWindow(format!(
                "end {} is not after start {}",
                to.to_rfc3339(),
                from.to_rfc3339()
            )));
        }
        Ok(ListWindow { from, to })
    }

    /// Build a window from command-line arguments.
    ///
    /// Explicit `from`/`to` RFC 3339 bounds win when both are present;
    /// otherwise `days` sets the look-ahead, falling back to the default.
    pub fn from_args(days: Option<i64>, from: Option<&str>, to: Option<&str>) -> AgendarResult<Self> {
        if let (Some(from), Some(to)) = (from, to) {
            return ListWindow::between(parse_bound(from)?, parse_bound(to)?);
        }
        if from.is_some() != to.is_some() {
            return Err(AgendarError::InvalidWindow(
                "--from and --to must be given together".to_string(),
            ));
        }

        match days {
            Some(days) => ListWindow::days(days),
            None => Ok(ListWindow::upcoming()),
        }
    }

    /// Lower bound as RFC 3339 for the `timeMin` parameter.
    pub fn from_rfc3339(&self) -> String {
        self.from.to_rfc3339()
    }

    /// Upper bound as RFC 3339 for the `timeMax` parameter.
    pub fn to_rfc3339(&self) -> String {
        self.to.to_rfc3339()
    }
}

/// Clamp to 23:59:00 of the same day.
fn end_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap())
        .unwrap()
}

fn parse_bound(input: &str) -> AgendarResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AgendarError::InvalidWindow(format!("'{input}' is not an RFC 3339 timestamp"))
        })
}

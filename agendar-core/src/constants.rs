//! Shared defaults.

/// How many days ahead the default listing window reaches.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 5;

/// Maximum number of events a listing returns unless overridden.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Calendar used when the user hasn't picked one.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

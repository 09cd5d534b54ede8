//! Error types for the agendar tools.

use thiserror::Error;

/// Errors that can occur in agendar operations.
#[derive(Error, Debug)]
pub enum AgendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date/time '{0}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidDateTime(String),

    #[error("Invalid time zone '{0}'. Expected an IANA name like America/Mexico_City")]
    InvalidTimeZone(String),

    #[error("Invalid time window: {0}")]
    InvalidWindow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for agendar operations.
pub type AgendarResult<T> = Result<T, AgendarError>;

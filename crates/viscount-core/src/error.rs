//! Shared error type across viscount crates.

use thiserror::Error;

/// Stable error kinds, logged next to the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Display element not present on the page.
    MissingElement,
    /// Request never produced a response (DNS, connect, bad URL, body read).
    Transport,
    /// Endpoint answered with a non-success status.
    HttpStatus,
    /// Body is not JSON.
    InvalidJson,
    /// Body is JSON but the count field is absent or not a number.
    MissingField,
    /// Configuration rejected.
    Config,
    /// Unsupported config version.
    UnsupportedVersion,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingElement => "MISSING_ELEMENT",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::HttpStatus => "HTTP_STATUS",
            ErrorKind::InvalidJson => "INVALID_JSON",
            ErrorKind::MissingField => "MISSING_FIELD",
            ErrorKind::Config => "CONFIG",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Unified error type used by core and widget.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("display element not found: #{0}")]
    MissingElement(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("missing or non-numeric field: {0}")]
    MissingField(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl CounterError {
    /// Map the error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CounterError::MissingElement(_) => ErrorKind::MissingElement,
            CounterError::Transport(_) => ErrorKind::Transport,
            CounterError::Status(_) => ErrorKind::HttpStatus,
            CounterError::InvalidJson(_) => ErrorKind::InvalidJson,
            CounterError::MissingField(_) => ErrorKind::MissingField,
            CounterError::Config(_) => ErrorKind::Config,
            CounterError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
        }
    }
}

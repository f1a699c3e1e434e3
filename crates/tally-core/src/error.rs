//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Counter name does not exist.
    NotFound,
    /// Counter name already exists.
    Conflict,
    /// Invalid input (bad name, bad config).
    BadRequest,
    /// Counter is already at its maximum value.
    Overflow,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Overflow => "OVERFLOW",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    #[error("counter not found: {0}")]
    NotFound(String),
    #[error("counter already exists: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("counter overflow: {0}")]
    Overflow(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::Conflict(_) => ClientCode::Conflict,
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::Overflow(_) => ClientCode::Overflow,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }
}

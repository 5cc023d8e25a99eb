//! Domain-level error type.
//!
//! This error is transport agnostic; the inbound HTTP adapter maps it to the
//! `{result, error_type, error_message}` envelope. Policy denials are not
//! errors — engines surface those as outcome enum variants.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No user matches the presented API key or target id.
    UserNotFound,
    /// The persistence layer failed (pool checkout, query, constraint).
    Storage,
    /// Reading or writing a media file failed.
    MediaIo,
}

impl ErrorCode {
    /// Wire value used as `error_type` in the HTTP envelope.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserNotFound => "user_not_found",
            Self::Storage => "storage_failure",
            Self::MediaIo => "media_io_failure",
        }
    }
}

/// Domain error payload: a closed code plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown API key or target user.
    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UserNotFound, message)
    }

    /// Persistence fault.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Storage, message)
    }

    /// Media file I/O fault.
    pub fn media_io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MediaIo, message)
    }

    /// The failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

//! Single-line status output.
//!
//! `42|2024-01-01T00:00:00Z` on success, `ERROR:<reason>` on failure.

use std::fmt;

use crate::error::UsageError;
use crate::usage::UsageSnapshot;

/// The one line printed to stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// `<utilization>|<resets_at or empty>`
    Usage(UsageSnapshot),
    /// `ERROR:<reason>`
    Error(String),
}

impl StatusLine {
    /// Build the line for a fetch result
    pub fn from_result(result: &Result<UsageSnapshot, UsageError>) -> Self {
        match result {
            Ok(snapshot) => StatusLine::Usage(snapshot.clone()),
            Err(e) => StatusLine::Error(e.to_string()),
        }
    }

    /// Error line with an arbitrary reason (e.g. a config failure)
    pub fn error(reason: impl fmt::Display) -> Self {
        StatusLine::Error(reason.to_string())
    }

    /// Process exit code: 0 for usage, 1 for errors
    pub fn exit_code(&self) -> u8 {
        match self {
            StatusLine::Usage(_) => 0,
            StatusLine::Error(_) => 1,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::Error(_))
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Usage(snapshot) => write!(
                f,
                "{}|{}",
                snapshot.utilization,
                snapshot.resets_at.as_deref().unwrap_or("")
            ),
            // Keep the output to exactly one line
            StatusLine::Error(reason) => write!(f, "ERROR:{}", reason.replace(['\r', '\n'], " ")),
        }
    }
}

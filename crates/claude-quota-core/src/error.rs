//! Error taxonomy for a usage fetch.
//!
//! Every variant is terminal for the run. The `Display` text is what ends up
//! after `ERROR:` on stdout, so it must stay short and must never contain the
//! session key.

use thiserror::Error;

/// The two claude.ai endpoints the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /api/organizations`
    Organizations,
    /// `GET /api/organizations/{id}/usage`
    Usage,
}

impl Endpoint {
    /// Message reported when the request itself fails or returns non-200
    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Organizations => "Failed to fetch org ID",
            Endpoint::Usage => "Failed to fetch usage",
        }
    }

    /// Message reported when the body does not have the expected shape
    pub fn format_message(self) -> &'static str {
        match self {
            Endpoint::Organizations => "Invalid organizations response",
            Endpoint::Usage => "Invalid response format",
        }
    }
}

/// Error type for usage fetch operations
#[derive(Debug, Error)]
pub enum UsageError {
    /// No usable session key (missing, unreadable or blank)
    #[error("NO_SESSION_KEY")]
    NoSessionKey,

    /// Network-level failure talking to an endpoint
    #[error("{}", .endpoint.failure_message())]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Endpoint answered with something other than 200
    #[error("{}", .endpoint.failure_message())]
    Status { endpoint: Endpoint, status: u16 },

    /// The organizations list was empty
    #[error("No organizations found")]
    NoOrganizations,

    /// Body could not be decoded into the expected structure
    #[error("{}", .endpoint.format_message())]
    Format {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl UsageError {
    /// Endpoint involved in the failure, if any
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            UsageError::Transport { endpoint, .. }
            | UsageError::Status { endpoint, .. }
            | UsageError::Format { endpoint, .. } => Some(*endpoint),
            UsageError::NoOrganizations => Some(Endpoint::Organizations),
            UsageError::NoSessionKey => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_session_key_message() {
        assert_eq!(UsageError::NoSessionKey.to_string(), "NO_SESSION_KEY");
    }

    #[test]
    fn test_status_message_depends_on_endpoint() {
        let org = UsageError::Status {
            endpoint: Endpoint::Organizations,
            status: 403,
        };
        let usage = UsageError::Status {
            endpoint: Endpoint::Usage,
            status: 500,
        };
        assert_eq!(org.to_string(), "Failed to fetch org ID");
        assert_eq!(usage.to_string(), "Failed to fetch usage");
    }

    #[test]
    fn test_format_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = UsageError::Format {
            endpoint: Endpoint::Usage,
            source,
        };
        assert_eq!(err.to_string(), "Invalid response format");
        assert_eq!(err.endpoint(), Some(Endpoint::Usage));
    }

    #[test]
    fn test_endpoint_of_no_organizations() {
        assert_eq!(
            UsageError::NoOrganizations.endpoint(),
            Some(Endpoint::Organizations)
        );
        assert_eq!(UsageError::NoSessionKey.endpoint(), None);
    }
}

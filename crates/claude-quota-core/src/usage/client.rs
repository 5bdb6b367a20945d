//! Blocking HTTP client for the claude.ai web API.

use std::time::Duration;

use tracing::{debug, warn};

use super::types::{Organization, UsageResponse, UsageSnapshot};
use crate::error::{Endpoint, UsageError};
use crate::session::SessionKey;

/// Production API origin
pub const DEFAULT_BASE_URL: &str = "https://claude.ai";

/// Options for building a [`ClaudeClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API origin without trailing slash (e.g. `https://claude.ai`)
    pub base_url: String,
    /// Overall timeout per request; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// claude.ai API client authenticated with a session cookie
pub struct ClaudeClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ClaudeClient {
    /// Create a client from options
    pub fn new(options: ClientOptions) -> Self {
        // Status codes are checked by hand so non-200 success codes fail too
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(options.timeout)
            .build();

        Self {
            agent: ureq::Agent::new_with_config(config),
            base_url: options.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// API origin this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Return the UUID of the first organization visible to the session
    pub fn fetch_organization_id(&self, session_key: &SessionKey) -> Result<String, UsageError> {
        let url = format!("{}/api/organizations", self.base_url);
        let body = self.get_json(&url, session_key, Endpoint::Organizations)?;

        let organizations: Vec<Organization> =
            serde_json::from_str(&body).map_err(|source| UsageError::Format {
                endpoint: Endpoint::Organizations,
                source,
            })?;
        debug!("Found {} organization(s)", organizations.len());

        organizations
            .into_iter()
            .next()
            .map(|org| org.uuid)
            .ok_or(UsageError::NoOrganizations)
    }

    /// Fetch the five-hour usage window of an organization
    pub fn fetch_usage(
        &self,
        session_key: &SessionKey,
        organization_id: &str,
    ) -> Result<UsageSnapshot, UsageError> {
        let url = format!(
            "{}/api/organizations/{}/usage",
            self.base_url, organization_id
        );
        let body = self.get_json(&url, session_key, Endpoint::Usage)?;

        let response: UsageResponse =
            serde_json::from_str(&body).map_err(|source| UsageError::Format {
                endpoint: Endpoint::Usage,
                source,
            })?;
        Ok(response.into())
    }

    /// Authenticated GET; returns the body of a 200 response
    fn get_json(
        &self,
        url: &str,
        session_key: &SessionKey,
        endpoint: Endpoint,
    ) -> Result<String, UsageError> {
        debug!("GET {}", url);

        let mut response = self
            .agent
            .get(url)
            .header("Cookie", session_key.cookie())
            .header("Accept", "application/json")
            .call()
            .map_err(|e| transport_error(endpoint, e))?;

        let status = response.status().as_u16();
        if status != 200 {
            warn!("{} returned HTTP {}", url, status);
            return Err(UsageError::Status { endpoint, status });
        }

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_error(endpoint, e))
    }
}

fn transport_error(endpoint: Endpoint, error: ureq::Error) -> UsageError {
    warn!("{}: {}", endpoint.failure_message(), error);
    UsageError::Transport {
        endpoint,
        source: Box::new(error),
    }
}

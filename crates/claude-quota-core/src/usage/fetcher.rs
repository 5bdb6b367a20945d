//! Sequential usage fetch: session key, organization, usage.

use tracing::{debug, info};

use super::client::ClaudeClient;
use super::types::UsageSnapshot;
use crate::error::UsageError;
use crate::session::SessionKey;

/// Fetch the five-hour usage snapshot for the session
///
/// 1. Fails with [`UsageError::NoSessionKey`] when no key was loaded
/// 2. Resolves the first organization, unless `organization_id` is given
/// 3. Fetches that organization's usage
///
/// The first failing step ends the fetch; nothing is retried.
pub fn fetch_usage(
    client: &ClaudeClient,
    session_key: Option<&SessionKey>,
    organization_id: Option<&str>,
) -> Result<UsageSnapshot, UsageError> {
    let session_key = session_key.ok_or(UsageError::NoSessionKey)?;

    let organization_id = match organization_id {
        Some(id) => {
            debug!("Using configured organization {}", id);
            id.to_string()
        }
        None => client.fetch_organization_id(session_key)?,
    };

    let snapshot = client.fetch_usage(session_key, &organization_id)?;
    info!(
        "Usage for {}: {}% (resets at {})",
        organization_id,
        snapshot.utilization,
        snapshot.resets_at.as_deref().unwrap_or("-")
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::ClientOptions;
    use mockito::{Server, ServerGuard};
    use pretty_assertions::assert_eq;

    fn client_for(server: &ServerGuard) -> ClaudeClient {
        ClaudeClient::new(ClientOptions {
            base_url: server.url(),
            timeout: None,
        })
    }

    #[test]
    fn test_missing_session_key_makes_no_request() {
        let mut server = Server::new();
        let ep = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create();

        let err = fetch_usage(&client_for(&server), None, None).unwrap_err();
        ep.assert();
        assert!(matches!(err, UsageError::NoSessionKey));
    }

    #[test]
    fn test_resolves_first_organization() {
        let mut server = Server::new();
        let orgs = server
            .mock("GET", "/api/organizations")
            .with_status(200)
            .with_body(r#"[{"uuid":"org-123"},{"uuid":"org-999"}]"#)
            .create();
        let usage = server
            .mock("GET", "/api/organizations/org-123/usage")
            .with_status(200)
            .with_body(r#"{"five_hour":{"utilization":42}}"#)
            .create();

        let key = SessionKey::new("sk-test").unwrap();
        let snapshot = fetch_usage(&client_for(&server), Some(&key), None).unwrap();
        orgs.assert();
        usage.assert();
        assert_eq!(
            snapshot,
            UsageSnapshot {
                utilization: 42,
                resets_at: None,
            }
        );
    }

    #[test]
    fn test_configured_organization_skips_resolution() {
        let mut server = Server::new();
        let orgs = server
            .mock("GET", "/api/organizations")
            .expect(0)
            .create();
        let usage = server
            .mock("GET", "/api/organizations/org-fixed/usage")
            .with_status(200)
            .with_body(r#"{"five_hour":{"utilization":7,"resets_at":"2024-01-01T05:00:00Z"}}"#)
            .create();

        let key = SessionKey::new("sk-test").unwrap();
        let snapshot =
            fetch_usage(&client_for(&server), Some(&key), Some("org-fixed")).unwrap();
        orgs.assert();
        usage.assert();
        assert_eq!(snapshot.utilization, 7);
    }

    #[test]
    fn test_organization_failure_stops_before_usage() {
        let mut server = Server::new();
        let _orgs = server
            .mock("GET", "/api/organizations")
            .with_status(401)
            .create();
        let usage = server
            .mock("GET", mockito::Matcher::Regex("/usage$".to_string()))
            .expect(0)
            .create();

        let key = SessionKey::new("sk-test").unwrap();
        let err = fetch_usage(&client_for(&server), Some(&key), None).unwrap_err();
        usage.assert();
        assert_eq!(err.to_string(), "Failed to fetch org ID");
    }
}

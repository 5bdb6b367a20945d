//! Wires settings, session key and client into one usage fetch.

use anyhow::Result;
use tracing::debug;

use claude_quota_core::session::{resolve_session_key, SESSION_KEY_ENV};
use claude_quota_core::{fetch_usage, ClaudeClient, StatusLine};

use crate::config::{Config, Settings};

/// Load the settings file, apply CLI overrides and normalize
pub fn load_settings(cli: &Config) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_ref())?;
    settings.merge_cli(cli);
    settings.validate();
    debug!("Settings: {:?}", settings);
    Ok(settings)
}

/// Run one usage fetch and return the line to print
pub fn run(settings: &Settings) -> StatusLine {
    let env_key = std::env::var(SESSION_KEY_ENV).ok();
    let key_path = settings.session_key_path();
    let session_key = resolve_session_key(env_key.as_deref(), key_path.as_deref());

    let client = ClaudeClient::new(settings.client_options());
    let result = fetch_usage(
        &client,
        session_key.as_ref(),
        settings.organization_id.as_deref(),
    );
    if let Err(e) = &result {
        debug!("Usage fetch failed: {:?}", e);
    }

    StatusLine::from_result(&result)
}

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use claude_quota_core::session::default_session_key_path;
use claude_quota_core::usage::{ClientOptions, DEFAULT_BASE_URL};

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Print Claude five-hour usage as `utilization|resets_at`"
)]
pub struct Config {
    /// Enable debug logging (stderr)
    #[arg(short, long)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File holding the claude.ai session key
    #[arg(long, env = "CLAUDE_QUOTA_SESSION_KEY_FILE")]
    pub session_key_file: Option<PathBuf>,

    /// API origin
    #[arg(long, env = "CLAUDE_QUOTA_BASE_URL")]
    pub base_url: Option<String>,

    /// Organization UUID (skips organization lookup)
    #[arg(long = "org")]
    pub organization_id: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Application settings (from config file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API origin
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Session key file (defaults to ~/.claude-session-key)
    #[serde(default)]
    pub session_key_path: Option<PathBuf>,

    /// Fixed organization UUID
    #[serde(default)]
    pub organization_id: Option<String>,

    /// Request timeout in seconds (unset = HTTP client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_key_path: None,
            organization_id: None,
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must exist
        if let Some(p) = path {
            return Self::load_file(p);
        }

        let default_paths = [
            dirs::config_dir().map(|p| p.join("claude-quota/config.toml")),
            dirs::home_dir().map(|p| p.join(".config/claude-quota/config.toml")),
            dirs::home_dir().map(|p| p.join(".claude-quota.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_file(path);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Merge CLI config into settings (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: &Config) {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(path) = &cli.session_key_file {
            self.session_key_path = Some(path.clone());
        }
        if let Some(org) = &cli.organization_id {
            self.organization_id = Some(org.clone());
        }
        if let Some(timeout) = cli.timeout_secs {
            self.timeout_secs = Some(timeout);
        }
    }

    /// Validate and normalize settings values
    pub fn validate(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        };

        self.organization_id = self
            .organization_id
            .take()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        if self.timeout_secs == Some(0) {
            self.timeout_secs = None;
        }
    }

    /// Session key file to read
    pub fn session_key_path(&self) -> Option<PathBuf> {
        self.session_key_path
            .clone()
            .or_else(default_session_key_path)
    }

    /// HTTP client options derived from these settings
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

/// File name of the session key under the home directory
pub const SESSION_KEY_FILE_NAME: &str = ".claude-session-key";

/// Environment variable that overrides the session key file
pub const SESSION_KEY_ENV: &str = "CLAUDE_SESSION_KEY";

/// A trimmed, non-empty claude.ai session key
///
/// `Debug` output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey(String);

impl SessionKey {
    /// Trim surrounding whitespace; `None` if nothing is left
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Raw key value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Cookie` request header
    pub fn cookie(&self) -> String {
        format!("sessionKey={}", self.0)
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(<redacted>)")
    }
}

/// `~/.claude-session-key`, or `None` when the home directory is unknown
pub fn default_session_key_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SESSION_KEY_FILE_NAME))
}

/// Read a session key from `path`
///
/// Missing, unreadable, non-UTF-8 and blank files all yield `None`.
pub fn load_session_key(path: &Path) -> Option<SessionKey> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let key = SessionKey::new(&content);
            if key.is_none() {
                debug!("Session key file {:?} is blank", path);
            }
            key
        }
        Err(e) => {
            debug!("Cannot read session key file {:?}: {}", path, e);
            None
        }
    }
}

/// Pick the session key from the environment override or the key file
///
/// A non-blank `env_value` wins. Otherwise `path` is read; `None` for `path`
/// means no home directory could be determined.
pub fn resolve_session_key(env_value: Option<&str>, path: Option<&Path>) -> Option<SessionKey> {
    if let Some(key) = env_value.and_then(SessionKey::new) {
        debug!("Using session key from {}", SESSION_KEY_ENV);
        return Some(key);
    }
    load_session_key(path?)
}

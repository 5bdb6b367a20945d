//! Session key loading.
//!
//! The claude.ai session key lives in a plain text file in the user's home
//! directory. It can be overridden through the `CLAUDE_SESSION_KEY`
//! environment variable.

mod key;

pub use key::{
    default_session_key_path, load_session_key, resolve_session_key, SessionKey,
    SESSION_KEY_ENV, SESSION_KEY_FILE_NAME,
};

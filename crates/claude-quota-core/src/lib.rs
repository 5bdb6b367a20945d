//! Core library for claude-quota.
//!
//! Reads the claude.ai session key, resolves the account's organization and
//! fetches its five-hour usage window, then renders the result as a single
//! `utilization|resets_at` status line.

pub mod error;
pub mod output;
pub mod session;
pub mod usage;

pub use error::{Endpoint, UsageError};
pub use output::StatusLine;
pub use session::SessionKey;
pub use usage::{fetch_usage, ClaudeClient, ClientOptions, UsageSnapshot};

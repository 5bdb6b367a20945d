//! Usage monitoring via the claude.ai web API.
//!
//! Resolves the first organization of the session, then reads that
//! organization's five-hour usage window.

pub mod client;
pub mod fetcher;
pub mod types;

pub use client::{ClaudeClient, ClientOptions, DEFAULT_BASE_URL};
pub use fetcher::fetch_usage;
pub use types::{Organization, UsageSnapshot};

//! claude-quota: print Claude five-hour usage as a single status line.

pub mod app;
pub mod config;

pub use app::{load_settings, run};

//! Infrastructure layer - Adapter implementations
//!
//! Contains the console notifier and the config file store.

pub mod config;
pub mod notifier;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notifier::{NoticeReport, TimedNotifier, PROGRESS_MARKER};

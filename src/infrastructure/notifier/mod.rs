//! Console notifier adapter

pub mod timed;

pub use timed::{NoticeReport, TimedNotifier, PROGRESS_MARKER};

//! Timing value objects

pub mod duration;
pub mod settings;

pub use duration::Duration;
pub use settings::{NoticeSettings, DEFAULT_MESSAGE};

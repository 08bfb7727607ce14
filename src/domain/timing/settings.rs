//! Notice settings value object

use super::duration::Duration;

/// Default message printed once the initial wait elapses
pub const DEFAULT_MESSAGE: &str = "Working";

/// What a notifier prints and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeSettings {
    pub message: String,
    pub initial_wait: Duration,
    pub tick_interval: Duration,
}

impl NoticeSettings {
    pub fn new(
        message: impl Into<String>,
        initial_wait: Duration,
        tick_interval: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            initial_wait,
            tick_interval,
        }
    }

    /// Replace the message, keeping the timings
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_MESSAGE,
            Duration::default_initial_wait(),
            Duration::default_tick_interval(),
        )
    }
}

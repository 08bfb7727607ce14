//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::{ConfigError, DurationParseError};
use crate::domain::timing::{Duration, NoticeSettings, DEFAULT_MESSAGE};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub message: Option<String>,
    pub initial_wait: Option<String>,
    pub tick_interval: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            message: Some(DEFAULT_MESSAGE.to_string()),
            initial_wait: Some(Duration::default_initial_wait().to_string()),
            tick_interval: Some(Duration::default_tick_interval().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            message: other.message.or(self.message),
            initial_wait: other.initial_wait.or(self.initial_wait),
            tick_interval: other.tick_interval.or(self.tick_interval),
        }
    }

    /// Get message, or the default if not set
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }

    /// Resolve into notice settings.
    ///
    /// Unset fields fall back to their defaults; set but invalid fields are
    /// reported rather than silently replaced.
    pub fn to_settings(&self) -> Result<NoticeSettings, ConfigError> {
        let initial_wait = match self.initial_wait.as_deref() {
            Some(value) => validate_duration(KEY_INITIAL_WAIT, value)?,
            None => Duration::default_initial_wait(),
        };
        let tick_interval = match self.tick_interval.as_deref() {
            Some(value) => validate_duration(KEY_TICK_INTERVAL, value)?,
            None => Duration::default_tick_interval(),
        };

        Ok(NoticeSettings::new(
            self.message_or_default(),
            initial_wait,
            tick_interval,
        ))
    }
}

/// Config key for the message text
pub const KEY_MESSAGE: &str = "message";
/// Config key for the wait before the message
pub const KEY_INITIAL_WAIT: &str = "initial_wait";
/// Config key for the interval between markers
pub const KEY_TICK_INTERVAL: &str = "tick_interval";

/// Parse a duration value for `key`. The tick interval must be non-zero.
pub fn validate_duration(key: &str, value: &str) -> Result<Duration, ConfigError> {
    let duration: Duration = value
        .parse()
        .map_err(|e: DurationParseError| ConfigError::ValidationError {
            key: key.to_string(),
            message: e.to_string(),
        })?;

    if key == KEY_TICK_INTERVAL && duration.is_zero() {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(duration)
}

//! Domain error types

use std::io;

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration: \"{input}\". Expected e.g. 200ms, 0.5s or 1m30s")]
pub struct DurationParseError {
    pub input: String,
}

/// Errors raised by a timed notifier session
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Failed to start notifier thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("Tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("Failed to write notifier output: {0}")]
    Output(#[source] io::Error),

    #[error("Notifier thread panicked")]
    TaskPanicked,

    #[error("Failed to join notifier task: {0}")]
    Join(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_error_mentions_input() {
        let err = DurationParseError {
            input: "5x".to_string(),
        };
        assert!(err.to_string().contains("\"5x\""));
    }

    #[test]
    fn spawn_error_keeps_source() {
        use std::error::Error as _;

        let err = NotifierError::Spawn(io::Error::new(io::ErrorKind::OutOfMemory, "no threads"));
        assert!(err.to_string().contains("no threads"));
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_error_display() {
        let err = ConfigError::ValidationError {
            key: "tick_interval".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'tick_interval': must be greater than zero"
        );
    }
}

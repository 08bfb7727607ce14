//! Configuration value objects

pub mod app_config;

pub use app_config::{
    validate_duration, AppConfig, KEY_INITIAL_WAIT, KEY_MESSAGE, KEY_TICK_INTERVAL,
};

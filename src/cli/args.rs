//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

use crate::domain::config::{AppConfig, KEY_INITIAL_WAIT, KEY_MESSAGE, KEY_TICK_INTERVAL};
use crate::domain::timing::{Duration, NoticeSettings};

/// timed-print - progress notices for long-running operations
#[derive(Parser, Debug)]
#[command(name = "timed-print")]
#[command(version)]
#[command(about = "Print a progress notice while a long-running operation is in progress")]
#[command(long_about = None)]
pub struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keep a notice running for a fixed time (Ctrl-C ends it early)
    Hold {
        /// How long to hold the notice (e.g., 5s, 1m30s)
        #[arg(value_name = "TIME")]
        time: String,

        #[command(flatten)]
        notice: NoticeArgs,
    },
    /// Run a command with a notice running until it exits
    Run {
        #[command(flatten)]
        notice: NoticeArgs,

        /// Command and its arguments
        #[arg(
            value_name = "COMMAND",
            required = true,
            num_args = 1..,
            trailing_var_arg = true
        )]
        command: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Notice options shared by `hold` and `run`
#[derive(Args, Debug, Clone, Default)]
pub struct NoticeArgs {
    /// Message printed once the initial wait elapses
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Wait before printing the message (e.g., 0s, 200ms, 0.5s)
    #[arg(short = 'w', long = "wait", value_name = "TIME")]
    pub initial_wait: Option<String>,

    /// Interval between progress markers (e.g., 400ms, 1s)
    #[arg(short = 't', long = "tick", value_name = "TIME")]
    pub tick_interval: Option<String>,
}

impl NoticeArgs {
    /// CLI layer of the merged config
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            message: self.message.clone(),
            initial_wait: self.initial_wait.clone(),
            tick_interval: self.tick_interval.clone(),
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed hold options
#[derive(Debug, Clone)]
pub struct HoldOptions {
    pub settings: NoticeSettings,
    pub hold: Duration,
}

/// Parsed run options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settings: NoticeSettings,
    pub command: Vec<String>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[KEY_MESSAGE, KEY_INITIAL_WAIT, KEY_TICK_INTERVAL];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the hold/run runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    load_merged_config, run_command, run_hold, EXIT_ERROR, EXIT_INTERRUPTED, EXIT_SUCCESS,
    EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, HoldOptions, NoticeArgs, RunOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;

//! CLI presenter for output formatting
//!
//! Status lines go to stderr; stdout belongs to the notice itself.

use colored::*;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: Option<&str>) {
        println!("{}", format_key_value(key, value));
    }
}

/// Render a config entry, marking unset values
pub fn format_key_value(key: &str, value: Option<&str>) -> String {
    format!("{}: {}", key.cyan(), value.unwrap_or("(not set)"))
}

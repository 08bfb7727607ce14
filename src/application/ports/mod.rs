//! Port interfaces (traits) for external systems

pub mod config;

pub use config::ConfigStore;

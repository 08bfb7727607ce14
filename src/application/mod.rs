//! Application layer - Use cases and port interfaces
//!
//! Contains the scoped notice helpers and the trait definitions
//! for external system interactions.

pub mod ports;
pub mod scoped;

// Re-export use cases
pub use scoped::{notify_while, notify_while_async};

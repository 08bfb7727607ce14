//! Domain layer - Core business logic
//!
//! Contains value objects, the session entity, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod session;
pub mod timing;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use session::{NotifierSession, SessionState};
pub use timing::{Duration, NoticeSettings};

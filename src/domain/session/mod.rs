//! Notifier session entity

pub mod notifier_session;

pub use notifier_session::{NotifierSession, SessionState};

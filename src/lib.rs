//! timed-print - scope-guarded progress notices
//!
//! A [`TimedNotifier`] prints a message once an initial wait elapses, then a
//! progress marker per tick interval, for as long as it is alive. Dropping it
//! stops the notice, waits for the background thread, and finishes the line.
//!
//! ```no_run
//! use std::time::Duration;
//! use timed_print::TimedNotifier;
//!
//! # fn main() -> Result<(), timed_print::NotifierError> {
//! let _notice = TimedNotifier::start("Indexing", Duration::from_secs(1), Duration::from_secs(1))?;
//! // long-running work; the notice ends when `_notice` goes out of scope
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Domain**: Session state machine, timing value objects, errors
//! - **Application**: Scoped helpers and port interfaces (traits)
//! - **Infrastructure**: The console notifier and the config file store
//! - **CLI**: Argument parsing, presenter, signals, hold/run runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{notify_while, notify_while_async};
pub use domain::{NoticeSettings, NotifierError, NotifierSession, SessionState};
pub use infrastructure::{NoticeReport, TimedNotifier, PROGRESS_MARKER};

//! Notifier session state machine

use std::fmt;
use std::time::Duration;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Pending,
    Cancelled,
}

impl SessionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One notification lifecycle, from construction to teardown.
///
/// State machine:
///   PENDING -> CANCELLED (cancel)
///
/// The transition is one-way. Cancelling an already cancelled session is a
/// no-op rather than an error, so teardown paths can call it unconditionally.
#[derive(Debug, Clone)]
pub struct NotifierSession {
    message: String,
    initial_wait: Duration,
    tick_interval: Duration,
    state: SessionState,
}

impl NotifierSession {
    /// Create a new pending session
    pub fn new(
        message: impl Into<String>,
        initial_wait: Duration,
        tick_interval: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            initial_wait,
            tick_interval,
            state: SessionState::Pending,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn initial_wait(&self) -> Duration {
        self.initial_wait
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SessionState::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == SessionState::Cancelled
    }

    /// Transition from PENDING to CANCELLED.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn cancel(&mut self) -> bool {
        if self.state == SessionState::Cancelled {
            return false;
        }
        self.state = SessionState::Cancelled;
        true
    }

    /// Number of progress markers a session cancelled after `active` should
    /// have printed: `floor((active - initial_wait) / tick_interval)`, never
    /// negative.
    pub fn expected_markers(&self, active: Duration) -> u64 {
        if self.tick_interval.is_zero() {
            return 0;
        }
        let after_message = active.saturating_sub(self.initial_wait);
        u64::try_from(after_message.as_nanos() / self.tick_interval.as_nanos()).unwrap_or(u64::MAX)
    }
}

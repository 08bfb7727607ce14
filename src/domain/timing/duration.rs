//! Duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default wait before the message is printed (1 second)
pub const DEFAULT_INITIAL_WAIT_MS: u64 = 1_000;

/// Default interval between progress markers (1 second)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60_000;

/// Value object representing a non-negative time span.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    /// Zero-length duration
    pub const ZERO: Self = Self::from_millis(0);

    /// Create a Duration from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Duration from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs.saturating_mul(MILLIS_PER_SECOND),
        }
    }

    /// Default initial wait (1 second)
    pub const fn default_initial_wait() -> Self {
        Self::from_millis(DEFAULT_INITIAL_WAIT_MS)
    }

    /// Default tick interval (1 second)
    pub const fn default_tick_interval() -> Self {
        Self::from_millis(DEFAULT_TICK_INTERVAL_MS)
    }

    /// Get duration in whole seconds
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / MILLIS_PER_SECOND
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    pub const fn is_zero(&self) -> bool {
        self.milliseconds == 0
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl From<Duration> for StdDuration {
    fn from(d: Duration) -> Self {
        d.as_std()
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string into a Duration value object.
    /// Supported formats: "200ms", "30s", "0.2s", "1m", "2m30s", "1s500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DurationParseError {
            input: s.to_string(),
        };

        let input = s.trim().to_lowercase();
        if input.is_empty() {
            return Err(invalid());
        }

        let mut chars = input.chars().peekable();
        let mut total_ms = 0.0_f64;

        while chars.peek().is_some() {
            let mut number = String::new();
            while let Some(&ch) = chars.peek() {
                if !(ch.is_ascii_digit() || ch == '.') {
                    break;
                }
                number.push(ch);
                chars.next();
            }

            let mut unit = String::new();
            while let Some(&ch) = chars.peek() {
                if !ch.is_ascii_alphabetic() {
                    break;
                }
                unit.push(ch);
                chars.next();
            }

            if number.is_empty() || unit.is_empty() {
                return Err(invalid());
            }

            let factor = match unit.as_str() {
                "ms" if !number.contains('.') => 1,
                "s" => MILLIS_PER_SECOND,
                "m" => MILLIS_PER_MINUTE,
                _ => return Err(invalid()),
            };

            let value: f64 = number.parse().map_err(|_| invalid())?;
            total_ms += value * factor as f64;
        }

        if !total_ms.is_finite() || total_ms >= u64::MAX as f64 {
            return Err(invalid());
        }

        Ok(Self::from_millis(total_ms.round() as u64))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milliseconds == 0 {
            return write!(f, "0s");
        }

        let minutes = self.milliseconds / MILLIS_PER_MINUTE;
        let seconds = (self.milliseconds % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        let millis = self.milliseconds % MILLIS_PER_SECOND;

        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 {
            write!(f, "{}s", seconds)?;
        }
        if millis > 0 {
            write!(f, "{}ms", millis)?;
        }
        Ok(())
    }
}

//! Remaining-time tracking for a single countdown

use std::fmt;

/// Remaining time of a countdown, tracked as whole minutes and seconds.
///
/// `seconds` is always in `0..=59`. A countdown is mutated only by
/// [`Countdown::decrement`], once per tick, and is replaced (never reused)
/// when a new countdown starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    minutes: u64,
    seconds: u64,
}

impl Countdown {
    /// Create a countdown from a total number of seconds
    pub fn from_secs(total_seconds: u64) -> Self {
        Self {
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
        }
    }

    /// Reduce the remaining time by one second.
    ///
    /// When `seconds` is 0 the decrement borrows one minute and sets
    /// `seconds` to 59. Decrementing a completed countdown is a no-op, so
    /// the remaining time never goes negative.
    pub fn decrement(&mut self) {
        if self.is_complete() {
            return;
        }
        if self.seconds == 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            self.seconds -= 1;
        }
    }

    /// Check if the countdown has reached zero
    pub fn is_complete(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Countdown {
    /// Zero-padded `MM:SS`; minutes of 100 or more are shown as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_zero_padded() {
        assert_eq!(Countdown::from_secs(0).to_string(), "00:00");
        assert_eq!(Countdown::from_secs(5).to_string(), "00:05");
        assert_eq!(Countdown::from_secs(65).to_string(), "01:05");
        assert_eq!(Countdown::from_secs(600).to_string(), "10:00");
        assert_eq!(Countdown::from_secs(3599).to_string(), "59:59");
    }

    #[test]
    fn test_render_large_minutes_unbounded() {
        // 2 hours: minutes keep counting past 59, and past 99 unpadded
        assert_eq!(Countdown::from_secs(7200).to_string(), "120:00");
    }

    #[test]
    fn test_decrement_borrows_a_minute() {
        let mut countdown = Countdown::from_secs(60);
        countdown.decrement();
        assert_eq!(countdown.to_string(), "00:59");
    }

    #[test]
    fn test_decrement_within_a_minute() {
        let mut countdown = Countdown::from_secs(90);
        countdown.decrement();
        assert_eq!(countdown.to_string(), "01:29");
    }

    #[test]
    fn test_zero_is_complete_and_stays_at_zero() {
        let mut countdown = Countdown::from_secs(0);
        assert!(countdown.is_complete());
        countdown.decrement();
        assert!(countdown.is_complete());
        assert_eq!(countdown.to_string(), "00:00");
    }

    #[test]
    fn test_counts_down_to_complete() {
        let mut countdown = Countdown::from_secs(3);
        assert!(!countdown.is_complete());
        countdown.decrement();
        countdown.decrement();
        assert!(!countdown.is_complete());
        countdown.decrement();
        assert!(countdown.is_complete());
    }
}

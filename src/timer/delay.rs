//! Delay specification: a user-entered amount plus a unit

use std::num::IntErrorKind;

use clap::ValueEnum;
use thiserror::Error;

/// Unit of the delay amount entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelayUnit {
    Seconds,
    Minutes,
    Hours,
}

impl DelayUnit {
    /// Selector order in the UI
    pub const ALL: [DelayUnit; 3] = [DelayUnit::Seconds, DelayUnit::Minutes, DelayUnit::Hours];

    /// Seconds per unit
    pub fn multiplier(self) -> u64 {
        match self {
            DelayUnit::Seconds => 1,
            DelayUnit::Minutes => 60,
            DelayUnit::Hours => 3600,
        }
    }

    /// Short label shown next to the unit selector
    pub fn label(self) -> &'static str {
        match self {
            DelayUnit::Seconds => "sec",
            DelayUnit::Minutes => "min",
            DelayUnit::Hours => "hours",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DelayUnit::Seconds => DelayUnit::Minutes,
            DelayUnit::Minutes => DelayUnit::Hours,
            DelayUnit::Hours => DelayUnit::Seconds,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DelayUnit::Seconds => DelayUnit::Hours,
            DelayUnit::Minutes => DelayUnit::Seconds,
            DelayUnit::Hours => DelayUnit::Minutes,
        }
    }
}

/// Rejected delay input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelayError {
    #[error("delay amount is not a non-negative integer")]
    NotANumber,
    #[error("delay amount is too large")]
    TooLarge,
}

/// Convert a user-entered amount and unit into a total number of seconds.
///
/// The amount must be a non-negative integer literal; anything else
/// (including negative numbers) is rejected. Totals that overflow `u64`
/// are rejected rather than clamped.
pub fn total_seconds(amount: &str, unit: DelayUnit) -> Result<u64, DelayError> {
    let amount: u64 = amount.trim().parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow => DelayError::TooLarge,
            _ => DelayError::NotANumber,
        }
    })?;
    amount
        .checked_mul(unit.multiplier())
        .ok_or(DelayError::TooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(total_seconds("2", DelayUnit::Hours), Ok(7200));
        assert_eq!(total_seconds("90", DelayUnit::Seconds), Ok(90));
        assert_eq!(total_seconds("20", DelayUnit::Minutes), Ok(1200));
    }

    #[test]
    fn test_zero_is_a_valid_amount() {
        assert_eq!(total_seconds("0", DelayUnit::Minutes), Ok(0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(total_seconds(" 15 ", DelayUnit::Seconds), Ok(15));
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        assert_eq!(total_seconds("abc", DelayUnit::Seconds), Err(DelayError::NotANumber));
        assert_eq!(total_seconds("", DelayUnit::Seconds), Err(DelayError::NotANumber));
        assert_eq!(total_seconds("1.5", DelayUnit::Seconds), Err(DelayError::NotANumber));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(total_seconds("-5", DelayUnit::Minutes), Err(DelayError::NotANumber));
    }

    #[test]
    fn test_overflowing_amount_rejected() {
        assert_eq!(
            total_seconds("99999999999999999999", DelayUnit::Seconds),
            Err(DelayError::TooLarge)
        );
        assert_eq!(
            total_seconds(&u64::MAX.to_string(), DelayUnit::Hours),
            Err(DelayError::TooLarge)
        );
    }

    #[test]
    fn test_unit_cycling_covers_all_units() {
        let mut unit = DelayUnit::Seconds;
        for _ in 0..3 {
            assert_eq!(unit.prev().next(), unit);
            unit = unit.next();
        }
        assert_eq!(unit, DelayUnit::Seconds);
    }
}

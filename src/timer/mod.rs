//! Countdown timer module
//!
//! This module contains the countdown value itself and the delay
//! specification (amount + unit) it is constructed from.

pub mod countdown;
pub mod delay;

// Re-export main types
pub use countdown::Countdown;
pub use delay::{total_seconds, DelayError, DelayUnit};

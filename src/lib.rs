//! Snooze - a terminal countdown timer that suspends the system
//!
//! This library provides the countdown state machine and the collaborator
//! contracts it drives (display surface, tick scheduler, power service),
//! plus the systemd and terminal implementations of those contracts.

pub mod config;
pub mod control;
pub mod power;
pub mod schedule;
pub mod timer;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use control::{Control, Controller, ControllerState, DisplaySurface, PowerError, PowerService, TickScheduler};
pub use timer::{Countdown, DelayError, DelayUnit};

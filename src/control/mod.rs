//! Countdown controller module
//!
//! This module contains the state machine driving a countdown and the
//! collaborator contracts it depends on, so the machine can run against a
//! real terminal and power service or against test doubles.

pub mod controller;
pub mod surfaces;

// Re-export main types
pub use controller::{Controller, ControllerState};
pub use surfaces::{Control, DisplaySurface, PowerError, PowerService, TickScheduler};

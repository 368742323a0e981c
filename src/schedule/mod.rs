//! Tick scheduling module
//!
//! This module contains the deadline-based scheduler the event loop polls
//! between input rounds.

pub mod deadline;

// Re-export main types
pub use deadline::{DeadlineScheduler, TickHandle};

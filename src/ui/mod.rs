//! Terminal frontend module
//!
//! This module contains the ratatui surface the countdown renders to and
//! the crossterm event loop driving the controller.

pub mod app;
pub mod draw;
pub mod surface;

// Re-export main types
pub use app::App;
pub use surface::{DelayForm, TermSurface};

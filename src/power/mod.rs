//! System power module
//!
//! This module contains the systemd-backed implementation of the power
//! service: hibernation state queries, hibernation disabling, and the
//! suspend request itself.

pub mod systemd;

// Re-export main types
pub use systemd::SystemdPower;

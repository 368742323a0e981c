//! Collaborator contracts for the countdown controller

use std::time::Duration;

use thiserror::Error;

/// User-operable controls whose enabled state the controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Sleep,
    Cancel,
}

/// The surface the countdown is presented on.
///
/// The controller owns no rendering logic; it pushes display text and
/// control-enable state here and asks for modal confirmation when needed.
/// Modal calls may block until the user answers.
pub trait DisplaySurface {
    fn set_display_text(&mut self, text: &str);
    fn set_control_enabled(&mut self, control: Control, enabled: bool);
    fn show_warning(&mut self, message: &str, title: &str);
    fn ask_yes_no(&mut self, message: &str, title: &str) -> bool;
}

/// One-shot tick scheduling with deterministic cancellation.
///
/// At most one tick is outstanding at a time: the controller re-schedules
/// on each tick and cancels the pending handle on cancel. A canceled or
/// superseded handle must never fire.
pub trait TickScheduler {
    type Handle: Copy + PartialEq;

    /// Schedule a tick to fire after `delay`, invalidating any previously
    /// scheduled tick.
    fn schedule_after(&mut self, delay: Duration) -> Self::Handle;

    /// Cancel a pending tick. No-op if the handle already fired or was
    /// superseded.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Failures of the system power service
#[derive(Debug, Error)]
pub enum PowerError {
    /// Disabling hibernation was refused; interpreted as missing
    /// administrative rights (a best-effort reading of the underlying
    /// command's exit status).
    #[error("administrative rights are required")]
    PrivilegeRequired,

    /// Querying the hibernation state failed
    #[error("power state query failed: {0}")]
    Query(String),

    /// An external power command could not be run or reported failure
    #[error("{command} failed: {detail}")]
    Command { command: String, detail: String },
}

/// System power operations consumed by the controller
pub trait PowerService {
    /// Report whether the system will hibernate instead of sleeping
    fn hibernation_enabled(&mut self) -> Result<bool, PowerError>;

    /// Turn hibernation off so a suspend request results in soft sleep
    fn disable_hibernation(&mut self) -> Result<(), PowerError>;

    /// Ask the OS to suspend. The countdown is already over when this is
    /// called; failures are logged by the caller and nothing is retried.
    fn request_suspend(&mut self) -> Result<(), PowerError>;
}

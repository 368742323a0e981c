//! Countdown state machine

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::timer::{total_seconds, Countdown, DelayUnit};

use super::surfaces::{Control, DisplaySurface, PowerError, PowerService, TickScheduler};

const TICK_PERIOD: Duration = Duration::from_secs(1);

const FORMAT_ERROR_MESSAGE: &str = "Invalid delay amount entered.";
const FORMAT_ERROR_TITLE: &str = "Format error";
const HIBERNATION_PROMPT: &str = "Hibernation is on. Would you like to disable it? \
    (Answering No will cause the computer to hibernate instead of going to soft sleep.)";
const HIBERNATION_TITLE: &str = "Hibernation";
const ADMIN_MESSAGE: &str = "You must run this program as an administrator.";
const ADMIN_TITLE: &str = "Administrative rights";

/// Lifecycle of a countdown cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Running,
}

/// State machine gating start/cancel and bridging timer ticks to the
/// suspend action.
///
/// Owns its collaborators: the display surface the countdown renders to,
/// the scheduler that fires one tick per second, and the power service.
/// Each transition declares the resulting Sleep/Cancel enable state on the
/// display rather than mutating UI state ambiently.
pub struct Controller<D, S: TickScheduler, P> {
    display: D,
    scheduler: S,
    power: P,
    state: ControllerState,
    countdown: Option<Countdown>,
    pending_tick: Option<S::Handle>,
}

impl<D, S, P> Controller<D, S, P>
where
    D: DisplaySurface,
    S: TickScheduler,
    P: PowerService,
{
    pub fn new(display: D, scheduler: S, power: P) -> Self {
        Self {
            display,
            scheduler,
            power,
            state: ControllerState::Idle,
            countdown: None,
            pending_tick: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Begin a countdown from a user-entered delay.
    ///
    /// Invalid amounts are reported as a format warning and leave the
    /// controller Idle. If hibernation is enabled the user is offered to
    /// disable it first; a failed disable aborts the start (declining the
    /// offer does not - the machine may hibernate instead of sleeping).
    pub fn start(&mut self, amount: &str, unit: DelayUnit) {
        if self.state == ControllerState::Running {
            return;
        }

        let total = match total_seconds(amount, unit) {
            Ok(total) => total,
            Err(e) => {
                warn!("rejected delay amount {:?}: {}", amount, e);
                self.display.show_warning(FORMAT_ERROR_MESSAGE, FORMAT_ERROR_TITLE);
                return;
            }
        };

        if self.resolve_hibernation() {
            return;
        }

        let countdown = Countdown::from_secs(total);
        info!("starting countdown from {} ({} seconds)", countdown, total);
        self.display.set_display_text(&countdown.to_string());
        self.display.set_control_enabled(Control::Sleep, false);
        self.display.set_control_enabled(Control::Cancel, true);
        self.countdown = Some(countdown);
        self.pending_tick = Some(self.scheduler.schedule_after(TICK_PERIOD));
        self.state = ControllerState::Running;
    }

    /// Handle one fired tick.
    ///
    /// Ticks are only honored while Running and only for the currently
    /// pending handle, so a tick left over from a canceled or replaced
    /// schedule never acts.
    pub fn tick(&mut self, fired: S::Handle) {
        if self.state != ControllerState::Running || self.pending_tick != Some(fired) {
            debug!("ignoring stale tick");
            return;
        }
        self.pending_tick = None;

        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        if !countdown.is_complete() {
            countdown.decrement();
        }
        let text = countdown.to_string();
        let complete = countdown.is_complete();
        self.display.set_display_text(&text);

        if complete {
            self.finish();
        } else {
            self.pending_tick = Some(self.scheduler.schedule_after(TICK_PERIOD));
        }
    }

    /// Stop a running countdown without suspending. No-op when Idle.
    pub fn cancel(&mut self) {
        if self.state != ControllerState::Running {
            return;
        }
        info!("countdown canceled");
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel(handle);
        }
        self.countdown = None;
        self.reset_to_idle();
    }

    /// Countdown reached zero: reset the cycle, then fire the suspend
    /// request. The request is fire-and-forget; a failure at this point
    /// has nothing meaningful to retry.
    fn finish(&mut self) {
        info!("countdown complete, requesting system suspend");
        self.countdown = None;
        self.reset_to_idle();
        if let Err(e) = self.power.request_suspend() {
            warn!("suspend request failed: {}", e);
        }
    }

    fn reset_to_idle(&mut self) {
        self.state = ControllerState::Idle;
        self.display.set_control_enabled(Control::Sleep, true);
        self.display.set_control_enabled(Control::Cancel, false);
    }

    /// Run the hibernation confirmation step. Returns true if the start
    /// must be aborted.
    fn resolve_hibernation(&mut self) -> bool {
        let enabled = match self.power.hibernation_enabled() {
            Ok(enabled) => enabled,
            Err(e) => {
                // Best-effort check: proceed without the prompt.
                warn!("hibernation query failed: {}", e);
                return false;
            }
        };
        if !enabled {
            return false;
        }

        if !self.display.ask_yes_no(HIBERNATION_PROMPT, HIBERNATION_TITLE) {
            info!("hibernation left enabled; suspend may hibernate instead of sleeping");
            return false;
        }

        match self.power.disable_hibernation() {
            Ok(()) => {
                info!("hibernation disabled");
                false
            }
            Err(PowerError::PrivilegeRequired) => {
                warn!("hibernation could not be disabled: insufficient privileges");
                self.display.show_warning(ADMIN_MESSAGE, ADMIN_TITLE);
                true
            }
            Err(e) => {
                warn!("hibernation could not be disabled: {}", e);
                self.display
                    .show_warning(&format!("Could not disable hibernation: {e}"), ADMIN_TITLE);
                true
            }
        }
    }
}

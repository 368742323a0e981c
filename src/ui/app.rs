//! Event loop bridging terminal input to the controller

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::config::Config;
use crate::control::{Controller, ControllerState};
use crate::power::SystemdPower;
use crate::schedule::DeadlineScheduler;
use crate::timer::DelayUnit;

use super::surface::{DelayForm, TermSurface};

/// Upper bound on the poll timeout so resizes and key input stay snappy
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Enough digits for any sane delay; keeps the entry field narrow
const MAX_AMOUNT_DIGITS: usize = 6;

/// The terminal application: one cooperative loop that renders, polls
/// input, and fires due ticks.
pub struct App {
    controller: Controller<TermSurface, DeadlineScheduler, SystemdPower>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, terminal: DefaultTerminal) -> Self {
        let form = DelayForm {
            amount: config.amount.clone(),
            unit: config.unit,
        };
        let surface = TermSurface::new(terminal, form);
        Self {
            controller: Controller::new(surface, DeadlineScheduler::new(), SystemdPower::new()),
            should_quit: false,
        }
    }

    /// Run until the user quits. The poll timeout tracks the scheduler's
    /// next deadline so ticks fire within a poll round of becoming due.
    pub fn run(mut self) -> Result<()> {
        while !self.should_quit {
            self.controller.display_mut().draw()?;

            let timeout = self
                .controller
                .scheduler()
                .time_until_due(Instant::now())
                .map_or(INPUT_POLL_TIMEOUT, |due| due.min(INPUT_POLL_TIMEOUT));
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }

            if let Some(handle) = self.controller.scheduler_mut().take_due(Instant::now()) {
                self.controller.tick(handle);
            }
        }
        debug!("event loop finished");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start_countdown(),
            KeyCode::Char('c') => self.controller.cancel(),
            KeyCode::Up => self.cycle_unit(DelayUnit::prev),
            KeyCode::Down => self.cycle_unit(DelayUnit::next),
            KeyCode::Char('s') => self.select_unit(DelayUnit::Seconds),
            KeyCode::Char('m') => self.select_unit(DelayUnit::Minutes),
            KeyCode::Char('h') => self.select_unit(DelayUnit::Hours),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let form = self.controller.display_mut().form_mut();
                if form.amount.len() < MAX_AMOUNT_DIGITS {
                    form.amount.push(ch);
                }
            }
            KeyCode::Backspace => {
                self.controller.display_mut().form_mut().amount.pop();
            }
            _ => {}
        }
    }

    fn start_countdown(&mut self) {
        if self.controller.state() != ControllerState::Idle {
            return;
        }
        let (amount, unit) = {
            let form = self.controller.display().form();
            (form.amount.clone(), form.unit)
        };
        self.controller.start(&amount, unit);
    }

    fn cycle_unit(&mut self, step: fn(DelayUnit) -> DelayUnit) {
        let form = self.controller.display_mut().form_mut();
        form.unit = step(form.unit);
    }

    fn select_unit(&mut self, unit: DelayUnit) {
        self.controller.display_mut().form_mut().unit = unit;
    }
}

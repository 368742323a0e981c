//! Ratatui implementation of the display surface

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::error;

use crate::control::{Control, DisplaySurface};
use crate::timer::{Countdown, DelayUnit};

use super::draw;

/// Delay entry form: the amount field and unit selector
#[derive(Debug, Clone)]
pub struct DelayForm {
    pub amount: String,
    pub unit: DelayUnit,
}

/// Everything the frontend needs to render one frame
#[derive(Debug)]
pub struct ViewState {
    pub countdown_text: String,
    pub sleep_enabled: bool,
    pub cancel_enabled: bool,
    pub form: DelayForm,
}

/// A modal dialog drawn over the main view
#[derive(Debug)]
pub enum Modal<'a> {
    Warning { message: &'a str, title: &'a str },
    Confirm { message: &'a str, title: &'a str },
}

/// The terminal surface the controller renders to.
///
/// Owns the ratatui terminal and the view model. Warnings and yes/no
/// questions are modal: they draw a centered popup and block on input
/// until dismissed, which stalls the event loop for their duration.
pub struct TermSurface {
    terminal: DefaultTerminal,
    view: ViewState,
}

impl TermSurface {
    pub fn new(terminal: DefaultTerminal, form: DelayForm) -> Self {
        Self {
            terminal,
            view: ViewState {
                countdown_text: Countdown::from_secs(0).to_string(),
                sleep_enabled: true,
                cancel_enabled: false,
                form,
            },
        }
    }

    pub fn form(&self) -> &DelayForm {
        &self.view.form
    }

    pub fn form_mut(&mut self) -> &mut DelayForm {
        &mut self.view.form
    }

    pub fn sleep_enabled(&self) -> bool {
        self.view.sleep_enabled
    }

    pub fn cancel_enabled(&self) -> bool {
        self.view.cancel_enabled
    }

    /// Draw the main view
    pub fn draw(&mut self) -> io::Result<()> {
        let view = &self.view;
        self.terminal.draw(|frame| draw::render(frame, view, None))?;
        Ok(())
    }

    fn draw_with_modal(&mut self, modal: &Modal<'_>) -> io::Result<()> {
        let view = &self.view;
        self.terminal
            .draw(|frame| draw::render(frame, view, Some(modal)))?;
        Ok(())
    }

    /// Present a modal and block until it is answered. Returns the yes/no
    /// answer for confirm dialogs, false for warnings.
    fn run_modal(&mut self, modal: Modal<'_>) -> io::Result<bool> {
        loop {
            self.draw_with_modal(&modal)?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (&modal, key.code) {
                    (Modal::Warning { .. }, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) => {
                        return Ok(false);
                    }
                    (Modal::Confirm { .. }, KeyCode::Char('y') | KeyCode::Char('Y')) => {
                        return Ok(true);
                    }
                    (Modal::Confirm { .. }, KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc) => {
                        return Ok(false);
                    }
                    _ => {}
                }
            }
            // Resize and other events fall through to a redraw.
        }
    }
}

impl DisplaySurface for TermSurface {
    fn set_display_text(&mut self, text: &str) {
        self.view.countdown_text = text.to_string();
    }

    fn set_control_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::Sleep => self.view.sleep_enabled = enabled,
            Control::Cancel => self.view.cancel_enabled = enabled,
        }
    }

    fn show_warning(&mut self, message: &str, title: &str) {
        if let Err(e) = self.run_modal(Modal::Warning { message, title }) {
            error!("failed to present warning: {}", e);
        }
    }

    fn ask_yes_no(&mut self, message: &str, title: &str) -> bool {
        match self.run_modal(Modal::Confirm { message, title }) {
            Ok(answer) => answer,
            Err(e) => {
                error!("failed to present confirmation: {}", e);
                false
            }
        }
    }
}

//! Frame rendering for the terminal surface

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Stylize;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::timer::DelayUnit;

use super::surface::{Modal, ViewState};

pub(crate) fn render(frame: &mut Frame, view: &ViewState, modal: Option<&Modal<'_>>) {
    let area = frame.area();
    let outer = Block::bordered().title(" snooze ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [_, countdown_area, _, delay_area, units_area, _, buttons_area, _, hints_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(view.countdown_text.as_str().bold()).centered(),
        countdown_area,
    );

    let entry = format!(" {} ", view.form.amount);
    frame.render_widget(
        Paragraph::new(Line::from(vec!["Set delay: ".into(), entry.reversed()])).centered(),
        delay_area,
    );

    let mut unit_spans: Vec<Span> = Vec::new();
    for unit in DelayUnit::ALL {
        let selected = unit == view.form.unit;
        let marker = if selected { "(x)" } else { "( )" };
        let text = format!("{} {}  ", marker, unit.label());
        unit_spans.push(if selected { text.bold() } else { text.into() });
    }
    frame.render_widget(Paragraph::new(Line::from(unit_spans)).centered(), units_area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            button("Sleep", view.sleep_enabled),
            "   ".into(),
            button("Cancel", view.cancel_enabled),
        ]))
        .centered(),
        buttons_area,
    );

    frame.render_widget(
        Paragraph::new("Enter: sleep  c: cancel  Up/Down: unit  q: quit".dim()).centered(),
        hints_area,
    );

    if let Some(modal) = modal {
        render_modal(frame, area, modal);
    }
}

fn button(label: &str, enabled: bool) -> Span<'static> {
    let text = format!("[ {label} ]");
    if enabled {
        text.bold()
    } else {
        text.dim()
    }
}

fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal<'_>) {
    let (title, message, footer) = match modal {
        Modal::Warning { message, title } => (*title, *message, "press Enter to continue"),
        Modal::Confirm { message, title } => (*title, *message, "y / n"),
    };

    let popup = popup_area(area, 60, 7);
    frame.render_widget(Clear, popup);
    let block = Block::bordered().title(format!(" {title} "));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [message_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(message).wrap(Wrap { trim: true }),
        message_area,
    );
    frame.render_widget(Paragraph::new(footer.dim()).centered(), footer_area);
}

/// Centered rectangle for modal popups
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

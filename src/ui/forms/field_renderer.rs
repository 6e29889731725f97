//! Field rendering utilities for forms

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer. A validation
/// message, when given, is shown on the bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let value_span = if display_value.is_empty() && !is_active {
        Span::styled(
            field.field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(display_value, Style::default().fg(Color::White))
    };

    let content = Paragraph::new(Line::from(vec![
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let label = if field.field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };

    let mut block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.block(block), area);
}

/// Draw the help line shown under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

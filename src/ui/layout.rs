//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{SIGNIN_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Request status
    let indicator = if app.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    let view = app.state.current_view();
    spans.push(Span::styled(
        format!("{}  ", view.path()),
        Style::default().fg(Color::Blue),
    ));

    spans.push(Span::styled(
        get_view_hints(view),
        Style::default().fg(Color::Gray),
    ));

    if app.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::SignUp => format!(
            "Tab:next  Enter:select/submit  {SUBMIT_SHORTCUT}:submit  {SIGNIN_SHORTCUT}:signin  Esc:dismiss"
        ),
        View::SignIn => "Enter:signup  Esc:back  q:quit".to_string(),
        View::Profile => "Esc:back  q:quit".to_string(),
    }
}

//! Toast notifications drawn over the top-right corner

use crate::state::{NotificationKind, Toasts};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_MAX_WIDTH: u16 = 44;

/// Render the active notifications, newest at the top
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &Toasts) {
    let width = TOAST_MAX_WIDTH.min(area.width);
    if toasts.is_empty() || width < 6 {
        return;
    }
    let max_line_width = usize::from(width - 4);
    let bottom = area.bottom();
    let mut y = area.y;

    for toast in toasts.iter().rev() {
        // Border plus at least one line of text
        let remaining = bottom.saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let lines = fit_lines(
            wrap_text(&toast.message, max_line_width),
            usize::from(remaining - 2),
            max_line_width,
        );
        let height = u16::try_from(lines.len())
            .unwrap_or(remaining - 2)
            .saturating_add(2);

        let (title, color) = match toast.kind {
            NotificationKind::Success => (" Success ", Color::Green),
            NotificationKind::Error => (" Error ", Color::Red),
        };
        let toast_area = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height,
        };
        frame.render_widget(Clear, toast_area);

        let content: Vec<Line> = lines
            .into_iter()
            .map(|l| Line::from(Span::raw(format!(" {l}"))))
            .collect();
        let widget = Paragraph::new(content).block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(" Esc ").right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(widget, toast_area);
        y = y.saturating_add(height);
    }
}

/// Cut wrapped lines down to `max_lines`, marking the cut with an ellipsis
fn fit_lines(mut lines: Vec<String>, max_lines: usize, max_width: usize) -> Vec<String> {
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let keep = max_width.saturating_sub(1);
        *last = last.chars().take(keep).collect();
        last.push('…');
    }
    lines
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

//! Signup form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::{CLEAR_IMAGE_SHORTCUT, SIGNIN_SHORTCUT};
use crate::state::{Form, SignupField, SignupForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the form is drawn
const FORM_MAX_WIDTH: u16 = 84;
/// Text inputs are laid out two per row
const FIELDS_PER_ROW: usize = 2;
const FIELD_HEIGHT: u16 = 3;

/// Draw the signup screen
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(FORM_MAX_WIDTH);
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let block = Block::default()
        .title(" Create your account ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let form = &app.state.form;
    let rows = form.fields.len().div_ceil(FIELDS_PER_ROW);

    let mut constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.extend([
        Constraint::Length(FIELD_HEIGHT),  // Image path
        Constraint::Length(1),             // Selected image
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Length(2),             // Active field message
        Constraint::Length(1),             // Footer
        Constraint::Length(1),             // Help
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[index / FIELDS_PER_ROW]);
        draw_field(
            frame,
            columns[index % FIELDS_PER_ROW],
            field,
            form.active_field() == index,
            form.visible_error(field.field),
        );
    }

    draw_field(
        frame,
        chunks[rows],
        &form.image_input,
        form.is_on_image_input(),
        form.visible_error(SignupField::ProfileImage),
    );
    draw_selected_image(frame, chunks[rows + 1], form);

    let label = if app.is_submitting() {
        "Submitting..."
    } else {
        "Signup"
    };
    let button_area = centered(chunks[rows + 2], 20);
    render_button(
        frame,
        button_area,
        label,
        form.is_on_submit_button(),
        !app.is_submitting(),
    );

    draw_active_message(frame, chunks[rows + 3], form);

    let footer = Paragraph::new(Line::from(vec![
        Span::raw("Already have an account? "),
        Span::styled(
            "Signin",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(
            format!(" ({SIGNIN_SHORTCUT})"),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, chunks[rows + 4]);

    draw_help_text(frame, chunks[rows + 5]);
}

fn draw_selected_image(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let line = match form.image().latest() {
        Some(image) => Line::from(vec![
            Span::styled(" Selected: ", Style::default().fg(Color::DarkGray)),
            Span::styled(image.file_name.clone(), Style::default().fg(Color::Green)),
            Span::styled(
                format!(" ({} bytes)  {CLEAR_IMAGE_SHORTCUT}: remove", image.size()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(
            " No image selected. Type a path and press Enter.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Full text of the active field's message, which may not fit on its border
fn draw_active_message(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let message = form
        .get_field(form.active_field())
        .and_then(|field| form.visible_error(field.field));
    if let Some(message) = message {
        let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

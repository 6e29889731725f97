//! Placeholder screens the signup flow hands off to

use crate::state::View;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 50;
const PANEL_HEIGHT: u16 = 7;

pub fn draw_signin(frame: &mut Frame, area: Rect) {
    draw_panel(
        frame,
        area,
        View::SignIn,
        vec![
            Line::from("Sign in with your new account."),
            Line::from(""),
            Line::from(vec![
                Span::raw("Don't have an account? "),
                Span::styled(
                    "Signup",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(" (Enter)", Style::default().fg(Color::DarkGray)),
            ]),
        ],
    );
}

pub fn draw_profile(frame: &mut Frame, area: Rect) {
    draw_panel(
        frame,
        area,
        View::Profile,
        vec![
            Line::from("You are already signed in."),
            Line::from(""),
            Line::from(Span::styled(
                "Sign out elsewhere to register a new account.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}

fn draw_panel(frame: &mut Frame, area: Rect, view: View, lines: Vec<Line>) {
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(format!(" {} ", view.title()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, panel);
}

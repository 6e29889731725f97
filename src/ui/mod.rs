//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view() {
        View::SignUp => forms::draw_signup(frame, main_area, app),
        View::SignIn => landing::draw_signin(frame, main_area),
        View::Profile => landing::draw_profile(frame, main_area),
    }

    components::render_toasts(frame, main_area, &app.state.toasts);

    layout::draw_status_bar(frame, app);
}

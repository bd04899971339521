use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, RouteState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, TitleBar, ViewPane};
use crate::tui::keymap::HELP;

/// Height of the bottom area: the prompt box when open, the help line otherwise.
fn footer_height(tui: &TuiState) -> u16 {
    if tui.prompt.is_some() { 3 } else { 1 }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(footer_height(tui))]);
    let [title_area, nav_area, main_area, footer_area] = layout.areas(frame.area());

    let is_error = matches!(app.route_state, RouteState::Failed { .. });
    TitleBar::new(
        app.app_name.clone(),
        app.location.clone(),
        app.status_message.clone(),
    )
    .error(is_error)
    .render(frame, title_area);

    let routes: Vec<&str> = app.router.table().iter().map(|r| r.name.as_str()).collect();
    NavBar::new(routes, app.active_route()).render(frame, nav_area);

    ViewPane::new(&app.route_state, &app.location, spinner_frame).render(frame, main_area);

    match tui.prompt.as_mut() {
        Some(prompt) => prompt.render(frame, footer_area),
        None => frame.render_widget(
            Span::styled(HELP, Style::default().fg(Color::DarkGray)),
            footer_area,
        ),
    }
}

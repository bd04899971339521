//! # TitleBar Component
//!
//! Top status bar showing the shell name, current location and status.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     app.app_name.clone(),
//!     app.location.clone(),
//!     app.status_message.clone(),
//! );
//! title_bar.render(frame, title_area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Vista | /page1 | Loading page1..."`
//! 2. **Default**: `"Vista | /page1"`
//!
//! Load failures surface here, since the shell has no error page.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub app_name: String,
    pub location: String,
    pub status_message: String,
    /// Render the status in red (load failure).
    pub is_error: bool,
}

impl TitleBar {
    pub fn new(app_name: String, location: String, status_message: String) -> Self {
        Self {
            app_name,
            location,
            status_message,
            is_error: false,
        }
    }

    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                self.app_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.location.clone(), Style::default().fg(Color::Cyan)),
        ];

        if !self.status_message.is_empty() {
            let status_style = if self.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Vista".to_string(),
            "/page1".to_string(),
            "Loading page1...".to_string(),
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Vista | /page1 | Loading page1..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Vista".to_string(), "/".to_string(), String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Vista | /"));
        assert_eq!(text.matches('|').count(), 1);
    }
}

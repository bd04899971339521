//! # NavBar Component
//!
//! One-line list of the route table: `1 page1  2 page2`. The digit is the
//! key that navigates there; the active route is highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct NavBar<'a> {
    /// Route names in table order.
    pub routes: Vec<&'a str>,
    /// Name of the route matched by the current location.
    pub active: Option<&'a str>,
}

impl<'a> NavBar<'a> {
    pub fn new(routes: Vec<&'a str>, active: Option<&'a str>) -> Self {
        Self { routes, active }
    }

    /// The rendered line: number keys plus route names.
    pub fn line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.routes.len() * 3);
        for (index, name) in self.routes.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            // Only the first nine routes get a number key.
            let key = if index < 9 {
                format!("{} ", index + 1)
            } else {
                "  ".to_string()
            };
            spans.push(Span::styled(key, Style::default().fg(Color::DarkGray)));

            let style = if self.active == Some(*name) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(*name, style));
        }
        Line::from(spans)
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lists_routes_with_keys() {
        let nav = NavBar::new(vec!["page1", "page2"], None);
        let text: String = nav.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "1 page1  2 page2");
    }

    #[test]
    fn test_active_route_is_highlighted() {
        let nav = NavBar::new(vec!["page1", "page2"], Some("page2"));
        let line = nav.line();
        let page1 = line.spans.iter().find(|s| s.content == "page1").unwrap();
        let page2 = line.spans.iter().find(|s| s.content == "page2").unwrap();
        assert!(page2.style.add_modifier.contains(Modifier::BOLD));
        assert!(!page1.style.add_modifier.contains(Modifier::BOLD));
    }
}

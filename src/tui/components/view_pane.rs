//! # ViewPane Component
//!
//! The application shell's outlet: mounts the view for the current route.
//!
//! | Route state  | Renders                                  |
//! |--------------|------------------------------------------|
//! | `Resolved`   | the view's title and body                |
//! | `Loading`    | a spinner while the chunk is fetched     |
//! | `Unresolved` | an empty frame (no fallback view)        |
//! | `Failed`     | an empty frame; the title bar has the error |

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::state::RouteState;
use crate::tui::component::Component;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct ViewPane<'a> {
    pub state: &'a RouteState,
    pub location: &'a str,
    pub spinner_frame: usize,
}

impl<'a> ViewPane<'a> {
    pub fn new(state: &'a RouteState, location: &'a str, spinner_frame: usize) -> Self {
        Self {
            state,
            location,
            spinner_frame,
        }
    }
}

impl Component for ViewPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);

        let paragraph = match self.state {
            RouteState::Resolved { view, .. } => Paragraph::new(view.body.as_str())
                .block(block.title(view.title.as_str()))
                .wrap(Wrap { trim: false }),
            RouteState::Loading { route } => {
                let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
                Paragraph::new(format!("{spinner} Loading {route}..."))
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block.title(self.location))
            }
            RouteState::Unresolved | RouteState::Failed { .. } => {
                Paragraph::new("").block(block.title(self.location))
            }
        };

        frame.render_widget(paragraph, area);
    }
}

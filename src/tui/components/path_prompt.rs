//! # PathPrompt Component
//!
//! Single-line "go to" input. Opened with `:` or `g`.
//!
//! Input starting with `/` is a location path; anything else is a route
//! name. Enter submits, Esc cancels. Newlines in pasted text are dropped.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the PathPrompt
#[derive(Debug, Clone, PartialEq)]
pub enum PromptEvent {
    Submit(String),
    Cancel,
    ContentChanged,
}

pub struct PathPrompt {
    pub buffer: String,
    /// Byte offset of the cursor in `buffer`.
    cursor: usize,
}

impl PathPrompt {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    /// Display column of the cursor inside the buffer.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Default for PathPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PathPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Go to (path or route name)");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + self.cursor_column()).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

impl EventHandler for PathPrompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let text: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = self.prev_boundary();
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = self.next_boundary();
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                self.cursor = 0;
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                Some(PromptEvent::Submit(text))
            }
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

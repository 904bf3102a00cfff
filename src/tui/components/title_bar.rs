//! # TitleBar Component
//!
//! Top status line: quiz title, progress and the last status message.
//!
//! Stateless and purely presentational. All props are owned copies so the
//! bar can be built once per frame from whatever the caller has at hand.
//!
//! Formatting priority:
//!
//! 1. **With status**: `"What can I share online? | 3 moves | Sorted 2/5"`
//! 2. **Default**: `"What can I share online? | 0 moves"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub title: String,
    pub moves: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, moves: usize, status_message: String) -> Self {
        Self {
            title,
            moves,
            status_message,
        }
    }

    fn text(&self) -> String {
        let moves = if self.moves == 1 {
            "1 move".to_string()
        } else {
            format!("{} moves", self.moves)
        };
        if self.status_message.is_empty() {
            format!(" | {moves}")
        } else {
            format!(" | {moves} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.text()),
        ]);
        frame.render_widget(line, area);
    }
}

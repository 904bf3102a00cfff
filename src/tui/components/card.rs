//! # Card Component
//!
//! One draggable item, drawn as a bordered box with its label wrapped to
//! the available width. Height is a pure function of label and width so the
//! hit tester and the renderer always agree on where a card is.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Widest a floating card gets while following the pointer.
pub const GHOST_MAX_WIDTH: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLook {
    Normal,
    /// Keyboard selection.
    Selected,
    /// Left behind in its column while being dragged.
    Placeholder,
    /// Floating under the pointer.
    Ghost,
}

pub struct Card<'a> {
    pub label: &'a str,
    pub look: CardLook,
}

impl<'a> Card<'a> {
    pub fn new(label: &'a str, look: CardLook) -> Self {
        Self { label, look }
    }

    /// Wrapped label lines for a card `width` cells wide (borders included).
    pub fn lines(label: &str, width: u16) -> Vec<String> {
        let inner = width.saturating_sub(2).max(1) as usize;
        let wrapped: Vec<String> = textwrap::wrap(label, inner)
            .into_iter()
            .map(|cow| cow.into_owned())
            .collect();
        if wrapped.is_empty() {
            vec![String::new()]
        } else {
            wrapped
        }
    }

    /// Total rows including top and bottom border.
    pub fn height(label: &str, width: u16) -> u16 {
        Self::lines(label, width).len() as u16 + 2
    }

    /// Size of the floating copy drawn at the pointer.
    pub fn ghost_size(label: &str) -> (u16, u16) {
        let natural = (label.width() as u16).saturating_add(2);
        let width = natural.clamp(6, GHOST_MAX_WIDTH);
        (width, Self::height(label, width))
    }

    fn style(&self) -> (Style, Style) {
        match self.look {
            CardLook::Normal => (
                Style::default().fg(Color::Black).bg(Color::White),
                Style::default().fg(Color::DarkGray).bg(Color::White),
            ),
            CardLook::Selected => (
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow).bg(Color::White),
            ),
            CardLook::Placeholder => (
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
            CardLook::Ghost => (
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
        }
    }
}

impl Component for Card<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (text_style, border_style) = self.style();
        let lines: Vec<Line> = Self::lines(self.label, area.width)
            .into_iter()
            .map(Line::from)
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::bordered().border_style(border_style))
            .style(text_style);

        if self.look == CardLook::Ghost {
            frame.render_widget(Clear, area);
        }
        frame.render_widget(paragraph, area);
    }
}

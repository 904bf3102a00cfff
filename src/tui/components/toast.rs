//! # Toast Component
//!
//! Transient verdict notification in the bottom-right corner.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ToastState` lives in `TuiState` until it expires
//! - `Toast` is created each frame with borrowed state

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::engine::Verdict;
use crate::tui::component::Component;

#[derive(Debug, Clone)]
pub struct ToastState {
    pub verdict: Verdict,
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl ToastState {
    pub fn new(verdict: Verdict, message: impl Into<String>, ttl: Duration) -> Self {
        Self::shown_at(verdict, message, ttl, Instant::now())
    }

    pub fn shown_at(
        verdict: Verdict,
        message: impl Into<String>,
        ttl: Duration,
        at: Instant,
    ) -> Self {
        Self {
            verdict,
            message: message.into(),
            shown_at: at,
            ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

pub struct Toast<'a> {
    pub state: &'a ToastState,
}

impl Toast<'_> {
    fn icon(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Success => "✔",
            Verdict::Failure => "✖",
        }
    }

    fn color(verdict: Verdict) -> Color {
        match verdict {
            Verdict::Success => Color::Green,
            Verdict::Failure => Color::Red,
        }
    }

    /// Bottom-right box sized to the message, clamped to `area`.
    pub fn area_in(area: Rect, message: &str) -> Rect {
        // icon + space + message + borders + padding
        let width = (message.width() as u16)
            .saturating_add(6)
            .min(area.width);
        let height = 3.min(area.height);
        Rect::new(
            area.x + area.width - width,
            area.y + area.height - height,
            width,
            height,
        )
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let verdict = self.state.verdict;
        let color = Self::color(verdict);
        let rect = Self::area_in(area, &self.state.message);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", Self::icon(verdict)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.state.message.as_str()),
        ]);
        let paragraph = Paragraph::new(line).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_toast_expires() {
        let start = Instant::now();
        let toast = ToastState::shown_at(Verdict::Success, "ok", Duration::from_secs(3), start);
        assert!(!toast.is_expired(start + Duration::from_secs(2)));
        assert!(toast.is_expired(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_area_sits_bottom_right() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = Toast::area_in(area, "Success!");
        assert_eq!(rect, Rect::new(66, 21, 14, 3));
    }

    #[test]
    fn test_area_clamped_on_tiny_terminal() {
        let area = Rect::new(0, 0, 5, 2);
        let rect = Toast::area_in(area, "Succès !");
        assert_eq!(rect, area);
    }

    #[test]
    fn test_failure_toast_renders_message() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ToastState::new(Verdict::Failure, "Échec !", Duration::from_secs(3));
        terminal
            .draw(|f| Toast { state: &state }.render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("✖"));
        assert!(text.contains("chec !"));
    }
}

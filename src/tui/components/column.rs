//! # Column Component
//!
//! A droppable group: a colored, titled frame with its cards stacked from
//! the top. While a drag hovers over it the border turns bold and bright,
//! the terminal stand-in for the web widget's `isOver` highlight.
//!
//! `card_rects()` is shared with the hit tester in `ui.rs`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding};

use crate::core::partition::{GroupId, Item, ItemId};
use crate::tui::component::Component;
use crate::tui::components::card::{Card, CardLook};

pub struct Column<'a> {
    pub group: GroupId,
    pub title: &'a str,
    pub items: &'a [Item],
    /// A drag is currently over this column.
    pub highlighted: bool,
    pub selected: Option<ItemId>,
    /// Card being dragged, drawn as a placeholder in place.
    pub dragging: Option<ItemId>,
}

impl<'a> Column<'a> {
    pub fn color(group: GroupId) -> Color {
        match group {
            GroupId::Staging => Color::Blue,
            GroupId::GroupA => Color::Green,
            GroupId::GroupB => Color::Red,
        }
    }

    fn block(&self) -> Block<'a> {
        let color = Self::color(self.group);
        let (border_type, border_style) = if self.highlighted {
            (
                BorderType::Thick,
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (BorderType::Rounded, Style::default().fg(color))
        };
        Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .title(self.title)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1))
    }

    /// Where the cards go inside a column drawn in `area`.
    pub fn inner(area: Rect) -> Rect {
        Block::bordered().padding(Padding::horizontal(1)).inner(area)
    }

    /// Stacks cards from the top of `inner`. Cards that do not fit are
    /// omitted; the last visible one may be cut short.
    pub fn card_rects(inner: Rect, items: &[Item]) -> Vec<(ItemId, Rect)> {
        let bottom = inner.y.saturating_add(inner.height);
        let mut y = inner.y;
        let mut rects = Vec::with_capacity(items.len());
        for item in items {
            if y >= bottom {
                break;
            }
            let height = Card::height(&item.label, inner.width).min(bottom - y);
            rects.push((item.id, Rect::new(inner.x, y, inner.width, height)));
            y += height;
        }
        rects
    }
}

impl Component for Column<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.block(), area);

        let rects = Self::card_rects(Self::inner(area), self.items);
        for (item, (id, rect)) in self.items.iter().zip(rects) {
            let look = if self.dragging == Some(id) {
                CardLook::Placeholder
            } else if self.selected == Some(id) {
                CardLook::Selected
            } else {
                CardLook::Normal
            };
            Card::new(&item.label, look).render(frame, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn items() -> Vec<Item> {
        vec![Item::new(1, "A password"), Item::new(2, "My hobbies")]
    }

    #[test]
    fn test_card_rects_stack_vertically() {
        let inner = Rect::new(2, 1, 20, 20);
        let rects = Column::card_rects(inner, &items());
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], (ItemId(1), Rect::new(2, 1, 20, 3)));
        assert_eq!(rects[1], (ItemId(2), Rect::new(2, 4, 20, 3)));
    }

    #[test]
    fn test_card_rects_clip_to_area() {
        let inner = Rect::new(0, 0, 20, 4);
        let rects = Column::card_rects(inner, &items());
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1].1.height, 1);

        let rects = Column::card_rects(Rect::new(0, 0, 20, 3), &items());
        assert_eq!(rects.len(), 1);
    }

    #[test]
    fn test_column_renders_title_and_cards() {
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let items = items();
        terminal
            .draw(|f| {
                Column {
                    group: GroupId::GroupA,
                    title: "Safe",
                    items: &items,
                    highlighted: true,
                    selected: None,
                    dragging: None,
                }
                .render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Safe"));
        assert!(text.contains("A password"));
        assert!(text.contains("My hobbies"));
    }
}

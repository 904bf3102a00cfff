use crate::core::partition::{GroupId, ItemId, Partition};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Card, CardLook, Column, TitleBar, Toast};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

const HELP_TEXT: &str =
    "drag a card with the mouse · Tab/↑↓ select · 1 2 3 drop · r restart · q quit";

/// Screen regions, recomputed from the frame size on every draw and hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub title: Rect,
    /// Indexed by `GroupId::index()`.
    pub columns: [Rect; 3],
    pub help: Rect,
}

pub fn board_layout(area: Rect) -> BoardLayout {
    use Constraint::{Fill, Length, Min};
    let [title, board, help] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);
    let columns = Layout::horizontal([Fill(1), Fill(1), Fill(1)])
        .spacing(1)
        .areas(board);
    BoardLayout {
        title,
        columns,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let layout = board_layout(frame.area());

    TitleBar::new(app.quiz.title.clone(), app.moves, app.status_message.clone())
        .render(frame, layout.title);

    let dragging = tui.drag.as_ref().map(|d| d.item_id);
    let hovered = tui.drag.as_ref().and_then(|d| d.over);
    for group in GroupId::ALL {
        Column {
            group,
            title: app.quiz.group_title(group),
            items: app.partition.group(group),
            highlighted: hovered == Some(group),
            selected: tui.selected,
            dragging,
        }
        .render(frame, layout.columns[group.index()]);
    }

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        layout.help,
    );

    if let Some(drag) = &tui.drag {
        if let Some(item) = app.partition.item(drag.item_id) {
            let rect = ghost_rect(drag.pointer, &item.label, frame.area());
            Card::new(&item.label, CardLook::Ghost).render(frame, rect);
        }
    }

    if let Some(toast) = &tui.toast {
        Toast { state: toast }.render(frame, frame.area());
    }
}

/// Floating card position: centered on the pointer column, top edge on the
/// pointer row, kept inside the frame.
pub fn ghost_rect(pointer: (u16, u16), label: &str, frame_area: Rect) -> Rect {
    let (width, height) = Card::ghost_size(label);
    let (col, row) = pointer;
    Rect::new(col.saturating_sub(width / 2), row, width, height).clamp(frame_area)
}

/// Which group (if any) is under a screen position.
pub fn hit_test_group(col: u16, row: u16, frame_area: Rect) -> Option<GroupId> {
    let layout = board_layout(frame_area);
    let pos = Position::new(col, row);
    GroupId::ALL
        .into_iter()
        .find(|g| layout.columns[g.index()].contains(pos))
}

/// Which card (if any) is under a screen position.
pub fn hit_test_card(
    col: u16,
    row: u16,
    frame_area: Rect,
    partition: &Partition,
) -> Option<ItemId> {
    let group = hit_test_group(col, row, frame_area)?;
    let layout = board_layout(frame_area);
    let inner = Column::inner(layout.columns[group.index()]);
    let pos = Position::new(col, row);
    Column::card_rects(inner, partition.group(group))
        .into_iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::DragState;
    use crate::tui::components::ToastState;
    use crate::core::engine::Verdict;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 92,
        height: 24,
    };

    fn screen_text(app: &App, tui: &TuiState) -> String {
        let backend = TestBackend::new(AREA.width, AREA.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_splits_three_columns() {
        let layout = board_layout(AREA);
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.help.y, 23);
        assert_eq!(layout.columns[0].x, 0);
        assert!(layout.columns[1].x > layout.columns[0].right());
        assert_eq!(layout.columns[2].right(), 92);
    }

    #[test]
    fn test_hit_test_group() {
        let layout = board_layout(AREA);
        let mid = |r: Rect| (r.x + r.width / 2, r.y + r.height / 2);
        let (c, r) = mid(layout.columns[2]);
        assert_eq!(hit_test_group(c, r, AREA), Some(GroupId::GroupB));
        // Title bar is not a drop target
        assert_eq!(hit_test_group(5, 0, AREA), None);
    }

    #[test]
    fn test_hit_test_card_finds_first_staging_card() {
        let app = test_app();
        let inner = Column::inner(board_layout(AREA).columns[0]);
        // First card starts right at the top of the inner area
        let hit = hit_test_card(inner.x + 1, inner.y + 1, AREA, &app.partition);
        assert_eq!(hit, Some(ItemId(1)));
        // Empty group has no cards
        let inner_a = Column::inner(board_layout(AREA).columns[1]);
        assert_eq!(hit_test_card(inner_a.x + 1, inner_a.y + 1, AREA, &app.partition), None);
    }

    #[test]
    fn test_ghost_rect_stays_on_screen() {
        let rect = ghost_rect((91, 23), "A password", AREA);
        assert!(rect.right() <= AREA.right());
        assert!(rect.bottom() <= AREA.bottom());
        let rect = ghost_rect((0, 5), "A password", AREA);
        assert_eq!(rect.x, 0);
    }

    #[test]
    fn test_draw_ui_shows_board() {
        let app = test_app();
        let text = screen_text(&app, &TuiState::new(Duration::from_secs(3)));
        assert!(text.contains("What can I share online?"));
        assert!(text.contains("A password"));
        assert!(text.contains("Safe to share online"));
        assert!(text.contains("r restart"));
    }

    #[test]
    fn test_draw_ui_with_drag_and_toast() {
        let app = test_app();
        let mut tui = TuiState::new(Duration::from_secs(3));
        tui.drag = Some(DragState {
            item_id: ItemId(2),
            pointer: (50, 10),
            over: Some(GroupId::GroupA),
        });
        tui.toast = Some(ToastState::new(
            Verdict::Success,
            "Success!",
            Duration::from_secs(3),
        ));
        let text = screen_text(&app, &tui);
        assert!(text.contains("A date of birth"));
        assert!(text.contains("Success!"));
    }
}

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and turns mouse gestures and key presses into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Gestures
//!
//! A mouse gesture is press over a card, drag, release. The release position
//! is hit-tested against the columns; releasing outside every column yields
//! `Action::Drop { over: None }`, which the core ignores. The keyboard path
//! (select with Tab, drop with 1/2/3) produces the same action.
//!
//! ## Redraw Strategy
//!
//! - **Active** (drag in progress or toast showing): polls every ~50ms so the
//!   toast can expire on time.
//! - **Idle**: sleeps up to 500ms and only redraws on events.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::engine::Verdict;
use crate::core::partition::{GroupId, ItemId, Partition};
use crate::core::state::App;
use crate::tui::components::ToastState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// A card currently held by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub item_id: ItemId,
    /// Last pointer position (column, row).
    pub pointer: (u16, u16),
    /// Column under the pointer, highlighted while dragging.
    pub over: Option<GroupId>,
}

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub drag: Option<DragState>,
    /// Keyboard selection.
    pub selected: Option<ItemId>,
    pub toast: Option<ToastState>,
    pub toast_duration: Duration,
}

impl TuiState {
    pub fn new(toast_duration: Duration) -> Self {
        Self {
            drag: None,
            selected: None,
            toast: None,
            toast_duration,
        }
    }

    fn is_active(&self) -> bool {
        self.drag.is_some() || self.toast.is_some()
    }

    /// Moves the keyboard selection through all cards, column by column.
    fn select_step(&mut self, partition: &Partition, forward: bool) {
        let order: Vec<ItemId> = GroupId::ALL
            .into_iter()
            .flat_map(|g| partition.group(g).iter().map(|item| item.id))
            .collect();
        if order.is_empty() {
            self.selected = None;
            return;
        }
        let current = self
            .selected
            .and_then(|id| order.iter().position(|other| *other == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => order.len() - 1,
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
        };
        self.selected = Some(order[next]);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.quiz);
    let mut tui = TuiState::new(config.toast_duration);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Exiting after {} moves", app.moves);
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if tui
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(Instant::now()))
        {
            debug!("Toast expired");
            tui.toast = None;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.is_active() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain pending events before next draw
        let frame_area = terminal.get_frame().area();
        let mut pending = first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate));
        if dispatch_batch(app, tui, &mut pending, frame_area) {
            return Ok(());
        }
    }
}

/// Dispatches events until the batch runs dry or the terminal is resized.
/// Anything after a resize is left for the next iteration, which redraws
/// first so hit tests see the new layout. Returns true when the app should
/// exit.
fn dispatch_batch(
    app: &mut App,
    tui: &mut TuiState,
    events: &mut impl Iterator<Item = TuiEvent>,
    frame_area: Rect,
) -> bool {
    for event in events {
        let resized = event == TuiEvent::Resize;
        if dispatch(app, tui, event, frame_area) {
            return true;
        }
        if resized {
            debug!("Resized, deferring remaining events until redraw");
            break;
        }
    }
    false
}

/// Routes one input event. Returns true when the app should exit.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> bool {
    match event {
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => false,
        TuiEvent::ForceQuit | TuiEvent::Quit => apply_effect(app, tui, Action::Quit),
        TuiEvent::Restart => {
            tui.drag = None;
            tui.selected = None;
            tui.toast = None;
            apply_effect(app, tui, Action::Restart)
        }
        TuiEvent::Escape => {
            // Innermost thing first: cancel drag, then dismiss toast, then quit
            if tui.drag.take().is_some() {
                debug!("Drag cancelled");
                false
            } else if tui.toast.take().is_some() {
                false
            } else {
                apply_effect(app, tui, Action::Quit)
            }
        }
        TuiEvent::MouseDown(col, row) => {
            if let Some(item_id) = ui::hit_test_card(col, row, frame_area, &app.partition) {
                debug!("Picked up card {}", item_id);
                tui.selected = Some(item_id);
                tui.drag = Some(DragState {
                    item_id,
                    pointer: (col, row),
                    over: ui::hit_test_group(col, row, frame_area),
                });
            }
            false
        }
        TuiEvent::MouseDrag(col, row) => {
            if let Some(drag) = tui.drag.as_mut() {
                drag.pointer = (col, row);
                drag.over = ui::hit_test_group(col, row, frame_area);
            }
            false
        }
        TuiEvent::MouseUp(col, row) => match tui.drag.take() {
            Some(drag) => {
                let over = ui::hit_test_group(col, row, frame_area);
                apply_effect(
                    app,
                    tui,
                    Action::Drop {
                        item_id: drag.item_id,
                        over,
                    },
                )
            }
            None => false,
        },
        TuiEvent::SelectNext => {
            tui.select_step(&app.partition, true);
            false
        }
        TuiEvent::SelectPrev => {
            tui.select_step(&app.partition, false);
            false
        }
        TuiEvent::DropSelected(group) => match tui.selected {
            Some(item_id) => apply_effect(
                app,
                tui,
                Action::Drop {
                    item_id,
                    over: Some(group),
                },
            ),
            None => false,
        },
    }
}

fn apply_effect(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Notify(verdict) => {
            let message = match verdict {
                Verdict::Success => app.quiz.success_message.clone(),
                Verdict::Failure => app.quiz.failure_message.clone(),
            };
            info!("Showing verdict toast: {}", message);
            tui.toast = Some(ToastState::new(verdict, message, tui.toast_duration));
            false
        }
    }
}

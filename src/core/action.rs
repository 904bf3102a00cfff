//! # Actions
//!
//! Everything that can happen in a game becomes an `Action`.
//! User releases a card over a column? That's `Action::Drop`.
//! User presses `r`? That's `Action::Restart`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the adapter to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::engine::{self, Verdict};
use crate::core::partition::{GroupId, ItemId};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A completed gesture. `over` is `None` when the card was released
    /// outside every column, in which case nothing happens.
    Drop { item_id: ItemId, over: Option<GroupId> },
    Restart,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Staging just emptied; show the verdict.
    Notify(Verdict),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Drop { item_id, over } => {
            let Some(target) = over else {
                debug!("Card {} released outside any group", item_id);
                return Effect::None;
            };

            match engine::try_move(&app.partition, item_id, target, &app.quiz.key) {
                Ok(transition) => {
                    app.partition = transition.partition;
                    app.moves += 1;
                    app.status_message = format!(
                        "Sorted {}/{}",
                        app.sorted_count(),
                        app.partition.len()
                    );
                    debug!(
                        "Moved {} from {} to {} (move {})",
                        item_id, transition.from, transition.to, app.moves
                    );
                    match transition.verdict {
                        Some(verdict) => {
                            info!("Staging empty after {} moves: {:?}", app.moves, verdict);
                            Effect::Notify(verdict)
                        }
                        None => Effect::None,
                    }
                }
                Err(e) => {
                    debug!("Ignoring gesture: {}", e);
                    Effect::None
                }
            }
        }
        Action::Restart => {
            info!("Restarting game");
            app.reset();
            app.status_message = String::from("Restarted");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn drop(id: u32, group: GroupId) -> Action {
        Action::Drop {
            item_id: ItemId(id),
            over: Some(group),
        }
    }

    #[test]
    fn test_drop_moves_card_and_counts() {
        let mut app = test_app();
        let effect = update(&mut app, drop(1, GroupId::GroupB));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.moves, 1);
        assert_eq!(app.partition.locate(ItemId(1)), Some(GroupId::GroupB));
        assert_eq!(app.status_message, "Sorted 1/5");
    }

    #[test]
    fn test_drop_outside_groups_is_ignored() {
        let mut app = test_app();
        let before = app.partition.clone();
        let effect = update(
            &mut app,
            Action::Drop {
                item_id: ItemId(1),
                over: None,
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.partition, before);
        assert_eq!(app.moves, 0);
    }

    #[test]
    fn test_noop_drop_does_not_count_as_move() {
        let mut app = test_app();
        update(&mut app, drop(1, GroupId::Staging));
        update(&mut app, drop(99, GroupId::GroupA));
        assert_eq!(app.moves, 0);
    }

    #[test]
    fn test_last_drop_notifies() {
        let mut app = test_app();
        for id in [1, 2, 3] {
            assert_eq!(update(&mut app, drop(id, GroupId::GroupB)), Effect::None);
        }
        assert_eq!(update(&mut app, drop(4, GroupId::GroupA)), Effect::None);
        assert_eq!(
            update(&mut app, drop(5, GroupId::GroupA)),
            Effect::Notify(Verdict::Success)
        );
    }

    #[test]
    fn test_restart_refills_staging() {
        let mut app = test_app();
        update(&mut app, drop(1, GroupId::GroupB));
        update(&mut app, drop(4, GroupId::GroupA));
        assert_eq!(update(&mut app, Action::Restart), Effect::None);
        assert_eq!(app.moves, 0);
        assert_eq!(app.partition.group(GroupId::Staging).len(), 5);
        // Original order is restored
        assert_eq!(app.partition.group(GroupId::Staging)[0].id, ItemId(1));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

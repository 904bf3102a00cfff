//! # Headless Replay
//!
//! Plays a scripted list of moves through `update()` without a terminal,
//! e.g. `cardsort --play 1=group_b --play 4=column1`. Useful for checking a
//! quiz file's answer key from a shell.
//!
//! Unlike the TUI, a script can name a group that does not exist. That is
//! rejected up front as [`MoveError::UnknownTargetGroup`].

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::core::action::{Action, Effect, update};
use crate::core::engine::{MoveError, Verdict, resolve_target};
use crate::core::partition::{GroupId, ItemId};
use crate::core::state::App;

/// One `ID=GROUP` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    pub item_id: ItemId,
    pub target: GroupId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Not of the form `ID=GROUP`.
    Syntax(String),
    BadItemId(String),
    Move(MoveError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Syntax(s) => write!(f, "expected ID=GROUP, got {s:?}"),
            ScriptError::BadItemId(s) => write!(f, "not an item id: {s:?}"),
            ScriptError::Move(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl FromStr for ScriptedMove {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, group) = s
            .split_once('=')
            .ok_or_else(|| ScriptError::Syntax(s.to_string()))?;
        let id = id.trim();
        let item_id = id
            .parse::<u32>()
            .map(ItemId)
            .map_err(|_| ScriptError::BadItemId(id.to_string()))?;
        let target = resolve_target(group.trim()).map_err(ScriptError::Move)?;
        Ok(ScriptedMove { item_id, target })
    }
}

/// Applies every move in order and returns the verdict that fired, if any.
/// A later verdict replaces an earlier one (staging emptied, refilled, emptied).
pub fn replay(app: &mut App, moves: &[ScriptedMove]) -> Option<Verdict> {
    let mut verdict = None;
    for step in moves {
        let effect = update(
            app,
            Action::Drop {
                item_id: step.item_id,
                over: Some(step.target),
            },
        );
        if let Effect::Notify(v) = effect {
            verdict = Some(v);
        }
    }
    verdict
}

/// Plain-text rendering of the board and the outcome.
pub fn summary(app: &App, verdict: Option<Verdict>) -> String {
    let mut out = String::new();
    for group in GroupId::ALL {
        let _ = writeln!(out, "{}:", app.quiz.group_title(group));
        for item in app.partition.group(group) {
            let _ = writeln!(out, "  {} {}", item.id, item.label);
        }
    }
    match verdict {
        Some(Verdict::Success) => out.push_str(&app.quiz.success_message),
        Some(Verdict::Failure) => out.push_str(&app.quiz.failure_message),
        None => {
            let _ = write!(
                out,
                "{} card(s) left to sort",
                app.partition.group(GroupId::Staging).len()
            );
        }
    }
    out.push('\n');
    out
}

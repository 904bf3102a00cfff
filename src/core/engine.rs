//! # Classification Engine
//!
//! Pure transition over a [`Partition`]: one completed gesture in, the next
//! partition and maybe a verdict out.
//!
//! ```text
//! (Partition, item, target)  →  apply_move()  →  (Partition, Option<Verdict>)
//! ```
//!
//! The engine keeps no state of its own and never retains a partition. The
//! caller owns the current value and swaps in whatever comes back.
//!
//! Two entry points exist:
//! - [`apply_move`] is lenient: stale ids and same-group drops are no-ops.
//! - [`try_move`] reports those cases as [`MoveError`] for assertions and logs.

use std::collections::BTreeSet;
use std::fmt;

use crate::core::partition::{GroupId, ItemId, Partition};

/// Outcome shown once the staging group runs empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

/// Which ids belong where. The two sets are disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    expected_in_a: BTreeSet<ItemId>,
    expected_in_b: BTreeSet<ItemId>,
}

impl AnswerKey {
    /// Fails with the first id found in both sets.
    pub fn new(
        expected_in_a: impl IntoIterator<Item = ItemId>,
        expected_in_b: impl IntoIterator<Item = ItemId>,
    ) -> Result<Self, ItemId> {
        let expected_in_a: BTreeSet<ItemId> = expected_in_a.into_iter().collect();
        let expected_in_b: BTreeSet<ItemId> = expected_in_b.into_iter().collect();
        if let Some(id) = expected_in_a.intersection(&expected_in_b).next() {
            return Err(*id);
        }
        Ok(Self {
            expected_in_a,
            expected_in_b,
        })
    }

    pub fn expected_in_a(&self) -> &BTreeSet<ItemId> {
        &self.expected_in_a
    }

    pub fn expected_in_b(&self) -> &BTreeSet<ItemId> {
        &self.expected_in_b
    }

    /// Where `id` is supposed to end up, if the key mentions it at all.
    pub fn expected_group(&self, id: ItemId) -> Option<GroupId> {
        if self.expected_in_a.contains(&id) {
            Some(GroupId::GroupA)
        } else if self.expected_in_b.contains(&id) {
            Some(GroupId::GroupB)
        } else {
            None
        }
    }
}

/// Why a gesture did not change the partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The dragged id is in no group (stale reference).
    ItemNotFound(ItemId),
    /// The drop target named a group the engine does not know.
    UnknownTargetGroup(String),
    /// Dropped back onto the group it came from.
    NoOpSameGroup { item: ItemId, group: GroupId },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::ItemNotFound(id) => write!(f, "item {id} is not in any group"),
            MoveError::UnknownTargetGroup(name) => write!(f, "unknown target group {name:?}"),
            MoveError::NoOpSameGroup { item, group } => {
                write!(f, "item {item} is already in {group}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// A move that actually happened.
#[derive(Debug, Clone)]
pub struct Transition {
    pub partition: Partition,
    pub from: GroupId,
    pub to: GroupId,
    /// Set only on the move that emptied staging.
    pub verdict: Option<Verdict>,
}

/// Moves `item_id` to the end of `target`. Never fails: anything that is not
/// a real move returns the input partition and no verdict.
pub fn apply_move(
    partition: &Partition,
    item_id: ItemId,
    target: GroupId,
    key: &AnswerKey,
) -> (Partition, Option<Verdict>) {
    match try_move(partition, item_id, target, key) {
        Ok(transition) => (transition.partition, transition.verdict),
        Err(_) => (partition.clone(), None),
    }
}

/// Strict form of [`apply_move`].
pub fn try_move(
    partition: &Partition,
    item_id: ItemId,
    target: GroupId,
    key: &AnswerKey,
) -> Result<Transition, MoveError> {
    let source = partition
        .locate(item_id)
        .ok_or(MoveError::ItemNotFound(item_id))?;

    if source == target {
        return Err(MoveError::NoOpSameGroup {
            item: item_id,
            group: target,
        });
    }

    let next = partition.relocate(item_id, source, target);
    let verdict = if next.is_staging_empty() {
        Some(evaluate(&next, key))
    } else {
        None
    };

    Ok(Transition {
        partition: next,
        from: source,
        to: target,
        verdict,
    })
}

/// Two containment checks on the target groups. Depends only on membership,
/// not on how the partition was reached.
pub fn evaluate(partition: &Partition, key: &AnswerKey) -> Verdict {
    let in_a = partition.ids_in(GroupId::GroupA);
    let in_b = partition.ids_in(GroupId::GroupB);

    let a_ok = key.expected_in_a.iter().all(|id| in_a.contains(id));
    let b_ok = key.expected_in_b.iter().all(|id| in_b.contains(id));

    if a_ok && b_ok {
        Verdict::Success
    } else {
        Verdict::Failure
    }
}

/// Parses the raw drop-target id reported by a gesture source.
pub fn resolve_target(raw: &str) -> Result<GroupId, MoveError> {
    raw.parse::<GroupId>()
        .map_err(|_| MoveError::UnknownTargetGroup(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::partition::Item;

    fn five_items() -> Partition {
        Partition::new((1..=5).map(|i| Item::new(i, format!("item {i}"))).collect())
    }

    fn key() -> AnswerKey {
        AnswerKey::new([ItemId(4), ItemId(5)], [ItemId(1), ItemId(2), ItemId(3)]).unwrap()
    }

    fn play(moves: &[(u32, GroupId)]) -> (Partition, Vec<Option<Verdict>>) {
        let key = key();
        let mut p = five_items();
        let mut verdicts = Vec::new();
        for (id, target) in moves {
            let (next, verdict) = apply_move(&p, ItemId(*id), *target, &key);
            p = next;
            verdicts.push(verdict);
        }
        (p, verdicts)
    }

    #[test]
    fn test_correct_sort_succeeds() {
        use GroupId::{GroupA, GroupB};
        let (_, verdicts) = play(&[(1, GroupB), (2, GroupB), (3, GroupB), (4, GroupA), (5, GroupA)]);
        assert_eq!(verdicts, vec![None, None, None, None, Some(Verdict::Success)]);
    }

    #[test]
    fn test_one_misplaced_item_fails() {
        use GroupId::{GroupA, GroupB};
        let (_, verdicts) = play(&[(1, GroupB), (2, GroupB), (3, GroupA), (4, GroupA), (5, GroupA)]);
        assert_eq!(verdicts.last(), Some(&Some(Verdict::Failure)));
        assert!(verdicts[..4].iter().all(Option::is_none));
    }

    #[test]
    fn test_same_group_drop_is_noop() {
        let p = five_items();
        let (next, verdict) = apply_move(&p, ItemId(1), GroupId::Staging, &key());
        assert_eq!(next, p);
        assert!(verdict.is_none());
        assert_eq!(
            try_move(&p, ItemId(1), GroupId::Staging, &key()).unwrap_err(),
            MoveError::NoOpSameGroup {
                item: ItemId(1),
                group: GroupId::Staging
            }
        );
    }

    #[test]
    fn test_unknown_item_is_noop() {
        let p = five_items();
        let (next, verdict) = apply_move(&p, ItemId(42), GroupId::GroupA, &key());
        assert_eq!(next, p);
        assert!(verdict.is_none());
        assert_eq!(
            try_move(&p, ItemId(42), GroupId::GroupA, &key()).unwrap_err(),
            MoveError::ItemNotFound(ItemId(42))
        );
    }

    #[test]
    fn test_moves_after_completion_do_not_refire() {
        use GroupId::{GroupA, GroupB};
        let (p, _) = play(&[(1, GroupB), (2, GroupB), (3, GroupB), (4, GroupA), (5, GroupA)]);
        let (p, verdict) = apply_move(&p, ItemId(3), GroupA, &key());
        assert!(verdict.is_none());
        let (_, verdict) = apply_move(&p, ItemId(3), GroupB, &key());
        assert!(verdict.is_none());
    }

    #[test]
    fn test_moving_back_to_staging_then_out_fires_again() {
        use GroupId::{GroupA, GroupB, Staging};
        let (p, _) = play(&[(1, GroupB), (2, GroupB), (3, GroupB), (4, GroupA), (5, GroupA)]);
        let (p, verdict) = apply_move(&p, ItemId(5), Staging, &key());
        assert!(verdict.is_none());
        let (_, verdict) = apply_move(&p, ItemId(5), GroupB, &key());
        assert_eq!(verdict, Some(Verdict::Failure));
    }

    #[test]
    fn test_transition_reports_source_and_target() {
        let t = try_move(&five_items(), ItemId(2), GroupId::GroupB, &key()).unwrap();
        assert_eq!(t.from, GroupId::Staging);
        assert_eq!(t.to, GroupId::GroupB);
        assert!(t.verdict.is_none());
    }

    #[test]
    fn test_untouched_group_is_shared() {
        let p = five_items();
        let t = try_move(&p, ItemId(2), GroupId::GroupB, &key()).unwrap();
        assert!(t.partition.shares_group(&p, GroupId::GroupA));
    }

    #[test]
    fn test_overlapping_key_rejected() {
        assert_eq!(
            AnswerKey::new([ItemId(1)], [ItemId(1), ItemId(2)]),
            Err(ItemId(1))
        );
    }

    #[test]
    fn test_expected_group() {
        let key = key();
        assert_eq!(key.expected_group(ItemId(4)), Some(GroupId::GroupA));
        assert_eq!(key.expected_group(ItemId(1)), Some(GroupId::GroupB));
        assert_eq!(key.expected_group(ItemId(9)), None);
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("column2"), Ok(GroupId::GroupB));
        assert_eq!(
            resolve_target("trash"),
            Err(MoveError::UnknownTargetGroup("trash".to_string()))
        );
    }
}

//! # Items, Groups and the Partition
//!
//! ```text
//! Partition
//! ├── staging: Arc<[Item]>   // the "box" cards start in
//! ├── group_a: Arc<[Item]>   // designated good / shareable
//! └── group_b: Arc<[Item]>   // designated bad / not shareable
//! ```
//!
//! Every item of the initial staging set lives in exactly one group at all
//! times. Groups are shared slices: a move rebuilds the two groups it touches
//! and hands the third one over as-is, so the renderer can compare pointers
//! instead of contents.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Stable identity of a card. Labels are never compared, ids are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
}

impl Item {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            label: label.into(),
        }
    }
}

/// The closed set of buckets a card can sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupId {
    Staging,
    /// Items the quiz considers fine (e.g. "safe to share").
    GroupA,
    /// Items the quiz considers not fine (e.g. "not safe to share").
    GroupB,
}

impl GroupId {
    /// Display order, left to right.
    pub const ALL: [GroupId; 3] = [GroupId::Staging, GroupId::GroupA, GroupId::GroupB];

    pub fn as_str(self) -> &'static str {
        match self {
            GroupId::Staging => "staging",
            GroupId::GroupA => "group_a",
            GroupId::GroupB => "group_b",
        }
    }

    pub fn index(self) -> usize {
        match self {
            GroupId::Staging => 0,
            GroupId::GroupA => 1,
            GroupId::GroupB => 2,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGroup(pub String);

impl fmt::Display for UnknownGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown group: {:?}", self.0)
    }
}

impl std::error::Error for UnknownGroup {}

impl FromStr for GroupId {
    type Err = UnknownGroup;

    /// Accepts the canonical names plus the droppable ids the web widget used
    /// (`box`, `column1`, `column2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staging" | "box" => Ok(GroupId::Staging),
            "group_a" | "column1" => Ok(GroupId::GroupA),
            "group_b" | "column2" => Ok(GroupId::GroupB),
            other => Err(UnknownGroup(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Partition {
    groups: [Arc<[Item]>; 3],
}

impl Partition {
    /// All items in staging, both target groups empty.
    ///
    /// Item ids must be unique; moves locate cards by id only.
    pub fn new(items: Vec<Item>) -> Self {
        debug_assert!(
            {
                let mut seen = HashSet::new();
                items.iter().all(|item| seen.insert(item.id))
            },
            "duplicate item id in partition"
        );
        Self {
            groups: [Arc::from(items), Arc::from(Vec::new()), Arc::from(Vec::new())],
        }
    }

    pub fn group(&self, group: GroupId) -> &[Item] {
        &self.groups[group.index()]
    }

    /// Which group holds `id`, scanning staging first.
    pub fn locate(&self, id: ItemId) -> Option<GroupId> {
        GroupId::ALL
            .into_iter()
            .find(|g| self.group(*g).iter().any(|item| item.id == id))
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.groups.iter().flat_map(|g| g.iter()).find(|item| item.id == id)
    }

    pub fn ids_in(&self, group: GroupId) -> HashSet<ItemId> {
        self.group(group).iter().map(|item| item.id).collect()
    }

    pub fn is_staging_empty(&self) -> bool {
        self.group(GroupId::Staging).is_empty()
    }

    /// Total number of items across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `other` holds the very same allocation for `group`.
    pub fn shares_group(&self, other: &Partition, group: GroupId) -> bool {
        Arc::ptr_eq(&self.groups[group.index()], &other.groups[group.index()])
    }

    /// Removes `id` from `from` and appends it to `to`. The third group is
    /// carried over without copying. Caller guarantees `id` is in `from` and
    /// `from != to`.
    pub(crate) fn relocate(&self, id: ItemId, from: GroupId, to: GroupId) -> Partition {
        let mut moved = None;
        let remaining: Vec<Item> = self
            .group(from)
            .iter()
            .filter(|item| {
                if item.id == id {
                    moved = Some((*item).clone());
                    false
                } else {
                    true
                }
            })
            .cloned()
            .collect();

        let mut groups = self.groups.clone();
        if let Some(item) = moved {
            let mut target: Vec<Item> = self.group(to).to_vec();
            target.push(item);
            groups[from.index()] = Arc::from(remaining);
            groups[to.index()] = Arc::from(target);
        }
        Partition { groups }
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        GroupId::ALL
            .into_iter()
            .all(|g| self.group(g) == other.group(g))
    }
}

impl Eq for Partition {}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![Item::new(1, "one"), Item::new(2, "two"), Item::new(3, "three")]
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate item id")]
    fn test_new_rejects_duplicate_ids() {
        Partition::new(vec![Item::new(1, "one"), Item::new(1, "again")]);
    }

    #[test]
    fn test_new_puts_everything_in_staging() {
        let p = Partition::new(items());
        assert_eq!(p.group(GroupId::Staging).len(), 3);
        assert!(p.group(GroupId::GroupA).is_empty());
        assert!(p.group(GroupId::GroupB).is_empty());
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_locate() {
        let p = Partition::new(items());
        assert_eq!(p.locate(ItemId(2)), Some(GroupId::Staging));
        assert_eq!(p.locate(ItemId(9)), None);
    }

    #[test]
    fn test_relocate_appends_to_end_and_shares_untouched_group() {
        let p = Partition::new(items());
        let p = p.relocate(ItemId(1), GroupId::Staging, GroupId::GroupA);
        let next = p.relocate(ItemId(3), GroupId::Staging, GroupId::GroupA);

        let ids: Vec<u32> = next.group(GroupId::GroupA).iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(next.group(GroupId::Staging)[0].id, ItemId(2));
        assert!(next.shares_group(&p, GroupId::GroupB));
        assert!(!next.shares_group(&p, GroupId::GroupA));
    }

    #[test]
    fn test_equality_ignores_allocation() {
        let a = Partition::new(items());
        let b = Partition::new(items());
        assert_eq!(a, b);
        assert!(!a.shares_group(&b, GroupId::Staging));
    }

    #[test]
    fn test_group_id_parsing_accepts_aliases() {
        assert_eq!("box".parse::<GroupId>(), Ok(GroupId::Staging));
        assert_eq!("column1".parse::<GroupId>(), Ok(GroupId::GroupA));
        assert_eq!("group_b".parse::<GroupId>(), Ok(GroupId::GroupB));
        assert_eq!(
            "column3".parse::<GroupId>(),
            Err(UnknownGroup("column3".to_string()))
        );
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(4).to_string(), "#4");
    }
}

//! # Quiz Definitions
//!
//! A quiz is the static data a game starts from: the cards, the answer key
//! and the text shown around them. Quizzes come either from the built-in
//! set or from a TOML file (see [`QuizFile`]), and are validated once when
//! they are turned into a [`Quiz`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::Builtin;
use crate::core::engine::AnswerKey;
use crate::core::partition::{GroupId, Item, ItemId};

/// A validated quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub title: String,
    pub staging_title: String,
    pub group_a_title: String,
    pub group_b_title: String,
    pub success_message: String,
    pub failure_message: String,
    pub items: Vec<Item>,
    pub key: AnswerKey,
}

impl Quiz {
    /// Built-in data goes through the same validation as a quiz file.
    pub fn builtin(which: Builtin) -> Result<Self, QuizError> {
        let file = match which {
            Builtin::Sharing => sharing_fr(),
            Builtin::SharingEn => sharing_en(),
        };
        Quiz::try_from(file)
    }

    pub fn group_title(&self, group: GroupId) -> &str {
        match group {
            GroupId::Staging => &self.staging_title,
            GroupId::GroupA => &self.group_a_title,
            GroupId::GroupB => &self.group_b_title,
        }
    }
}

// ============================================================================
// TOML schema
// ============================================================================

/// On-disk form of a quiz. Titles and messages are optional and fall back to
/// the built-in wording.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizFile {
    pub title: Option<String>,
    pub staging_title: Option<String>,
    pub group_a_title: Option<String>,
    pub group_b_title: Option<String>,
    pub success_message: Option<String>,
    pub failure_message: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub key: KeyFile,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeyFile {
    #[serde(default)]
    pub group_a: Vec<ItemId>,
    #[serde(default)]
    pub group_b: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    NoItems,
    DuplicateItem(ItemId),
    /// An id listed under both key groups.
    KeyOverlap(ItemId),
    /// A card the key does not place.
    Unclassified(ItemId),
    /// A key entry with no matching card.
    UnknownKeyEntry(ItemId),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NoItems => write!(f, "quiz has no items"),
            QuizError::DuplicateItem(id) => write!(f, "item {id} is defined twice"),
            QuizError::KeyOverlap(id) => {
                write!(f, "item {id} is listed under both group_a and group_b")
            }
            QuizError::Unclassified(id) => write!(f, "item {id} is missing from the answer key"),
            QuizError::UnknownKeyEntry(id) => {
                write!(f, "answer key mentions {id}, which is not an item")
            }
        }
    }
}

impl std::error::Error for QuizError {}

impl TryFrom<QuizFile> for Quiz {
    type Error = QuizError;

    fn try_from(file: QuizFile) -> Result<Self, Self::Error> {
        if file.items.is_empty() {
            return Err(QuizError::NoItems);
        }

        let mut ids = HashSet::new();
        for item in &file.items {
            if !ids.insert(item.id) {
                return Err(QuizError::DuplicateItem(item.id));
            }
        }

        let key = AnswerKey::new(file.key.group_a.iter().copied(), file.key.group_b.iter().copied())
            .map_err(QuizError::KeyOverlap)?;

        if let Some(id) = file
            .key
            .group_a
            .iter()
            .chain(&file.key.group_b)
            .find(|id| !ids.contains(*id))
        {
            return Err(QuizError::UnknownKeyEntry(*id));
        }

        if let Some(item) = file
            .items
            .iter()
            .find(|item| key.expected_group(item.id).is_none())
        {
            return Err(QuizError::Unclassified(item.id));
        }

        let defaults = sharing_en();
        Ok(Quiz {
            title: file.title.or(defaults.title).unwrap_or_default(),
            staging_title: file.staging_title.or(defaults.staging_title).unwrap_or_default(),
            group_a_title: file.group_a_title.or(defaults.group_a_title).unwrap_or_default(),
            group_b_title: file.group_b_title.or(defaults.group_b_title).unwrap_or_default(),
            success_message: file
                .success_message
                .or(defaults.success_message)
                .unwrap_or_default(),
            failure_message: file
                .failure_message
                .or(defaults.failure_message)
                .unwrap_or_default(),
            items: file.items,
            key,
        })
    }
}

// ============================================================================
// Built-ins
// ============================================================================

fn sharing_fr() -> QuizFile {
    QuizFile {
        title: Some("Que puis-je partager en ligne ?".into()),
        staging_title: Some("↔️ Déplace-moi dans la bonne colonne".into()),
        group_a_title: Some("✅ Ce que je peux partager en ligne".into()),
        group_b_title: Some("❌ Ce que je ne dois pas partager en ligne".into()),
        success_message: Some("Succès !".into()),
        failure_message: Some("Échec !".into()),
        items: vec![
            Item::new(1, "Un mot de passe"),
            Item::new(2, "Une Date d'anniversaire"),
            Item::new(3, "Une copie de diplôme"),
            Item::new(4, "Ce que j'ai mangé à midi sur Facebook"),
            Item::new(5, "Mes passions"),
        ],
        key: KeyFile {
            group_a: vec![ItemId(4), ItemId(5)],
            group_b: vec![ItemId(1), ItemId(2), ItemId(3)],
        },
    }
}

fn sharing_en() -> QuizFile {
    QuizFile {
        title: Some("What can I share online?".into()),
        staging_title: Some("↔️ Move me to the right column".into()),
        group_a_title: Some("✅ Safe to share online".into()),
        group_b_title: Some("❌ Not safe to share online".into()),
        success_message: Some("Success!".into()),
        failure_message: Some("Failure!".into()),
        items: vec![
            Item::new(1, "A password"),
            Item::new(2, "A date of birth"),
            Item::new(3, "A copy of a diploma"),
            Item::new(4, "What I had for lunch, on Facebook"),
            Item::new(5, "My hobbies"),
        ],
        key: KeyFile {
            group_a: vec![ItemId(4), ItemId(5)],
            group_b: vec![ItemId(1), ItemId(2), ItemId(3)],
        },
    }
}

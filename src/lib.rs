//! cardsort library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Quizzes compiled into the binary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Builtin {
    /// "Que puis-je partager en ligne ?" (French)
    #[default]
    Sharing,
    /// English rendition of the same quiz
    SharingEn,
}

//! # Application State
//!
//! Core game state for cardsort. Domain data only, no TUI types.
//! Presentation state (drag in progress, toast, selection) lives in `tui`.
//!
//! ```text
//! App
//! ├── quiz: Quiz                 // items, answer key, titles
//! ├── partition: Partition       // where every card is right now
//! ├── moves: usize               // successful moves this game
//! └── status_message: String     // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The verdict is not stored here: it leaves `update` as an `Effect`.

use crate::core::partition::{GroupId, Partition};
use crate::core::quiz::Quiz;

pub struct App {
    pub quiz: Quiz,
    pub partition: Partition,
    pub moves: usize,
    pub status_message: String,
}

impl App {
    pub fn new(quiz: Quiz) -> Self {
        let partition = Partition::new(quiz.items.clone());
        Self {
            quiz,
            partition,
            moves: 0,
            status_message: String::new(),
        }
    }

    /// Cards already taken out of staging.
    pub fn sorted_count(&self) -> usize {
        self.partition.len() - self.partition.group(GroupId::Staging).len()
    }

    /// Puts every card back into staging.
    pub(crate) fn reset(&mut self) {
        self.partition = Partition::new(self.quiz.items.clone());
        self.moves = 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.moves, 0);
        assert_eq!(app.sorted_count(), 0);
        assert_eq!(app.partition.len(), 5);
        assert!(app.status_message.is_empty());
    }
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::Builtin;
use crate::core::quiz::Quiz;
use crate::core::state::App;

/// The English sharing quiz: key A = {4, 5}, key B = {1, 2, 3}.
pub fn test_quiz() -> Quiz {
    Quiz::builtin(Builtin::SharingEn).unwrap()
}

/// Creates a fresh game on the test quiz.
pub fn test_app() -> App {
    App::new(test_quiz())
}

//! # Core Game Logic
//!
//! This module contains the quiz rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Partition (cards)    │
//!                    │  • engine (apply_move)  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No terminal. Pure.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Headless  │
//!     │  Adapter   │                          │   replay   │
//!     │ (ratatui)  │                          │ (--play)   │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`partition`]: `Item`, `GroupId` and the three-way `Partition`
//! - [`engine`]: `apply_move()` and the verdict check
//! - [`quiz`]: quiz data, built-ins and validation
//! - [`state`]: the `App` struct, one game in progress
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file, env vars and CLI resolution
//! - [`replay`]: scripted moves without a terminal

pub mod action;
pub mod config;
pub mod engine;
pub mod partition;
pub mod quiz;
pub mod replay;
pub mod state;

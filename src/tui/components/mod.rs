//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top status line with quiz title and progress
//! - `Card`: A single item, in place or floating under the pointer
//! - `Column`: One droppable group and its cards
//!
//! ### Persistent State + Transient Wrapper
//!
//! - `Toast`: verdict notification; `ToastState` lives in `TuiState`, the
//!   `Toast` wrapper is rebuilt every frame around a borrow of it
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Column { group, title, items: app.partition.group(group), .. }.render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! column.render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── card.rs          (Single item)
//! ├── column.rs        (Droppable group)
//! └── toast.rs         (Verdict notification)
//! ```

pub mod card;
pub mod column;
pub mod title_bar;
pub mod toast;

pub use card::{Card, CardLook};
pub use column::Column;
pub use title_bar::TitleBar;
pub use toast::{Toast, ToastState};

//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod field;
pub mod panel;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{AppState, FieldFocus, FieldSlot};
pub use field::{FieldKind, InputField};
pub use panel::{Operator, OutputStatus, Panel, PanelId};

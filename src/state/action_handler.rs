//! Keyboard action dispatch (pure state transitions).

use crate::model::KeyAction;
use crate::state::panel::Operator;
use crate::state::AppState;

/// Apply `action` to `state`.
///
/// Returns true if the application should quit.
pub fn handle_action(state: &mut AppState, action: KeyAction) -> bool {
    match action {
        KeyAction::NextField => state.focus_next(),
        KeyAction::PrevField => state.focus_prev(),

        KeyAction::CursorLeft => state.focused_field_mut().cursor_left(),
        KeyAction::CursorRight => state.focused_field_mut().cursor_right(),
        KeyAction::CursorHome => state.focused_field_mut().cursor_home(),
        KeyAction::CursorEnd => state.focused_field_mut().cursor_end(),
        KeyAction::DeleteBack => state.focused_field_mut().delete_back(),
        KeyAction::DeleteForward => state.focused_field_mut().delete_forward(),
        KeyAction::ClearField => state.focused_field_mut().clear(),

        KeyAction::Calculate => {
            // Outcome is already reflected in the panel output
            let _ = state.calculate_focused();
        }
        KeyAction::ToggleOperator => state.toggle_operator(),
        KeyAction::SetAdd => state.set_operator(Operator::Add),
        KeyAction::SetSubtract => state.set_operator(Operator::Subtract),

        KeyAction::ClearLatest => state.clear_latest(),
        KeyAction::ClearAll => state.clear_all(),
        KeyAction::ToggleLog => state.toggle_log(),
        KeyAction::LogScrollUp => state.scroll_log_up(),
        KeyAction::LogScrollDown => state.scroll_log_down(),

        KeyAction::Reset => state.reset(),
        KeyAction::Help => state.toggle_help(),
        KeyAction::Quit => return true,
    }
    false
}

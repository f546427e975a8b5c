//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Keys not bound here fall through to the focused input field as text.
/// Only characters no field accepts (`?`, `+`, `-`) are bound without a
/// modifier.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether shifted punctuation carries
    /// `SHIFT`, so character keys are also tried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT)))
                .copied(),
            _ => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Focus
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextField);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::NextField);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevField);
        bind(KeyCode::BackTab, KeyModifiers::NONE, KeyAction::PrevField);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::PrevField);

        // Field editing
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::CursorLeft);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::CursorRight);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::CursorHome);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::CursorEnd);
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteBack);
        bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeleteForward);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearField);

        // Calculation
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Calculate);
        bind(KeyCode::Char('o'), KeyModifiers::CONTROL, KeyAction::ToggleOperator);
        bind(KeyCode::Char('+'), KeyModifiers::NONE, KeyAction::SetAdd);
        bind(KeyCode::Char('-'), KeyModifiers::NONE, KeyAction::SetSubtract);

        // Log
        bind(KeyCode::Char('z'), KeyModifiers::CONTROL, KeyAction::ClearLatest);
        bind(KeyCode::Char('x'), KeyModifiers::CONTROL, KeyAction::ClearAll);
        bind(KeyCode::F(2), KeyModifiers::NONE, KeyAction::ToggleLog);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::LogScrollUp);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::LogScrollDown);

        // Application
        bind(KeyCode::Char('r'), KeyModifiers::CONTROL, KeyAction::Reset);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::F(1), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('q'), KeyModifiers::CONTROL, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}

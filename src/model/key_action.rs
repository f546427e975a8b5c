//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Plain character input is not an action; it goes to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus
    /// Move focus to the next input field. Default: Tab/↓
    NextField,
    /// Move focus to the previous input field. Default: Shift+Tab/↑
    PrevField,

    // Field editing
    /// Move the cursor left. Default: ←
    CursorLeft,
    /// Move the cursor right. Default: →
    CursorRight,
    /// Move the cursor to the start of the field. Default: Home
    CursorHome,
    /// Move the cursor to the end of the field. Default: End
    CursorEnd,
    /// Delete the character before the cursor. Default: Backspace
    DeleteBack,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Clear the focused field. Default: Ctrl+u
    ClearField,

    // Calculation
    /// Calculate the panel owning the focused field. Default: Enter
    Calculate,
    /// Switch the time calculator between `+` and `-`. Default: Ctrl+o
    ToggleOperator,
    /// Set the time calculator to addition. Default: +
    SetAdd,
    /// Set the time calculator to subtraction. Default: -
    SetSubtract,

    // Log
    /// Remove the most recent log entry. Default: Ctrl+z
    ClearLatest,
    /// Remove every log entry. Default: Ctrl+x
    ClearAll,
    /// Show or hide the log pane. Default: F2
    ToggleLog,
    /// Scroll the log back towards the newest entry. Default: PgUp
    LogScrollUp,
    /// Scroll the log towards older entries. Default: PgDn
    LogScrollDown,

    // Application
    /// Clear all fields, outputs and the log. Default: Ctrl+r
    Reset,
    /// Show help overlay with keyboard shortcuts. Default: ?/F1
    Help,
    /// Exit the application. Default: Esc/Ctrl+c/Ctrl+q
    Quit,
}

//! Editable input fields.
//!
//! A field only ever holds text its kind could contain, so keystrokes that
//! cannot be part of a timestamp or a distance are dropped on entry.
//! Everything accepted is ASCII, so the cursor is a byte offset.

/// What an input field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `SS`, `MM:SS` or `HH:MM:SS`.
    Timestamp,
    /// Decimal distance in the user's unit.
    Distance,
}

impl FieldKind {
    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Timestamp => "00:00:00",
            FieldKind::Distance => "0.0",
        }
    }

    /// Whether `ch` may be added to `current`.
    ///
    /// Timestamps take digits and up to two colons. Distances take digits and
    /// one decimal point.
    pub fn accepts(self, current: &str, ch: char) -> bool {
        match (self, ch) {
            (_, '0'..='9') => true,
            (FieldKind::Timestamp, ':') => current.matches(':').count() < 2,
            (FieldKind::Distance, '.') => !current.contains('.'),
            _ => false,
        }
    }
}

/// A single-line text input with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    kind: FieldKind,
    text: String,
    cursor: usize,
}

impl InputField {
    /// Create an empty field.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            text: String::new(),
            cursor: 0,
        }
    }

    /// Create a field pre-filled with `text`, cursor at the end.
    ///
    /// Characters the kind does not accept are skipped.
    pub fn with_text(kind: FieldKind, text: &str) -> Self {
        let mut field = Self::new(kind);
        for ch in text.chars() {
            field.insert_char(ch);
        }
        field
    }

    /// The field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Current text, as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position (0 = before the first character).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert `ch` at the cursor if the kind accepts it.
    ///
    /// Returns whether the character was inserted.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.kind.accepts(&self.text, ch) {
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor.
    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.text.remove(self.cursor - 1);
            self.cursor -= 1;
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Move cursor left by one position. Saturates at 0.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right by one position. Saturates at the text length.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.len());
    }

    /// Move cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor past the last character.
    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_accepts_digits_and_two_colons() {
        let mut field = InputField::new(FieldKind::Timestamp);
        for ch in "1:2:3:4".chars() {
            field.insert_char(ch);
        }
        assert_eq!(field.text(), "1:2:34");
    }

    #[test]
    fn timestamp_rejects_other_characters() {
        let mut field = InputField::new(FieldKind::Timestamp);
        for ch in ['a', '.', '-', '+', ' ', '?'] {
            assert!(!field.insert_char(ch), "{ch:?} should be rejected");
        }
        assert!(field.is_empty());
    }

    #[test]
    fn distance_accepts_one_decimal_point() {
        let field = InputField::with_text(FieldKind::Distance, "42.19.5");
        assert_eq!(field.text(), "42.195");
    }

    #[test]
    fn insert_at_cursor() {
        let mut field = InputField::with_text(FieldKind::Timestamp, "100");
        field.cursor_left();
        field.cursor_left();
        field.insert_char(':');
        assert_eq!(field.text(), "1:00");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn delete_back_at_start_is_noop() {
        let mut field = InputField::with_text(FieldKind::Timestamp, "12");
        field.cursor_home();
        field.delete_back();
        assert_eq!(field.text(), "12");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn delete_back_and_forward() {
        let mut field = InputField::with_text(FieldKind::Timestamp, "1234");
        field.cursor_left();
        field.delete_back();
        assert_eq!(field.text(), "124");
        field.delete_forward();
        assert_eq!(field.text(), "12");
        field.delete_forward();
        assert_eq!(field.text(), "12", "delete at end is a no-op");
    }

    #[test]
    fn cursor_saturates() {
        let mut field = InputField::with_text(FieldKind::Distance, "5");
        field.cursor_right();
        assert_eq!(field.cursor(), 1);
        field.cursor_left();
        field.cursor_left();
        assert_eq!(field.cursor(), 0);
        field.cursor_end();
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut field = InputField::with_text(FieldKind::Timestamp, "10:00");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn placeholders() {
        assert_eq!(FieldKind::Timestamp.placeholder(), "00:00:00");
        assert_eq!(FieldKind::Distance.placeholder(), "0.0");
    }
}

//! Key input and line editing.
//!
//! [`InputLine`] owns the text of one editable line (a room's input or the
//! room-creation control) and handles character-level keys. The cursor counts
//! characters, not bytes, so multi-byte input edits cleanly.

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Ctrl+N: move to the room-creation line.
    NewRoom,
    /// Ctrl+O: open the highlighted roster room.
    OpenRoom,
}

/// One editable line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    buffer: String,
    cursor: usize,
}

impl InputLine {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Empty the line.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns `false` for keys that do not edit.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.len() {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.len(),
            KeyInput::Enter
            | KeyInput::Tab
            | KeyInput::Esc
            | KeyInput::Up
            | KeyInput::Down
            | KeyInput::NewRoom
            | KeyInput::OpenRoom => return false,
        }
        true
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.buffer.char_indices().nth(chars).map_or(self.buffer.len(), |(at, _)| at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputLine {
        let mut line = InputLine::new();
        for c in text.chars() {
            line.edit(KeyInput::Char(c));
        }
        line
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut line = typed("helo");
        line.edit(KeyInput::Left);
        line.edit(KeyInput::Char('l'));
        assert_eq!(line.buffer(), "hello");
        assert_eq!(line.cursor(), 4);
    }

    #[test]
    fn backspace_and_delete_respect_bounds() {
        let mut line = typed("ab");
        line.edit(KeyInput::Delete);
        assert_eq!(line.buffer(), "ab");

        line.edit(KeyInput::Home);
        line.edit(KeyInput::Backspace);
        assert_eq!(line.buffer(), "ab");

        line.edit(KeyInput::Delete);
        assert_eq!(line.buffer(), "b");
    }

    #[test]
    fn multibyte_characters_edit_whole() {
        let mut line = typed("héé");
        line.edit(KeyInput::Backspace);
        line.edit(KeyInput::Left);
        line.edit(KeyInput::Char('y'));
        assert_eq!(line.buffer(), "hyé");
        line.edit(KeyInput::End);
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn non_editing_keys_are_reported() {
        let mut line = typed("x");
        assert!(!line.edit(KeyInput::Enter));
        assert!(!line.edit(KeyInput::NewRoom));
        assert_eq!(line.buffer(), "x");
    }

    #[test]
    fn clear_resets_cursor() {
        let mut line = typed("abc");
        line.clear();
        assert_eq!(line.buffer(), "");
        assert_eq!(line.cursor(), 0);
    }
}

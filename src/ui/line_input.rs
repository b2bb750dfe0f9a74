use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Single-line text editor used by the profile setup screen.
pub struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled
    /// rendering. When the cursor is at the end of the text, cursor_char is
    /// None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        if self.cursor >= self.text.chars().count() {
            (&self.text, None, "")
        } else {
            let ch = self.text[byte_offset..].chars().next().unwrap();
            let next_byte = byte_offset + ch.len_utf8();
            (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let byte_offset = self.char_to_byte(self.cursor - 1);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    let byte_offset = self.char_to_byte(self.cursor);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                }
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Delete word before cursor (unix-word-rubout: skip whitespace, then
    /// non-whitespace).
    fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        let start_byte = self.char_to_byte(pos);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn insert_at_start_middle_end() {
        let mut input = LineInput::new("ac");
        input.handle(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "acd");

        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "zacd");

        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "zabcd");
    }

    #[test]
    fn backspace_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn delete_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");

        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn ctrl_w_word_delete() {
        let mut input = LineInput::new("foo bar  ");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "foo ");

        let mut input2 = LineInput::new("");
        input2.handle(ctrl('w'));
        assert_eq!(input2.value(), "");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut input = LineInput::new("hello world");
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn unicode_names_edit_cleanly() {
        let mut input = LineInput::new("Андрій");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "Андрі");
        input.handle(key(KeyCode::Char('й')));
        assert_eq!(input.value(), "Андрій");
    }

    #[test]
    fn render_parts_covers_cursor_positions() {
        let mut input = LineInput::new("abc");
        let (before, ch, after) = input.render_parts();
        assert_eq!((before, ch, after), ("abc", None, ""));

        input.handle(key(KeyCode::Home));
        let (before, ch, after) = input.render_parts();
        assert_eq!((before, ch, after), ("", Some('a'), "bc"));

        input.handle(key(KeyCode::Right));
        let (before, ch, after) = input.render_parts();
        assert_eq!((before, ch, after), ("a", Some('b'), "c"));
    }

    #[test]
    fn submit_and_cancel() {
        let mut input = LineInput::new("test");
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);

        let mut input2 = LineInput::new("test");
        assert_eq!(input2.handle(key(KeyCode::Esc)), InputResult::Cancel);
    }
}

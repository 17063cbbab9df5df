//! Editable text buffer with a cursor

/// Cursor position; `column` counts characters, not bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// Multi-line text with a single cursor
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        let mut buffer = TextBuffer {
            lines: Vec::new(),
            cursor: Cursor::default(),
        };
        buffer.set_text(text);
        buffer
    }

    /// Full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the contents, keeping the cursor where it still fits
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.clamp_cursor();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset();
        self.lines[self.cursor.row].insert(at, ch);
        self.cursor.column += 1;
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        let at = self.byte_offset();
        let tail = self.lines[self.cursor.row].split_off(at);
        self.lines.insert(self.cursor.row + 1, tail);
        self.cursor.row += 1;
        self.cursor.column = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0.
    ///
    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
            let at = self.byte_offset();
            self.lines[self.cursor.row].remove(at);
            true
        } else if self.cursor.row > 0 {
            let line = self.lines.remove(self.cursor.row);
            self.cursor.row -= 1;
            self.cursor.column = self.line_len(self.cursor.row);
            self.lines[self.cursor.row].push_str(&line);
            true
        } else {
            false
        }
    }

    /// Delete the character under the cursor, joining the next line at the end
    pub fn delete(&mut self) -> bool {
        if self.cursor.column < self.line_len(self.cursor.row) {
            let at = self.byte_offset();
            self.lines[self.cursor.row].remove(at);
            true
        } else if self.cursor.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor.row + 1);
            self.lines[self.cursor.row].push_str(&next);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.column = self.line_len(self.cursor.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.column < self.line_len(self.cursor.row) {
            self.cursor.column += 1;
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.cursor.column = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.column = self.cursor.column.min(self.line_len(self.cursor.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.cursor.column = self.cursor.column.min(self.line_len(self.cursor.row));
        }
    }

    pub fn move_home(&mut self) {
        self.cursor.column = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor.column = self.line_len(self.cursor.row);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |line| line.chars().count())
    }

    fn byte_offset(&self) -> usize {
        let line = &self.lines[self.cursor.row];
        line.char_indices()
            .nth(self.cursor.column)
            .map_or(line.len(), |(offset, _)| offset)
    }

    fn clamp_cursor(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor.row = self.cursor.row.min(self.lines.len() - 1);
        self.cursor.column = self.cursor.column.min(self.line_len(self.cursor.row));
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_newline() {
        let mut buffer = TextBuffer::default();
        for ch in "a[0]".chars() {
            buffer.insert_char(ch);
        }
        buffer.insert_newline();
        buffer.insert_char('x');
        assert_eq!(buffer.text(), "a[0]\nx");
        assert_eq!(buffer.cursor(), Cursor { row: 1, column: 1 });
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buffer = TextBuffer::new("ab\ncd");
        buffer.move_down();
        buffer.move_home();
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), Cursor { row: 0, column: 2 });
    }

    #[test]
    fn test_delete_at_end_joins_next_line() {
        let mut buffer = TextBuffer::new("ab\ncd");
        buffer.move_end();
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "abcd");
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "abd");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buffer = TextBuffer::new("é");
        buffer.move_end();
        buffer.insert_char('x');
        assert_eq!(buffer.text(), "éx");
        buffer.move_left();
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "x");
    }

    #[test]
    fn test_set_text_clamps_cursor() {
        let mut buffer = TextBuffer::new("long line\nsecond");
        buffer.move_down();
        buffer.move_end();
        buffer.set_text("ab");
        assert_eq!(buffer.cursor(), Cursor { row: 0, column: 2 });
    }
}

//! Logical Line Index
//!
//! Provides efficient line indexing using Rope data structure, supporting O(log N) access.

use crate::range::{Position, Range};
use ropey::Rope;
use ropey::iter::Chars;

/// Characters ropey treats as line terminators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Logical line index - implemented using Rope data structure
///
/// Rope provides O(log N) line access, suitable for large documents.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index (one empty row).
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Get total row count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get complete text
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified row (excluding the line terminator)
    pub fn get_line_text(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(row).to_string();
        while text.ends_with(is_line_break) {
            text.pop();
        }
        Some(text)
    }

    /// Length of a row in characters (excluding the line terminator); 0 past the end.
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }

        let line = self.rope.line(row);
        let mut len = line.len_chars();
        while len > 0 && is_line_break(line.char(len - 1)) {
            len -= 1;
        }
        len
    }

    /// Get character offset from a position, clamping the column to the row length.
    pub fn position_to_char_offset(&self, position: Position) -> usize {
        if position.row >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(position.row);
        line_start + position.column.min(self.line_len(position.row))
    }

    /// Get position from a character offset (clamped to the document end).
    pub fn char_offset_to_position(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.rope.len_chars());

        let row = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(row);
        Position::new(row, char_offset - line_start)
    }

    /// Get the text covered by `range` (end exclusive; columns clamped to row lengths).
    pub fn slice(&self, range: Range) -> String {
        let start = self.position_to_char_offset(range.start);
        let end = self.position_to_char_offset(range.end);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Get the character at a position, if the position addresses a char inside its row.
    pub fn char_at(&self, position: Position) -> Option<char> {
        if position.column >= self.line_len(position.row) {
            return None;
        }
        let offset = self.position_to_char_offset(position);
        Some(self.rope.char(offset))
    }

    /// Bidirectional char iterator starting at `char_offset` (clamped).
    pub fn chars_at(&self, char_offset: usize) -> Chars<'_> {
        self.rope.chars_at(char_offset.min(self.rope.len_chars()))
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_index() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1); // Rope empty document has 1 line
        assert_eq!(index.char_count(), 0);
        assert_eq!(index.get_line_text(0).as_deref(), Some(""));
    }

    #[test]
    fn test_get_line_text_strips_terminators() {
        let index = LineIndex::from_text("// a\r\n// b\nend");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.get_line_text(0).as_deref(), Some("// a"));
        assert_eq!(index.get_line_text(1).as_deref(), Some("// b"));
        assert_eq!(index.get_line_text(2).as_deref(), Some("end"));
        assert_eq!(index.get_line_text(3), None);
        assert_eq!(index.line_len(0), 4);
        assert_eq!(index.line_len(9), 0);
    }

    #[test]
    fn test_position_to_char_offset() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.position_to_char_offset(Position::new(0, 0)), 0); // A
        assert_eq!(index.position_to_char_offset(Position::new(0, 2)), 2); // C
        assert_eq!(index.position_to_char_offset(Position::new(1, 0)), 4); // D
        assert_eq!(index.position_to_char_offset(Position::new(2, 0)), 8); // G
        // Column past the row end clamps before the newline.
        assert_eq!(index.position_to_char_offset(Position::new(0, 40)), 3);
        assert_eq!(index.position_to_char_offset(Position::new(7, 0)), 11);
    }

    #[test]
    fn test_char_offset_to_position() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.char_offset_to_position(0), Position::new(0, 0));
        assert_eq!(index.char_offset_to_position(4), Position::new(1, 0));
        assert_eq!(index.char_offset_to_position(99), Position::new(2, 3));
    }

    #[test]
    fn test_slice_multi_row() {
        let index = LineIndex::from_text("fn a() {\n    1\n}");
        let text = index.slice(Range::from_coords(0, 7, 2, 1));
        assert_eq!(text, "{\n    1\n}");
        assert_eq!(index.slice(Range::from_coords(1, 2, 1, 2)), "");
    }

    #[test]
    fn test_utf8_cjk() {
        let index = LineIndex::from_text("你好\n世界");

        assert_eq!(index.line_len(0), 2);
        assert_eq!(index.char_at(Position::new(1, 1)), Some('界'));
        assert_eq!(index.char_at(Position::new(1, 2)), None);
        assert_eq!(index.slice(Range::from_coords(0, 1, 1, 1)), "好\n世");
    }
}

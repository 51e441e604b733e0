//! Bracket matching.
//!
//! The bracket considered is the character immediately *before* the cursor. Opening brackets
//! are matched by scanning forward, closing brackets by scanning backward, balancing nested
//! pairs of the same kind.

use crate::line_index::LineIndex;
use crate::range::Position;

/// Bracket pairs recognised by [`find_matching_bracket`].
pub const BRACKET_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

fn closer_for(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, c)| *c)
}

fn opener_for(close: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(_, c)| *c == close)
        .map(|(o, _)| *o)
}

/// Find the counterpart of the bracket just before `position`.
///
/// Returns the position of the matching bracket character, or `None` when the cursor is at
/// column 0, the preceding char is not a bracket, or the bracket is unbalanced.
pub fn find_matching_bracket(line_index: &LineIndex, position: Position) -> Option<Position> {
    if position.column == 0 {
        return None;
    }

    let bracket_pos = Position::new(position.row, position.column - 1);
    let bracket = line_index.char_at(bracket_pos)?;
    let bracket_offset = line_index.position_to_char_offset(bracket_pos);

    if let Some(close) = closer_for(bracket) {
        find_closing(line_index, bracket, close, bracket_offset + 1)
    } else if let Some(open) = opener_for(bracket) {
        find_opening(line_index, open, bracket, bracket_offset)
    } else {
        None
    }
}

fn find_closing(line_index: &LineIndex, open: char, close: char, from: usize) -> Option<Position> {
    let mut depth = 0usize;
    for (offset, c) in (from..).zip(line_index.chars_at(from)) {
        if c == open {
            depth += 1;
        } else if c == close {
            if depth == 0 {
                return Some(line_index.char_offset_to_position(offset));
            }
            depth -= 1;
        }
    }
    None
}

fn find_opening(
    line_index: &LineIndex,
    open: char,
    close: char,
    before: usize,
) -> Option<Position> {
    let mut chars = line_index.chars_at(before);
    let mut offset = before;
    let mut depth = 0usize;

    while let Some(c) = chars.prev() {
        offset -= 1;
        if c == close {
            depth += 1;
        } else if c == open {
            if depth == 0 {
                return Some(line_index.char_offset_to_position(offset));
            }
            depth -= 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_bracket_scans_forward() {
        let index = LineIndex::from_text("f(a, (b)) + 1");
        // Cursor right after the first '('.
        assert_eq!(
            find_matching_bracket(&index, Position::new(0, 2)),
            Some(Position::new(0, 8))
        );
    }

    #[test]
    fn test_close_bracket_scans_backward() {
        let index = LineIndex::from_text("f(a, (b)) + 1");
        // Cursor right after the last ')'.
        assert_eq!(
            find_matching_bracket(&index, Position::new(0, 9)),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_multi_row_braces() {
        let index = LineIndex::from_text("fn main() {\n    if x { y }\n}\n");
        assert_eq!(
            find_matching_bracket(&index, Position::new(0, 11)),
            Some(Position::new(2, 0))
        );
        assert_eq!(
            find_matching_bracket(&index, Position::new(2, 1)),
            Some(Position::new(0, 10))
        );
    }

    #[test]
    fn test_other_kinds_do_not_interfere() {
        let index = LineIndex::from_text("[ ( ] )");
        assert_eq!(
            find_matching_bracket(&index, Position::new(0, 1)),
            Some(Position::new(0, 4))
        );
    }

    #[test]
    fn test_no_match() {
        let index = LineIndex::from_text("abc (\n");
        assert_eq!(find_matching_bracket(&index, Position::new(0, 0)), None);
        assert_eq!(find_matching_bracket(&index, Position::new(0, 2)), None);
        assert_eq!(find_matching_bracket(&index, Position::new(0, 5)), None);
        assert_eq!(find_matching_bracket(&index, Position::new(5, 1)), None);
    }
}

//! Positions, ranges and selections.
//!
//! All coordinates are zero-based. Columns are counted in characters (Unicode scalar values),
//! not bytes, matching the rope-backed [`LineIndex`](crate::LineIndex).

use std::cmp::Ordering;

/// Position coordinates (row and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical row index.
    pub row: usize,
    /// Zero-based column in characters within the row.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A span between two positions.
///
/// Ranges passed to fold creation always satisfy `start <= end`; use [`Range::ordered`] when
/// the two endpoints come from an unordered source (cursor + matched bracket, anchor + head).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Range start position
    pub start: Position,
    /// Range end position
    pub end: Position,
}

impl Range {
    /// Create a range from raw endpoints (not reordered).
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a range from row/column pairs.
    pub fn from_coords(
        start_row: usize,
        start_column: usize,
        end_row: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            Position::new(start_row, start_column),
            Position::new(end_row, end_column),
        )
    }

    /// Create an empty range (a caret) at `position`.
    pub fn point(position: Position) -> Self {
        Self::new(position, position)
    }

    /// Create a range whose start is the earlier of `a` and `b`.
    ///
    /// On a tie the result is empty.
    pub fn ordered(a: Position, b: Position) -> Self {
        if b < a { Self::new(b, a) } else { Self::new(a, b) }
    }

    /// Returns `true` if this range is a pure caret (`start == end`).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if both endpoints are on the same row.
    pub fn is_single_row(&self) -> bool {
        self.start.row == self.end.row
    }

    /// Check if a position lies within the range (both ends inclusive).
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Check if `other` lies completely within this range (both ends inclusive).
    pub fn contains_range(&self, other: &Range) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Check if two ranges share at least one position.
    pub fn intersects(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDirection {
    /// Forward selection (from start to end)
    #[default]
    Forward,
    /// Backward selection (from end to start)
    Backward,
}

/// Selection range
///
/// Constructors keep `start <= end`; the fields are public, so [`Selection::range`] orders
/// them again. The direction records which end the caret sits on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selection start position
    pub start: Position,
    /// Selection end position
    pub end: Position,
    /// Selection direction
    pub direction: SelectionDirection,
}

impl Selection {
    /// Create an empty selection (caret) at `position`.
    pub fn cursor(position: Position) -> Self {
        Self {
            start: position,
            end: position,
            direction: SelectionDirection::Forward,
        }
    }

    /// Create a selection from an anchor and a head (caret) position.
    pub fn from_anchor_head(anchor: Position, head: Position) -> Self {
        let range = Range::ordered(anchor, head);
        let direction = if head < anchor {
            SelectionDirection::Backward
        } else {
            SelectionDirection::Forward
        };
        Self {
            start: range.start,
            end: range.end,
            direction,
        }
    }

    /// The selected range, ordered even if `start` and `end` were assigned the wrong way round.
    pub fn range(&self) -> Range {
        Range::ordered(self.start, self.end)
    }

    /// Overwrite the selection with `range` (selected forward).
    pub fn set_range(&mut self, range: Range) {
        let range = Range::ordered(range.start, range.end);
        self.start = range.start;
        self.end = range.end;
        self.direction = SelectionDirection::Forward;
    }

    /// The caret position (the moving end of the selection).
    pub fn head(&self) -> Position {
        match self.direction {
            SelectionDirection::Forward => self.end,
            SelectionDirection::Backward => self.start,
        }
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

//! Fold region inference.
//!
//! Given the current selection and a [`DocumentModel`], decide what to fold:
//!
//! 1. A non-empty selection is folded as-is.
//! 2. A caret inside an existing fold expands that fold.
//! 3. A caret right after a bracket folds up to the matching bracket.
//! 4. A caret on a comment-only row folds the whole contiguous comment block.
//!
//! Anything else is a silent no-op. At most one mutation is issued per call, after all reads.

use crate::document::DocumentModel;
use crate::folding::Fold;
use crate::range::{Position, Range, Selection};
use crate::tokens::TokenClass;

/// Minimum number of (trimmed) characters a fold candidate must cover.
pub const MIN_FOLD_TEXT_CHARS: usize = 3;

/// Number of leading characters of the folded text kept in the placeholder.
const PLACEHOLDER_PREFIX_CHARS: usize = 3;

const PLACEHOLDER_ELLIPSIS: &str = "...";

/// Columns skipped after the comment start of the topmost comment row (the comment marker).
const COMMENT_MARKER_SKIP: usize = 2;

/// What [`resolve`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldOutcome {
    /// An existing fold at the caret was expanded; the selection now covers its range.
    Expanded(Fold),
    /// A new fold was created.
    Created(Fold),
    /// Nothing changed.
    NoOp(NoOpReason),
}

/// Why [`resolve`] left the document untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// The candidate range trims to fewer than [`MIN_FOLD_TEXT_CHARS`] characters.
    TextTooShort,
    /// No fold, matching bracket or comment block at the caret.
    NothingToFold,
}

impl FoldOutcome {
    /// Returns `true` if the document was mutated.
    pub fn is_change(&self) -> bool {
        !matches!(self, FoldOutcome::NoOp(_))
    }

    /// The fold that was created or expanded.
    pub fn fold(&self) -> Option<&Fold> {
        match self {
            FoldOutcome::Expanded(fold) | FoldOutcome::Created(fold) => Some(fold),
            FoldOutcome::NoOp(_) => None,
        }
    }
}

/// Classification of a single row for comment-block detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRun {
    /// Only plain text precedes a comment starting at `column`.
    Comment {
        /// Char offset where the comment token begins.
        column: usize,
    },
    /// The row has no comment and no code (blank, whitespace, or past the end).
    None,
    /// Code precedes any comment on the row.
    Blocked,
}

impl CommentRun {
    /// The comment start column, if the row is a comment row.
    pub fn column(self) -> Option<usize> {
        match self {
            CommentRun::Comment { column } => Some(column),
            CommentRun::None | CommentRun::Blocked => None,
        }
    }
}

/// Fold or unfold at the current selection.
///
/// `unfold_hint` is accepted for the `"unfold"` command but does not change which branch is
/// taken: both commands run the same toggle.
pub fn resolve<D>(selection: &mut Selection, doc: &mut D, unfold_hint: bool) -> FoldOutcome
where
    D: DocumentModel + ?Sized,
{
    let range = selection.range();
    tracing::debug!(?range, unfold_hint, "Resolving fold toggle");

    if !range.is_empty() {
        return create_fold(doc, range);
    }

    let cursor = range.start;

    if let Some(fold) = doc.fold_at(cursor.row, cursor.column) {
        tracing::debug!(fold = ?fold.range, "Caret inside existing fold, expanding");
        doc.expand_fold(&fold);
        selection.set_range(fold.range);
        return FoldOutcome::Expanded(fold);
    }

    if let Some(bracket) = doc.find_matching_bracket(cursor) {
        tracing::debug!(?bracket, "Folding to matching bracket");
        return create_fold(doc, Range::ordered(cursor, bracket));
    }

    if let Some(range) = comment_block_range(doc, cursor.row) {
        tracing::debug!(?range, "Folding comment block");
        return create_fold(doc, range);
    }

    tracing::debug!(?cursor, "Nothing to fold at caret");
    FoldOutcome::NoOp(NoOpReason::NothingToFold)
}

fn create_fold<D>(doc: &mut D, range: Range) -> FoldOutcome
where
    D: DocumentModel + ?Sized,
{
    let text = doc.text_range(range);
    let Some(placeholder) = placeholder_for(&text) else {
        tracing::debug!(?range, "Fold candidate too short");
        return FoldOutcome::NoOp(NoOpReason::TextTooShort);
    };
    FoldOutcome::Created(doc.add_fold(placeholder, range))
}

/// Derive a placeholder from folded text.
///
/// The text is trimmed; fewer than [`MIN_FOLD_TEXT_CHARS`] chars yields `None`. Otherwise the
/// first three chars, with spaces removed, are followed by `"..."`.
pub fn placeholder_for(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_FOLD_TEXT_CHARS {
        return None;
    }

    let mut placeholder: String = trimmed
        .chars()
        .take(PLACEHOLDER_PREFIX_CHARS)
        .filter(|c| *c != ' ')
        .collect();
    placeholder.push_str(PLACEHOLDER_ELLIPSIS);
    Some(placeholder)
}

/// Classify `row`: the comment start column when only plain text precedes a comment.
pub fn classify_comment_run<D>(doc: &D, row: usize) -> CommentRun
where
    D: DocumentModel + ?Sized,
{
    let mut column = 0usize;
    for token in doc.tokens(row) {
        match token.class() {
            TokenClass::Comment => {
                tracing::trace!(row, column, "Comment row");
                return CommentRun::Comment { column };
            }
            TokenClass::Code => {
                tracing::trace!(row, kind = %token.kind, "Row blocked by code");
                return CommentRun::Blocked;
            }
            TokenClass::Text => column += token.char_len(),
        }
    }
    CommentRun::None
}

/// Range of the contiguous comment block around `row`, if `row` is a comment row.
///
/// The start column is the comment column of the *topmost* row plus the marker width (2);
/// the end column is the length of the last row minus one.
pub fn comment_block_range<D>(doc: &D, row: usize) -> Option<Range>
where
    D: DocumentModel + ?Sized,
{
    let mut column = classify_comment_run(doc, row).column()?;

    let mut first_comment_row = row;
    while let Some(above) = first_comment_row.checked_sub(1) {
        let Some(c) = classify_comment_run(doc, above).column() else {
            break;
        };
        first_comment_row = above;
        column = c;
    }

    let mut last_comment_row = row;
    while classify_comment_run(doc, last_comment_row + 1)
        .column()
        .is_some()
    {
        last_comment_row += 1;
    }

    let end_column = doc
        .line(last_comment_row)
        .chars()
        .count()
        .saturating_sub(1);

    Some(Range::new(
        Position::new(first_comment_row, column + COMMENT_MARKER_SKIP),
        Position::new(last_comment_row, end_column),
    ))
}

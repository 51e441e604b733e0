//! Document Model
//!
//! [`DocumentModel`] is the seam between fold inference and whatever owns the text, tokens and
//! folds of a buffer. All operations are infallible: out-of-range rows degrade to empty tokens,
//! empty lines and `None`, so callers never have to bound-check.
//!
//! [`Document`] is the reference implementation: a rope-backed [`LineIndex`], a per-row token
//! cache produced by a [`Tokenizer`], and a [`FoldSet`].

use crate::brackets;
use crate::folding::{Fold, FoldSet};
use crate::line_index::LineIndex;
use crate::range::{Position, Range};
use crate::tokens::{PlainTextTokenizer, Token, Tokenizer, tokenize_lines};
use std::fmt;
use std::sync::Arc;

/// Operations fold inference needs from a document.
pub trait DocumentModel {
    /// Tokens of `row`, left to right; empty past the end of the document.
    fn tokens(&self, row: usize) -> &[Token];

    /// Position of the bracket matching the one just before `position`.
    fn find_matching_bracket(&self, position: Position) -> Option<Position>;

    /// The fold containing (`row`, `column`), if any.
    fn fold_at(&self, row: usize, column: usize) -> Option<Fold>;

    /// Remove `fold`, revealing its content.
    fn expand_fold(&mut self, fold: &Fold);

    /// Collapse `range` behind `placeholder` and return the new fold.
    fn add_fold(&mut self, placeholder: String, range: Range) -> Fold;

    /// Text covered by `range` (end exclusive).
    fn text_range(&self, range: Range) -> String;

    /// Text of `row` without its terminator; empty past the end of the document.
    fn line(&self, row: usize) -> String;
}

/// Rope-backed document with cached row tokens and folds.
pub struct Document {
    line_index: LineIndex,
    tokenizer: Arc<dyn Tokenizer>,
    tokens: Vec<Vec<Token>>,
    folds: FoldSet,
}

impl Document {
    /// Create a document and tokenize it with `tokenizer`.
    pub fn new(text: &str, tokenizer: Arc<dyn Tokenizer>) -> Self {
        let mut doc = Self {
            line_index: LineIndex::from_text(text),
            tokenizer,
            tokens: Vec::new(),
            folds: FoldSet::new(),
        };
        doc.retokenize();
        doc
    }

    /// Create a plain-text document (every row is a single `text` token).
    pub fn plain(text: &str) -> Self {
        Self::new(text, Arc::new(PlainTextTokenizer))
    }

    /// Replace the whole text. Existing folds are dropped.
    pub fn set_text(&mut self, text: &str) {
        self.line_index.set_text(text);
        self.folds.clear();
        self.retokenize();
    }

    /// Replace the whole text and the tokenizer, tokenizing once. Existing folds are dropped.
    pub fn set_text_and_tokenizer(&mut self, text: &str, tokenizer: Arc<dyn Tokenizer>) {
        self.line_index.set_text(text);
        self.folds.clear();
        self.tokenizer = tokenizer;
        self.retokenize();
    }

    /// Switch tokenizers and re-tokenize the document.
    pub fn set_tokenizer(&mut self, tokenizer: Arc<dyn Tokenizer>) {
        self.tokenizer = tokenizer;
        self.retokenize();
    }

    fn retokenize(&mut self) {
        let lines: Vec<String> = (0..self.line_index.line_count())
            .map(|row| self.line_index.get_line_text(row).unwrap_or_default())
            .collect();
        self.tokens = tokenize_lines(self.tokenizer.as_ref(), lines.iter().map(String::as_str));
    }

    /// Get text content
    pub fn text(&self) -> String {
        self.line_index.get_text()
    }

    /// Get total row count
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// The underlying line index.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Current folds.
    pub fn folds(&self) -> &FoldSet {
        &self.folds
    }

    /// Expand every fold.
    pub fn expand_all_folds(&mut self) {
        self.folds.expand_all();
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("line_count", &self.line_count())
            .field("folds", &self.folds)
            .finish_non_exhaustive()
    }
}

impl DocumentModel for Document {
    fn tokens(&self, row: usize) -> &[Token] {
        self.tokens.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    fn find_matching_bracket(&self, position: Position) -> Option<Position> {
        brackets::find_matching_bracket(&self.line_index, position)
    }

    fn fold_at(&self, row: usize, column: usize) -> Option<Fold> {
        self.folds.fold_at(Position::new(row, column)).cloned()
    }

    fn expand_fold(&mut self, fold: &Fold) {
        self.folds.expand(fold);
    }

    fn add_fold(&mut self, placeholder: String, range: Range) -> Fold {
        self.folds.add(Fold::new(range, placeholder))
    }

    fn text_range(&self, range: Range) -> String {
        self.line_index.slice(range)
    }

    fn line(&self, row: usize) -> String {
        self.line_index.get_line_text(row).unwrap_or_default()
    }
}

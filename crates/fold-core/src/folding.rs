//! Code folding
//!
//! A [`Fold`] collapses a [`Range`] of the document behind a short placeholder label.
//! [`FoldSet`] owns the folds of one document and keeps them non-overlapping.

use crate::range::{Position, Range};

/// A collapsed, labeled region of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Folded range (start <= end).
    pub range: Range,
    /// Placeholder text shown instead of the folded content (e.g. `"fun..."`).
    pub placeholder: String,
    /// Folds that were inside `range` when this fold was created; restored on expand.
    pub sub_folds: Vec<Fold>,
}

impl Fold {
    /// Create a fold without nested folds.
    pub fn new(range: Range, placeholder: impl Into<String>) -> Self {
        Self {
            range,
            placeholder: placeholder.into(),
            sub_folds: Vec::new(),
        }
    }

    /// Number of rows hidden below the fold's start row.
    pub fn hidden_rows(&self) -> usize {
        self.range.end.row - self.range.start.row
    }

    /// Check if a position lies inside the fold (both ends inclusive).
    pub fn contains(&self, position: Position) -> bool {
        self.range.contains(position)
    }
}

/// Folding manager
///
/// Top-level folds are kept sorted by start position and never overlap. Folds created over a
/// range that fully contains older folds absorb them as `sub_folds`.
#[derive(Debug, Clone, Default)]
pub struct FoldSet {
    folds: Vec<Fold>,
}

impl FoldSet {
    /// Create an empty fold set.
    pub fn new() -> Self {
        Self { folds: Vec::new() }
    }

    /// Add a fold, returning the stored fold (including any absorbed sub-folds).
    ///
    /// - Existing folds fully inside `fold.range` become its sub-folds.
    /// - Existing folds that partially overlap or enclose `fold.range` are expanded first.
    pub fn add(&mut self, mut fold: Fold) -> Fold {
        let range = fold.range;
        let mut pending = std::mem::take(&mut self.folds);
        let mut kept = Vec::with_capacity(pending.len());
        let mut expanded = 0usize;

        while let Some(existing) = pending.pop() {
            if !existing.range.intersects(&range) {
                kept.push(existing);
            } else if range.contains_range(&existing.range) && existing.range != range {
                fold.sub_folds.push(existing);
            } else {
                // Its nested folds may still fit around or inside the new range.
                expanded += 1;
                pending.extend(existing.sub_folds);
            }
        }

        if expanded > 0 {
            tracing::warn!(
                "Expanded {} overlapping fold(s) before folding {:?}",
                expanded,
                range
            );
        }

        fold.sub_folds.sort_by_key(|f| f.range.start);
        kept.sort_by_key(|f| f.range.start);

        let pos = kept
            .binary_search_by_key(&range.start, |f| f.range.start)
            .unwrap_or_else(|pos| pos);
        kept.insert(pos, fold.clone());
        self.folds = kept;

        tracing::debug!(
            "Added fold {:?} with placeholder {:?}",
            fold.range,
            fold.placeholder
        );
        fold
    }

    /// Get the first fold containing `position` (both ends inclusive).
    pub fn fold_at(&self, position: Position) -> Option<&Fold> {
        self.folds.iter().find(|f| f.contains(position))
    }

    /// Expand (remove) the fold with the same range as `fold`; its sub-folds become top-level.
    pub fn expand(&mut self, fold: &Fold) -> bool {
        let Some(idx) = self.folds.iter().position(|f| f.range == fold.range) else {
            return false;
        };

        let removed = self.folds.remove(idx);
        for sub in removed.sub_folds {
            let pos = self
                .folds
                .binary_search_by_key(&sub.range.start, |f| f.range.start)
                .unwrap_or_else(|pos| pos);
            self.folds.insert(pos, sub);
        }

        tracing::debug!("Expanded fold {:?}", removed.range);
        true
    }

    /// Expand all folds, including nested ones.
    pub fn expand_all(&mut self) {
        self.folds.clear();
    }

    /// Drop all folds.
    pub fn clear(&mut self) {
        self.folds.clear();
    }

    /// Get all top-level folds, sorted by start position.
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// Number of top-level folds.
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    /// Returns `true` if there are no folds.
    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    /// Total number of rows hidden by top-level folds.
    pub fn hidden_row_count(&self) -> usize {
        self.folds.iter().map(Fold::hidden_rows).sum()
    }
}

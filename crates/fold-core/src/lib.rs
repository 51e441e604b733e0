#![warn(missing_docs)]
//! Fold Core - Headless Fold Inference for Code Editors
//!
//! # Overview
//!
//! `fold-core` decides *what* to fold when a user asks for a fold at the caret or selection:
//! an explicit selection, the region up to a matching bracket, or a contiguous block of comment
//! rows. It computes exact fold boundaries and a short placeholder label, and routes every
//! mutation through a [`DocumentModel`] so the host keeps ownership of text, tokens and folds.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Commands ("fold" / "unfold") & Sessions    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Fold Resolver                              │  ← Fold inference
//! ├─────────────────────────────────────────────┤
//! │  Document Model (tokens, brackets, folds)   │  ← Host seam
//! ├─────────────────────────────────────────────┤
//! │  Line Index (Rope-based)                    │  ← Text access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use fold_core::{Document, FoldOutcome, Position, Selection, resolve};
//!
//! let mut doc = Document::plain("let point = { x: 1 };");
//! // Caret right after the closing brace.
//! let mut selection = Selection::cursor(Position::new(0, 20));
//!
//! let outcome = resolve(&mut selection, &mut doc, false);
//! let FoldOutcome::Created(fold) = outcome else { panic!("expected a fold") };
//! assert_eq!(fold.placeholder, "{x...");
//!
//! // Toggling again with the caret inside the fold expands it.
//! let outcome = resolve(&mut selection, &mut doc, false);
//! assert!(matches!(outcome, FoldOutcome::Expanded(_)));
//! ```
//!
//! # Module Description
//!
//! - [`range`] - Positions, ranges and selections
//! - [`line_index`] - Rope based line index
//! - [`tokens`] - Row tokens and the tokenizer seam
//! - [`folding`] - Folds and the per-document fold set
//! - [`brackets`] - Bracket matching
//! - [`document`] - Document Model trait and reference document
//! - [`resolver`] - Fold region inference
//! - [`commands`] - `"fold"` / `"unfold"` commands and key bindings
//! - [`mode`] - Language modes and the mode registry
//! - [`config`] - YAML-backed editor configuration
//! - [`session`] - Edit sessions

pub mod brackets;
pub mod commands;
pub mod config;
pub mod document;
pub mod folding;
pub mod line_index;
pub mod mode;
pub mod range;
pub mod resolver;
pub mod session;
pub mod tokens;

pub use commands::{
    CommandError, CommandExecutor, CommandRegistry, CommandScope, CommandSpec, FoldCommand,
    KeyBinding, Platform, Sender,
};
pub use config::{ConfigError, EditorConfig, ModeSpec, WrapConfig, WrapLimit};
pub use document::{Document, DocumentModel};
pub use folding::{Fold, FoldSet};
pub use line_index::LineIndex;
pub use mode::{Mode, ModeRegistry, TEXT_MODE};
pub use range::{Position, Range, Selection, SelectionDirection};
pub use resolver::{CommentRun, FoldOutcome, NoOpReason, resolve};
pub use session::EditSession;
pub use tokens::{LineState, LineTokens, PlainTextTokenizer, Token, TokenClass, Tokenizer};

//! Edit sessions.
//!
//! An [`EditSession`] is one open buffer: a [`Document`], the selection on it, the language
//! [`Mode`] it is tokenized with and its soft-wrap settings. Fold commands run against the
//! active session.

use crate::config::WrapConfig;
use crate::document::Document;
use crate::mode::{Mode, ModeRegistry};
use crate::range::{Position, Selection};
use crate::resolver::{self, FoldOutcome};
use std::sync::Arc;

/// One open buffer.
#[derive(Debug)]
pub struct EditSession {
    name: String,
    mode: Arc<Mode>,
    document: Document,
    selection: Selection,
    wrap: WrapConfig,
}

impl EditSession {
    /// Create a session over `text`, tokenized by `mode`, with wrapping off.
    pub fn new(name: impl Into<String>, text: &str, mode: Arc<Mode>) -> Self {
        let document = Document::new(text, mode.tokenizer().clone());
        Self {
            name: name.into(),
            mode,
            document,
            selection: Selection::default(),
            wrap: WrapConfig::off(),
        }
    }

    /// Set the soft-wrap settings at construction.
    pub fn with_wrap(mut self, wrap: WrapConfig) -> Self {
        self.wrap = wrap;
        self
    }

    /// Session name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current mode.
    pub fn mode(&self) -> &Arc<Mode> {
        &self.mode
    }

    /// Switch modes, re-tokenizing the document. Folds are kept.
    pub fn set_mode(&mut self, mode: Arc<Mode>) {
        tracing::debug!("Session '{}' switching to mode '{}'", self.name, mode.name());
        self.document.set_tokenizer(mode.tokenizer().clone());
        self.mode = mode;
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The document, mutably.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Collapse the selection to a caret at `position`.
    pub fn set_cursor(&mut self, position: Position) {
        self.selection = Selection::cursor(position);
    }

    /// Soft-wrap settings.
    pub fn wrap(&self) -> WrapConfig {
        self.wrap
    }

    /// Change soft-wrap settings.
    pub fn set_wrap(&mut self, wrap: WrapConfig) {
        self.wrap = wrap;
    }

    /// Run the fold toggle at the current selection.
    pub fn resolve_fold(&mut self, unfold_hint: bool) -> FoldOutcome {
        resolver::resolve(&mut self.selection, &mut self.document, unfold_hint)
    }

    /// Replace the whole buffer with `contents` and pick a mode for `filename`.
    ///
    /// The caret ends up after the inserted text. Returns the selected mode.
    pub fn load_file(
        &mut self,
        filename: &str,
        contents: &str,
        registry: &ModeRegistry,
    ) -> Arc<Mode> {
        let mode = registry
            .for_file(filename)
            .unwrap_or_else(|| self.mode.clone());
        tracing::debug!("Session '{}' loading {} as '{}'", self.name, filename, mode.name());

        self.document
            .set_text_and_tokenizer(contents, mode.tokenizer().clone());
        self.mode = mode.clone();

        let end = self
            .document
            .line_index()
            .char_offset_to_position(usize::MAX);
        self.selection = Selection::cursor(end);
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EditorConfig, ModeSpec};
    use crate::document::DocumentModel;
    use crate::tokens::{LineState, LineTokens, PlainTextTokenizer, Token, Tokenizer};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTokenizer(Arc<AtomicUsize>);

    impl Tokenizer for CountingTokenizer {
        fn tokenize_line(&self, line: &str, state: LineState) -> LineTokens {
            self.0.fetch_add(1, Ordering::SeqCst);
            LineTokens {
                tokens: vec![Token::comment(line)],
                end_state: state,
            }
        }
    }

    #[test]
    fn test_load_file_switches_mode_and_moves_caret() {
        let registry = ModeRegistry::plain(&EditorConfig::default()).unwrap();
        let mut session = EditSession::new("doc", "old", registry.get("text").unwrap());

        let mode = session.load_file("main.py", "import os\nprint(os)", &registry);

        assert_eq!(mode.name(), "python");
        assert_eq!(session.mode().name(), "python");
        assert_eq!(session.document().text(), "import os\nprint(os)");
        assert_eq!(session.selection().range().start, Position::new(1, 9));
    }

    #[test]
    fn test_load_file_tokenizes_once_with_new_mode() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ModeRegistry::new();
        registry
            .register(
                Mode::new(
                    &ModeSpec::new("text", "Text", &["txt"]),
                    Arc::new(PlainTextTokenizer),
                )
                .unwrap(),
            )
            .unwrap();
        registry
            .register(
                Mode::new(
                    &ModeSpec::new("notes", "Notes", &["note"]),
                    Arc::new(CountingTokenizer(calls.clone())),
                )
                .unwrap(),
            )
            .unwrap();

        let mut session = EditSession::new("doc", "one\ntwo", registry.get("text").unwrap());
        session.load_file("todo.note", "a\nb\nc", &registry);

        assert_eq!(session.mode().name(), "notes");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(session.document().tokens(2), &[Token::comment("c")]);
    }

    #[test]
    fn test_with_wrap() {
        let registry = ModeRegistry::plain(&EditorConfig::default()).unwrap();
        let session = EditSession::new("lorem", "", registry.get("text").unwrap())
            .with_wrap(WrapConfig::fixed(80));
        assert_eq!(session.wrap(), WrapConfig::fixed(80));
    }
}

//! Row tokens and the tokenizer seam.
//!
//! A [`Tokenizer`] turns one row of text into classified [`Token`]s covering the full row,
//! left to right. Tokenizers are line-oriented but may carry a [`LineState`] from one row to
//! the next (e.g. "inside a block comment").

/// Token kind prefix for comments (`comment`, `comment.line`, `comment.doc`, ...).
pub const COMMENT_KIND: &str = "comment";

/// Token kind prefix for plain text and whitespace.
pub const TEXT_KIND: &str = "text";

/// A classified span of a row's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind tag (e.g. `"comment"`, `"text"`, `"keyword"`, `"paren.lparen"`).
    pub kind: String,
    /// The exact text covered by this token.
    pub value: String,
}

/// Coarse token category used for fold inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Any `comment*` kind.
    Comment,
    /// Any `text*` kind (plain text, whitespace).
    Text,
    /// Everything else.
    Code,
}

impl Token {
    /// Create a token.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a `text` token.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(TEXT_KIND, value)
    }

    /// Create a `comment` token.
    pub fn comment(value: impl Into<String>) -> Self {
        Self::new(COMMENT_KIND, value)
    }

    /// Classify the token kind by prefix.
    pub fn class(&self) -> TokenClass {
        if self.kind.starts_with(COMMENT_KIND) {
            TokenClass::Comment
        } else if self.kind.starts_with(TEXT_KIND) {
            TokenClass::Text
        } else {
            TokenClass::Code
        }
    }

    /// Width of the token in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Opaque tokenizer state carried from the end of one row to the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineState(pub u32);

impl LineState {
    /// State at the start of a document.
    pub const START: Self = Self(0);
}

/// Tokens of a single row plus the state to feed into the next row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineTokens {
    /// Tokens covering the row, left to right.
    pub tokens: Vec<Token>,
    /// Tokenizer state at the end of the row.
    pub end_state: LineState,
}

/// Produces classified tokens for a row of text.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `line` (without its terminator) starting in `state`.
    fn tokenize_line(&self, line: &str, state: LineState) -> LineTokens;
}

/// Tokenizer for plain text: every non-empty row is a single `text` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextTokenizer;

impl Tokenizer for PlainTextTokenizer {
    fn tokenize_line(&self, line: &str, state: LineState) -> LineTokens {
        let tokens = if line.is_empty() {
            Vec::new()
        } else {
            vec![Token::text(line)]
        };
        LineTokens {
            tokens,
            end_state: state,
        }
    }
}

/// Tokenize every row of `lines`, threading the line state through.
pub fn tokenize_lines<'a, I>(tokenizer: &dyn Tokenizer, lines: I) -> Vec<Vec<Token>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = LineState::START;
    lines
        .into_iter()
        .map(|line| {
            let LineTokens { tokens, end_state } = tokenizer.tokenize_line(line, state);
            state = end_state;
            tokens
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_class_by_prefix() {
        assert_eq!(Token::new("comment.doc", "/**").class(), TokenClass::Comment);
        assert_eq!(Token::comment("// x").class(), TokenClass::Comment);
        assert_eq!(Token::new("text", "  ").class(), TokenClass::Text);
        assert_eq!(Token::new("keyword", "fn").class(), TokenClass::Code);
        assert_eq!(Token::new("paren.lparen", "(").class(), TokenClass::Code);
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(Token::text("日本").char_len(), 2);
    }

    #[test]
    fn test_plain_text_tokenizer() {
        let rows = tokenize_lines(&PlainTextTokenizer, ["hello", "", "world"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![Token::text("hello")]);
        assert!(rows[1].is_empty());
    }
}

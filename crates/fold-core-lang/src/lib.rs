#![warn(missing_docs)]
//! `fold-core-lang` - data-driven language configuration helpers for `fold-core`.
//!
//! This crate stays lightweight and does not depend on any tokenizing or highlighting system.
//! It provides small structs describing a language's comment tokens, bracket pairs and
//! keywords, which tokenizers use to decide what counts as a comment on a row.

use serde::{Deserialize, Serialize};

/// Comment tokens/config for a given language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// No comment syntax at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// The `(start, end)` block tokens, if both are configured.
    pub fn block_tokens(&self) -> Option<(&str, &str)> {
        if !self.has_block() {
            return None;
        }
        Some((self.block_start.as_deref()?, self.block_end.as_deref()?))
    }
}

/// Per-language configuration consumed by tokenizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Mode name this config applies to (e.g. `"javascript"`).
    pub name: String,
    /// Comment syntax.
    #[serde(default)]
    pub comment: CommentConfig,
    /// Bracket pairs, as `(open, close)`.
    #[serde(default = "default_brackets")]
    pub brackets: Vec<(char, char)>,
    /// Reserved words.
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_brackets() -> Vec<(char, char)> {
    vec![('(', ')'), ('[', ']'), ('{', '}')]
}

const C_FAMILY_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "default", "do", "else", "enum",
    "extends", "false", "finally", "for", "if", "import", "new", "null", "package", "private",
    "protected", "public", "return", "static", "switch", "this", "throw", "true", "try", "void",
    "while",
];

const JS_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "const", "continue", "default", "delete", "do", "else", "false",
    "finally", "for", "function", "if", "in", "instanceof", "let", "new", "null", "return",
    "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "class", "def", "elif", "else", "except", "False", "finally", "for", "from", "if",
    "import", "in", "is", "lambda", "None", "not", "or", "pass", "raise", "return", "True", "try",
    "while", "with", "yield",
];

const RUBY_KEYWORDS: &[&str] = &[
    "begin", "class", "def", "do", "else", "elsif", "end", "ensure", "false", "if", "module",
    "nil", "rescue", "return", "self", "then", "true", "unless", "until", "while", "yield",
];

const SQL_KEYWORDS: &[&str] = &[
    "and", "as", "by", "create", "delete", "from", "group", "insert", "into", "join", "not",
    "null", "or", "order", "select", "set", "table", "update", "values", "where",
];

const LUA_KEYWORDS: &[&str] = &[
    "and", "do", "else", "elseif", "end", "false", "for", "function", "if", "in", "local", "nil",
    "not", "or", "repeat", "return", "then", "true", "until", "while",
];

impl LanguageConfig {
    /// Create a config with the default bracket pairs and no keywords.
    pub fn new(name: impl Into<String>, comment: CommentConfig) -> Self {
        Self {
            name: name.into(),
            comment,
            brackets: default_brackets(),
            keywords: Vec::new(),
        }
    }

    /// Set the keyword list.
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Built-in configuration for a mode name.
    ///
    /// Unknown modes (and `text`) get no comment syntax, so nothing in them is ever a comment.
    pub fn for_mode(name: &str) -> Self {
        match name {
            "c_cpp" | "csharp" | "java" | "groovy" | "scala" => {
                Self::new(name, CommentConfig::line_and_block("//", "/*", "*/"))
                    .with_keywords(C_FAMILY_KEYWORDS)
            }
            "javascript" | "json" => {
                Self::new(name, CommentConfig::line_and_block("//", "/*", "*/"))
                    .with_keywords(JS_KEYWORDS)
            }
            "php" => Self::new(name, CommentConfig::line_and_block("//", "/*", "*/"))
                .with_keywords(C_FAMILY_KEYWORDS),
            "scss" => Self::new(name, CommentConfig::line_and_block("//", "/*", "*/")),
            "css" => Self::new(name, CommentConfig::block("/*", "*/")),
            "python" => Self::new(name, CommentConfig::line("#")).with_keywords(PYTHON_KEYWORDS),
            "ruby" => Self::new(name, CommentConfig::line_and_block("#", "=begin", "=end"))
                .with_keywords(RUBY_KEYWORDS),
            "perl" | "powershell" | "coffee" => Self::new(name, CommentConfig::line("#")),
            "lua" => Self::new(name, CommentConfig::line_and_block("--", "--[[", "]]"))
                .with_keywords(LUA_KEYWORDS),
            "sql" => Self::new(name, CommentConfig::line_and_block("--", "/*", "*/"))
                .with_keywords(SQL_KEYWORDS),
            "ocaml" => Self::new(name, CommentConfig::block("(*", "*)")),
            "clojure" => Self::new(name, CommentConfig::line(";")),
            "latex" => Self::new(name, CommentConfig::line("%")),
            "html" | "xml" | "svg" | "coldfusion" | "markdown" => {
                Self::new(name, CommentConfig::block("<!--", "-->"))
            }
            _ => Self::new(name, CommentConfig::none()),
        }
    }

    /// Returns `true` if `word` is a keyword of this language.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }
}

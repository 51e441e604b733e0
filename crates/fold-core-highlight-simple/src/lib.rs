//! `fold-core-highlight-simple` - Simple (regex-based) tokenizing for `fold-core`.
//!
//! Fold inference only needs to know which parts of a row are comments, which are plain text
//! and which are code. [`RegexTokenizer`] gets that right for the common comment syntaxes
//! described by a [`LanguageConfig`] without being a real parser: comments are recognized
//! first, then a short ordered list of regex rules classifies the rest of the row.

use fold_core::config::{ConfigError, EditorConfig};
use fold_core::mode::{ModeRegistry, TEXT_MODE};
use fold_core::tokens::{LineState, LineTokens, PlainTextTokenizer, Token, Tokenizer};
use fold_core_lang::LanguageConfig;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Line state while inside an unterminated block comment.
pub const IN_BLOCK_COMMENT: LineState = LineState(1);

/// Line and block comments.
pub const KIND_COMMENT: &str = "comment";
/// Whitespace and chars no rule claims.
pub const KIND_TEXT: &str = "text";
/// Single- or double-quoted string literals, possibly unterminated.
pub const KIND_STRING: &str = "string";
/// Decimal, float and hex literals.
pub const KIND_NUMBER: &str = "constant.numeric";
/// Identifiers listed in the language's keywords.
pub const KIND_KEYWORD: &str = "keyword";
/// Any other identifier.
pub const KIND_IDENTIFIER: &str = "identifier";
/// Opening brackets.
pub const KIND_LPAREN: &str = "paren.lparen";
/// Closing brackets.
pub const KIND_RPAREN: &str = "paren.rparen";
/// Punctuation and operator chars.
pub const KIND_OPERATOR: &str = "keyword.operator";

/// Errors building tokenizers or a mode registry from them.
#[derive(Debug, Error)]
pub enum SimpleTokenizerError {
    /// A rule pattern failed to compile.
    #[error("invalid tokenizer rule: {0}")]
    Regex(#[from] regex::Error),
    /// The mode configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A single tokenizing rule. Patterns are matched anchored at the current position.
#[derive(Debug, Clone)]
pub struct TokenRule {
    regex: Regex,
    kind: &'static str,
}

impl TokenRule {
    /// Compile a rule; `pattern` is anchored automatically.
    pub fn new(pattern: &str, kind: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{pattern})"))?,
            kind,
        })
    }

    /// Token kind emitted for matches.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end()).filter(|&len| len > 0)
    }
}

/// A simple regex-based tokenizer.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    language: LanguageConfig,
    rules: Vec<TokenRule>,
}

impl RegexTokenizer {
    /// Build the standard rule set for `language`.
    pub fn for_language(language: &LanguageConfig) -> Result<Self, regex::Error> {
        let (open, close): (Vec<String>, Vec<String>) = language
            .brackets
            .iter()
            .map(|&(o, c)| (regex::escape(&o.to_string()), regex::escape(&c.to_string())))
            .unzip();

        let mut rules = vec![
            TokenRule::new(r#""(?:\\.|[^"\\])*"?"#, KIND_STRING)?,
            TokenRule::new(r"'(?:\\.|[^'\\])*'?", KIND_STRING)?,
            TokenRule::new(
                r"0[xX][0-9a-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?",
                KIND_NUMBER,
            )?,
            TokenRule::new(r"[A-Za-z_$][A-Za-z0-9_$]*", KIND_IDENTIFIER)?,
        ];
        if !language.brackets.is_empty() {
            rules.push(TokenRule::new(&open.join("|"), KIND_LPAREN)?);
            rules.push(TokenRule::new(&close.join("|"), KIND_RPAREN)?);
        }
        rules.push(TokenRule::new(r"[-+*/%=<>!&|^~?:.,;@#\\]", KIND_OPERATOR)?);

        Ok(Self {
            language: language.clone(),
            rules,
        })
    }

    /// The language this tokenizer was built for.
    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// Classify the non-comment text at the start of `rest`. Returns `(kind, byte_len)`.
    fn classify(&self, rest: &str) -> (&'static str, usize) {
        let Some(ch) = rest.chars().next() else {
            return (KIND_TEXT, 0);
        };
        if ch.is_whitespace() {
            return (KIND_TEXT, ch.len_utf8());
        }

        for rule in &self.rules {
            if let Some(len) = rule.match_len(rest) {
                if rule.kind == KIND_IDENTIFIER && self.language.is_keyword(&rest[..len]) {
                    return (KIND_KEYWORD, len);
                }
                return (rule.kind, len);
            }
        }
        (KIND_TEXT, ch.len_utf8())
    }
}

fn push_merged(tokens: &mut Vec<Token>, kind: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if let Some(last) = tokens.last_mut()
        && last.kind == kind
    {
        last.value.push_str(value);
        return;
    }
    tokens.push(Token::new(kind, value));
}

impl Tokenizer for RegexTokenizer {
    fn tokenize_line(&self, line: &str, state: LineState) -> LineTokens {
        let comment = &self.language.comment;
        let block = comment.block_tokens();
        let line_comment = comment.line.as_deref().filter(|t| !t.is_empty());

        let mut tokens = Vec::new();
        let mut pos = 0usize;

        if state == IN_BLOCK_COMMENT {
            let Some((_, end)) = block else {
                // The language has no block comments; drop the stale state.
                return self.tokenize_line(line, LineState::START);
            };
            match line.find(end) {
                Some(idx) => {
                    pos = idx + end.len();
                    push_merged(&mut tokens, KIND_COMMENT, &line[..pos]);
                }
                None => {
                    push_merged(&mut tokens, KIND_COMMENT, line);
                    return LineTokens {
                        tokens,
                        end_state: IN_BLOCK_COMMENT,
                    };
                }
            }
        }

        while pos < line.len() {
            let rest = &line[pos..];

            if let Some((start, end)) = block
                && rest.starts_with(start)
            {
                match rest[start.len()..].find(end) {
                    Some(idx) => {
                        let len = start.len() + idx + end.len();
                        push_merged(&mut tokens, KIND_COMMENT, &rest[..len]);
                        pos += len;
                        continue;
                    }
                    None => {
                        push_merged(&mut tokens, KIND_COMMENT, rest);
                        return LineTokens {
                            tokens,
                            end_state: IN_BLOCK_COMMENT,
                        };
                    }
                }
            }

            if let Some(marker) = line_comment
                && rest.starts_with(marker)
            {
                push_merged(&mut tokens, KIND_COMMENT, rest);
                break;
            }

            let (kind, len) = self.classify(rest);
            push_merged(&mut tokens, kind, &rest[..len]);
            pos += len;
        }

        LineTokens {
            tokens,
            end_state: LineState::START,
        }
    }
}

/// Tokenizer for a mode name: plain text for `text`, otherwise a [`RegexTokenizer`] over the
/// mode's built-in [`LanguageConfig`].
pub fn tokenizer_for_mode(name: &str) -> Result<Arc<dyn Tokenizer>, regex::Error> {
    if name == TEXT_MODE {
        return Ok(Arc::new(PlainTextTokenizer));
    }
    let language = LanguageConfig::for_mode(name);
    Ok(Arc::new(RegexTokenizer::for_language(&language)?))
}

/// Mode registry over the stock mode list, each mode with its simple tokenizer.
pub fn default_registry() -> Result<ModeRegistry, SimpleTokenizerError> {
    registry_from_config(&EditorConfig::default())
}

/// Mode registry over the modes of `config`, each mode with its simple tokenizer.
pub fn registry_from_config(config: &EditorConfig) -> Result<ModeRegistry, SimpleTokenizerError> {
    let mut tokenizers = HashMap::with_capacity(config.modes.len());
    for spec in &config.modes {
        tokenizers.insert(spec.name.as_str(), tokenizer_for_mode(&spec.name)?);
    }
    tracing::debug!("Built {} simple tokenizers", tokenizers.len());

    let plain: Arc<dyn Tokenizer> = Arc::new(PlainTextTokenizer);
    let registry = ModeRegistry::from_config(config, |spec| {
        tokenizers
            .get(spec.name.as_str())
            .cloned()
            .unwrap_or_else(|| plain.clone())
    })?;
    Ok(registry)
}

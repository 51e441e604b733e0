//! Language modes.
//!
//! A [`Mode`] pairs a name with the file extensions it claims and the [`Tokenizer`] used for
//! documents in that mode. [`ModeRegistry`] is an explicit name → mode map built from
//! [`EditorConfig`] and handed to whoever needs it; there is no process-wide registry.

use crate::config::{ConfigError, EditorConfig, ModeSpec};
use crate::tokens::{PlainTextTokenizer, Tokenizer};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name of the fallback mode.
pub const TEXT_MODE: &str = "text";

/// A language mode.
pub struct Mode {
    name: String,
    desc: String,
    extensions: Vec<String>,
    extension_re: Option<Regex>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Mode {
    /// Build a mode from its spec and tokenizer.
    pub fn new(spec: &ModeSpec, tokenizer: Arc<dyn Tokenizer>) -> Result<Self, ConfigError> {
        let extension_re = if spec.extensions.is_empty() {
            None
        } else {
            let alternatives: Vec<String> =
                spec.extensions.iter().map(|e| regex::escape(e)).collect();
            let pattern = format!(r"^.*\.({})$", alternatives.join("|"));
            let re = Regex::new(&pattern).map_err(|source| ConfigError::InvalidExtensionPattern {
                mode: spec.name.clone(),
                source,
            })?;
            Some(re)
        };

        Ok(Self {
            name: spec.name.clone(),
            desc: spec.desc.clone(),
            extensions: spec.extensions.clone(),
            extension_re,
            tokenizer,
        })
    }

    /// Mode name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Claimed file extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Tokenizer for documents in this mode.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Returns `true` if `filename` ends with one of this mode's extensions (case-sensitive).
    pub fn supports_file(&self, filename: &str) -> bool {
        self.extension_re
            .as_ref()
            .is_some_and(|re| re.is_match(filename))
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mode")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

/// Name → mode map.
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: Vec<Arc<Mode>>,
    by_name: HashMap<String, usize>,
}

impl ModeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configuration, asking `tokenizer_for` for each mode's tokenizer.
    ///
    /// Fails if a mode name repeats or no `text` mode is configured.
    pub fn from_config<F>(config: &EditorConfig, mut tokenizer_for: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&ModeSpec) -> Arc<dyn Tokenizer>,
    {
        let mut registry = Self::new();
        for spec in &config.modes {
            let tokenizer = tokenizer_for(spec);
            registry.register(Mode::new(spec, tokenizer)?)?;
        }

        if registry.get(TEXT_MODE).is_none() {
            return Err(ConfigError::MissingTextMode);
        }
        Ok(registry)
    }

    /// Build a registry where every mode tokenizes as plain text.
    pub fn plain(config: &EditorConfig) -> Result<Self, ConfigError> {
        let plain: Arc<dyn Tokenizer> = Arc::new(PlainTextTokenizer);
        Self::from_config(config, |_| plain.clone())
    }

    /// Add a mode. Names must be unique.
    pub fn register(&mut self, mode: Mode) -> Result<(), ConfigError> {
        if self.by_name.contains_key(mode.name()) {
            return Err(ConfigError::DuplicateMode(mode.name().to_string()));
        }
        self.by_name.insert(mode.name().to_string(), self.modes.len());
        self.modes.push(Arc::new(mode));
        Ok(())
    }

    /// Look up a mode by name.
    pub fn get(&self, name: &str) -> Option<Arc<Mode>> {
        self.by_name.get(name).map(|&idx| self.modes[idx].clone())
    }

    /// Pick the first mode (in registration order) claiming `filename`, else the `text` mode.
    pub fn for_file(&self, filename: &str) -> Option<Arc<Mode>> {
        let mode = self
            .modes
            .iter()
            .find(|m| m.supports_file(filename))
            .cloned()
            .or_else(|| self.get(TEXT_MODE));
        if let Some(mode) = &mode {
            tracing::debug!("Selected mode '{}' for {}", mode.name(), filename);
        }
        mode
    }

    /// Mode names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|m| m.name())
    }

    /// Iterate over all modes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Mode>> {
        self.modes.iter()
    }

    /// Number of modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Returns `true` if no modes are registered.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

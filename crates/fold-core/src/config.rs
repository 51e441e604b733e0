//! Editor configuration.
//!
//! Everything a host used to wire up imperatively (which modes exist and which file extensions
//! they claim, soft-wrap settings, key bindings of the fold commands) is expressed as a plain
//! [`EditorConfig`] value that can be loaded from YAML and passed to constructors.
//!
//! ```rust
//! use fold_core::EditorConfig;
//!
//! let config = EditorConfig::from_yaml_str("wrap:\n  enabled: true\n  limit: { min: 80, max: 80 }\n").unwrap();
//! assert!(config.wrap.enabled);
//! assert_eq!(config.modes.len(), 27);
//! ```

use crate::commands::KeyBinding;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading configuration or building registries from it.
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid extension pattern for mode '{mode}': {source}")]
    /// A mode's extension list did not compile into a regex.
    InvalidExtensionPattern {
        /// The mode name.
        mode: String,
        /// The regex compiler error.
        #[source]
        source: regex::Error,
    },

    #[error("duplicate mode '{0}'")]
    /// Two modes share a name.
    DuplicateMode(String),

    #[error("no 'text' mode configured")]
    /// The fallback `text` mode is missing.
    MissingTextMode,

    #[error("unknown command '{0}' in keybindings")]
    /// A key binding override names a command that does not exist.
    UnknownCommand(String),
}

/// A language mode entry: name, human-readable description and claimed file extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSpec {
    /// Mode name (e.g. `"javascript"`).
    pub name: String,
    /// Display name (e.g. `"JavaScript"`).
    pub desc: String,
    /// File extensions without the dot (e.g. `["js"]`).
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl ModeSpec {
    /// Create a mode entry.
    pub fn new(name: &str, desc: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            desc: desc.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Soft-wrap column limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapLimit {
    /// Minimum wrap column.
    pub min: usize,
    /// Maximum wrap column.
    pub max: usize,
}

/// Soft-wrap settings of a session.
///
/// `limit: None` with `enabled: true` wraps at the viewport width ("free" wrapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WrapConfig {
    /// Whether soft wrapping is on.
    #[serde(default)]
    pub enabled: bool,
    /// Fixed wrap limits, if any.
    #[serde(default)]
    pub limit: Option<WrapLimit>,
}

impl WrapConfig {
    /// No soft wrapping.
    pub fn off() -> Self {
        Self {
            enabled: false,
            limit: None,
        }
    }

    /// Wrap at a fixed column.
    pub fn fixed(column: usize) -> Self {
        Self {
            enabled: true,
            limit: Some(WrapLimit {
                min: column,
                max: column,
            }),
        }
    }

    /// Wrap at the viewport width.
    pub fn free() -> Self {
        Self {
            enabled: true,
            limit: None,
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Available language modes. Must include a `text` mode.
    pub modes: Vec<ModeSpec>,
    /// Default soft-wrap settings for new sessions.
    pub wrap: WrapConfig,
    /// Key binding overrides by command name (`"fold"`, `"unfold"`).
    pub keybindings: BTreeMap<String, KeyBinding>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            modes: builtin_modes(),
            wrap: WrapConfig::off(),
            keybindings: BTreeMap::new(),
        }
    }
}

impl EditorConfig {
    /// Parse configuration from YAML; omitted fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        tracing::debug!(
            "Loaded editor config ({} modes, {} keybinding overrides)",
            config.modes.len(),
            config.keybindings.len()
        );
        Ok(config)
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// The stock mode list.
pub fn builtin_modes() -> Vec<ModeSpec> {
    vec![
        ModeSpec::new("c_cpp", "C/C++", &["c", "cpp", "cxx", "h", "hpp"]),
        ModeSpec::new("clojure", "Clojure", &["clj"]),
        ModeSpec::new("coffee", "CoffeeScript", &["coffee"]),
        ModeSpec::new("coldfusion", "ColdFusion", &["cfm"]),
        ModeSpec::new("csharp", "C#", &["cs"]),
        ModeSpec::new("css", "CSS", &["css"]),
        ModeSpec::new("groovy", "Groovy", &["groovy"]),
        ModeSpec::new("html", "HTML", &["html", "htm"]),
        ModeSpec::new("java", "Java", &["java"]),
        ModeSpec::new("javascript", "JavaScript", &["js"]),
        ModeSpec::new("json", "JSON", &["json"]),
        ModeSpec::new("latex", "LaTeX", &["tex"]),
        ModeSpec::new("lua", "Lua", &["lua"]),
        ModeSpec::new("markdown", "MarkDown", &["md", "markdown"]),
        ModeSpec::new("ocaml", "OCaml", &["ml", "mli"]),
        ModeSpec::new("perl", "Perl", &["pl", "pm"]),
        ModeSpec::new("php", "PHP", &["php"]),
        ModeSpec::new("powershell", "Powershell", &["ps1"]),
        ModeSpec::new("python", "Python", &["py"]),
        ModeSpec::new("scala", "Scala", &["scala"]),
        ModeSpec::new("scss", "SCSS", &["scss"]),
        ModeSpec::new("ruby", "Ruby", &["rb"]),
        ModeSpec::new("sql", "SQL", &["sql"]),
        ModeSpec::new("svg", "SVG", &["svg"]),
        ModeSpec::new("text", "Text", &["txt"]),
        ModeSpec::new("textile", "Textile", &["textile"]),
        ModeSpec::new("xml", "XML", &["xml"]),
    ]
}

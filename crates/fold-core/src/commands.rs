//! Command Interface Layer
//!
//! Exposes fold toggling to hosts as two named commands, `"fold"` and `"unfold"`, each with a
//! default key binding and restricted to being sent from the editor.
//!
//! # Example
//!
//! ```rust
//! use fold_core::{
//!     CommandExecutor, CommandRegistry, EditSession, EditorConfig, FoldOutcome, ModeRegistry,
//!     Platform, Position, Sender,
//! };
//!
//! let modes = ModeRegistry::plain(&EditorConfig::default()).unwrap();
//! let mut session = EditSession::new("scratch", "call(alpha)", modes.get("text").unwrap());
//! session.set_cursor(Position::new(0, 11));
//!
//! let executor = CommandExecutor::new(CommandRegistry::with_defaults());
//! let outcome = executor
//!     .execute_key(Platform::Win, "Alt-L", Sender::Editor, &mut session)
//!     .unwrap();
//! assert!(matches!(outcome, Some(FoldOutcome::Created(_))));
//! ```

use crate::config::{ConfigError, EditorConfig};
use crate::resolver::FoldOutcome;
use crate::session::EditSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fold commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldCommand {
    /// Toggle fold at the selection (`"fold"`).
    Fold,
    /// Toggle fold at the selection, sent with the unfold hint (`"unfold"`).
    Unfold,
}

impl FoldCommand {
    /// All commands, in registration order.
    pub const ALL: [FoldCommand; 2] = [FoldCommand::Fold, FoldCommand::Unfold];

    /// Command name as exposed to hosts.
    pub fn name(self) -> &'static str {
        match self {
            FoldCommand::Fold => "fold",
            FoldCommand::Unfold => "unfold",
        }
    }

    /// Look up a command by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Flag passed to the resolver. It does not change the resolver's behavior.
    pub fn unfold_hint(self) -> bool {
        matches!(self, FoldCommand::Unfold)
    }

    /// Default key binding.
    pub fn default_binding(self) -> KeyBinding {
        match self {
            FoldCommand::Fold => KeyBinding::new("Alt-L", "Alt-L"),
            FoldCommand::Unfold => KeyBinding::new("Alt-Shift-L", "Alt-Shift-L"),
        }
    }
}

/// Host platform, selecting which key of a [`KeyBinding`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows/Linux key names.
    Win,
    /// macOS key names.
    Mac,
}

/// Where a command invocation originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The focused editor.
    Editor,
    /// A general command line.
    CommandLine,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Editor => write!(f, "editor"),
            Sender::CommandLine => write!(f, "command line"),
        }
    }
}

/// Per-platform key binding (e.g. `Alt-L`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key on Windows/Linux.
    pub win: String,
    /// Key on macOS.
    pub mac: String,
}

impl KeyBinding {
    /// Create a key binding.
    pub fn new(win: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            win: win.into(),
            mac: mac.into(),
        }
    }

    /// The key for `platform`.
    pub fn key(&self, platform: Platform) -> &str {
        match platform {
            Platform::Win => &self.win,
            Platform::Mac => &self.mac,
        }
    }

    /// Returns `true` if `key` is this binding's key on `platform` (ASCII case-insensitive).
    pub fn matches(&self, platform: Platform, key: &str) -> bool {
        self.key(platform).eq_ignore_ascii_case(key)
    }
}

/// Which senders may invoke a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// Only the editor.
    EditorOnly,
    /// Any sender.
    Anywhere,
}

impl CommandScope {
    /// Returns `true` if `sender` may invoke a command with this scope.
    pub fn allows(self, sender: Sender) -> bool {
        match self {
            CommandScope::EditorOnly => sender == Sender::Editor,
            CommandScope::Anywhere => true,
        }
    }
}

/// A registered command with its binding and scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The command.
    pub command: FoldCommand,
    /// Key binding.
    pub bind_key: KeyBinding,
    /// Allowed senders.
    pub scope: CommandScope,
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No command with this name
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// The command refuses this sender
    #[error("command '{command}' cannot be sent from the {sender}")]
    SenderNotAllowed {
        /// Command name.
        command: &'static str,
        /// Rejected sender.
        sender: Sender,
    },
}

/// The set of fold commands and their bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// `"fold"` on Alt-L and `"unfold"` on Alt-Shift-L, both editor-only.
    pub fn with_defaults() -> Self {
        Self {
            specs: FoldCommand::ALL
                .into_iter()
                .map(|command| CommandSpec {
                    command,
                    bind_key: command.default_binding(),
                    scope: CommandScope::EditorOnly,
                })
                .collect(),
        }
    }

    /// Defaults with the key binding overrides from `config` applied.
    pub fn from_config(config: &EditorConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::with_defaults();
        for (name, binding) in &config.keybindings {
            let command = FoldCommand::from_name(name)
                .ok_or_else(|| ConfigError::UnknownCommand(name.clone()))?;
            registry.rebind(command, binding.clone());
        }
        Ok(registry)
    }

    /// Replace the key binding of `command`.
    pub fn rebind(&mut self, command: FoldCommand, binding: KeyBinding) {
        if let Some(spec) = self.specs.iter_mut().find(|s| s.command == command) {
            tracing::debug!(
                "Rebinding '{}' to {}/{}",
                command.name(),
                binding.win,
                binding.mac
            );
            spec.bind_key = binding;
        }
    }

    /// The spec of `command`.
    pub fn spec(&self, command: FoldCommand) -> Option<&CommandSpec> {
        self.specs.iter().find(|s| s.command == command)
    }

    /// All registered specs.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Find the command bound to `key` on `platform`.
    pub fn lookup(&self, platform: Platform, key: &str) -> Option<FoldCommand> {
        self.specs
            .iter()
            .find(|s| s.bind_key.matches(platform, key))
            .map(|s| s.command)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Command executor
///
/// Dispatches fold commands against the active [`EditSession`].
#[derive(Debug, Clone, Default)]
pub struct CommandExecutor {
    registry: CommandRegistry,
}

impl CommandExecutor {
    /// Create an executor over `registry`.
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Execute a command by name.
    pub fn execute(
        &self,
        name: &str,
        sender: Sender,
        session: &mut EditSession,
    ) -> Result<FoldOutcome, CommandError> {
        let command =
            FoldCommand::from_name(name).ok_or_else(|| CommandError::UnknownCommand(name.into()))?;
        self.execute_command(command, sender, session)
    }

    /// Execute `command`, checking that `sender` is allowed to send it.
    pub fn execute_command(
        &self,
        command: FoldCommand,
        sender: Sender,
        session: &mut EditSession,
    ) -> Result<FoldOutcome, CommandError> {
        let scope = self
            .registry
            .spec(command)
            .map(|s| s.scope)
            .unwrap_or(CommandScope::EditorOnly);
        if !scope.allows(sender) {
            return Err(CommandError::SenderNotAllowed {
                command: command.name(),
                sender,
            });
        }

        tracing::debug!("Executing '{}' in session '{}'", command.name(), session.name());
        Ok(session.resolve_fold(command.unfold_hint()))
    }

    /// Execute whatever command is bound to `key`; `Ok(None)` if the key is unbound.
    pub fn execute_key(
        &self,
        platform: Platform,
        key: &str,
        sender: Sender,
        session: &mut EditSession,
    ) -> Result<Option<FoldOutcome>, CommandError> {
        let Some(command) = self.registry.lookup(platform, key) else {
            return Ok(None);
        };
        self.execute_command(command, sender, session).map(Some)
    }
}

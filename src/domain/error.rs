//! Domain error types

use thiserror::Error;

use super::events::ClipboardEventKind;

/// Error when a clipboard event reaches a handler meant for another action,
/// or was not initiated by the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardEventError {
    #[error("Expected a \"{expected}\" event but received \"{actual}\"")]
    WrongEventType {
        expected: ClipboardEventKind,
        actual: ClipboardEventKind,
    },

    #[error("Refusing untrusted \"{kind}\" event: clipboard access requires a user gesture")]
    Untrusted { kind: ClipboardEventKind },
}

/// Error when a context menu is spawned without the state the spawn
/// decision is required to have verified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextMenuError {
    #[error("Cannot spawn context menu: no active context")]
    NoActiveContext,

    #[error("Cannot spawn context menu: active context has no selection")]
    NoActiveSelection,
}

/// Error from the text store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Index {index} is out of bounds for store of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Error when parsing a modifier key name
#[derive(Debug, Clone, Error)]
#[error("Invalid modifier: \"{input}\". Valid modifiers are: shift, ctrl, alt, meta")]
pub struct ModifierParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

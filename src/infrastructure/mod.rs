//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the arboard
//! system clipboard, terminal menu rendering and XDG config storage.

pub mod clipboard;
pub mod config;
pub mod menu_host;

// Re-export adapters
pub use clipboard::{create_system_clipboard, ArboardClipboard, UnsupportedClipboard};
pub use config::XdgConfigStore;
pub use menu_host::{NoOpMenuHost, TerminalMenuHost};

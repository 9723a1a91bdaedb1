//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod menu_host;

// Re-export common types
pub use clipboard::{SystemClipboard, SystemClipboardError};
pub use config::ConfigStore;
pub use menu_host::MenuHost;

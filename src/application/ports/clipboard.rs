//! System clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// System clipboard errors
#[derive(Debug, Clone, Error)]
pub enum SystemClipboardError {
    #[error("Clipboard access denied by the platform")]
    PermissionDenied,

    #[error("System clipboard is not supported on this platform")]
    Unsupported,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    #[error("Failed to read from clipboard: {0}")]
    ReadFailed(String),
}

/// Port for the OS-level clipboard.
///
/// Access is permission-gated and best-effort: callers must treat every error
/// as "fall back to the internal buffer", never as a user-visible failure.
#[async_trait]
pub trait SystemClipboard: Send + Sync {
    /// Write text to the system clipboard.
    async fn write_text(&self, text: &str) -> Result<(), SystemClipboardError>;

    /// Read the current text on the system clipboard.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard holds no text
    async fn read_text(&self) -> Result<Option<String>, SystemClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl SystemClipboard for Box<dyn SystemClipboard> {
    async fn write_text(&self, text: &str) -> Result<(), SystemClipboardError> {
        self.as_ref().write_text(text).await
    }

    async fn read_text(&self) -> Result<Option<String>, SystemClipboardError> {
        self.as_ref().read_text().await
    }
}

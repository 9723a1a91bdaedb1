//! System clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{SystemClipboard, SystemClipboardError};

/// Cross-platform system clipboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open() -> Result<arboard::Clipboard, SystemClipboardError> {
    arboard::Clipboard::new().map_err(|e| SystemClipboardError::Unavailable(e.to_string()))
}

#[async_trait]
impl SystemClipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SystemClipboardError> {
        let text = text.to_owned();

        // arboard operations are blocking
        tokio::task::spawn_blocking(move || {
            open()?
                .set_text(text)
                .map_err(|e| SystemClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| SystemClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }

    async fn read_text(&self) -> Result<Option<String>, SystemClipboardError> {
        tokio::task::spawn_blocking(|| match open()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(SystemClipboardError::ReadFailed(e.to_string())),
        })
        .await
        .map_err(|e| SystemClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }
}

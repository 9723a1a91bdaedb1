//! Stand-in for platforms or sessions without clipboard access

use async_trait::async_trait;

use crate::application::ports::{SystemClipboard, SystemClipboardError};

/// System clipboard that rejects every operation with `Unsupported`
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedClipboard;

#[async_trait]
impl SystemClipboard for UnsupportedClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), SystemClipboardError> {
        Err(SystemClipboardError::Unsupported)
    }

    async fn read_text(&self) -> Result<Option<String>, SystemClipboardError> {
        Err(SystemClipboardError::Unsupported)
    }
}

//! Drag-and-drop data exchange types

use std::collections::BTreeMap;
use std::fmt;

use super::payload::{count_text_items, ClipboardPayload, TEXT_PLAIN};

/// Drop effect hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

impl DropEffect {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for DropEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data carried by a drag operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: BTreeMap<String, String>,
    pub effect_allowed: DropEffect,
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfer carrying plain text only
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut transfer = Self::new();
        transfer.set_data(TEXT_PLAIN, text);
        transfer
    }

    pub fn set_data(&mut self, format: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(format.into(), value.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into a clipboard payload.
    ///
    /// Item count is one per plain-text line, or one if the transfer only
    /// carries richer formats.
    pub fn to_payload(&self) -> ClipboardPayload {
        let item_count = match self.get_data(TEXT_PLAIN) {
            Some(text) => count_text_items(text),
            None => usize::from(!self.entries.is_empty()),
        };

        self.entries
            .iter()
            .fold(ClipboardPayload::new(), |payload, (format, value)| {
                payload.with_entry(format.as_str(), value.as_str())
            })
            .with_item_count(item_count)
    }
}

/// Data a draggable element offers when a drag starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    pub text: String,
    pub html: String,
    pub uri: String,
}

impl DragItem {
    pub fn new(text: impl Into<String>, html: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: html.into(),
            uri: uri.into(),
        }
    }
}

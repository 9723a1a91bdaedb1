//! Clipboard payload value object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Plain text format key
pub const TEXT_PLAIN: &str = "text/plain";

/// HTML format key
pub const TEXT_HTML: &str = "text/html";

/// URI list format key
pub const TEXT_URI_LIST: &str = "text/uri-list";

/// Canvas item list, a JSON array of strings
pub const CANVAS_ITEMS: &str = "application/x-canvas-items";

/// Number of items a block of plain text represents: one per non-empty line
pub fn count_text_items(text: &str) -> usize {
    text.lines().filter(|line| !line.is_empty()).count()
}

/// Bag of clipboard data keyed by format, plus the number of items it carries.
///
/// A payload with an item count of zero is empty, regardless of its entries.
/// Contexts return empty payloads when there is nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    entries: BTreeMap<String, String>,
    item_count: usize,
}

impl ClipboardPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payload holding plain text, one item per non-empty line.
    /// Blank text yields an empty payload.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let item_count = count_text_items(&text);
        let mut entries = BTreeMap::new();
        entries.insert(TEXT_PLAIN.to_string(), text);
        Self {
            entries,
            item_count,
        }
    }

    /// Builder-style entry insertion
    pub fn with_entry(mut self, format: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(format, value);
        self
    }

    /// Builder-style item count
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Set the value stored under a format, replacing any previous value
    pub fn set(&mut self, format: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(format.into(), value.into());
    }

    /// Get the value stored under a format
    pub fn get(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }

    /// Plain text portion of the payload
    pub fn text(&self) -> Option<&str> {
        self.get(TEXT_PLAIN)
    }

    /// Formats present in the payload, in sorted order
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of items the payload represents
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// True when the payload carries no items
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Copy of this payload reduced to its plain text portion
    pub fn text_only(&self) -> Self {
        match self.text() {
            Some(text) => Self::new()
                .with_entry(TEXT_PLAIN, text)
                .with_item_count(self.item_count),
            None => Self::new(),
        }
    }
}

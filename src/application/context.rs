//! Interface context capability

use std::fmt;

use crate::domain::payload::ClipboardPayload;
use crate::domain::selection::Selection;

/// Identifier a context is registered under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(String);

impl ContextId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContextId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContextId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A UI surface that participates in cut, copy, paste and context menus.
///
/// Implementations own their content. Mutations made by `handle_cut` and
/// `handle_paste` go through the implementation's command log so they can be
/// undone by whoever owns undo.
pub trait InterfaceContext {
    /// Remove the selected content and return a payload representing it.
    ///
    /// Returns an empty payload when nothing is selected.
    fn handle_cut(&mut self) -> ClipboardPayload;

    /// Payload representing the selected content. Must not mutate.
    fn handle_copy(&self) -> ClipboardPayload;

    /// Insert the payload's content.
    fn handle_paste(&mut self, payload: &ClipboardPayload);

    /// Current selection, if any
    fn active_selection(&self) -> Option<Selection>;

    /// Run a non-clipboard menu action such as "Delete".
    ///
    /// # Returns
    /// true if the action was recognised and applied
    fn perform_action(&mut self, _action: &str) -> bool {
        false
    }
}

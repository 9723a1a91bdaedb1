//! Selection value object

use serde::{Deserialize, Serialize};

/// Action offered in a context menu
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuAction {
    pub label: String,
}

impl MenuAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Currently chosen content within a context, as seen from outside it.
///
/// Only the actions available on the selection are exposed; what is selected
/// stays private to the context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    actions: Vec<MenuAction>,
}

impl Selection {
    pub fn new(actions: Vec<MenuAction>) -> Self {
        Self { actions }
    }

    /// Selection offering actions with the given labels, in order
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actions: labels.into_iter().map(MenuAction::new).collect(),
        }
    }

    pub fn actions(&self) -> &[MenuAction] {
        &self.actions
    }
}

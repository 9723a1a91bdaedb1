//! Text canvas: the demo interface context
//!
//! Items live in a [`TextStore`] and are selected by index. Every mutation is
//! expressed as an [`EditCommand`] and appended to the canvas history, so an
//! undo layer can be added on top without touching the clipboard code.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::warn;

use crate::domain::error::StoreError;
use crate::domain::payload::{ClipboardPayload, CANVAS_ITEMS, TEXT_HTML, TEXT_PLAIN};
use crate::domain::selection::Selection;
use crate::domain::store::TextStore;

use super::context::InterfaceContext;

/// Actions offered by a canvas selection, in menu order
pub const CANVAS_ACTIONS: &[&str] = &["Cut", "Copy", "Paste", "Delete", "Duplicate"];

/// Recorded mutation of a canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert `values` starting at `index`
    Insert { index: usize, values: Vec<String> },
    /// Remove the given `(index, value)` entries, ascending by index
    Remove { entries: Vec<(usize, String)> },
}

impl EditCommand {
    fn apply(&self, store: &mut TextStore) -> Result<(), StoreError> {
        match self {
            Self::Insert { index, values } => {
                for (offset, value) in values.iter().enumerate() {
                    store.insert_data(index + offset, value.as_str())?;
                }
            }
            Self::Remove { entries } => {
                for (index, _) in entries.iter().rev() {
                    store.remove_data(*index)?;
                }
            }
        }
        Ok(())
    }
}

/// Canvas of text items
#[derive(Debug)]
pub struct TextCanvas {
    store: TextStore,
    selected: BTreeSet<usize>,
    history: Vec<EditCommand>,
    revision: Rc<Cell<u64>>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::with_store(TextStore::new())
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_store(TextStore::from_items(items))
    }

    fn with_store(mut store: TextStore) -> Self {
        let revision = Rc::new(Cell::new(0));
        let observed = Rc::clone(&revision);
        store.subscribe(move || observed.set(observed.get() + 1));
        Self {
            store,
            selected: BTreeSet::new(),
            history: Vec::new(),
            revision,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.get_data_length()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of store mutations observed so far
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn history(&self) -> &[EditCommand] {
        &self.history
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Replace the selection. Every index must refer to an item.
    pub fn select(&mut self, indices: &[usize]) -> Result<(), StoreError> {
        let len = self.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(StoreError::IndexOutOfBounds { index, len });
        }
        self.selected = indices.iter().copied().collect();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Insert a single item. Clears the selection.
    pub fn insert(&mut self, index: usize, value: impl Into<String>) -> Result<(), StoreError> {
        self.execute(EditCommand::Insert {
            index,
            values: vec![value.into()],
        })?;
        self.selected.clear();
        Ok(())
    }

    /// Remove a single item. Clears the selection.
    pub fn remove(&mut self, index: usize) -> Result<String, StoreError> {
        let value = self
            .store
            .get_data(index)
            .map(str::to_owned)
            .ok_or(StoreError::IndexOutOfBounds {
                index,
                len: self.len(),
            })?;
        self.execute(EditCommand::Remove {
            entries: vec![(index, value.clone())],
        })?;
        self.selected.clear();
        Ok(value)
    }

    fn execute(&mut self, command: EditCommand) -> Result<(), StoreError> {
        command.apply(&mut self.store)?;
        self.history.push(command);
        Ok(())
    }

    fn selected_entries(&self) -> Vec<(usize, String)> {
        self.selected
            .iter()
            .filter_map(|&index| self.store.get_data(index).map(|v| (index, v.to_string())))
            .collect()
    }

    /// Insert `values` after the selection (or at the end) and select them
    fn insert_after_selection(&mut self, values: Vec<String>) {
        let index = self
            .selected
            .last()
            .map_or(self.len(), |&last| last + 1);
        let count = values.len();

        if let Err(e) = self.execute(EditCommand::Insert { index, values }) {
            warn!(error = %e, "canvas insert failed");
            return;
        }
        self.selected = (index..index + count).collect();
    }

    fn remove_selection(&mut self) -> Vec<(usize, String)> {
        let entries = self.selected_entries();
        if entries.is_empty() {
            return entries;
        }
        if let Err(e) = self.execute(EditCommand::Remove {
            entries: entries.clone(),
        }) {
            warn!(error = %e, "canvas remove failed");
            return Vec::new();
        }
        self.selected.clear();
        entries
    }
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceContext for TextCanvas {
    fn handle_cut(&mut self) -> ClipboardPayload {
        let payload = self.handle_copy();
        if !payload.is_empty() {
            self.remove_selection();
        }
        payload
    }

    fn handle_copy(&self) -> ClipboardPayload {
        let entries = self.selected_entries();
        if entries.is_empty() {
            return ClipboardPayload::new();
        }

        let values: Vec<&str> = entries.iter().map(|(_, v)| v.as_str()).collect();
        let payload = ClipboardPayload::new()
            .with_entry(TEXT_PLAIN, values.join("\n"))
            .with_entry(TEXT_HTML, to_html_list(&values))
            .with_item_count(values.len());

        match serde_json::to_string(&values) {
            Ok(json) => payload.with_entry(CANVAS_ITEMS, json),
            Err(e) => {
                warn!(error = %e, "canvas items not encoded, copying text only");
                payload
            }
        }
    }

    fn handle_paste(&mut self, payload: &ClipboardPayload) {
        let values = pasted_values(payload);
        if values.is_empty() {
            return;
        }
        self.insert_after_selection(values);
    }

    fn active_selection(&self) -> Option<Selection> {
        if self.selected.is_empty() {
            return None;
        }
        Some(Selection::with_labels(CANVAS_ACTIONS.iter().copied()))
    }

    fn perform_action(&mut self, action: &str) -> bool {
        match action.to_lowercase().as_str() {
            "delete" => !self.remove_selection().is_empty(),
            "duplicate" => {
                let values: Vec<String> =
                    self.selected_entries().into_iter().map(|(_, v)| v).collect();
                if values.is_empty() {
                    return false;
                }
                self.insert_after_selection(values);
                true
            }
            _ => false,
        }
    }
}

/// Cloneable handle to a canvas.
///
/// Registering a handle lets the owner keep inspecting and editing the canvas
/// while the interaction manager holds it as a context.
#[derive(Debug, Clone, Default)]
pub struct SharedCanvas(Rc<RefCell<TextCanvas>>);

impl SharedCanvas {
    pub fn new(canvas: TextCanvas) -> Self {
        Self(Rc::new(RefCell::new(canvas)))
    }

    pub fn borrow(&self) -> Ref<'_, TextCanvas> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, TextCanvas> {
        self.0.borrow_mut()
    }
}

impl InterfaceContext for SharedCanvas {
    fn handle_cut(&mut self) -> ClipboardPayload {
        self.0.borrow_mut().handle_cut()
    }

    fn handle_copy(&self) -> ClipboardPayload {
        self.0.borrow().handle_copy()
    }

    fn handle_paste(&mut self, payload: &ClipboardPayload) {
        self.0.borrow_mut().handle_paste(payload)
    }

    fn active_selection(&self) -> Option<Selection> {
        self.0.borrow().active_selection()
    }

    fn perform_action(&mut self, action: &str) -> bool {
        self.0.borrow_mut().perform_action(action)
    }
}

/// Items carried by a payload.
///
/// Canvas copies round-trip exactly through [`CANVAS_ITEMS`]; anything else
/// is plain text with one item per non-empty line.
fn pasted_values(payload: &ClipboardPayload) -> Vec<String> {
    if let Some(json) = payload.get(CANVAS_ITEMS) {
        match serde_json::from_str::<Vec<String>>(json) {
            Ok(values) => return values,
            Err(e) => warn!(error = %e, "malformed canvas items, falling back to text"),
        }
    }

    payload
        .text()
        .map(|text| {
            text.lines()
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn to_html_list(values: &[&str]) -> String {
    let items: String = values
        .iter()
        .map(|value| format!("<li>{}</li>", escape_html(value)))
        .collect();
    format!("<ul>{}</ul>", items)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

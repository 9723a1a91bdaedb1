//! Drag sources: elements that offer data when a drag starts

use std::collections::HashMap;

use tracing::debug;

use crate::domain::drag::{DragItem, DropEffect};
use crate::domain::events::DragStartEvent;
use crate::domain::payload::{TEXT_HTML, TEXT_PLAIN, TEXT_URI_LIST};

/// Registry of draggable elements by id
#[derive(Debug, Default)]
pub struct DragSources {
    items: HashMap<String, DragItem>,
}

impl DragSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Designate an element as draggable. Replaces any previous item.
    pub fn register(&mut self, element: impl Into<String>, item: DragItem) {
        self.items.insert(element.into(), item);
    }

    pub fn unregister(&mut self, element: &str) -> Option<DragItem> {
        self.items.remove(element)
    }

    pub fn is_draggable(&self, element: &str) -> bool {
        self.items.contains_key(element)
    }

    /// Populate the drag payload for a designated element.
    ///
    /// # Returns
    /// false if the target is not draggable; its transfer is left untouched
    pub fn on_drag_start(&self, event: &mut DragStartEvent) -> bool {
        let Some(item) = self.items.get(&event.target) else {
            return false;
        };

        let transfer = &mut event.data_transfer;
        transfer.set_data(TEXT_PLAIN, item.text.as_str());
        transfer.set_data(TEXT_HTML, item.html.as_str());
        transfer.set_data(TEXT_URI_LIST, item.uri.as_str());
        transfer.effect_allowed = DropEffect::Move;
        transfer.drop_effect = DropEffect::Move;

        debug!(element = %event.target, "drag payload populated");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> DragSources {
        let mut sources = DragSources::new();
        sources.register(
            "asset-tree",
            DragItem::new(
                "tree",
                "<img alt=\"tree\" src=\"assets/tree.png\">",
                "assets/tree.png",
            ),
        );
        sources
    }

    #[test]
    fn drag_start_sets_all_formats_and_move_effect() {
        let sources = sources();
        let mut event = DragStartEvent::new("asset-tree");

        assert!(sources.on_drag_start(&mut event));

        let transfer = &event.data_transfer;
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some("tree"));
        assert_eq!(
            transfer.get_data(TEXT_HTML),
            Some("<img alt=\"tree\" src=\"assets/tree.png\">")
        );
        assert_eq!(transfer.get_data(TEXT_URI_LIST), Some("assets/tree.png"));
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
        assert_eq!(transfer.drop_effect, DropEffect::Move);
    }

    #[test]
    fn drag_start_on_other_element_is_untouched() {
        let sources = sources();
        let mut event = DragStartEvent::new("toolbar");

        assert!(!sources.on_drag_start(&mut event));
        assert!(event.data_transfer.is_empty());
        assert_eq!(event.data_transfer.effect_allowed, DropEffect::None);
    }

    #[test]
    fn unregistered_element_is_not_draggable() {
        let mut sources = sources();
        assert!(sources.unregister("asset-tree").is_some());
        assert!(!sources.is_draggable("asset-tree"));
    }
}

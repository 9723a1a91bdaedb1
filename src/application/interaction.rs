//! Interaction manager: registry of contexts and the focused one

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::context::{ContextId, InterfaceContext};

/// Errors from context registration and focus tracking
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("A context is already registered as \"{0}\"")]
    DuplicateContext(ContextId),

    #[error("No context is registered as \"{0}\"")]
    UnknownContext(ContextId),
}

/// Resolves which interface context is active.
///
/// Focus is tracked explicitly: collaborators that observe focus changes call
/// [`focus`](Self::focus) and [`blur`](Self::blur). The active context is the
/// registered context whose id is focused.
#[derive(Default)]
pub struct InteractionManager {
    contexts: HashMap<ContextId, Box<dyn InterfaceContext>>,
    focused: Option<ContextId>,
}

impl InteractionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a context under `id`
    pub fn register(
        &mut self,
        id: impl Into<ContextId>,
        context: Box<dyn InterfaceContext>,
    ) -> Result<(), InteractionError> {
        let id = id.into();
        if self.contexts.contains_key(&id) {
            return Err(InteractionError::DuplicateContext(id));
        }
        debug!(context = %id, "registered interface context");
        self.contexts.insert(id, context);
        Ok(())
    }

    /// Remove a context, clearing focus if it held it
    pub fn unregister(&mut self, id: &ContextId) -> Option<Box<dyn InterfaceContext>> {
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        self.contexts.remove(id)
    }

    /// Mark a registered context as focused
    pub fn focus(&mut self, id: impl Into<ContextId>) -> Result<(), InteractionError> {
        let id = id.into();
        if !self.contexts.contains_key(&id) {
            return Err(InteractionError::UnknownContext(id));
        }
        debug!(context = %id, "focus changed");
        self.focused = Some(id);
        Ok(())
    }

    /// Clear focus; no context is active afterwards
    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused_id(&self) -> Option<&ContextId> {
        self.focused.as_ref()
    }

    /// The active context, if any
    pub fn find_active_context(&self) -> Option<&dyn InterfaceContext> {
        let id = self.focused.as_ref()?;
        match self.contexts.get(id) {
            Some(context) => Some(&**context),
            None => None,
        }
    }

    /// Mutable access to the active context, if any
    pub fn find_active_context_mut(&mut self) -> Option<&mut dyn InterfaceContext> {
        let id = self.focused.as_ref()?;
        match self.contexts.get_mut(id) {
            Some(context) => Some(&mut **context),
            None => None,
        }
    }

    pub fn context(&self, id: &ContextId) -> Option<&dyn InterfaceContext> {
        match self.contexts.get(id) {
            Some(context) => Some(&**context),
            None => None,
        }
    }

    pub fn context_mut(&mut self, id: &ContextId) -> Option<&mut dyn InterfaceContext> {
        match self.contexts.get_mut(id) {
            Some(context) => Some(&mut **context),
            None => None,
        }
    }

    pub fn contains(&self, id: &ContextId) -> bool {
        self.contexts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::ClipboardPayload;
    use crate::domain::selection::Selection;

    struct StubContext {
        label: &'static str,
    }

    impl InterfaceContext for StubContext {
        fn handle_cut(&mut self) -> ClipboardPayload {
            ClipboardPayload::new()
        }

        fn handle_copy(&self) -> ClipboardPayload {
            ClipboardPayload::from_text(self.label)
        }

        fn handle_paste(&mut self, _payload: &ClipboardPayload) {}

        fn active_selection(&self) -> Option<Selection> {
            None
        }
    }

    fn manager() -> InteractionManager {
        let mut manager = InteractionManager::new();
        manager
            .register("left", Box::new(StubContext { label: "left" }))
            .unwrap();
        manager
            .register("right", Box::new(StubContext { label: "right" }))
            .unwrap();
        manager
    }

    #[test]
    fn no_active_context_without_focus() {
        let manager = manager();
        assert!(manager.find_active_context().is_none());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn focus_selects_active_context() {
        let mut manager = manager();
        manager.focus("right").unwrap();
        let active = manager.find_active_context().unwrap();
        assert_eq!(active.handle_copy().text(), Some("right"));
    }

    #[test]
    fn focus_unknown_fails() {
        let mut manager = manager();
        let err = manager.focus("missing").unwrap_err();
        assert_eq!(err, InteractionError::UnknownContext(ContextId::new("missing")));
        assert!(manager.focused_id().is_none());
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut manager = manager();
        let result = manager.register("left", Box::new(StubContext { label: "again" }));
        assert!(matches!(result, Err(InteractionError::DuplicateContext(_))));
    }

    #[test]
    fn blur_clears_active_context() {
        let mut manager = manager();
        manager.focus("left").unwrap();
        manager.blur();
        assert!(manager.find_active_context_mut().is_none());
    }

    #[test]
    fn unregister_focused_clears_focus() {
        let mut manager = manager();
        manager.focus("left").unwrap();
        assert!(manager.unregister(&ContextId::new("left")).is_some());
        assert!(manager.focused_id().is_none());
        assert!(!manager.contains(&ContextId::new("left")));
    }
}

//! Stage: composition root for interaction handling
//!
//! Owns the interaction manager, the clipboard and context menu managers and
//! the drag sources, and routes UI events to them through a binding table.
//! Bindings are registered on construction and removed on teardown or drop.

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::config::AppConfig;
use crate::domain::error::{ClipboardEventError, ContextMenuError};
use crate::domain::events::{ClipboardEventKind, DropEvent, EventKind, UiEvent};

use super::clipboard::{ClipboardManager, ClipboardOutcome};
use super::context::{ContextId, InterfaceContext};
use super::context_menu::{ContextManager, MenuOutcome, MenuSettings};
use super::drag::DragSources;
use super::interaction::{InteractionError, InteractionManager};
use super::ports::{MenuHost, SystemClipboard};

/// Errors surfaced by event dispatch and menu actions
#[derive(Debug, Error)]
pub enum StageError {
    #[error(transparent)]
    ClipboardEvent(#[from] ClipboardEventError),

    #[error(transparent)]
    ContextMenu(#[from] ContextMenuError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error("No context menu is open")]
    NoOpenMenu,

    #[error("The open context menu has no \"{0}\" action")]
    UnknownAction(String),
}

/// Handle returned by [`EventBindings::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Component an event is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    Clipboard,
    ContextMenu,
    DragSources,
    DropTarget,
}

/// Subscription table from event kinds to listeners
#[derive(Debug, Default)]
pub struct EventBindings {
    entries: Vec<(ListenerId, EventKind, Listener)>,
    next_id: u64,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, kind, listener));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _, _)| *entry != id);
        self.entries.len() != before
    }

    /// First listener bound to `kind`
    pub fn listener_for(&self, kind: EventKind) -> Option<Listener> {
        self.entries
            .iter()
            .find(|(_, bound, _)| *bound == kind)
            .map(|(_, _, listener)| *listener)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ids(&self) -> Vec<ListenerId> {
        self.entries.iter().map(|(id, _, _)| *id).collect()
    }
}

const DEFAULT_BINDINGS: &[(EventKind, Listener)] = &[
    (EventKind::Cut, Listener::Clipboard),
    (EventKind::Copy, Listener::Clipboard),
    (EventKind::Paste, Listener::Clipboard),
    (EventKind::ClipboardChange, Listener::Clipboard),
    (EventKind::ContextMenu, Listener::ContextMenu),
    (EventKind::MouseUp, Listener::ContextMenu),
    (EventKind::LongPress, Listener::ContextMenu),
    (EventKind::DragStart, Listener::DragSources),
    (EventKind::Drop, Listener::DropTarget),
];

/// What a dispatched event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No listener is bound to the event
    Unhandled,
    Clipboard(ClipboardOutcome),
    Menu(MenuOutcome),
    /// Drag start; `populated` is false for elements that are not draggable
    DragStarted { populated: bool },
    /// Drop data was pasted into a context
    Dropped { context: ContextId, item_count: usize },
    /// Drop outside any context, or without data
    DropIgnored,
}

/// Result of choosing a context menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Clipboard(ClipboardOutcome),
    /// The active context applied the action
    Performed,
    /// The active context did not recognise the action
    Unrecognised,
}

/// Interaction handling for one document
pub struct Stage<C, H>
where
    C: SystemClipboard + 'static,
    H: MenuHost,
{
    interaction: InteractionManager,
    clipboard: ClipboardManager<C>,
    context_menu: ContextManager<H>,
    drag_sources: DragSources,
    bindings: EventBindings,
}

impl<C, H> Stage<C, H>
where
    C: SystemClipboard + 'static,
    H: MenuHost,
{
    /// Create a stage and bind every event kind to its manager
    pub fn new(system_clipboard: C, menu_host: H, config: &AppConfig) -> Self {
        let mut bindings = EventBindings::new();
        for (kind, listener) in DEFAULT_BINDINGS {
            bindings.subscribe(*kind, *listener);
        }
        debug!(bindings = bindings.len(), "stage bindings registered");

        Self {
            interaction: InteractionManager::new(),
            clipboard: ClipboardManager::new(system_clipboard, config.system_clipboard_or_default()),
            context_menu: ContextManager::new(menu_host, MenuSettings::from_config(config)),
            drag_sources: DragSources::new(),
            bindings,
        }
    }

    pub fn interaction(&self) -> &InteractionManager {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut InteractionManager {
        &mut self.interaction
    }

    pub fn clipboard(&self) -> &ClipboardManager<C> {
        &self.clipboard
    }

    pub fn context_menu(&self) -> &ContextManager<H> {
        &self.context_menu
    }

    pub fn drag_sources(&self) -> &DragSources {
        &self.drag_sources
    }

    pub fn drag_sources_mut(&mut self) -> &mut DragSources {
        &mut self.drag_sources
    }

    pub fn bindings(&self) -> &EventBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut EventBindings {
        &mut self.bindings
    }

    /// Register a context with the interaction manager
    pub fn register_context(
        &mut self,
        id: impl Into<ContextId>,
        context: Box<dyn InterfaceContext>,
    ) -> Result<(), StageError> {
        Ok(self.interaction.register(id, context)?)
    }

    /// Route an event to its bound listener
    pub fn dispatch(&mut self, event: &mut UiEvent) -> Result<DispatchOutcome, StageError> {
        let kind = event.kind();
        let Some(listener) = self.bindings.listener_for(kind) else {
            debug!(%kind, "no listener bound");
            return Ok(DispatchOutcome::Unhandled);
        };

        let outcome = match (listener, event) {
            (Listener::Clipboard, UiEvent::Clipboard(event)) => {
                let outcome = match event.kind() {
                    ClipboardEventKind::Copy => {
                        self.clipboard.on_external_copy(event, &mut self.interaction)?
                    }
                    ClipboardEventKind::Cut => {
                        self.clipboard.on_external_cut(event, &mut self.interaction)?
                    }
                    ClipboardEventKind::Paste => {
                        self.clipboard.on_external_paste(event, &mut self.interaction)?
                    }
                };
                DispatchOutcome::Clipboard(outcome)
            }
            (Listener::Clipboard, UiEvent::ClipboardChange(event)) => {
                DispatchOutcome::Clipboard(self.clipboard.on_clipboard_change(event))
            }
            (Listener::ContextMenu, UiEvent::ContextMenu(event)) => DispatchOutcome::Menu(
                self.context_menu.context_event(event, &self.interaction)?,
            ),
            (Listener::ContextMenu, UiEvent::LongPress(event)) => DispatchOutcome::Menu(
                self.context_menu.handle_long_press(event, &self.interaction)?,
            ),
            (Listener::ContextMenu, UiEvent::MouseUp(event)) => {
                DispatchOutcome::Menu(self.context_menu.on_pointer_release(event))
            }
            (Listener::DragSources, UiEvent::DragStart(event)) => DispatchOutcome::DragStarted {
                populated: self.drag_sources.on_drag_start(event),
            },
            (Listener::DropTarget, UiEvent::Drop(event)) => self.handle_drop(event)?,
            (listener, _) => {
                debug!(%kind, ?listener, "listener does not accept event");
                DispatchOutcome::Unhandled
            }
        };
        Ok(outcome)
    }

    /// Copy from in-app UI
    pub fn internal_copy(&mut self) -> ClipboardOutcome {
        self.clipboard.on_internal_copy(&mut self.interaction)
    }

    /// Cut from in-app UI
    pub fn internal_cut(&mut self) -> ClipboardOutcome {
        self.clipboard.on_internal_cut(&mut self.interaction)
    }

    /// Paste from in-app UI
    pub fn internal_paste(&mut self) -> ClipboardOutcome {
        self.clipboard.on_internal_paste(&mut self.interaction)
    }

    /// Run an entry of the open context menu, then close the menu
    pub fn choose_menu_action(&mut self, label: &str) -> Result<ActionOutcome, StageError> {
        let menu = self.context_menu.current_menu().ok_or(StageError::NoOpenMenu)?;
        if !menu.has_action(label) {
            return Err(StageError::UnknownAction(label.to_string()));
        }

        let outcome = match label.to_lowercase().as_str() {
            "cut" => ActionOutcome::Clipboard(self.internal_cut()),
            "copy" => ActionOutcome::Clipboard(self.internal_copy()),
            "paste" => ActionOutcome::Clipboard(self.internal_paste()),
            _ => {
                let performed = self
                    .interaction
                    .find_active_context_mut()
                    .is_some_and(|context| context.perform_action(label));
                if performed {
                    ActionOutcome::Performed
                } else {
                    ActionOutcome::Unrecognised
                }
            }
        };

        self.context_menu.remove_context_menu();
        info!(action = label, ?outcome, "context menu action chosen");
        Ok(outcome)
    }

    /// Treat new system clipboard text as a clipboard change
    pub async fn poll_system_clipboard(&mut self) -> ClipboardOutcome {
        self.clipboard.poll_system_clipboard().await
    }

    /// Wait for pending system clipboard writes
    pub async fn flush(&mut self) {
        self.clipboard.flush().await;
    }

    /// Remove every binding and any open menu. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        for id in self.bindings.ids() {
            self.bindings.unsubscribe(id);
        }
        if let Some(id) = self.context_menu.remove_context_menu() {
            debug!(%id, "menu removed on teardown");
        }
    }

    fn handle_drop(&mut self, event: &mut DropEvent) -> Result<DispatchOutcome, StageError> {
        let id = ContextId::new(event.target.as_str());
        if !self.interaction.contains(&id) {
            return Ok(DispatchOutcome::DropIgnored);
        }

        let payload = event.data_transfer.to_payload();
        if payload.is_empty() {
            return Ok(DispatchOutcome::DropIgnored);
        }
        event.prevent_default();

        self.interaction.focus(id.clone())?;
        let context = self
            .interaction
            .context_mut(&id)
            .ok_or_else(|| InteractionError::UnknownContext(id.clone()))?;
        context.handle_paste(&payload);

        info!(context = %id, items = payload.item_count(), "drop delivered");
        Ok(DispatchOutcome::Dropped {
            context: id,
            item_count: payload.item_count(),
        })
    }
}

impl<C, H> Drop for Stage<C, H>
where
    C: SystemClipboard + 'static,
    H: MenuHost,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

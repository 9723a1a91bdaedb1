//! Clipboard manager
//!
//! Mediates between two buffers: the internal buffer (the last payload cut or
//! copied inside the app) and the system clipboard (reached through the
//! [`SystemClipboard`] port, permission-gated and best-effort).
//!
//! The internal buffer is authoritative for pastes whenever it is present.
//! System clipboard writes are fire-and-forget; their failure never surfaces
//! to the caller.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::error::ClipboardEventError;
use crate::domain::events::{ClipboardChangeEvent, ClipboardEvent, ClipboardEventKind};
use crate::domain::payload::ClipboardPayload;

use super::interaction::InteractionManager;
use super::ports::{SystemClipboard, SystemClipboardError};

/// Where a delivered paste came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteSource {
    /// The internal buffer
    Internal,
    /// The data carried by the paste event
    Event,
}

/// Result of a clipboard operation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// No active context; the platform's native action proceeds untouched
    NativeAllowed,
    /// The active context had nothing to cut or copy
    NothingSelected,
    /// A payload became the internal buffer
    Stored { item_count: usize },
    /// A payload was delivered to the active context
    Pasted { source: PasteSource, item_count: usize },
    /// The internal buffer was replaced by externally observed data
    Synced { item_count: usize },
    /// Nothing to do
    Ignored,
}

/// Owns the internal clipboard buffer
pub struct ClipboardManager<C>
where
    C: SystemClipboard + 'static,
{
    system: Arc<C>,
    internal: Option<ClipboardPayload>,
    sync_enabled: bool,
    last_system_text: Option<String>,
    pending: Vec<JoinHandle<()>>,
}

impl<C> ClipboardManager<C>
where
    C: SystemClipboard + 'static,
{
    /// Create a manager. With `sync_enabled` false the system clipboard is
    /// never touched.
    pub fn new(system: C, sync_enabled: bool) -> Self {
        Self {
            system: Arc::new(system),
            internal: None,
            sync_enabled,
            last_system_text: None,
            pending: Vec::new(),
        }
    }

    /// The internal buffer
    pub fn internal_clipboard_data(&self) -> Option<&ClipboardPayload> {
        self.internal.as_ref()
    }

    pub fn system(&self) -> &C {
        &self.system
    }

    pub fn sync_enabled(&self) -> bool {
        self.sync_enabled
    }

    /// Handle a platform copy event
    pub fn on_external_copy(
        &mut self,
        event: &mut ClipboardEvent,
        interaction: &mut InteractionManager,
    ) -> Result<ClipboardOutcome, ClipboardEventError> {
        validate(event, ClipboardEventKind::Copy)?;
        Ok(self.take_selection(ClipboardEventKind::Copy, Some(event), interaction))
    }

    /// Handle a platform cut event
    pub fn on_external_cut(
        &mut self,
        event: &mut ClipboardEvent,
        interaction: &mut InteractionManager,
    ) -> Result<ClipboardOutcome, ClipboardEventError> {
        validate(event, ClipboardEventKind::Cut)?;
        Ok(self.take_selection(ClipboardEventKind::Cut, Some(event), interaction))
    }

    /// Copy triggered from in-app UI
    pub fn on_internal_copy(&mut self, interaction: &mut InteractionManager) -> ClipboardOutcome {
        self.take_selection(ClipboardEventKind::Copy, None, interaction)
    }

    /// Cut triggered from in-app UI
    pub fn on_internal_cut(&mut self, interaction: &mut InteractionManager) -> ClipboardOutcome {
        self.take_selection(ClipboardEventKind::Cut, None, interaction)
    }

    /// Handle a platform paste event.
    ///
    /// The internal buffer wins over the event's own data whenever it is
    /// present: an in-app copy is always at least as fresh as whatever the
    /// platform carried.
    pub fn on_external_paste(
        &mut self,
        event: &mut ClipboardEvent,
        interaction: &mut InteractionManager,
    ) -> Result<ClipboardOutcome, ClipboardEventError> {
        validate(event, ClipboardEventKind::Paste)?;

        let Some(context) = interaction.find_active_context_mut() else {
            debug!("paste with no active context, deferring to platform");
            return Ok(ClipboardOutcome::NativeAllowed);
        };
        event.prevent_default();

        let (payload, source) = match (&self.internal, event.clipboard_data()) {
            (Some(internal), _) => (internal, PasteSource::Internal),
            (None, Some(data)) if !data.is_empty() => (data, PasteSource::Event),
            _ => {
                debug!("paste with no data in either buffer");
                return Ok(ClipboardOutcome::Ignored);
            }
        };

        context.handle_paste(payload);
        debug!(?source, items = payload.item_count(), "delivered paste");
        Ok(ClipboardOutcome::Pasted {
            source,
            item_count: payload.item_count(),
        })
    }

    /// Paste triggered from in-app UI. Only the internal buffer is used.
    pub fn on_internal_paste(&self, interaction: &mut InteractionManager) -> ClipboardOutcome {
        let Some(payload) = &self.internal else {
            return ClipboardOutcome::Ignored;
        };
        let Some(context) = interaction.find_active_context_mut() else {
            return ClipboardOutcome::Ignored;
        };

        context.handle_paste(payload);
        ClipboardOutcome::Pasted {
            source: PasteSource::Internal,
            item_count: payload.item_count(),
        }
    }

    /// Native clipboard-change notification.
    ///
    /// Replaces the internal buffer with what was observed so a later internal
    /// paste sees an external copy. Events without data are ignored.
    pub fn on_clipboard_change(&mut self, event: &ClipboardChangeEvent) -> ClipboardOutcome {
        match &event.clipboard_data {
            Some(payload) if !payload.is_empty() => {
                let item_count = payload.item_count();
                self.last_system_text = payload.text().map(str::to_owned);
                self.internal = Some(payload.clone());
                info!(items = item_count, "internal clipboard replaced by external change");
                ClipboardOutcome::Synced { item_count }
            }
            _ => ClipboardOutcome::Ignored,
        }
    }

    /// Read the system clipboard and treat new text as a clipboard change.
    ///
    /// For platforms with no change notification. Text this manager wrote
    /// itself is not treated as a change. Read failures are a no-op.
    pub async fn poll_system_clipboard(&mut self) -> ClipboardOutcome {
        if !self.sync_enabled {
            return ClipboardOutcome::Ignored;
        }

        let text = match self.system.read_text().await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => return ClipboardOutcome::Ignored,
            Err(e) => {
                debug!(error = %e, "system clipboard read unavailable");
                return ClipboardOutcome::Ignored;
            }
        };

        if self.last_system_text.as_deref() == Some(text.as_str()) {
            return ClipboardOutcome::Ignored;
        }

        self.on_clipboard_change(&ClipboardChangeEvent::new(ClipboardPayload::from_text(text)))
    }

    /// Best-effort propagation of a payload's text to the system clipboard.
    ///
    /// When an event is supplied the text is also placed in the event's data.
    /// The system write is spawned on the current tokio runtime and not
    /// awaited.
    ///
    /// # Returns
    /// true if a system write was scheduled
    pub fn attempt_copy_clipboard_data(
        &mut self,
        payload: &ClipboardPayload,
        event: Option<&mut ClipboardEvent>,
    ) -> bool {
        let text_payload = payload.text_only();
        let Some(text) = text_payload.text().map(str::to_owned) else {
            debug!("payload has no text portion, system clipboard untouched");
            return false;
        };

        if let Some(event) = event {
            event.set_clipboard_data(text_payload);
        }

        if !self.sync_enabled {
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            debug!("no async runtime, system clipboard untouched");
            return false;
        };

        self.last_system_text = Some(text.clone());
        self.pending.retain(|handle| !handle.is_finished());

        let system = Arc::clone(&self.system);
        self.pending.push(runtime.spawn(async move {
            match system.write_text(&text).await {
                Ok(()) => debug!(bytes = text.len(), "system clipboard updated"),
                Err(e @ (SystemClipboardError::PermissionDenied | SystemClipboardError::Unsupported)) => {
                    debug!(error = %e, "system clipboard not writable, keeping internal buffer only");
                }
                Err(e) => warn!(error = %e, "system clipboard write failed"),
            }
        }));
        true
    }

    /// Wait for scheduled system clipboard writes to settle
    pub async fn flush(&mut self) {
        for handle in self.pending.drain(..) {
            if let Err(e) = handle.await {
                warn!(error = %e, "system clipboard task did not complete");
            }
        }
    }

    fn take_selection(
        &mut self,
        kind: ClipboardEventKind,
        mut event: Option<&mut ClipboardEvent>,
        interaction: &mut InteractionManager,
    ) -> ClipboardOutcome {
        let Some(context) = interaction.find_active_context_mut() else {
            debug!(%kind, "no active context, clearing internal clipboard");
            self.internal = None;
            return ClipboardOutcome::NativeAllowed;
        };

        if let Some(event) = event.as_deref_mut() {
            event.prevent_default();
        }

        let payload = match kind {
            ClipboardEventKind::Cut => context.handle_cut(),
            _ => context.handle_copy(),
        };

        if payload.is_empty() {
            debug!(%kind, "active context returned an empty payload");
            return ClipboardOutcome::NothingSelected;
        }

        let item_count = payload.item_count();
        self.attempt_copy_clipboard_data(&payload, event);
        self.internal = Some(payload);
        info!(%kind, items = item_count, "stored internal clipboard");
        ClipboardOutcome::Stored { item_count }
    }
}

/// Reject events of the wrong kind, then events not initiated by the user
fn validate(event: &ClipboardEvent, expected: ClipboardEventKind) -> Result<(), ClipboardEventError> {
    if event.kind() != expected {
        return Err(ClipboardEventError::WrongEventType {
            expected,
            actual: event.kind(),
        });
    }
    if !event.is_trusted() {
        return Err(ClipboardEventError::Untrusted { kind: expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::InterfaceContext;
    use crate::domain::payload::TEXT_HTML;
    use crate::domain::selection::Selection;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSystemClipboard {
        writes: Mutex<Vec<String>>,
        contents: Mutex<Option<String>>,
        deny: bool,
    }

    impl MockSystemClipboard {
        fn denying() -> Self {
            Self {
                deny: true,
                ..Self::default()
            }
        }

        fn holding(text: &str) -> Self {
            Self {
                contents: Mutex::new(Some(text.to_string())),
                ..Self::default()
            }
        }

        fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SystemClipboard for MockSystemClipboard {
        async fn write_text(&self, text: &str) -> Result<(), SystemClipboardError> {
            if self.deny {
                return Err(SystemClipboardError::PermissionDenied);
            }
            self.writes.lock().unwrap().push(text.to_string());
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        async fn read_text(&self) -> Result<Option<String>, SystemClipboardError> {
            if self.deny {
                return Err(SystemClipboardError::PermissionDenied);
            }
            Ok(self.contents.lock().unwrap().clone())
        }
    }

    /// Context returning a fixed payload and recording what it is handed
    struct RecordingContext {
        payload: ClipboardPayload,
        pasted: Rc<RefCell<Vec<ClipboardPayload>>>,
        cuts: Rc<Cell<usize>>,
        copies: Rc<Cell<usize>>,
    }

    struct Calls {
        pasted: Rc<RefCell<Vec<ClipboardPayload>>>,
        cuts: Rc<Cell<usize>>,
        copies: Rc<Cell<usize>>,
    }

    impl InterfaceContext for RecordingContext {
        fn handle_cut(&mut self) -> ClipboardPayload {
            self.cuts.set(self.cuts.get() + 1);
            self.payload.clone()
        }

        fn handle_copy(&self) -> ClipboardPayload {
            self.copies.set(self.copies.get() + 1);
            self.payload.clone()
        }

        fn handle_paste(&mut self, payload: &ClipboardPayload) {
            self.pasted.borrow_mut().push(payload.clone());
        }

        fn active_selection(&self) -> Option<Selection> {
            None
        }
    }

    fn focused(payload: ClipboardPayload) -> (InteractionManager, Calls) {
        let calls = Calls {
            pasted: Rc::new(RefCell::new(Vec::new())),
            cuts: Rc::new(Cell::new(0)),
            copies: Rc::new(Cell::new(0)),
        };
        let context = RecordingContext {
            payload,
            pasted: Rc::clone(&calls.pasted),
            cuts: Rc::clone(&calls.cuts),
            copies: Rc::clone(&calls.copies),
        };
        let mut interaction = InteractionManager::new();
        interaction.register("canvas", Box::new(context)).unwrap();
        interaction.focus("canvas").unwrap();
        (interaction, calls)
    }

    fn rich(text: &str) -> ClipboardPayload {
        ClipboardPayload::new()
            .with_entry(crate::domain::payload::TEXT_PLAIN, text)
            .with_entry(TEXT_HTML, format!("<p>{}</p>", text))
            .with_item_count(1)
    }

    fn copy_event() -> ClipboardEvent {
        ClipboardEvent::new(ClipboardEventKind::Copy)
    }

    #[tokio::test]
    async fn external_copy_stores_payload_and_writes_text() {
        let (mut interaction, _calls) = focused(rich("hello"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), true);
        let mut event = copy_event();

        let outcome = manager.on_external_copy(&mut event, &mut interaction).unwrap();
        manager.flush().await;

        assert_eq!(outcome, ClipboardOutcome::Stored { item_count: 1 });
        assert!(event.default_prevented());
        assert_eq!(manager.internal_clipboard_data(), Some(&rich("hello")));
        assert_eq!(manager.system().writes(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn external_copy_mirrors_text_only_into_event() {
        let (mut interaction, _calls) = focused(rich("hello"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), true);
        let mut event = copy_event();

        manager.on_external_copy(&mut event, &mut interaction).unwrap();

        let data = event.clipboard_data().unwrap();
        assert_eq!(data.text(), Some("hello"));
        assert!(data.get(TEXT_HTML).is_none());
    }

    #[test]
    fn untrusted_copy_is_rejected_without_mutation() {
        let (mut interaction, calls) = focused(rich("new"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        manager.on_internal_copy(&mut interaction);
        let before = manager.internal_clipboard_data().cloned();

        let mut event = ClipboardEvent::untrusted(ClipboardEventKind::Copy);
        let err = manager.on_external_copy(&mut event, &mut interaction).unwrap_err();

        assert_eq!(
            err,
            ClipboardEventError::Untrusted {
                kind: ClipboardEventKind::Copy
            }
        );
        assert_eq!(manager.internal_clipboard_data().cloned(), before);
        assert_eq!(calls.copies.get(), 1);
        assert!(!event.default_prevented());
    }

    #[test]
    fn untrusted_cut_is_rejected() {
        let (mut interaction, calls) = focused(rich("x"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        let mut event = ClipboardEvent::untrusted(ClipboardEventKind::Cut);
        assert!(manager.on_external_cut(&mut event, &mut interaction).is_err());
        assert!(manager.internal_clipboard_data().is_none());
        assert_eq!(calls.cuts.get(), 0);
    }

    #[test]
    fn wrong_event_type_is_rejected_before_context_is_touched() {
        let (mut interaction, calls) = focused(rich("x"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        let mut event = ClipboardEvent::new(ClipboardEventKind::Paste);
        let err = manager.on_external_copy(&mut event, &mut interaction).unwrap_err();

        assert_eq!(
            err,
            ClipboardEventError::WrongEventType {
                expected: ClipboardEventKind::Copy,
                actual: ClipboardEventKind::Paste,
            }
        );
        assert_eq!(calls.copies.get(), 0);
    }

    #[test]
    fn empty_payload_leaves_internal_buffer_unchanged() {
        let (mut interaction, _calls) = focused(rich("first"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        manager.on_internal_copy(&mut interaction);

        let (mut empty_interaction, _empty_calls) = focused(ClipboardPayload::new());
        let outcome = manager.on_internal_cut(&mut empty_interaction);

        assert_eq!(outcome, ClipboardOutcome::NothingSelected);
        assert_eq!(manager.internal_clipboard_data(), Some(&rich("first")));
    }

    #[test]
    fn copy_without_active_context_clears_internal_buffer() {
        let (mut interaction, _calls) = focused(rich("first"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        manager.on_internal_copy(&mut interaction);
        assert!(manager.internal_clipboard_data().is_some());

        interaction.blur();
        let mut event = copy_event();
        let outcome = manager.on_external_copy(&mut event, &mut interaction).unwrap();

        assert_eq!(outcome, ClipboardOutcome::NativeAllowed);
        assert!(!event.default_prevented());
        assert!(manager.internal_clipboard_data().is_none());
    }

    #[test]
    fn internal_cut_without_active_context_clears_internal_buffer() {
        let (mut interaction, _calls) = focused(rich("first"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        manager.on_internal_copy(&mut interaction);

        interaction.blur();
        assert_eq!(
            manager.on_internal_cut(&mut interaction),
            ClipboardOutcome::NativeAllowed
        );
        assert!(manager.internal_clipboard_data().is_none());
    }

    #[test]
    fn paste_prefers_internal_buffer_over_event_data() {
        let (mut interaction, calls) = focused(rich("internal"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        manager.on_internal_copy(&mut interaction);

        let mut event = ClipboardEvent::new(ClipboardEventKind::Paste)
            .with_data(ClipboardPayload::from_text("external"));
        let outcome = manager.on_external_paste(&mut event, &mut interaction).unwrap();

        assert_eq!(
            outcome,
            ClipboardOutcome::Pasted {
                source: PasteSource::Internal,
                item_count: 1
            }
        );
        assert!(event.default_prevented());
        assert_eq!(calls.pasted.borrow().as_slice(), &[rich("internal")]);
    }

    #[test]
    fn paste_uses_event_data_when_internal_is_absent() {
        let (mut interaction, calls) = focused(rich("unused"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        let mut event = ClipboardEvent::new(ClipboardEventKind::Paste)
            .with_data(ClipboardPayload::from_text("external"));
        let outcome = manager.on_external_paste(&mut event, &mut interaction).unwrap();

        assert_eq!(
            outcome,
            ClipboardOutcome::Pasted {
                source: PasteSource::Event,
                item_count: 1
            }
        );
        assert_eq!(
            calls.pasted.borrow().as_slice(),
            &[ClipboardPayload::from_text("external")]
        );
    }

    #[test]
    fn paste_with_no_data_anywhere_is_ignored() {
        let (mut interaction, calls) = focused(rich("unused"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        let mut event = ClipboardEvent::new(ClipboardEventKind::Paste);
        let outcome = manager.on_external_paste(&mut event, &mut interaction).unwrap();

        assert_eq!(outcome, ClipboardOutcome::Ignored);
        assert!(calls.pasted.borrow().is_empty());
    }

    #[test]
    fn paste_without_active_context_allows_native() {
        let (mut interaction, calls) = focused(rich("x"));
        interaction.blur();
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        let mut event = ClipboardEvent::new(ClipboardEventKind::Paste)
            .with_data(ClipboardPayload::from_text("external"));
        let outcome = manager.on_external_paste(&mut event, &mut interaction).unwrap();

        assert_eq!(outcome, ClipboardOutcome::NativeAllowed);
        assert!(!event.default_prevented());
        assert!(calls.pasted.borrow().is_empty());
    }

    #[test]
    fn untrusted_paste_is_rejected() {
        let (mut interaction, calls) = focused(rich("x"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        let mut event = ClipboardEvent::untrusted(ClipboardEventKind::Paste);
        assert!(manager.on_external_paste(&mut event, &mut interaction).is_err());
        assert!(calls.pasted.borrow().is_empty());
    }

    #[test]
    fn internal_paste_requires_buffer_and_context() {
        let (mut interaction, calls) = focused(rich("x"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        assert_eq!(
            manager.on_internal_paste(&mut interaction),
            ClipboardOutcome::Ignored
        );

        manager.on_internal_copy(&mut interaction);
        interaction.blur();
        assert_eq!(
            manager.on_internal_paste(&mut interaction),
            ClipboardOutcome::Ignored
        );

        interaction.focus("canvas").unwrap();
        assert_eq!(
            manager.on_internal_paste(&mut interaction),
            ClipboardOutcome::Pasted {
                source: PasteSource::Internal,
                item_count: 1
            }
        );
        assert_eq!(calls.pasted.borrow().len(), 1);
    }

    #[test]
    fn clipboard_change_replaces_internal_buffer() {
        let (mut interaction, calls) = focused(rich("internal"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        manager.on_internal_copy(&mut interaction);

        let outcome =
            manager.on_clipboard_change(&ClipboardChangeEvent::new(ClipboardPayload::from_text("os")));
        assert_eq!(outcome, ClipboardOutcome::Synced { item_count: 1 });

        manager.on_internal_paste(&mut interaction);
        assert_eq!(
            calls.pasted.borrow().as_slice(),
            &[ClipboardPayload::from_text("os")]
        );
    }

    #[test]
    fn clipboard_change_without_data_is_a_noop() {
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);
        let outcome = manager.on_clipboard_change(&ClipboardChangeEvent::default());
        assert_eq!(outcome, ClipboardOutcome::Ignored);
        assert!(manager.internal_clipboard_data().is_none());
    }

    #[tokio::test]
    async fn denied_system_clipboard_keeps_internal_buffer() {
        let (mut interaction, _calls) = focused(rich("hello"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::denying(), true);

        let outcome = manager.on_internal_copy(&mut interaction);
        manager.flush().await;

        assert_eq!(outcome, ClipboardOutcome::Stored { item_count: 1 });
        assert_eq!(manager.internal_clipboard_data(), Some(&rich("hello")));
        assert!(manager.system().writes().is_empty());
    }

    #[tokio::test]
    async fn sync_disabled_never_writes() {
        let (mut interaction, _calls) = focused(rich("hello"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), false);

        manager.on_internal_copy(&mut interaction);
        manager.flush().await;

        assert!(manager.system().writes().is_empty());
    }

    #[test]
    fn copy_without_runtime_degrades_to_internal_only() {
        let (mut interaction, _calls) = focused(rich("hello"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), true);

        let payload = rich("hello");
        assert!(!manager.attempt_copy_clipboard_data(&payload, None));
        assert_eq!(
            manager.on_internal_copy(&mut interaction),
            ClipboardOutcome::Stored { item_count: 1 }
        );
    }

    #[tokio::test]
    async fn attempt_copy_skips_payload_without_text() {
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), true);
        let payload = ClipboardPayload::new()
            .with_entry(TEXT_HTML, "<b>x</b>")
            .with_item_count(1);

        assert!(!manager.attempt_copy_clipboard_data(&payload, None));
    }

    #[tokio::test]
    async fn poll_picks_up_external_text() {
        let (mut interaction, calls) = focused(rich("x"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::holding("from os"), true);

        let outcome = manager.poll_system_clipboard().await;
        assert_eq!(outcome, ClipboardOutcome::Synced { item_count: 1 });

        manager.on_internal_paste(&mut interaction);
        assert_eq!(calls.pasted.borrow()[0].text(), Some("from os"));
    }

    #[tokio::test]
    async fn poll_ignores_text_written_by_manager() {
        let (mut interaction, _calls) = focused(rich("mine"));
        let mut manager = ClipboardManager::new(MockSystemClipboard::default(), true);

        manager.on_internal_copy(&mut interaction);
        manager.flush().await;

        assert_eq!(manager.poll_system_clipboard().await, ClipboardOutcome::Ignored);
        assert_eq!(manager.internal_clipboard_data(), Some(&rich("mine")));
    }

    #[tokio::test]
    async fn poll_with_denied_read_is_a_noop() {
        let mut manager = ClipboardManager::new(MockSystemClipboard::denying(), true);
        assert_eq!(manager.poll_system_clipboard().await, ClipboardOutcome::Ignored);
        assert!(manager.internal_clipboard_data().is_none());
    }
}

//! Script session: a stage with demo canvases driven line by line

use std::collections::BTreeMap;

use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::application::ports::{MenuHost, SystemClipboard};
use crate::application::{
    ActionOutcome, ClipboardOutcome, DispatchOutcome, MenuOutcome, PasteSource, SharedCanvas,
    Stage, StageError, TextCanvas,
};
use crate::domain::config::AppConfig;
use crate::domain::drag::{DataTransfer, DragItem};
use crate::domain::error::StoreError;
use crate::domain::events::{
    ClipboardChangeEvent, ClipboardEvent, ClipboardEventKind, DragStartEvent, DropEvent,
    LongPressEvent, Modifiers, MouseEvent, Target, UiEvent,
};
use crate::domain::payload::ClipboardPayload;

use super::presenter::Presenter;
use super::script::{parse_line, ScriptCommand, ScriptError};

/// Items the `left` canvas starts with
pub const DEMO_ITEMS: &[&str] = &["alpha", "beta", "gamma"];

/// Element id of the demo draggable
pub const DEMO_DRAGGABLE: &str = "asset";

/// Errors from a single script line
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No canvas named '{0}'")]
    UnknownCanvas(String),

    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Counts from a script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub executed: usize,
    pub failed: usize,
}

/// A stage plus handles to the canvases registered on it
pub struct Session<C, H>
where
    C: SystemClipboard + 'static,
    H: MenuHost,
{
    stage: Stage<C, H>,
    canvases: BTreeMap<String, SharedCanvas>,
    last_drag: Option<DataTransfer>,
}

impl<C, H> Session<C, H>
where
    C: SystemClipboard + 'static,
    H: MenuHost,
{
    /// Stage with canvases `left` (seeded) and `right` (empty) and one
    /// draggable element
    pub fn with_demo_content(
        system_clipboard: C,
        menu_host: H,
        config: &AppConfig,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            stage: Stage::new(system_clipboard, menu_host, config),
            canvases: BTreeMap::new(),
            last_drag: None,
        };
        session.add_canvas("left", TextCanvas::from_items(DEMO_ITEMS.iter().copied()))?;
        session.add_canvas("right", TextCanvas::new())?;
        session.stage.drag_sources_mut().register(
            DEMO_DRAGGABLE,
            DragItem::new(
                "tree",
                "<img alt=\"tree\" src=\"assets/tree.png\">",
                "assets/tree.png",
            ),
        );
        Ok(session)
    }

    pub fn stage(&self) -> &Stage<C, H> {
        &self.stage
    }

    pub fn canvas(&self, name: &str) -> Result<&SharedCanvas, SessionError> {
        self.canvases
            .get(name)
            .ok_or_else(|| SessionError::UnknownCanvas(name.to_string()))
    }

    fn add_canvas(&mut self, name: &str, canvas: TextCanvas) -> Result<(), SessionError> {
        let shared = SharedCanvas::new(canvas);
        self.stage.register_context(name, Box::new(shared.clone()))?;
        self.canvases.insert(name.to_string(), shared);
        Ok(())
    }

    /// Run every line of `script`, reporting each result. A failing line is
    /// reported and the run continues.
    pub async fn run_script(&mut self, script: &str, presenter: &Presenter) -> ScriptReport {
        let mut report = ScriptReport::default();

        for (number, line) in script.lines().enumerate() {
            let command = match parse_line(line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    presenter.error(&format!("line {}: {}", number + 1, e));
                    report.failed += 1;
                    continue;
                }
            };

            let name = command.name();
            match self.execute(command).await {
                Ok(description) => {
                    report.executed += 1;
                    presenter.result(name, &description);
                }
                Err(e) => {
                    report.failed += 1;
                    presenter.error(&format!("line {}: {}: {}", number + 1, name, e));
                }
            }
        }

        self.stage.flush().await;
        debug!(executed = report.executed, failed = report.failed, "script finished");
        report
    }

    /// Execute one command and describe what happened
    pub async fn execute(&mut self, command: ScriptCommand) -> Result<String, SessionError> {
        let description = match command {
            ScriptCommand::Insert {
                canvas,
                index,
                text,
            } => {
                self.canvas(&canvas)?.borrow_mut().insert(index, text.as_str())?;
                format!("{} now has {} item(s)", canvas, self.canvas(&canvas)?.borrow().len())
            }
            ScriptCommand::Remove { canvas, index } => {
                let removed = self.canvas(&canvas)?.borrow_mut().remove(index)?;
                format!("removed '{}' from {}", removed, canvas)
            }
            ScriptCommand::Focus { canvas } => {
                self.canvas(&canvas)?;
                self.stage
                    .interaction_mut()
                    .focus(canvas.as_str())
                    .map_err(StageError::from)?;
                format!("{} focused", canvas)
            }
            ScriptCommand::Blur => {
                self.stage.interaction_mut().blur();
                "no context focused".to_string()
            }
            ScriptCommand::Select { canvas, indices } => {
                self.canvas(&canvas)?.borrow_mut().select(&indices)?;
                format!("{} item(s) selected in {}", indices.len(), canvas)
            }
            ScriptCommand::Clipboard {
                kind,
                trusted,
                data,
            } => {
                let mut event = if trusted {
                    ClipboardEvent::new(kind)
                } else {
                    ClipboardEvent::untrusted(kind)
                };
                if let Some(text) = data {
                    event = event.with_data(ClipboardPayload::from_text(text));
                }
                let outcome = self.stage.dispatch(&mut UiEvent::Clipboard(event))?;
                describe_dispatch(&outcome)
            }
            ScriptCommand::MenuClipboard { kind } => {
                let outcome = match kind {
                    ClipboardEventKind::Copy => self.stage.internal_copy(),
                    ClipboardEventKind::Cut => self.stage.internal_cut(),
                    ClipboardEventKind::Paste => self.stage.internal_paste(),
                };
                describe_clipboard(&outcome)
            }
            ScriptCommand::ContextMenu {
                x,
                y,
                modifier,
                on_menu,
            } => {
                let modifiers = modifier.map_or(Modifiers::none(), |m| Modifiers::none().with(m));
                let event = MouseEvent::new(x, y, self.pointer_target(on_menu))
                    .with_modifiers(modifiers);
                let outcome = self.stage.dispatch(&mut UiEvent::ContextMenu(event))?;
                describe_dispatch(&outcome)
            }
            ScriptCommand::LongPress { x, y, held_ms } => {
                let event = LongPressEvent::new(x, y, held_ms, self.pointer_target(false));
                let outcome = self.stage.dispatch(&mut UiEvent::LongPress(event))?;
                describe_dispatch(&outcome)
            }
            ScriptCommand::MouseUp { on_menu } => {
                let event = MouseEvent::new(0.0, 0.0, self.pointer_target(on_menu));
                let outcome = self.stage.dispatch(&mut UiEvent::MouseUp(event))?;
                describe_dispatch(&outcome)
            }
            ScriptCommand::Choose { action } => {
                match self.stage.choose_menu_action(&action)? {
                    ActionOutcome::Clipboard(outcome) => describe_clipboard(&outcome),
                    ActionOutcome::Performed => format!("performed {}", action),
                    ActionOutcome::Unrecognised => format!("{} not applied", action),
                }
            }
            ScriptCommand::DragStart { element } => {
                let mut event = UiEvent::DragStart(DragStartEvent::new(element));
                let outcome = self.stage.dispatch(&mut event)?;
                if let UiEvent::DragStart(event) = event {
                    self.last_drag = Some(event.data_transfer).filter(|t| !t.is_empty());
                }
                describe_dispatch(&outcome)
            }
            ScriptCommand::Drop { canvas, text } => {
                // "-" drops whatever the last drag carried
                let transfer = match self.last_drag.take() {
                    Some(transfer) if text == "-" => transfer,
                    _ => DataTransfer::from_text(text),
                };
                let outcome = self
                    .stage
                    .dispatch(&mut UiEvent::Drop(DropEvent::new(canvas, transfer)))?;
                describe_dispatch(&outcome)
            }
            ScriptCommand::ClipboardChange { text } => {
                let event = ClipboardChangeEvent::new(ClipboardPayload::from_text(text));
                let outcome = self.stage.dispatch(&mut UiEvent::ClipboardChange(event))?;
                describe_dispatch(&outcome)
            }
            ScriptCommand::Sync => describe_clipboard(&self.stage.poll_system_clipboard().await),
            ScriptCommand::Show { canvas } => {
                let view = self.canvas(&canvas)?.borrow();
                let line = Presenter::new().format_canvas(view.items(), &view.selected_indices());
                line
            }
            ScriptCommand::State => self.state_json()?,
        };
        Ok(description)
    }

    fn pointer_target(&self, on_menu: bool) -> Target {
        if on_menu {
            return Target::ContextMenu;
        }
        match self.stage.interaction().focused_id() {
            Some(id) => Target::element(id.as_str()),
            None => Target::element("document"),
        }
    }

    fn state_json(&self) -> Result<String, SessionError> {
        let stage = &self.stage;
        let state = json!({
            "focused": stage.interaction().focused_id().map(|id| id.as_str()),
            "internal": stage.clipboard().internal_clipboard_data(),
            "menu": stage.context_menu().current_menu().map(|menu| json!({
                "id": menu.id.to_string(),
                "left": menu.left,
                "top": menu.top,
                "actions": menu.labels(),
            })),
        });
        Ok(serde_json::to_string(&state)?)
    }
}

fn describe_dispatch(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Unhandled => "unhandled".to_string(),
        DispatchOutcome::Clipboard(outcome) => describe_clipboard(outcome),
        DispatchOutcome::Menu(outcome) => describe_menu(outcome),
        DispatchOutcome::DragStarted { populated: true } => "drag data set".to_string(),
        DispatchOutcome::DragStarted { populated: false } => "not draggable".to_string(),
        DispatchOutcome::Dropped {
            context,
            item_count,
        } => format!("dropped {} item(s) into {}", item_count, context),
        DispatchOutcome::DropIgnored => "drop ignored".to_string(),
    }
}

fn describe_clipboard(outcome: &ClipboardOutcome) -> String {
    match outcome {
        ClipboardOutcome::NativeAllowed => "native behaviour allowed".to_string(),
        ClipboardOutcome::NothingSelected => "nothing selected".to_string(),
        ClipboardOutcome::Stored { item_count } => format!("stored {} item(s)", item_count),
        ClipboardOutcome::Pasted { source, item_count } => {
            let source = match source {
                PasteSource::Internal => "internal clipboard",
                PasteSource::Event => "event data",
            };
            format!("pasted {} item(s) from {}", item_count, source)
        }
        ClipboardOutcome::Synced { item_count } => format!("synced {} item(s)", item_count),
        ClipboardOutcome::Ignored => "ignored".to_string(),
    }
}

fn describe_menu(outcome: &MenuOutcome) -> String {
    match outcome {
        MenuOutcome::NativeAllowed => "native menu allowed".to_string(),
        MenuOutcome::Spawned(id) => format!("{} opened", id),
        MenuOutcome::Removed(id) => format!("{} closed", id),
        MenuOutcome::Ignored => "ignored".to_string(),
    }
}

//! Application layer - Interaction managers and port interfaces
//!
//! Contains the clipboard and context menu managers, the interaction
//! registry, drag sources and the stage that wires them to UI events.

pub mod canvas;
pub mod clipboard;
pub mod context;
pub mod context_menu;
pub mod drag;
pub mod interaction;
pub mod ports;
pub mod stage;

// Re-export managers
pub use canvas::{EditCommand, SharedCanvas, TextCanvas, CANVAS_ACTIONS};
pub use clipboard::{ClipboardManager, ClipboardOutcome, PasteSource};
pub use context::{ContextId, InterfaceContext};
pub use context_menu::{ContextManager, MenuOutcome, MenuSettings};
pub use drag::DragSources;
pub use interaction::{InteractionError, InteractionManager};
pub use stage::{
    ActionOutcome, DispatchOutcome, EventBindings, Listener, ListenerId, Stage, StageError,
};

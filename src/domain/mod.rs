//! Domain layer - Core value objects, events and errors
//!
//! Contains clipboard payloads, UI events, the text store, selections and
//! the context menu model. This layer has no dependencies on external systems.

pub mod config;
pub mod drag;
pub mod error;
pub mod events;
pub mod menu;
pub mod payload;
pub mod selection;
pub mod store;

// Re-export common types
pub use config::AppConfig;
pub use drag::{DataTransfer, DragItem, DropEffect};
pub use error::*;
pub use events::{
    ClipboardChangeEvent, ClipboardEvent, ClipboardEventKind, DragStartEvent, DropEvent,
    EventKind, LongPressEvent, Modifier, Modifiers, MouseEvent, Target, UiEvent,
};
pub use menu::{ContextMenu, MenuId, MenuStyle, Region};
pub use payload::{ClipboardPayload, TEXT_HTML, TEXT_PLAIN, TEXT_URI_LIST};
pub use selection::{MenuAction, Selection};
pub use store::{ObserverId, TextStore};

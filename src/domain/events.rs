//! UI event value objects
//!
//! These mirror the events a host surface dispatches: clipboard events,
//! pointer and touch events, and drag-and-drop events. Handlers receive them
//! by mutable reference so they can suppress the platform's default action.

use std::fmt;
use std::str::FromStr;

use super::drag::DataTransfer;
use super::error::ModifierParseError;
use super::payload::ClipboardPayload;

/// Kind of a clipboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardEventKind {
    Cut,
    Copy,
    Paste,
}

impl ClipboardEventKind {
    /// Get the event type name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::Paste => "paste",
        }
    }
}

impl fmt::Display for ClipboardEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cut, copy or paste event dispatched by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardEvent {
    kind: ClipboardEventKind,
    is_trusted: bool,
    clipboard_data: Option<ClipboardPayload>,
    default_prevented: bool,
}

impl ClipboardEvent {
    /// Create a user-initiated event
    pub fn new(kind: ClipboardEventKind) -> Self {
        Self {
            kind,
            is_trusted: true,
            clipboard_data: None,
            default_prevented: false,
        }
    }

    /// Create a synthetic event that was not initiated by the user
    pub fn untrusted(kind: ClipboardEventKind) -> Self {
        Self {
            is_trusted: false,
            ..Self::new(kind)
        }
    }

    /// Attach the data the platform carried with the event
    pub fn with_data(mut self, payload: ClipboardPayload) -> Self {
        self.clipboard_data = Some(payload);
        self
    }

    pub fn kind(&self) -> ClipboardEventKind {
        self.kind
    }

    pub fn is_trusted(&self) -> bool {
        self.is_trusted
    }

    pub fn clipboard_data(&self) -> Option<&ClipboardPayload> {
        self.clipboard_data.as_ref()
    }

    /// Replace the data that will be handed back to the platform
    pub fn set_clipboard_data(&mut self, payload: ClipboardPayload) {
        self.clipboard_data = Some(payload);
    }

    /// Suppress the platform's native cut/copy/paste
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Notification that the system clipboard changed outside the app
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipboardChangeEvent {
    pub clipboard_data: Option<ClipboardPayload>,
}

impl ClipboardChangeEvent {
    pub fn new(payload: ClipboardPayload) -> Self {
        Self {
            clipboard_data: Some(payload),
        }
    }
}

/// Modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    Shift,
    Ctrl,
    Alt,
    Meta,
}

impl Modifier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = ModifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shift" => Ok(Self::Shift),
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" | "option" => Ok(Self::Alt),
            "meta" | "cmd" | "super" => Ok(Self::Meta),
            _ => Err(ModifierParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Set of held modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style: mark a modifier as held
    pub fn with(mut self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Shift => self.shift = true,
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Alt => self.alt = true,
            Modifier::Meta => self.meta = true,
        }
        self
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Meta => self.meta,
        }
    }
}

/// Element an event was dispatched to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The context menu element itself
    ContextMenu,
    /// Any other element, by id
    Element(String),
}

impl Target {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }

    pub fn is_context_menu(&self) -> bool {
        matches!(self, Self::ContextMenu)
    }
}

/// Pointer event (right-click or release)
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
    pub target: Target,
    default_prevented: bool,
}

impl MouseEvent {
    pub fn new(x: f64, y: f64, target: Target) -> Self {
        Self {
            x,
            y,
            modifiers: Modifiers::none(),
            target,
            default_prevented: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Suppress the platform's native context menu
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Touch held in place long enough to count as a press
#[derive(Debug, Clone, PartialEq)]
pub struct LongPressEvent {
    pub x: f64,
    pub y: f64,
    pub held_ms: u64,
    pub target: Target,
    default_prevented: bool,
}

impl LongPressEvent {
    pub fn new(x: f64, y: f64, held_ms: u64, target: Target) -> Self {
        Self {
            x,
            y,
            held_ms,
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Drag started on an element
#[derive(Debug, Clone, PartialEq)]
pub struct DragStartEvent {
    pub target: String,
    pub data_transfer: DataTransfer,
}

impl DragStartEvent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            data_transfer: DataTransfer::new(),
        }
    }
}

/// Dragged data dropped onto an element
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub target: String,
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DropEvent {
    pub fn new(target: impl Into<String>, data_transfer: DataTransfer) -> Self {
        Self {
            target: target.into(),
            data_transfer,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Event type names that listeners bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Cut,
    Copy,
    Paste,
    ClipboardChange,
    ContextMenu,
    MouseUp,
    LongPress,
    DragStart,
    Drop,
}

impl EventKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::ClipboardChange => "clipboardchange",
            Self::ContextMenu => "contextmenu",
            Self::MouseUp => "mouseup",
            Self::LongPress => "longpress",
            Self::DragStart => "dragstart",
            Self::Drop => "drop",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any event the stage can dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Clipboard(ClipboardEvent),
    ClipboardChange(ClipboardChangeEvent),
    ContextMenu(MouseEvent),
    MouseUp(MouseEvent),
    LongPress(LongPressEvent),
    DragStart(DragStartEvent),
    Drop(DropEvent),
}

impl UiEvent {
    /// The binding name this event is dispatched under
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Clipboard(event) => match event.kind() {
                ClipboardEventKind::Cut => EventKind::Cut,
                ClipboardEventKind::Copy => EventKind::Copy,
                ClipboardEventKind::Paste => EventKind::Paste,
            },
            Self::ClipboardChange(_) => EventKind::ClipboardChange,
            Self::ContextMenu(_) => EventKind::ContextMenu,
            Self::MouseUp(_) => EventKind::MouseUp,
            Self::LongPress(_) => EventKind::LongPress,
            Self::DragStart(_) => EventKind::DragStart,
            Self::Drop(_) => EventKind::Drop,
        }
    }
}

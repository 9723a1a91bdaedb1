//! Context menu host adapters

mod noop;
mod terminal;

pub use noop::NoOpMenuHost;
pub use terminal::{render_menu, TerminalMenuHost};

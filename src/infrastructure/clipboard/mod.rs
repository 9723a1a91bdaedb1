//! System clipboard adapters
//!
//! arboard is the primary adapter. Sessions with system clipboard access
//! turned off get an adapter that refuses every operation.

mod arboard;
mod unsupported;

pub use arboard::ArboardClipboard;
pub use unsupported::UnsupportedClipboard;

use crate::application::ports::SystemClipboard;

/// Create the system clipboard adapter for this session
pub fn create_system_clipboard(enabled: bool) -> Box<dyn SystemClipboard> {
    if enabled {
        Box::new(ArboardClipboard::new())
    } else {
        Box::new(UnsupportedClipboard)
    }
}

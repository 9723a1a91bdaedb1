//! Menu host that draws nothing

use crate::application::ports::MenuHost;
use crate::domain::menu::{ContextMenu, MenuId};

/// Accepts menus without rendering them
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpMenuHost;

impl MenuHost for NoOpMenuHost {
    fn mount(&mut self, _menu: &ContextMenu) {}

    fn unmount(&mut self, _id: MenuId) {}
}

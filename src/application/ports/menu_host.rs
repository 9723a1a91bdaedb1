//! Menu host port interface

use crate::domain::menu::{ContextMenu, MenuId};

/// Port for the surface context menus are attached to.
///
/// The context manager owns menu lifecycle; the host only renders what it is
/// given. `unmount` of an id that is not mounted must be a no-op.
pub trait MenuHost {
    /// Attach a menu under its region.
    fn mount(&mut self, menu: &ContextMenu);

    /// Detach a previously mounted menu.
    fn unmount(&mut self, id: MenuId);
}

/// Blanket implementation for boxed host types
impl MenuHost for Box<dyn MenuHost> {
    fn mount(&mut self, menu: &ContextMenu) {
        self.as_mut().mount(menu);
    }

    fn unmount(&mut self, id: MenuId) {
        self.as_mut().unmount(id);
    }
}

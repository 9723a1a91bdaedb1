//! Context menu element model

use std::fmt;

use super::selection::MenuAction;

/// Default stacking order for spawned menus
pub const DEFAULT_MENU_Z_INDEX: i32 = 1000;

/// Identifier of a spawned menu, unique per context manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub u64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu-{}", self.0)
    }
}

/// Document region a menu is attached under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Main,
}

impl Region {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
        }
    }
}

/// Positioning style applied to a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    pub z_index: i32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_MENU_Z_INDEX,
        }
    }
}

/// A context menu, absolutely positioned at `(left, top)`
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub id: MenuId,
    pub left: f64,
    pub top: f64,
    pub actions: Vec<MenuAction>,
    pub region: Region,
    pub style: MenuStyle,
}

impl ContextMenu {
    /// CSS-like declaration of the menu's placement
    pub fn style_declaration(&self) -> String {
        format!(
            "position: absolute; left: {}px; top: {}px; z-index: {}",
            self.left, self.top, self.style.z_index
        )
    }

    /// Labels of the menu's actions, in display order
    pub fn labels(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.label.as_str()).collect()
    }

    pub fn has_action(&self, label: &str) -> bool {
        self.actions.iter().any(|a| a.label.eq_ignore_ascii_case(label))
    }
}

//! Menu host that draws context menus on the terminal

use colored::*;

use crate::application::ports::MenuHost;
use crate::domain::menu::{ContextMenu, MenuId};

/// Prints mounted menus to stdout
#[derive(Debug, Default)]
pub struct TerminalMenuHost {
    mounted: Option<MenuId>,
}

impl TerminalMenuHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The menu currently drawn
    pub fn mounted(&self) -> Option<MenuId> {
        self.mounted
    }
}

/// Render a menu as a header line followed by one line per action
pub fn render_menu(menu: &ContextMenu) -> String {
    let mut lines = vec![format!(
        "{} {} {}",
        "▤".cyan(),
        menu.id.to_string().bold(),
        format!("[{}]", menu.style_declaration()).dimmed()
    )];
    lines.extend(
        menu.actions
            .iter()
            .map(|action| format!("  {} {}", "›".cyan(), action.label)),
    );
    lines.join("\n")
}

impl MenuHost for TerminalMenuHost {
    fn mount(&mut self, menu: &ContextMenu) {
        println!("{}", render_menu(menu));
        self.mounted = Some(menu.id);
    }

    fn unmount(&mut self, id: MenuId) {
        if self.mounted != Some(id) {
            return;
        }
        println!("{} {} closed", "▤".dimmed(), id);
        self.mounted = None;
    }
}

//! Context menu manager
//!
//! Decides per right-click, long-press or pointer release whether a context
//! menu should appear or go away. At most one menu exists at a time: spawning
//! while a menu is open removes the old one before the new one is mounted.

use tracing::{debug, info};

use crate::domain::config::AppConfig;
use crate::domain::error::ContextMenuError;
use crate::domain::events::{LongPressEvent, Modifier, MouseEvent};
use crate::domain::menu::{ContextMenu, MenuId, MenuStyle, Region};

use super::interaction::InteractionManager;
use super::ports::MenuHost;

/// Settings for menu spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSettings {
    /// Holding this modifier lets the platform's own menu through
    pub escape_modifier: Modifier,
    /// Minimum touch hold that counts as a long press
    pub long_press_ms: u64,
    pub z_index: i32,
}

impl MenuSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            escape_modifier: config.escape_modifier_or_default(),
            long_press_ms: config.long_press_ms_or_default(),
            z_index: config.menu_z_index_or_default(),
        }
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::empty())
    }
}

/// Result of a menu decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The platform's native menu is allowed through
    NativeAllowed,
    /// A menu was mounted
    Spawned(MenuId),
    /// The open menu was removed
    Removed(MenuId),
    /// Nothing changed
    Ignored,
}

/// Owns the open context menu, if any
pub struct ContextManager<H>
where
    H: MenuHost,
{
    host: H,
    settings: MenuSettings,
    current: Option<ContextMenu>,
    next_id: u64,
}

impl<H> ContextManager<H>
where
    H: MenuHost,
{
    pub fn new(host: H, settings: MenuSettings) -> Self {
        Self {
            host,
            settings,
            current: None,
            next_id: 1,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> MenuSettings {
        self.settings
    }

    /// The open menu
    pub fn current_menu(&self) -> Option<&ContextMenu> {
        self.current.as_ref()
    }

    /// Right-click handler
    pub fn context_event(
        &mut self,
        event: &mut MouseEvent,
        interaction: &InteractionManager,
    ) -> Result<MenuOutcome, ContextMenuError> {
        if event.modifiers.contains(self.settings.escape_modifier) {
            debug!(modifier = %self.settings.escape_modifier, "escape modifier held, native menu allowed");
            return Ok(MenuOutcome::NativeAllowed);
        }
        if event.target.is_context_menu() {
            return Ok(MenuOutcome::Ignored);
        }
        if !has_active_selection(interaction) {
            return Ok(MenuOutcome::NativeAllowed);
        }

        event.prevent_default();
        self.spawn_context_menu(event.x, event.y, interaction)
            .map(MenuOutcome::Spawned)
    }

    /// Long-press handler; the touch counterpart of [`context_event`](Self::context_event)
    pub fn handle_long_press(
        &mut self,
        event: &mut LongPressEvent,
        interaction: &InteractionManager,
    ) -> Result<MenuOutcome, ContextMenuError> {
        if event.held_ms < self.settings.long_press_ms {
            debug!(held_ms = event.held_ms, "touch released before long-press threshold");
            return Ok(MenuOutcome::Ignored);
        }
        if event.target.is_context_menu() || !has_active_selection(interaction) {
            return Ok(MenuOutcome::Ignored);
        }

        event.prevent_default();
        self.spawn_context_menu(event.x, event.y, interaction)
            .map(MenuOutcome::Spawned)
    }

    /// Pointer release anywhere in the document.
    /// Releases outside the menu close it.
    pub fn on_pointer_release(&mut self, event: &MouseEvent) -> MenuOutcome {
        if event.target.is_context_menu() {
            return MenuOutcome::Ignored;
        }
        match self.remove_context_menu() {
            Some(id) => MenuOutcome::Removed(id),
            None => MenuOutcome::Ignored,
        }
    }

    /// Mount a menu at `(x, y)` populated from the active selection.
    ///
    /// Callers are expected to have checked that an active context with a
    /// selection exists; violating that is an error, not a no-op.
    pub fn spawn_context_menu(
        &mut self,
        x: f64,
        y: f64,
        interaction: &InteractionManager,
    ) -> Result<MenuId, ContextMenuError> {
        let context = interaction
            .find_active_context()
            .ok_or(ContextMenuError::NoActiveContext)?;
        let selection = context
            .active_selection()
            .ok_or(ContextMenuError::NoActiveSelection)?;

        self.remove_context_menu();

        let id = MenuId(self.next_id);
        self.next_id += 1;

        let menu = ContextMenu {
            id,
            left: x,
            top: y,
            actions: selection.actions().to_vec(),
            region: Region::Main,
            style: MenuStyle {
                z_index: self.settings.z_index,
            },
        };

        self.host.mount(&menu);
        info!(%id, x, y, actions = menu.actions.len(), "spawned context menu");
        self.current = Some(menu);
        Ok(id)
    }

    /// Unmount the open menu
    pub fn remove_context_menu(&mut self) -> Option<MenuId> {
        let menu = self.current.take()?;
        self.host.unmount(menu.id);
        debug!(id = %menu.id, "removed context menu");
        Some(menu.id)
    }
}

fn has_active_selection(interaction: &InteractionManager) -> bool {
    interaction
        .find_active_context()
        .is_some_and(|context| context.active_selection().is_some())
}

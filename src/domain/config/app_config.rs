//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::events::Modifier;
use crate::domain::menu::DEFAULT_MENU_Z_INDEX;

/// Default long-press threshold in milliseconds
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Context menu configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    pub z_index: Option<i32>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub system_clipboard: Option<bool>,
    pub escape_modifier: Option<String>,
    pub long_press_ms: Option<u64>,
    pub log_level: Option<String>,
    pub menu: Option<MenuConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            system_clipboard: Some(true),
            escape_modifier: Some(Modifier::default().to_string()),
            long_press_ms: Some(DEFAULT_LONG_PRESS_MS),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            menu: Some(MenuConfig {
                z_index: Some(DEFAULT_MENU_Z_INDEX),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            system_clipboard: other.system_clipboard.or(self.system_clipboard),
            escape_modifier: other.escape_modifier.or(self.escape_modifier),
            long_press_ms: other.long_press_ms.or(self.long_press_ms),
            log_level: other.log_level.or(self.log_level),
            menu: Self::merge_menu_config(self.menu, other.menu),
        }
    }

    fn merge_menu_config(base: Option<MenuConfig>, other: Option<MenuConfig>) -> Option<MenuConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(MenuConfig {
                z_index: o.z_index.or(b.z_index),
            }),
        }
    }

    /// Get system clipboard sync setting, or true if not set
    pub fn system_clipboard_or_default(&self) -> bool {
        self.system_clipboard.unwrap_or(true)
    }

    /// Get escape modifier as parsed Modifier, or default if not set/invalid
    pub fn escape_modifier_or_default(&self) -> Modifier {
        self.escape_modifier
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get long-press threshold, or 500ms if not set
    pub fn long_press_ms_or_default(&self) -> u64 {
        self.long_press_ms.unwrap_or(DEFAULT_LONG_PRESS_MS)
    }

    /// Get log filter, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get menu z-index, or 1000 if not set
    pub fn menu_z_index_or_default(&self) -> i32 {
        self.menu
            .as_ref()
            .and_then(|m| m.z_index)
            .unwrap_or(DEFAULT_MENU_Z_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.system_clipboard, Some(true));
        assert_eq!(config.escape_modifier, Some("shift".to_string()));
        assert_eq!(config.long_press_ms, Some(500));
        assert_eq!(config.log_level, Some("warn".to_string()));
        assert_eq!(config.menu_z_index_or_default(), 1000);
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.system_clipboard.is_none());
        assert!(config.escape_modifier.is_none());
        assert!(config.long_press_ms.is_none());
        assert!(config.log_level.is_none());
        assert!(config.menu.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            system_clipboard: Some(true),
            long_press_ms: Some(500),
            escape_modifier: Some("shift".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            system_clipboard: Some(false),
            long_press_ms: None,
            escape_modifier: Some("ctrl".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.system_clipboard, Some(false));
        assert_eq!(merged.long_press_ms, Some(500));
        assert_eq!(merged.escape_modifier_or_default(), Modifier::Ctrl);
    }

    #[test]
    fn escape_modifier_uses_default_on_invalid() {
        let config = AppConfig {
            escape_modifier: Some("hyper".to_string()),
            ..Default::default()
        };
        assert_eq!(config.escape_modifier_or_default(), Modifier::Shift);
    }

    #[test]
    fn accessors_fall_back_on_empty() {
        let config = AppConfig::empty();
        assert!(config.system_clipboard_or_default());
        assert_eq!(config.long_press_ms_or_default(), 500);
        assert_eq!(config.log_level_or_default(), "warn");
        assert_eq!(config.menu_z_index_or_default(), 1000);
    }

    #[test]
    fn merge_menu_config() {
        let base = AppConfig {
            menu: Some(MenuConfig { z_index: Some(10) }),
            ..Default::default()
        };
        let other = AppConfig {
            menu: Some(MenuConfig { z_index: None }),
            ..Default::default()
        };
        assert_eq!(base.merge(other).menu_z_index_or_default(), 10);
    }
}

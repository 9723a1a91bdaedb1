//! XDG config store adapter
//!
//! The file lives at `$XDG_CONFIG_HOME/canvas-interact/config.toml`. Top-level
//! keys hold clipboard and gesture settings; menu styling sits in `[menu]`.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, MenuConfig};
use crate::domain::error::ConfigError;

const APP_DIR: &str = "canvas-interact";
const FILE_NAME: &str = "config.toml";

const HEADER: &str = "\
# canvas-interact configuration
# Manage with `canvas-interact config set <key> <value>`.

";

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Store at the platform config directory
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        Self::with_path(base.join(APP_DIR).join(FILE_NAME))
    }

    /// Store at an explicit path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content)
            .map(normalize)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn render(config: &AppConfig) -> Result<String, ConfigError> {
        let body = toml::to_string_pretty(&normalize(config.clone()))
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        Ok(format!("{HEADER}{body}"))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank strings read as unset and an empty `[menu]` table is dropped, so
/// neither shadows a lower-precedence layer on merge.
fn normalize(config: AppConfig) -> AppConfig {
    let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    AppConfig {
        escape_modifier: non_blank(config.escape_modifier),
        log_level: non_blank(config.log_level),
        menu: config.menu.filter(|menu| !is_empty_menu(menu)),
        ..config
    }
}

fn is_empty_menu(menu: &MenuConfig) -> bool {
    menu.z_index.is_none()
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            debug!(path = %self.path.display(), "no config file");
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;
        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::render(config)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }
        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }
        self.save(&AppConfig::defaults()).await
    }
}

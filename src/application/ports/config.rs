//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The stored config, or an empty one when nothing has been saved yet
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist configuration, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file.
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the default configuration.
    /// Fails with `AlreadyExists` if a file is present.
    async fn init(&self) -> Result<(), ConfigError>;
}

//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, MenuConfig, DEFAULT_LOG_LEVEL, DEFAULT_LONG_PRESS_MS};

//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, MenuConfig};
use crate::domain::error::ConfigError;
use crate::domain::events::Modifier;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    let value = read_value(&config, key);
    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "system_clipboard" => {
            config.system_clipboard = Some(
                parse_bool(value).ok_or_else(|| invalid("Value must be 'true' or 'false'".into()))?,
            );
        }
        "escape_modifier" => {
            let modifier = value
                .parse::<Modifier>()
                .map_err(|e| invalid(e.to_string()))?;
            config.escape_modifier = Some(modifier.to_string());
        }
        "long_press_ms" => {
            let ms = value
                .parse::<u64>()
                .map_err(|_| invalid("Value must be a whole number of milliseconds".into()))?;
            config.long_press_ms = Some(ms);
        }
        "log_level" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".into()));
            }
            config.log_level = Some(value.to_string());
        }
        "menu.z_index" => {
            let z_index = value
                .parse::<i32>()
                .map_err(|_| invalid("Value must be an integer".into()))?;
            config
                .menu
                .get_or_insert_with(MenuConfig::default)
                .z_index = Some(z_index);
        }
        _ => return Err(invalid("Unknown key".into())),
    }
    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "system_clipboard" => config.system_clipboard.map(|b| b.to_string()),
        "escape_modifier" => config.escape_modifier.clone(),
        "long_press_ms" => config.long_press_ms.map(|ms| ms.to_string()),
        "log_level" => config.log_level.clone(),
        "menu.z_index" => config
            .menu
            .as_ref()
            .and_then(|menu| menu.z_index)
            .map(|z| z.to_string()),
        _ => None,
    }
}

/// Parse a boolean value
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

//! Main app runner for script sessions

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::events::Modifier;
use crate::infrastructure::{create_system_clipboard, TerminalMenuHost, XdgConfigStore};

use super::config_cmd::parse_bool;
use super::presenter::Presenter;
use super::session::Session;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment override for system clipboard access
pub const SYSTEM_CLIPBOARD_ENV: &str = "CANVAS_INTERACT_SYSTEM_CLIPBOARD";

/// Run an interaction script against the demo stage.
///
/// Reads the script from `script`, or stdin when absent.
pub async fn run_session(script: Option<PathBuf>, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    if let Some(raw) = config.escape_modifier.as_deref() {
        if let Err(e) = raw.parse::<Modifier>() {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    let source = match read_script(script.as_ref()).await {
        Ok(source) => source,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let system_clipboard = create_system_clipboard(config.system_clipboard_or_default());
    let mut session =
        match Session::with_demo_content(system_clipboard, TerminalMenuHost::new(), &config) {
            Ok(session) => session,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        };

    let report = session.run_script(&source, &presenter).await;
    debug!(?report, "session complete");

    if report.failed > 0 {
        presenter.warn(&format!(
            "{} of {} command(s) failed",
            report.failed,
            report.failed + report.executed
        ));
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}

async fn read_script(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Cannot read script {}: {}", path.display(), e)),
        None => {
            let mut source = String::new();
            tokio::io::stdin()
                .read_to_string(&mut source)
                .await
                .map_err(|e| format!("Cannot read script from stdin: {}", e))?;
            Ok(source)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        debug!(error = %e, "config file unreadable, using defaults");
        AppConfig::empty()
    });

    let env_config = AppConfig {
        system_clipboard: env::var(SYSTEM_CLIPBOARD_ENV)
            .ok()
            .and_then(|value| parse_bool(&value)),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

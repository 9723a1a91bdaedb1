//! canvas-interact CLI entry point

use std::process::ExitCode;

use clap::Parser;

use canvas_interact::cli::{
    app::{load_merged_config, run_session, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::setup_logging,
    presenter::Presenter,
};
use canvas_interact::domain::config::AppConfig;
use canvas_interact::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        setup_logging(cli.verbose, canvas_interact::domain::config::DEFAULT_LOG_LEVEL);
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        system_clipboard: if cli.no_system_clipboard {
            Some(false)
        } else {
            None
        },
        escape_modifier: cli.escape_modifier.clone(),
        long_press_ms: cli.long_press_ms,
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;
    setup_logging(cli.verbose, config.log_level_or_default());

    run_session(cli.script, config).await
}

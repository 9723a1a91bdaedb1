//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// canvas-interact - clipboard, context menu and drag-and-drop handling
#[derive(Parser, Debug)]
#[command(name = "canvas-interact")]
#[command(version)]
#[command(about = "Drive clipboard, context menu and drag-and-drop handling with a script")]
#[command(long_about = None)]
pub struct Cli {
    /// Interaction script to run (reads stdin when omitted)
    #[arg(short = 's', long, value_name = "FILE", env = "CANVAS_INTERACT_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Never read or write the system clipboard
    #[arg(long)]
    pub no_system_clipboard: bool,

    /// Modifier that lets the native context menu through (shift, ctrl, alt, meta)
    #[arg(short = 'm', long, value_name = "MODIFIER")]
    pub escape_modifier: Option<String>,

    /// Minimum touch hold that opens a context menu
    #[arg(long, value_name = "MS")]
    pub long_press_ms: Option<u64>,

    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "system_clipboard",
    "escape_modifier",
    "long_press_ms",
    "log_level",
    "menu.z_index",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

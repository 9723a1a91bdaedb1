//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup, the
//! config command and the script session runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod script;
pub mod session;

// Re-export commonly used types
pub use app::{run_session, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
pub use script::{parse_line, ScriptCommand, ScriptError};
pub use session::{ScriptReport, Session, SessionError};

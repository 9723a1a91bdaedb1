//! canvas-interact - clipboard, context menu and drag-and-drop handling
//!
//! Mediates cut, copy and paste between an in-app clipboard buffer and the
//! system clipboard, spawns custom context menus for the focused interface
//! context and moves data between contexts by drag and drop.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Payloads, UI events, the text store, menus and errors
//! - **Application**: Managers, the stage and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, terminal menus, XDG config)
//! - **CLI**: Argument parsing, config command and the script runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod import;
pub mod render;
pub mod update;

pub use import::{handle_import_command, ImportArgs};
pub use render::handle_render_command;
pub use update::{handle_update_command, UpdateArgs};

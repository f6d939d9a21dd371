//! Configuration module for kontuak
//!
//! This module provides configuration management including:
//! - Base directory resolution and the layout of the entry tree
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KontuakPaths;
pub use settings::Settings;

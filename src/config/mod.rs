//! Configuration module for contas
//!
//! This module provides configuration management including:
//! - Base directory and file path resolution
//! - Optional settings file persistence

pub mod paths;
pub mod settings;

pub use paths::ContasPaths;
pub use settings::Settings;

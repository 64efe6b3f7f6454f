// src/config.rs

//! Configuration loading utilities.
//!
//! This module provides convenience functions for loading engine
//! configuration from files.

use std::path::Path;

use crate::error::Result;
use crate::models::Config;

/// Load configuration from a TOML file.
///
/// Falls back to defaults if loading fails.
pub fn load_config(path: &Path) -> Result<Config> {
    Ok(Config::load_or_default(path))
}

/// Load and validate configuration.
pub fn load_all(path: &Path) -> Result<Config> {
    let config = load_config(path)?;
    config.validate()?;
    Ok(config)
}

//! Path utilities for sharpline.
//!
//! User data lives under `~/.sharpline/`:
//! - `~/.sharpline/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the sharpline home directory (`~/.sharpline/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sharpline")
}

/// Returns the default config file path (`~/.sharpline/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

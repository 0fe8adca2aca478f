//! Configuration loading and discovery for `sheetanim.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::SheetConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "sheetanim.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse sheetanim.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override milliseconds per quantization step
    pub tick_ms: Option<u32>,
    /// Override ticks per quantization step
    pub ticks_per_step: Option<u32>,
    /// Disable the slice Y flip
    pub no_flip_y: Option<bool>,
    /// Reject unrecognized tag directions
    pub strict_directions: Option<bool>,
    /// Accept unsorted slice keys
    pub allow_unsorted_slice_keys: Option<bool>,
    /// Force compact JSON output
    pub compact: Option<bool>,
    /// Override the mirrored tag suffix
    pub mirror_suffix: Option<String>,
}

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SHEETANIM_CONFIG";

/// Locate the config file to use when no `--config` path is given.
///
/// Candidates, first hit wins:
/// 1. `$SHEETANIM_CONFIG`
/// 2. `sheetanim.toml` in the working directory or any ancestor
/// 3. `sheetanim/sheetanim.toml` under the user config directory
pub fn find_config() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    env::current_dir()
        .ok()
        .and_then(|cwd| find_config_from(&cwd))
        .or_else(find_user_config)
}

/// User-level config: `$XDG_CONFIG_HOME`, falling back to `$HOME/.config`.
pub fn find_user_config() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env::var_os("HOME")?).join(".config"),
    };
    Some(base.join("sheetanim").join(CONFIG_FILE_NAME)).filter(|p| p.is_file())
}

/// Nearest `sheetanim.toml` in `start` or one of its ancestors.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE_NAME)).find(|p| p.is_file())
}

/// Load configuration.
///
/// An explicit path must exist. Otherwise [`find_config`] is consulted and
/// the defaults are returned when it finds nothing.
pub fn load_config(path: Option<&Path>) -> Result<SheetConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(SheetConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<SheetConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SheetConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut SheetConfig, overrides: &CliOverrides) {
    if let Some(tick_ms) = overrides.tick_ms {
        config.decode.tick_ms = tick_ms;
    }
    if let Some(ticks_per_step) = overrides.ticks_per_step {
        config.decode.ticks_per_step = ticks_per_step;
    }
    if let Some(true) = overrides.no_flip_y {
        config.decode.flip_y = false;
    }
    if let Some(strict) = overrides.strict_directions {
        config.decode.strict_directions = strict;
    }
    if let Some(allow) = overrides.allow_unsorted_slice_keys {
        config.decode.allow_unsorted_slice_keys = allow;
    }
    if let Some(true) = overrides.compact {
        config.output.pretty = false;
    }
    if let Some(ref suffix) = overrides.mirror_suffix {
        config.output.mirror_suffix = suffix.clone();
    }
}

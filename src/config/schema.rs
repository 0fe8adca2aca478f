//! Configuration schema types for `sheetanim.toml`
//!
//! Defines the structure and validation rules for decoder configuration.

use serde::{Deserialize, Serialize};

use crate::decoder::DecodeOptions;
use crate::timing::{TickRate, DEFAULT_TICKS_PER_STEP, DEFAULT_TICK_MS};

/// Decoder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Milliseconds per quantization step
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
    /// Ticks awarded per quantization step
    #[serde(default = "default_ticks_per_step")]
    pub ticks_per_step: u32,
    /// Convert slice bounds to bottom-up Y
    #[serde(default = "default_true")]
    pub flip_y: bool,
    /// Reject tags with an unrecognized direction
    #[serde(default)]
    pub strict_directions: bool,
    /// Accept slice keys in any order
    #[serde(default)]
    pub allow_unsorted_slice_keys: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            ticks_per_step: default_ticks_per_step(),
            flip_y: true,
            strict_directions: false,
            allow_unsorted_slice_keys: false,
        }
    }
}

impl DecodeConfig {
    /// Runtime decoder options for these settings.
    pub fn to_options(&self) -> DecodeOptions {
        DecodeOptions {
            tick_rate: TickRate::new(self.tick_ms, self.ticks_per_step),
            flip_y: self.flip_y,
            strict_directions: self.strict_directions,
            allow_unsorted_slice_keys: self.allow_unsorted_slice_keys,
        }
    }
}

fn default_tick_ms() -> u32 {
    DEFAULT_TICK_MS
}

fn default_ticks_per_step() -> u32 {
    DEFAULT_TICKS_PER_STEP
}

fn default_true() -> bool {
    true
}

/// Output settings for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Suffix appended to tag names for mirrored animations
    #[serde(default = "default_mirror_suffix")]
    pub mirror_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true, mirror_suffix: default_mirror_suffix() }
    }
}

fn default_mirror_suffix() -> String {
    "_mirrored".to_string()
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Decoder settings
    #[serde(default)]
    pub decode: DecodeConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "decode.tick_ms")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sheetanim.toml: '{}' {}", self.field, self.message)
    }
}

impl SheetConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.decode.tick_ms == 0 {
            errors.push(ConfigValidationError {
                field: "decode.tick_ms".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.decode.ticks_per_step == 0 {
            errors.push(ConfigValidationError {
                field: "decode.ticks_per_step".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.output.mirror_suffix.is_empty() {
            errors.push(ConfigValidationError {
                field: "output.mirror_suffix".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

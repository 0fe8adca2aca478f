//! Error types for sprite sheet decoding

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while decoding a sprite sheet document.
///
/// Every variant aborts the whole decode. No partial [`crate::AnimationSet`]
/// is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The document could not be read from disk
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON
    #[error("Failed to parse sprite sheet JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A required key is absent
    #[error("Missing required field '{path}'")]
    MissingField { path: String },
    /// A required key is present but holds the wrong kind of value
    #[error("Field '{path}' must be {expected}")]
    InvalidField { path: String, expected: &'static str },
    /// A frame range or slice key does not resolve against the frame table
    #[error("Malformed reference at '{path}': {reason}")]
    MalformedReference { path: String, reason: String },
}

impl DecodeError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField { path: path.into(), expected }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedReference { path: path.into(), reason: reason.into() }
    }

    /// Short category name used in CLI reports.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Json(_) => "json",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidField { .. } => "invalid_field",
            Self::MalformedReference { .. } => "malformed_reference",
        }
    }
}

/// Result alias used throughout the decoder.
pub type Result<T> = std::result::Result<T, DecodeError>;

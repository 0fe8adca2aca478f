//! Sprite sheet decoding entry points
//!
//! The decode pipeline is:
//!
//! 1. normalize document keys ([`crate::keys`])
//! 2. extract the frame table ([`crate::frames`]) and slice table ([`crate::slices`])
//! 3. expand tags into animations ([`crate::tags`])
//!
//! Decoding is a pure function of the document and options. The decoder holds
//! no mutable state, so one instance can decode many sheets concurrently.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::document::{resolve_image_path, Field};
use crate::error::{DecodeError, Result};
use crate::frames::extract_frames;
use crate::keys::normalize_keys;
use crate::models::{AnimationSet, KeyOrder};
use crate::slices::extract_slices;
use crate::tags::{expand_tags, SheetContext};
use crate::timing::TickRate;

/// Options controlling how a sheet is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Millisecond to tick conversion
    pub tick_rate: TickRate,
    /// Convert slice bounds to bottom-up Y
    pub flip_y: bool,
    /// Reject tags whose direction is neither `forward` nor `pingpong`
    pub strict_directions: bool,
    /// Accept slice keys in any order, resolving with a source-order scan
    pub allow_unsorted_slice_keys: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            tick_rate: TickRate::default(),
            flip_y: true,
            strict_directions: false,
            allow_unsorted_slice_keys: false,
        }
    }
}

impl DecodeOptions {
    fn key_order(&self) -> KeyOrder {
        if self.allow_unsorted_slice_keys {
            KeyOrder::Source
        } else {
            KeyOrder::Sorted
        }
    }
}

/// Decodes sprite sheet documents into [`AnimationSet`]s.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheetDecoder {
    options: DecodeOptions,
}

impl SpriteSheetDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Read, parse and decode the document at `document_path`.
    pub fn decode_path(&self, document_path: &Path) -> Result<AnimationSet> {
        let contents = fs::read_to_string(document_path)
            .map_err(|source| DecodeError::Io { path: document_path.to_path_buf(), source })?;
        self.decode_str(&contents, document_path)
    }

    /// Parse and decode JSON text. `document_path` locates the sheet image.
    pub fn decode_str(&self, json: &str, document_path: &Path) -> Result<AnimationSet> {
        let value: Value = serde_json::from_str(json)?;
        self.decode_value(value, document_path)
    }

    /// Decode an already-parsed document.
    ///
    /// Keys may use any casing the source tool writes; they are normalized
    /// first. `document_path` is only used to resolve `meta.image`.
    pub fn decode_value(&self, document: Value, document_path: &Path) -> Result<AnimationSet> {
        let document = normalize_keys(document);
        let root = Field::root(&document);

        let frames = extract_frames(&root)?;
        let meta = root.get("meta")?;
        let image = meta.get("image")?.as_str()?;
        let image_path = resolve_image_path(document_path, image);
        let slices = extract_slices(&meta, self.options.key_order())?;

        let ctx = SheetContext {
            frames: &frames,
            slices: &slices,
            image_path: &image_path,
            options: &self.options,
        };
        let set = expand_tags(&meta, &ctx)?;

        debug!(
            document = %document_path.display(),
            frames = frames.len(),
            slices = slices.len(),
            animations = set.len(),
            "decoded sprite sheet"
        );

        Ok(set)
    }
}

/// Decode the sheet at `document_path` with default options.
///
/// # Example
///
/// ```ignore
/// let set = sheetanim::decode("assets/hero.json")?;
/// let walk = &set["walk"];
/// println!("{} frames, {} ticks", walk.len(), walk.total_ticks());
/// ```
pub fn decode(document_path: impl AsRef<Path>) -> Result<AnimationSet> {
    SpriteSheetDecoder::default().decode_path(document_path.as_ref())
}

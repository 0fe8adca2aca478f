//! Standalone drawable sprite records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::core::Rect;

/// Metadata carried alongside a sprite's drawable values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteMetadata {
    /// Slice bounds for the frame this sprite was projected from
    #[serde(default)]
    pub slices: BTreeMap<String, Rect>,
}

/// A flattened, single-frame drawable.
///
/// Field names follow the renderer's sprite convention (`path`, `tile_x`, ...)
/// so a serialized sprite can be handed to it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub path: PathBuf,
    pub w: i32,
    pub h: i32,
    pub tile_x: i32,
    pub tile_y: i32,
    pub tile_w: i32,
    pub tile_h: i32,
    pub flip_horizontally: bool,
    /// Display duration in runtime ticks
    pub duration: u32,
    pub metadata: SpriteMetadata,
}

/// Sprite projection of one animation.
///
/// A single-frame animation collapses to [`SpriteProjection::Single`]; anything
/// longer stays a [`SpriteProjection::Sequence`]. Serialized untagged, so the
/// JSON is either one sprite object or an array of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpriteProjection {
    Single(Sprite),
    Sequence(Vec<Sprite>),
}

impl SpriteProjection {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Sequence(sprites) => sprites.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<&Sprite> {
        match self {
            Self::Single(sprite) => Some(sprite),
            Self::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Sprite]> {
        match self {
            Self::Single(_) => None,
            Self::Sequence(sprites) => Some(sprites),
        }
    }

    /// Iterate sprites regardless of shape.
    pub fn iter(&self) -> std::slice::Iter<'_, Sprite> {
        match self {
            Self::Single(sprite) => std::slice::from_ref(sprite).iter(),
            Self::Sequence(sprites) => sprites.iter(),
        }
    }
}

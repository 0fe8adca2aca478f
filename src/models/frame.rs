//! Frame types: raw sheet frames and decoded animation frames.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::core::Rect;

/// One physical sub-image of the sheet, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFrame {
    /// Source rectangle inside the sheet image
    pub rect: Rect,
    /// Display duration as written by the source tool
    pub duration_ms: u32,
}

/// A single decoded frame of an animation.
///
/// This is the unit handed to the rendering layer. Ping-pong expansion may
/// produce several frames with identical content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Sheet image, resolved against the document's directory
    pub image_path: PathBuf,
    /// Frame width in pixels
    pub w: i32,
    /// Frame height in pixels
    pub h: i32,
    /// Source rectangle inside the sheet image
    pub tile_rect: Rect,
    /// Draw the frame mirrored left to right
    pub flip_horizontally: bool,
    /// Display duration in runtime ticks
    pub duration_ticks: u32,
    /// Slice bounds for this frame, in frame-local bottom-up coordinates
    #[serde(default)]
    pub slices: BTreeMap<String, Rect>,
    /// Index of the sheet frame this record was built from
    pub frame_index: usize,
}

impl AnimationFrame {
    /// Look up a slice's bounds on this frame.
    pub fn slice(&self, name: &str) -> Option<&Rect> {
        self.slices.get(name)
    }
}

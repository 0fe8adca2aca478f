//! Sprite projection: animations to standalone drawable sprites

use std::collections::BTreeMap;
use std::path::Path;

use crate::decoder::decode;
use crate::error::Result;
use crate::models::{Animation, AnimationFrame, AnimationSet, Sprite, SpriteMetadata, SpriteProjection};

/// Flatten one animation frame into a sprite.
pub fn frame_to_sprite(frame: &AnimationFrame) -> Sprite {
    Sprite {
        path: frame.image_path.clone(),
        w: frame.w,
        h: frame.h,
        tile_x: frame.tile_rect.x,
        tile_y: frame.tile_rect.y,
        tile_w: frame.tile_rect.w,
        tile_h: frame.tile_rect.h,
        flip_horizontally: frame.flip_horizontally,
        duration: frame.duration_ticks,
        metadata: SpriteMetadata { slices: frame.slices.clone() },
    }
}

/// Project one animation. A single frame collapses to [`SpriteProjection::Single`].
pub fn project_animation(animation: &Animation) -> SpriteProjection {
    match animation.frames.as_slice() {
        [only] => SpriteProjection::Single(frame_to_sprite(only)),
        frames => SpriteProjection::Sequence(frames.iter().map(frame_to_sprite).collect()),
    }
}

/// Project every animation of a set, keyed by tag.
///
/// Callers must handle both shapes: a one-frame tag yields a single sprite,
/// longer tags yield a sequence with one sprite per expanded frame.
pub fn project_to_sprites(set: &AnimationSet) -> BTreeMap<String, SpriteProjection> {
    set.iter().map(|(tag, animation)| (tag.to_string(), project_animation(animation))).collect()
}

/// Decode the sheet at `document_path` and project it to sprites.
pub fn decode_sprites(document_path: impl AsRef<Path>) -> Result<BTreeMap<String, SpriteProjection>> {
    Ok(project_to_sprites(&decode(document_path)?))
}

//! Data models for decoded sprite sheets (frames, slices, animations, sprites)

mod animation;
mod core;
mod frame;
mod slice;
mod sprite;

// Re-export all public types
pub use animation::{Animation, AnimationSet, PlaybackDirection};
pub use self::core::Rect;
pub use frame::{AnimationFrame, RawFrame};
pub use slice::{KeyOrder, SliceKey, SliceTable};
pub use sprite::{Sprite, SpriteMetadata, SpriteProjection};

//! sheetanim - Library for decoding sprite sheet exports into animations
//!
//! This library provides functionality to:
//! - Decode sprite sheet JSON (frames, frame tags, keyframed slices) into
//!   tick-quantized animations
//! - Project animations into a flat sprite representation
//! - Mirror animations horizontally
//!
//! ```ignore
//! let animations = sheetanim::decode("assets/hero.json")?;
//! let walk = &animations["walk"];
//! println!("{} frames, {} ticks", walk.len(), walk.total_ticks());
//! ```

pub mod cli;
pub mod config;
pub mod decoder;
pub mod document;
pub mod error;
pub mod frames;
pub mod keys;
pub mod mirror;
pub mod models;
pub mod slices;
pub mod sprites;
pub mod tags;
pub mod timing;

pub use decoder::{decode, DecodeOptions, SpriteSheetDecoder};
pub use error::{DecodeError, Result};
pub use mirror::{mirror_horizontally, mirror_set};
pub use models::{
    Animation, AnimationFrame, AnimationSet, PlaybackDirection, Rect, Sprite, SpriteMetadata,
    SpriteProjection,
};
pub use sprites::{decode_sprites, project_to_sprites};
pub use timing::TickRate;

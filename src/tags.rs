//! Tag expansion: frame-index ranges to animations
//!
//! Each entry of `meta.frame_tags` names an inclusive range of sheet frames.
//! The range is turned into [`AnimationFrame`] records and then reordered by
//! the tag's playback direction.

use std::path::Path;

use tracing::{trace, warn};

use crate::decoder::DecodeOptions;
use crate::document::Field;
use crate::error::{DecodeError, Result};
use crate::keys::canonical_key;
use crate::models::{Animation, AnimationFrame, AnimationSet, PlaybackDirection, RawFrame, SliceTable};
use crate::slices::resolve_slices;

/// Everything tag expansion reads besides the tag itself.
pub struct SheetContext<'a> {
    pub frames: &'a [RawFrame],
    pub slices: &'a SliceTable,
    pub image_path: &'a Path,
    pub options: &'a DecodeOptions,
}

impl SheetContext<'_> {
    /// Build the animation record for sheet frame `index`.
    pub fn animation_frame(&self, index: usize) -> Result<AnimationFrame> {
        let raw = &self.frames[index];
        Ok(AnimationFrame {
            image_path: self.image_path.to_path_buf(),
            w: raw.rect.w,
            h: raw.rect.h,
            tile_rect: raw.rect,
            flip_horizontally: false,
            duration_ticks: self.options.tick_rate.quantize(raw.duration_ms),
            slices: resolve_slices(self.slices, index, raw.rect.w, raw.rect.h, self.options.flip_y)?,
            frame_index: index,
        })
    }
}

/// Expand one tag into its canonical name and animation.
pub fn expand_tag(tag: &Field<'_>, ctx: &SheetContext<'_>) -> Result<(String, Animation)> {
    let name = tag.get("name")?.as_str()?;
    let from_field = tag.get("from")?;
    let to_field = tag.get("to")?;
    let direction_field = tag.get("direction")?;

    let from = from_field.as_index()?;
    let to = to_field.as_index()?;
    let direction = PlaybackDirection::parse(direction_field.as_str()?);

    if from > to {
        return Err(DecodeError::malformed(
            tag.path(),
            format!("tag '{}' starts at frame {} after it ends at frame {}", name, from, to),
        ));
    }
    if to >= ctx.frames.len() {
        return Err(DecodeError::malformed(
            to_field.path(),
            format!(
                "tag '{}' ends at frame {} but the sheet has {} frames",
                name,
                to,
                ctx.frames.len()
            ),
        ));
    }

    if !direction.is_recognized() {
        if ctx.options.strict_directions {
            return Err(DecodeError::malformed(
                direction_field.path(),
                format!("tag '{}' has unrecognized direction '{}'", name, direction),
            ));
        }
        warn!(tag = name, direction = %direction, "unrecognized direction, playing forward");
    }

    let base = (from..=to).map(|i| ctx.animation_frame(i)).collect::<Result<Vec<_>>>()?;
    let frames: Vec<AnimationFrame> =
        direction.playback_order(base.len()).into_iter().map(|pos| base[pos].clone()).collect();

    trace!(tag = name, from, to, direction = %direction, frames = frames.len(), "expanded tag");

    Ok((canonical_key(name), Animation::new(frames, direction)))
}

/// Expand every tag of `meta.frame_tags` into an [`AnimationSet`].
///
/// When two tags share a canonical name the later one replaces the earlier.
pub fn expand_tags(meta: &Field<'_>, ctx: &SheetContext<'_>) -> Result<AnimationSet> {
    let mut set = AnimationSet::new();

    for tag in meta.get("frame_tags")?.elements()? {
        let (name, animation) = expand_tag(&tag, ctx)?;
        if set.insert(name.clone(), animation).is_some() {
            warn!(tag = %name, "duplicate tag name, keeping the later definition");
        }
    }

    Ok(set)
}

//! Horizontal mirroring of decoded animations

use crate::models::{Animation, AnimationFrame, AnimationSet};

/// Mirror one frame: invert the flip flag and re-derive slice X origins.
pub fn mirror_frame(frame: &AnimationFrame) -> AnimationFrame {
    AnimationFrame {
        flip_horizontally: !frame.flip_horizontally,
        slices: frame
            .slices
            .iter()
            .map(|(name, bounds)| (name.clone(), bounds.flip_x(frame.w)))
            .collect(),
        ..frame.clone()
    }
}

/// Produce a horizontally mirrored copy of `animation`.
///
/// Each frame's `flip_horizontally` is inverted and every slice gets
/// `x' = frame_w - x - slice_w`; `y`, `w` and `h` are untouched. Works on
/// already-decoded (Y-flipped) bounds and mirrors every frame, including
/// ping-pong duplicates. Applying it twice restores the original.
pub fn mirror_horizontally(animation: &Animation) -> Animation {
    Animation {
        frames: animation.frames.iter().map(mirror_frame).collect(),
        direction: animation.direction.clone(),
    }
}

/// Add a mirrored copy of every animation under `"{tag}{suffix}"`.
///
/// Existing tags are kept. A mirrored name that collides with an existing
/// tag replaces it.
pub fn mirror_set(set: &AnimationSet, suffix: &str) -> AnimationSet {
    let mut out = set.clone();
    for (tag, animation) in set.iter() {
        out.insert(format!("{}{}", tag, suffix), mirror_horizontally(animation));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlaybackDirection, Rect};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn frame(index: usize, hitbox: Rect) -> AnimationFrame {
        AnimationFrame {
            image_path: PathBuf::from("hero.png"),
            w: 16,
            h: 16,
            tile_rect: Rect::new(index as i32 * 16, 0, 16, 16),
            flip_horizontally: false,
            duration_ticks: 6,
            slices: BTreeMap::from([
                ("hitbox".to_string(), hitbox),
                ("weapon".to_string(), Rect::new(12, 4, 6, 2)),
            ]),
            frame_index: index,
        }
    }

    fn sample() -> Animation {
        Animation::new(
            vec![frame(0, Rect::new(2, 10, 4, 4)), frame(1, Rect::new(5, 3, 3, 7))],
            PlaybackDirection::PingPong,
        )
    }

    #[test]
    fn test_mirror_flips_flag_and_x() {
        let mirrored = mirror_horizontally(&sample());

        let first = &mirrored.frames[0];
        assert!(first.flip_horizontally);
        assert_eq!(first.slices["hitbox"], Rect::new(10, 10, 4, 4));
        // Slices overhanging the frame mirror to a negative origin
        assert_eq!(first.slices["weapon"], Rect::new(-2, 4, 6, 2));
        assert_eq!(first.tile_rect, Rect::new(0, 0, 16, 16));
        assert_eq!(first.duration_ticks, 6);
    }

    #[test]
    fn test_mirror_leaves_input_untouched() {
        let original = sample();
        let snapshot = original.clone();
        let _ = mirror_horizontally(&original);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_mirror_is_involution() {
        let original = sample();
        let back = mirror_horizontally(&mirror_horizontally(&original));
        assert_eq!(back, original);
    }

    #[test]
    fn test_mirror_covers_duplicates() {
        let base = frame(1, Rect::new(0, 0, 4, 4));
        let anim = Animation::new(
            vec![frame(0, Rect::new(0, 0, 4, 4)), base.clone(), frame(2, Rect::new(0, 0, 4, 4)), base],
            PlaybackDirection::PingPong,
        );
        let mirrored = anim.mirrored();
        assert!(mirrored.frames.iter().all(|f| f.flip_horizontally));
        assert!(mirrored.frames.iter().all(|f| f.slices["hitbox"].x == 12));
    }

    #[test]
    fn test_mirror_set_adds_suffixed_tags() {
        let mut set = AnimationSet::new();
        set.insert("walk", sample());

        let out = mirror_set(&set, "_left");
        assert_eq!(out.len(), 2);
        assert!(!out["walk"].frames[0].flip_horizontally);
        assert!(out["walk_left"].frames[0].flip_horizontally);
    }
}

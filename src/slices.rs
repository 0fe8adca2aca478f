//! Slice table extraction and per-frame slice resolution

use std::collections::BTreeMap;

use tracing::warn;

use crate::document::Field;
use crate::error::{DecodeError, Result};
use crate::models::{KeyOrder, Rect, SliceKey, SliceTable};

/// Read `meta.slices` into a [`SliceTable`].
///
/// With [`KeyOrder::Sorted`] every slice's keys must be non-decreasing by
/// frame index; a key that goes backwards is a malformed reference. With
/// [`KeyOrder::Source`] keys are kept exactly as written.
pub fn extract_slices(meta: &Field<'_>, order: KeyOrder) -> Result<SliceTable> {
    let mut table = SliceTable::new(order);

    for slice in meta.get("slices")?.elements()? {
        let name = slice.get("name")?.as_str()?.to_string();
        let keys_field = slice.get("keys")?;

        let mut keys = Vec::new();
        for key in keys_field.elements()? {
            let first_frame_index = key.get("frame")?.as_index()?;
            if order == KeyOrder::Sorted {
                if let Some(prev) = keys.last().map(|k: &SliceKey| k.first_frame_index) {
                    if first_frame_index < prev {
                        return Err(DecodeError::malformed(
                            key.path(),
                            format!(
                                "slice '{}' key at frame {} follows a key at frame {}; keys must be ascending",
                                name, first_frame_index, prev
                            ),
                        ));
                    }
                }
            }
            keys.push(SliceKey { first_frame_index, bounds: key.get("bounds")?.as_rect()? });
        }

        if table.slices.insert(name.clone(), keys).is_some() {
            warn!(slice = %name, "duplicate slice name, keeping the later definition");
        }
    }

    Ok(table)
}

/// Resolve every slice's bounds for one frame.
///
/// Picks the last key at or before `frame_index` and, when `flip_y` is set,
/// converts the bounds from top-down to bottom-up Y against the frame's
/// height (`y' = frame_h - y - h`). A slice with no applicable key is a
/// malformed reference. Bounds whose flipped or mirrored origin falls outside
/// the `i32` range are an invalid field, so every resolved frame can be
/// mirrored against `frame_w` exactly.
pub fn resolve_slices(
    table: &SliceTable,
    frame_index: usize,
    frame_w: i32,
    frame_h: i32,
    flip_y: bool,
) -> Result<BTreeMap<String, Rect>> {
    table
        .names()
        .map(|name| -> Result<(String, Rect)> {
            let path = format!("meta.slices.{}", name);
            let key = table.key_at(name, frame_index).ok_or_else(|| {
                DecodeError::malformed(path.as_str(), format!("no key at or before frame {}", frame_index))
            })?;
            let bounds = if flip_y { key.bounds.checked_flip_y(frame_h) } else { Some(key.bounds) };
            let bounds = bounds
                .filter(|b| b.checked_flip_x(frame_w).is_some())
                .ok_or_else(|| DecodeError::invalid(path.as_str(), "bounds within the i32 range"))?;
            Ok((name.to_string(), bounds))
        })
        .collect()
}

//! Frame table extraction

use crate::document::Field;
use crate::error::Result;
use crate::models::RawFrame;

/// Read the document's `frames` array in file order.
///
/// Each entry must carry a `frame` rectangle and a `duration` in
/// milliseconds. Only the array layout is supported; a mapping of frame names
/// (the source tool's "hash" layout) is rejected as an invalid field.
pub fn extract_frames(root: &Field<'_>) -> Result<Vec<RawFrame>> {
    root.get("frames")?
        .elements()?
        .iter()
        .map(|entry| -> Result<RawFrame> {
            Ok(RawFrame {
                rect: entry.get("frame")?.as_rect()?,
                duration_ms: entry.get("duration")?.as_u32()?,
            })
        })
        .collect()
}

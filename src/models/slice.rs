//! Slice keyframe types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::core::Rect;

/// A slice keyframe: `bounds` apply from `first_frame_index` until the next key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceKey {
    pub first_frame_index: usize,
    pub bounds: Rect,
}

/// Key ordering contract of a [`SliceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrder {
    /// Keys were verified ascending by `first_frame_index`; lookups use binary search
    #[default]
    Sorted,
    /// Keys are kept in source order; lookups take the last match in that order
    Source,
}

/// Slice name to keyframes, as extracted from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceTable {
    pub slices: BTreeMap<String, Vec<SliceKey>>,
    #[serde(default)]
    pub order: KeyOrder,
}

impl SliceTable {
    pub fn new(order: KeyOrder) -> Self {
        Self { slices: BTreeMap::new(), order }
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    /// Find the key that applies to `frame_index` for the named slice.
    ///
    /// Returns `None` when the slice is unknown or has no key at or before
    /// `frame_index`.
    pub fn key_at(&self, name: &str, frame_index: usize) -> Option<&SliceKey> {
        let keys = self.slices.get(name)?;
        match self.order {
            KeyOrder::Sorted => {
                let end = keys.partition_point(|k| k.first_frame_index <= frame_index);
                end.checked_sub(1).map(|i| &keys[i])
            }
            KeyOrder::Source => keys.iter().rev().find(|k| k.first_frame_index <= frame_index),
        }
    }
}

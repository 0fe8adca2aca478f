//! Animation-related types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::frame::AnimationFrame;

/// Playback direction of a tag.
///
/// Only `forward` and `pingpong` change the frame order. Any other string is
/// kept verbatim in [`PlaybackDirection::Unrecognized`] and plays forward.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaybackDirection {
    #[default]
    Forward,
    PingPong,
    Unrecognized(String),
}

impl PlaybackDirection {
    /// Interpret a direction string as written by the source tool.
    pub fn parse(s: &str) -> Self {
        match s {
            "forward" => Self::Forward,
            "pingpong" => Self::PingPong,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Forward => "forward",
            Self::PingPong => "pingpong",
            Self::Unrecognized(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Positions into a base sequence of `len` frames, in playback order.
    ///
    /// Ping-pong appends the reverse interior (`len-2` down to `1`), so the
    /// endpoints are never repeated. Sequences of two or fewer frames have no
    /// interior.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetanim::models::PlaybackDirection;
    ///
    /// assert_eq!(PlaybackDirection::PingPong.playback_order(4), vec![0, 1, 2, 3, 2, 1]);
    /// assert_eq!(PlaybackDirection::PingPong.playback_order(2), vec![0, 1]);
    /// assert_eq!(PlaybackDirection::Forward.playback_order(3), vec![0, 1, 2]);
    /// ```
    pub fn playback_order(&self, len: usize) -> Vec<usize> {
        let forward = 0..len;
        match self {
            Self::PingPong => {
                let interior = (1..len.saturating_sub(1)).rev();
                forward.chain(interior).collect()
            }
            Self::Forward | Self::Unrecognized(_) => forward.collect(),
        }
    }
}

impl From<String> for PlaybackDirection {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PlaybackDirection> for String {
    fn from(d: PlaybackDirection) -> Self {
        d.as_str().to_string()
    }
}

impl fmt::Display for PlaybackDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded animation: the expanded frame sequence of one tag.
///
/// `frames` is never empty for an animation produced by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub frames: Vec<AnimationFrame>,
    #[serde(default)]
    pub direction: PlaybackDirection,
}

impl Animation {
    pub fn new(frames: Vec<AnimationFrame>, direction: PlaybackDirection) -> Self {
        Self { frames, direction }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total duration of one pass through the expanded sequence, in ticks.
    pub fn total_ticks(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.duration_ticks)).sum()
    }

    /// Sheet frame indices in playback order.
    pub fn frame_indices(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.frame_index).collect()
    }

    /// Names of every slice present on any frame, sorted.
    pub fn slice_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.frames.iter().flat_map(|f| f.slices.keys().map(String::as_str)).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Return a horizontally mirrored copy. See [`crate::mirror::mirror_horizontally`].
    pub fn mirrored(&self) -> Self {
        crate::mirror::mirror_horizontally(self)
    }
}

/// All animations decoded from one sheet, keyed by canonical tag name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationSet {
    animations: BTreeMap<String, Animation>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an animation, returning the one it replaced.
    pub fn insert(&mut self, tag: impl Into<String>, animation: Animation) -> Option<Animation> {
        self.animations.insert(tag.into(), animation)
    }

    pub fn get(&self, tag: &str) -> Option<&Animation> {
        self.animations.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.animations.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Animation)> {
        self.animations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the named tag. Returns `None` if the tag does not exist.
    pub fn select(&self, tag: &str) -> Option<AnimationSet> {
        let animation = self.animations.get(tag)?.clone();
        let mut set = AnimationSet::new();
        set.insert(tag, animation);
        Some(set)
    }
}

impl std::ops::Index<&str> for AnimationSet {
    type Output = Animation;

    fn index(&self, tag: &str) -> &Animation {
        &self.animations[tag]
    }
}

impl IntoIterator for AnimationSet {
    type Item = (String, Animation);
    type IntoIter = std::collections::btree_map::IntoIter<String, Animation>;

    fn into_iter(self) -> Self::IntoIter {
        self.animations.into_iter()
    }
}

impl FromIterator<(String, Animation)> for AnimationSet {
    fn from_iter<I: IntoIterator<Item = (String, Animation)>>(iter: I) -> Self {
        Self { animations: iter.into_iter().collect() }
    }
}

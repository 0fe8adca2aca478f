//! Path-tracking field access over a normalized sprite sheet document
//!
//! Every lookup remembers the JSON path it came from so a missing or
//! mistyped field is reported as e.g. `meta.frame_tags[1].from`.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{DecodeError, Result};
use crate::models::Rect;

/// A borrowed value plus the path that led to it.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Field<'a> {
    /// Wrap the document root.
    pub fn root(value: &'a Value) -> Self {
        Self { value, path: String::new() }
    }

    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Required mapping member. Absent keys and explicit `null` are both missing.
    pub fn get(&self, key: &str) -> Result<Field<'a>> {
        let path = self.child_path(key);
        let map = self.value.as_object().ok_or_else(|| DecodeError::invalid(self.path(), "an object"))?;
        match map.get(key) {
            Some(Value::Null) | None => Err(DecodeError::missing(path)),
            Some(value) => Ok(Field { value, path }),
        }
    }

    /// Optional mapping member.
    pub fn get_opt(&self, key: &str) -> Option<Field<'a>> {
        match self.value.as_object()?.get(key)? {
            Value::Null => None,
            value => Some(Field { value, path: self.child_path(key) }),
        }
    }

    /// Elements of a sequence, each tagged with its index.
    pub fn elements(&self) -> Result<Vec<Field<'a>>> {
        let items = self.value.as_array().ok_or_else(|| DecodeError::invalid(self.path(), "an array"))?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(i, value)| Field { value, path: format!("{}[{}]", self.path, i) })
            .collect())
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.value.as_str().ok_or_else(|| DecodeError::invalid(self.path(), "a string"))
    }

    /// Integer value. Whole-valued floats (`16.0`) are accepted.
    pub fn as_i64(&self) -> Result<i64> {
        self.value
            .as_i64()
            .or_else(|| self.value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(|| DecodeError::invalid(self.path(), "an integer"))
    }

    pub fn as_i32(&self) -> Result<i32> {
        i32::try_from(self.as_i64()?)
            .map_err(|_| DecodeError::invalid(self.path(), "a 32-bit integer"))
    }

    pub fn as_u32(&self) -> Result<u32> {
        u32::try_from(self.as_i64()?)
            .map_err(|_| DecodeError::invalid(self.path(), "a non-negative integer"))
    }

    pub fn as_index(&self) -> Result<usize> {
        usize::try_from(self.as_i64()?)
            .map_err(|_| DecodeError::invalid(self.path(), "a non-negative integer"))
    }

    /// Read an `{x, y, w, h}` mapping. Field order does not matter.
    pub fn as_rect(&self) -> Result<Rect> {
        Ok(Rect {
            x: self.get("x")?.as_i32()?,
            y: self.get("y")?.as_i32()?,
            w: self.get("w")?.as_i32()?,
            h: self.get("h")?.as_i32()?,
        })
    }
}

/// Resolve the sheet image named in the document against the document's own
/// directory.
///
/// `assets/hero.json` + `hero.png` gives `assets/hero.png`. A document path
/// with no directory component resolves the image as a bare relative path.
pub fn resolve_image_path(document_path: &Path, image: &str) -> PathBuf {
    match document_path.parent() {
        Some(dir) => dir.join(image),
        None => PathBuf::from(image),
    }
}

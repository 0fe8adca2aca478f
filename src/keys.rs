//! Key normalization for parsed sprite sheet documents
//!
//! The source tool writes camelCase keys (`frameTags`, `spriteSourceSize`).
//! Every mapping key is rewritten to snake_case so later lookups use a single
//! spelling regardless of how the exporter cased them.

use serde_json::{Map, Value};

/// Convert a key to its canonical snake_case form.
///
/// Idempotent: a canonical key maps to itself.
///
/// # Examples
///
/// ```
/// use sheetanim::keys::canonical_key;
///
/// assert_eq!(canonical_key("frameTags"), "frame_tags");
/// assert_eq!(canonical_key("frame_tags"), "frame_tags");
/// assert_eq!(canonical_key("Walk Left"), "walk_left");
/// ```
pub fn canonical_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in key.trim().chars() {
        if c == '-' || c.is_whitespace() {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower_or_digit = false;
        } else if c.is_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    out
}

/// Recursively rewrite every mapping key in `value` to its canonical form.
///
/// Sequences are walked element by element; scalars pass through. Mappings
/// keep document order, so when two keys of the same mapping collide after
/// normalization the one written later in the document wins.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (key, child) in map {
                normalized.insert(canonical_key(&key), normalize_keys(child));
            }
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        scalar => scalar,
    }
}

//! Core geometry types shared by frames, slices and sprites.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixels.
///
/// Origins are signed: slice bounds re-derived for a flipped or mirrored
/// coordinate space may land outside the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Mirror the vertical origin inside a container of height `container_h`.
    ///
    /// Converts between top-down and bottom-up Y: `y' = container_h - y - h`.
    /// Saturates at the `i32` bounds; [`Rect::checked_flip_y`] reports overflow.
    pub fn flip_y(self, container_h: i32) -> Self {
        Self { y: saturate(reflect(container_h, self.y, self.h)), ..self }
    }

    /// Mirror the horizontal origin inside a container of width `container_w`.
    ///
    /// `x' = container_w - x - w`; `y`, `w` and `h` are unchanged. Saturates
    /// like [`Rect::flip_y`].
    pub fn flip_x(self, container_w: i32) -> Self {
        Self { x: saturate(reflect(container_w, self.x, self.w)), ..self }
    }

    /// [`Rect::flip_y`], or `None` when `y'` does not fit in an `i32`.
    pub fn checked_flip_y(self, container_h: i32) -> Option<Self> {
        let y = i32::try_from(reflect(container_h, self.y, self.h)).ok()?;
        Some(Self { y, ..self })
    }

    /// [`Rect::flip_x`], or `None` when `x'` does not fit in an `i32`.
    pub fn checked_flip_x(self, container_w: i32) -> Option<Self> {
        let x = i32::try_from(reflect(container_w, self.x, self.w)).ok()?;
        Some(Self { x, ..self })
    }
}

fn reflect(extent: i32, origin: i32, size: i32) -> i64 {
    i64::from(extent) - i64::from(origin) - i64::from(size)
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        let r = Rect::new(2, 2, 4, 4);
        assert_eq!(r.flip_y(16), Rect::new(2, 10, 4, 4));

        let top = Rect::new(0, 0, 8, 10);
        assert_eq!(top.flip_y(32).y, 22);
    }

    #[test]
    fn test_flip_x() {
        let r = Rect::new(2, 5, 4, 3);
        assert_eq!(r.flip_x(16), Rect::new(10, 5, 4, 3));
    }

    #[test]
    fn test_flips_are_involutions() {
        let r = Rect::new(-3, 7, 12, 5);
        assert_eq!(r.flip_x(16).flip_x(16), r);
        assert_eq!(r.flip_y(24).flip_y(24), r);
    }

    #[test]
    fn test_checked_flips_detect_overflow() {
        let low = Rect::new(0, i32::MIN, 4, 4);
        assert_eq!(low.checked_flip_y(16), None);
        assert_eq!(low.flip_y(16).y, i32::MAX);

        let wide = Rect::new(i32::MIN + 1, 0, 4, 4);
        assert_eq!(wide.checked_flip_x(16), None);
        assert_eq!(Rect::new(2, 5, 4, 3).checked_flip_x(16), Some(Rect::new(10, 5, 4, 3)));
    }

    #[test]
    fn test_checked_flip_allows_large_intermediates() {
        // 1 - MIN overflows on its own; subtracting h brings it back in range
        let r = Rect::new(0, i32::MIN, 0, 2);
        assert_eq!(r.checked_flip_y(1), Some(Rect::new(0, i32::MAX, 0, 2)));
    }

    #[test]
    fn test_rect_serde_shape() {
        let json = serde_json::to_value(Rect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1, "y": 2, "w": 3, "h": 4}));
    }
}

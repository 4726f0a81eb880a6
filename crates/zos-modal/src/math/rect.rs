//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle
    ///
    /// Rectangles with a non-positive extent contain no points.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Component-wise linear interpolation between two rectangles
    pub fn lerp(from: &Rect, to: &Rect, t: f32) -> Rect {
        let pos = from.position().lerp(to.position(), t);
        let size = from.size().as_vec2().lerp(to.size().as_vec2(), t);
        Rect::from_pos_size(pos, Size::new(size.x, size.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
        // Right and bottom edges are exclusive
        assert!(!rect.contains(Vec2::new(110.0, 40.0)));
    }

    #[test]
    fn test_rect_negative_extent_contains_nothing() {
        let rect = Rect::new(100.0, 100.0, -20.0, 50.0);
        assert!(!rect.contains(Vec2::new(90.0, 120.0)));
        assert!(!rect.contains(Vec2::new(100.0, 120.0)));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(100.0, 100.0, 500.0, 400.0);
        assert!((rect.right() - 600.0).abs() < 0.001);
        assert!((rect.bottom() - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_from_pos_size() {
        let rect = Rect::from_pos_size(Vec2::new(100.0, 100.0), Size::new(500.0, 400.0));
        assert_eq!(rect, Rect::new(100.0, 100.0, 500.0, 400.0));
        assert_eq!(rect.position(), Vec2::new(100.0, 100.0));
        assert_eq!(rect.size(), Size::new(500.0, 400.0));
    }

    #[test]
    fn test_rect_lerp() {
        let from = Rect::new(100.0, 100.0, 500.0, 400.0);
        let to = Rect::new(0.0, 0.0, 1920.0, 1080.0);

        let start = Rect::lerp(&from, &to, 0.0);
        assert_eq!(start, from);

        let mid = Rect::lerp(&from, &to, 0.5);
        assert!((mid.x - 50.0).abs() < 0.001);
        assert!((mid.width - 1210.0).abs() < 0.001);
        assert!((mid.height - 740.0).abs() < 0.001);

        let end = Rect::lerp(&from, &to, 1.0);
        assert!((end.width - 1920.0).abs() < 0.001);
    }
}

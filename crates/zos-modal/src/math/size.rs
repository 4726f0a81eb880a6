//! 2D size

use serde::{Deserialize, Serialize};

use super::Vec2;

/// 2D size
///
/// Components are not required to be positive: an unfloored resize can
/// legitimately produce zero or negative extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

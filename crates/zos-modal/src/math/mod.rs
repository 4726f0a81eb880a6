//! Core geometry types for the modal window
//!
//! These types provide basic 2D math for positioning, sizing,
//! and hit testing in viewport (client) coordinates.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;

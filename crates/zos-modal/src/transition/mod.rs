//! Animated geometry transitions
//!
//! Maximize and restore snap the model geometry immediately; the view eases
//! from the old rect to the new one over a short transition.

mod easing;
mod geometry;

pub use easing::ease_in_out;
pub use geometry::GeometryTransition;

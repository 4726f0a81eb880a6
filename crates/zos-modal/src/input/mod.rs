//! Input handling module
//!
//! Pointer routing types, the drag session, and the self-terminating
//! resize gesture.

mod drag;
mod gesture;

pub use drag::{DragAnchor, DragSession, InteractionState};
pub use gesture::{GestureStatus, PointerEvent, ResizeGesture};

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Input was handled by the modal
    Handled,
    /// Input was not handled (belongs to the page or the modal content)
    Unhandled,
}

impl InputResult {
    /// Check if the event was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}

/// Mouse button carried by a pointer-down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl From<u8> for PointerButton {
    /// Map a DOM `MouseEvent.button` value
    fn from(button: u8) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

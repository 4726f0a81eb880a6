//! Drag-to-move session

use crate::host::{NoSelectGuard, SelectionLock};
use crate::math::Vec2;

/// Offset from the modal's top-left corner to the pointer at drag start
pub type DragAnchor = Vec2;

/// Controller interaction state
///
/// The anchor lives inside `Dragging`, so it cannot be read while idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        /// Anchor captured at drag start
        anchor: DragAnchor,
    },
}

impl InteractionState {
    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }

    /// Anchor of the current drag, if any
    pub fn anchor(&self) -> Option<DragAnchor> {
        match self {
            InteractionState::Dragging { anchor } => Some(*anchor),
            InteractionState::Idle => None,
        }
    }
}

/// A live drag gesture
///
/// Holds text selection suppressed for as long as it exists.
#[derive(Debug)]
pub struct DragSession {
    anchor: DragAnchor,
    _no_select: NoSelectGuard,
}

impl DragSession {
    /// Start a drag with the pointer at `pointer` and the modal at `origin`
    pub fn begin(pointer: Vec2, origin: Vec2, selection: &SelectionLock) -> Self {
        Self {
            anchor: pointer - origin,
            _no_select: selection.acquire(),
        }
    }

    /// Anchor captured at start
    #[inline]
    pub fn anchor(&self) -> DragAnchor {
        self.anchor
    }

    /// Position the modal's top-left corner should take for `pointer`
    #[inline]
    pub fn target(&self, pointer: Vec2) -> Vec2 {
        pointer - self.anchor
    }
}

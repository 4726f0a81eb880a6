//! Resize gesture session
//!
//! A resize is not controller state. Pointer-down on the handle creates a
//! [`ResizeGesture`] that observes every pointer event until the matching
//! pointer-up, then reports [`GestureStatus::Finished`] and is dropped,
//! which releases its selection hold.

use tracing::debug;

use crate::host::{ModalHost, NoSelectGuard, SelectionLock};
use crate::math::Vec2;
use crate::modal::ModalWindow;

/// Pointer event delivered to a gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a viewport position
    Move(Vec2),
    /// Pointer released anywhere on the page
    Up,
}

/// Whether a gesture wants further events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureStatus {
    Active,
    Finished,
}

/// Drag-to-resize from the right-edge handle
#[derive(Debug)]
pub struct ResizeGesture {
    moves: u32,
    _no_select: NoSelectGuard,
}

impl ResizeGesture {
    /// Start a resize gesture, suppressing text selection until it ends
    pub fn begin(selection: &SelectionLock) -> Self {
        debug!("resize gesture started");
        Self {
            moves: 0,
            _no_select: selection.acquire(),
        }
    }

    /// Number of move events observed so far
    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Feed one pointer event
    ///
    /// The viewport is read from `host` at each move. Moves while the modal
    /// is maximized or closed are observed but change nothing.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        window: &mut ModalWindow,
        host: &dyn ModalHost,
    ) -> GestureStatus {
        match event {
            PointerEvent::Move(pointer) => {
                self.moves += 1;
                window.resize_toward(pointer, host.viewport_size());
                GestureStatus::Active
            }
            PointerEvent::Up => {
                debug!(moves = self.moves, "resize gesture finished");
                GestureStatus::Finished
            }
        }
    }
}

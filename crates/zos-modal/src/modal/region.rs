//! Hit-test regions of the modal frame

use serde::{Deserialize, Serialize};

/// Region of the modal under a pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalRegion {
    /// Pointer is outside the modal (or the modal is closed)
    None,
    /// Draggable header strip
    Header,
    /// Maximize / restore toggle in the header
    MaximizeButton,
    /// Close button in the header
    CloseButton,
    /// Resize strip along the right edge
    ResizeHandle,
    /// Content area; events belong to the content
    Body,
}

impl ModalRegion {
    /// Check if this region is one of the header controls
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(self, ModalRegion::MaximizeButton | ModalRegion::CloseButton)
    }
}

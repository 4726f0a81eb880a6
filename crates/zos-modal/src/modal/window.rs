//! Modal window state and geometry operations

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{ModalConfig, ModalRegion};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};

/// Window mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
}

/// Whether the modal is mounted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

/// The modal's geometry, mode, and visibility
///
/// Geometry-mutating methods enforce the model invariants themselves:
/// nothing moves while the modal is closed, and nothing but a restore
/// changes a maximized modal.
#[derive(Clone, Debug)]
pub struct ModalWindow {
    /// Header title
    pub title: String,
    /// Top-left position and extent in viewport pixels
    pub(crate) geometry: Rect,
    /// Current mode
    pub(crate) mode: WindowMode,
    /// Open or closed
    pub(crate) visibility: Visibility,
    /// Restore target
    pub(crate) default_geometry: Rect,
}

impl ModalWindow {
    /// Create a closed, normal window at the configured default geometry
    pub fn new(config: &ModalConfig) -> Self {
        Self {
            title: config.title.clone(),
            geometry: config.default_geometry,
            mode: WindowMode::Normal,
            visibility: Visibility::Closed,
            default_geometry: config.default_geometry,
        }
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Current mode
    #[inline]
    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Current visibility
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Check if the modal is open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Check if the modal is maximized
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.mode == WindowMode::Maximized
    }

    /// Geometry may only change while open and not maximized
    #[inline]
    fn is_mutable(&self) -> bool {
        self.is_open() && !self.is_maximized()
    }

    /// Move the top-left corner. No clamping: the modal may leave the viewport.
    ///
    /// Returns false if the move was ignored.
    pub fn move_to(&mut self, position: Vec2) -> bool {
        if !self.is_mutable() {
            return false;
        }
        self.geometry.x = position.x;
        self.geometry.y = position.y;
        trace!(x = position.x, y = position.y, "modal moved");
        true
    }

    /// Resize so the bottom-right corner follows `pointer`
    ///
    /// The extent is capped by the viewport space right of and below the
    /// current position. There is no lower bound: a pointer above or left of
    /// the origin yields a zero or negative extent. Position never changes.
    pub fn resize_toward(&mut self, pointer: Vec2, viewport: Size) -> bool {
        if !self.is_mutable() {
            return false;
        }
        let new_width = pointer.x - self.geometry.x;
        let new_height = pointer.y - self.geometry.y;
        self.geometry.width = (viewport.width - self.geometry.x).min(new_width);
        self.geometry.height = (viewport.height - self.geometry.y).min(new_height);
        trace!(
            width = self.geometry.width,
            height = self.geometry.height,
            "modal resized"
        );
        true
    }

    /// Snap to the full viewport
    pub(crate) fn maximize(&mut self, viewport: Size) {
        self.mode = WindowMode::Maximized;
        self.geometry = Rect::new(0.0, 0.0, viewport.width, viewport.height);
    }

    /// Return to the default geometry (not the pre-maximize geometry)
    pub(crate) fn restore(&mut self) {
        self.mode = WindowMode::Normal;
        self.geometry = self.default_geometry;
    }

    // =========================================================================
    // Frame layout
    // =========================================================================

    /// Header strip rectangle
    pub fn header_rect(&self) -> Rect {
        Rect::new(
            self.geometry.x,
            self.geometry.y,
            self.geometry.width,
            FRAME_STYLE.header_height,
        )
    }

    /// Close button rectangle (rightmost header control)
    pub fn close_button_rect(&self) -> Rect {
        let x = self.geometry.right() - FRAME_STYLE.header_padding_x - FRAME_STYLE.button_size;
        let y = self.geometry.y + (FRAME_STYLE.header_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Maximize/restore button rectangle (left of the close button)
    pub fn maximize_button_rect(&self) -> Rect {
        let close = self.close_button_rect();
        Rect::new(
            close.x - FRAME_STYLE.button_spacing - FRAME_STYLE.button_size,
            close.y,
            FRAME_STYLE.button_size,
            FRAME_STYLE.button_size,
        )
    }

    /// Resize strip along the right edge, or None while maximized
    pub fn resize_handle_rect(&self) -> Option<Rect> {
        if self.is_maximized() {
            return None;
        }
        Some(Rect::new(
            self.geometry.right() - FRAME_STYLE.resize_handle_width,
            self.geometry.y,
            FRAME_STYLE.resize_handle_width,
            self.geometry.height,
        ))
    }

    /// Find the region under a point
    pub fn region_at(&self, point: Vec2) -> ModalRegion {
        if !self.is_open() || !self.geometry.contains(point) {
            return ModalRegion::None;
        }
        if self.close_button_rect().contains(point) {
            return ModalRegion::CloseButton;
        }
        if self.maximize_button_rect().contains(point) {
            return ModalRegion::MaximizeButton;
        }
        if let Some(handle) = self.resize_handle_rect() {
            if handle.contains(point) {
                return ModalRegion::ResizeHandle;
            }
        }
        if self.header_rect().contains(point) {
            return ModalRegion::Header;
        }
        ModalRegion::Body
    }
}

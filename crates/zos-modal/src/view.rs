//! Renderable snapshot of the modal
//!
//! The renderer (React or a canvas) draws whatever [`ModalView`] says and
//! never reads controller state directly.

use serde::Serialize;

use crate::error::ModalResult;
use crate::math::Rect;
use crate::modal::WindowMode;

/// Glyph on the maximize button while the modal is normal
pub const MAXIMIZE_GLYPH: &str = "🗖";

/// Glyph on the maximize button while the modal is maximized
pub const RESTORE_GLYPH: &str = "🗗";

/// Pointer cursor over the modal frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Grabbing,
}

/// Everything needed to render the modal for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    /// Whether the modal is mounted at all
    pub visible: bool,
    pub title: String,
    /// Rect to draw (eased during maximize/restore)
    pub rect: Rect,
    pub mode: WindowMode,
    pub dragging: bool,
    pub cursor: Cursor,
    /// Document text selection is suppressed by a live gesture
    pub select_disabled: bool,
    /// The right-edge resize strip is mounted
    pub show_resize_handle: bool,
    pub maximize_glyph: &'static str,
    /// A maximize/restore animation is still running
    pub animating: bool,
}

impl ModalView {
    /// Serialize for a JavaScript renderer
    pub fn to_json(&self) -> ModalResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_json_shape() {
        let view = ModalView {
            visible: true,
            title: "Interactive Modal".to_string(),
            rect: Rect::new(100.0, 100.0, 500.0, 400.0),
            mode: WindowMode::Normal,
            dragging: true,
            cursor: Cursor::Grabbing,
            select_disabled: true,
            show_resize_handle: true,
            maximize_glyph: MAXIMIZE_GLYPH,
            animating: false,
        };

        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(json["visible"], true);
        assert_eq!(json["mode"], "normal");
        assert_eq!(json["cursor"], "grabbing");
        assert_eq!(json["selectDisabled"], true);
        assert_eq!(json["showResizeHandle"], true);
        assert_eq!(json["maximizeGlyph"], "🗖");
        assert_eq!(json["rect"]["width"], 500.0);
    }
}

//! Host surface abstraction
//!
//! The controller never touches the browser directly. Everything it needs
//! from the page (viewport extent and the document-wide text selection
//! flag) goes through [`ModalHost`], so the state machine stays pure Rust
//! and testable without a browser.

mod selection;

pub use selection::{NoSelectGuard, SelectionLock};

use std::cell::Cell;

use crate::math::Size;

/// The page hosting the modal
pub trait ModalHost {
    /// Current viewport extent, read fresh on every call
    fn viewport_size(&self) -> Size;

    /// Enable or disable text selection for the whole document
    fn set_text_selection(&self, enabled: bool);
}

/// In-memory host with an adjustable viewport
///
/// Used for headless embedding and tests. The selection flag it records
/// is observable through [`FixedHost::selection_enabled`].
#[derive(Debug)]
pub struct FixedHost {
    viewport: Cell<Size>,
    selection_enabled: Cell<bool>,
    selection_toggles: Cell<u32>,
}

impl FixedHost {
    /// Create a host with the given viewport extent
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Cell::new(Size::new(width, height)),
            selection_enabled: Cell::new(true),
            selection_toggles: Cell::new(0),
        }
    }

    /// Change the viewport extent (simulates a browser window resize)
    pub fn set_viewport_size(&self, width: f32, height: f32) {
        self.viewport.set(Size::new(width, height));
    }

    /// Whether document text selection is currently enabled
    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled.get()
    }

    /// Number of times the selection flag was written
    pub fn selection_toggles(&self) -> u32 {
        self.selection_toggles.get()
    }
}

impl Default for FixedHost {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl ModalHost for FixedHost {
    fn viewport_size(&self) -> Size {
        self.viewport.get()
    }

    fn set_text_selection(&self, enabled: bool) {
        self.selection_enabled.set(enabled);
        self.selection_toggles.set(self.selection_toggles.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_host_viewport_is_read_fresh() {
        let host = FixedHost::new(800.0, 600.0);
        assert_eq!(host.viewport_size(), Size::new(800.0, 600.0));

        host.set_viewport_size(1024.0, 768.0);
        assert_eq!(host.viewport_size(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_fixed_host_selection_flag() {
        let host = FixedHost::default();
        assert!(host.selection_enabled());

        host.set_text_selection(false);
        assert!(!host.selection_enabled());
        host.set_text_selection(true);
        assert!(host.selection_enabled());
        assert_eq!(host.selection_toggles(), 2);
    }
}

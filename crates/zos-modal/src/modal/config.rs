//! Modal configuration

use serde::{Deserialize, Serialize};

use crate::error::{ModalError, ModalResult};
use crate::math::Rect;

/// Geometry the modal starts at and returns to on restore
pub const DEFAULT_GEOMETRY: Rect = Rect::new(100.0, 100.0, 500.0, 400.0);

/// Title shown in the header
pub const DEFAULT_TITLE: &str = "Interactive Modal";

/// Duration of the maximize/restore animation in milliseconds
pub const DEFAULT_TRANSITION_MS: f64 = 200.0;

/// Configuration for a modal controller
///
/// Every field is optional when loading from JSON; missing fields take
/// their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Header title
    pub title: String,
    /// Initial geometry, also the target of every restore
    pub default_geometry: Rect,
    /// Maximize/restore animation length (0 disables animation)
    pub transition_ms: f64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            default_geometry: DEFAULT_GEOMETRY,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl ModalConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> ModalResult<Self> {
        let config: ModalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> ModalResult<()> {
        let g = &self.default_geometry;
        if ![g.x, g.y, g.width, g.height].iter().all(|v| v.is_finite()) {
            return Err(ModalError::InvalidConfig {
                field: "defaultGeometry",
                reason: "values must be finite",
            });
        }
        if g.width < 0.0 || g.height < 0.0 {
            return Err(ModalError::InvalidConfig {
                field: "defaultGeometry",
                reason: "size must not be negative",
            });
        }
        if !self.transition_ms.is_finite() || self.transition_ms < 0.0 {
            return Err(ModalError::InvalidConfig {
                field: "transitionMs",
                reason: "must be a finite, non-negative duration",
            });
        }
        Ok(())
    }
}

//! Modal window model
//!
//! Geometry, mode, and visibility for the single modal instance, plus
//! configuration and hit testing.

mod config;
mod region;
mod window;

pub use config::{ModalConfig, DEFAULT_GEOMETRY, DEFAULT_TITLE, DEFAULT_TRANSITION_MS};
pub use region::ModalRegion;
pub use window::{ModalWindow, Visibility, WindowMode};

//! Modal Window Controller for Zero OS
//!
//! This crate drives a single draggable, resizable, maximizable modal
//! window hosted in a browser page:
//! - Drag-to-move from the header
//! - Drag-to-resize from the right edge, capped by the viewport
//! - Maximize to the full viewport and restore to the default geometry
//! - Scoped suppression of document text selection during gestures
//! - Eased maximize/restore animation for the renderer
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`, frame style)
//! - [`modal`]: Window model, configuration, and hit testing
//! - [`input`]: Drag session and the self-terminating resize gesture
//! - [`host`]: Host page abstraction and the selection lock
//! - [`transition`]: Easing and geometry animation
//! - [`view`]: Renderable snapshot handed to the renderer
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use zos_modal::{FixedHost, ModalController, Rect};
//!
//! let host = Rc::new(FixedHost::new(1920.0, 1080.0));
//! let mut modal = ModalController::new(host);
//! modal.open();
//!
//! // Press on the header at (150, 120) and drag to (250, 150)
//! modal.handle_pointer_down(150.0, 120.0, 0, 0.0);
//! modal.handle_pointer_move(250.0, 150.0);
//! modal.handle_pointer_up();
//!
//! assert_eq!(modal.geometry(), Rect::new(200.0, 130.0, 500.0, 400.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Animations take the current time as an argument
//! 3. **Scoped Side Effects**: Global page state is only touched through guards

pub mod host;
pub mod input;
pub mod math;
pub mod modal;
pub mod transition;
pub mod view;

mod controller;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use controller::ModalController;
pub use error::{ModalError, ModalResult};
pub use host::{FixedHost, ModalHost, NoSelectGuard, SelectionLock};
pub use input::{DragAnchor, InputResult, InteractionState, PointerButton};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use modal::{ModalConfig, ModalRegion, ModalWindow, Visibility, WindowMode};
pub use view::{Cursor, ModalView};

/// Default maximize/restore animation length in milliseconds
pub use modal::DEFAULT_TRANSITION_MS;

//! Modal geometry controller
//!
//! The controller owns the modal's geometry, mode, and visibility together
//! with the live gesture sessions, and mutates them in response to pointer
//! events. All handlers are synchronous and total.
//!
//! ## State machine
//!
//! ```text
//!                 begin_drag                 toggle_maximize
//!   Normal×Idle ─────────────▶ Normal×Dragging ─────────────▶ Maximized×Idle
//!        ▲  ◀──────────────────────┘  end_drag                      │
//!        └──────────────────────────────────────────────────────────┘
//!                     toggle_maximize (restore to default geometry)
//! ```
//!
//! Resizing is not a controller state: it runs in a [`ResizeGesture`]
//! alongside whatever the interaction state is.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::ModalResult;
use crate::host::{ModalHost, SelectionLock};
use crate::input::{
    DragSession, GestureStatus, InputResult, InteractionState, PointerButton, PointerEvent,
    ResizeGesture,
};
use crate::math::{Rect, Vec2};
use crate::modal::{ModalConfig, ModalRegion, ModalWindow, Visibility, WindowMode};
use crate::transition::GeometryTransition;
use crate::view::{Cursor, ModalView, MAXIMIZE_GLYPH, RESTORE_GLYPH};

/// Controller for a single draggable, resizable, maximizable modal
pub struct ModalController {
    window: ModalWindow,
    host: Rc<dyn ModalHost>,
    selection: SelectionLock,
    /// Present exactly while dragging
    drag: Option<DragSession>,
    /// Present exactly while a resize gesture is live
    resize: Option<ResizeGesture>,
    transition: Option<GeometryTransition>,
    transition_ms: f64,
}

impl ModalController {
    /// Create a closed controller with the default configuration
    pub fn new(host: Rc<dyn ModalHost>) -> Self {
        Self::from_valid_config(host, ModalConfig::default())
    }

    /// Create a closed controller from a configuration
    pub fn with_config(host: Rc<dyn ModalHost>, config: ModalConfig) -> ModalResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(host, config))
    }

    fn from_valid_config(host: Rc<dyn ModalHost>, config: ModalConfig) -> Self {
        Self {
            window: ModalWindow::new(&config),
            selection: SelectionLock::new(Rc::clone(&host)),
            host,
            drag: None,
            resize: None,
            transition: None,
            transition_ms: config.transition_ms,
        }
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// The modal window model
    pub fn window(&self) -> &ModalWindow {
        &self.window
    }

    /// Current geometry
    pub fn geometry(&self) -> Rect {
        self.window.geometry()
    }

    /// Current mode
    pub fn mode(&self) -> WindowMode {
        self.window.mode()
    }

    /// Current visibility
    pub fn visibility(&self) -> Visibility {
        self.window.visibility()
    }

    /// Check if the modal is open
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Idle or dragging (with the drag anchor)
    pub fn interaction_state(&self) -> InteractionState {
        match &self.drag {
            Some(session) => InteractionState::Dragging {
                anchor: session.anchor(),
            },
            None => InteractionState::Idle,
        }
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Check if a resize gesture is live
    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Check if any gesture is holding text selection off
    pub fn is_selection_suppressed(&self) -> bool {
        self.selection.is_suppressed()
    }

    /// Region of the modal under a viewport point
    pub fn region_at(&self, x: f32, y: f32) -> ModalRegion {
        self.window.region_at(Vec2::new(x, y))
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Show the modal. Idempotent.
    pub fn open(&mut self) {
        if !self.window.is_open() {
            debug!("modal opened");
        }
        self.window.visibility = Visibility::Open;
    }

    /// Hide the modal, keeping geometry and mode for the next open
    ///
    /// Closing unmounts the frame, so live gestures end here and release
    /// their selection holds.
    pub fn close(&mut self) {
        if self.window.is_open() {
            debug!("modal closed");
        }
        self.window.visibility = Visibility::Closed;
        self.drag = None;
        self.resize = None;
        self.transition = None;
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Start dragging with the pointer at `pointer`
    ///
    /// Requires the modal to be open. Allowed while maximized; the moves are
    /// then ignored by [`ModalController::update_drag`].
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if !self.window.is_open() {
            return false;
        }
        let session = DragSession::begin(pointer, self.window.geometry().position(), &self.selection);
        debug!(
            anchor_x = session.anchor().x,
            anchor_y = session.anchor().y,
            "drag started"
        );
        self.drag = Some(session);
        true
    }

    /// Move the modal so the anchor stays under the pointer
    ///
    /// No-op unless dragging and not maximized. Returns true if the
    /// geometry changed.
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        let target = match &self.drag {
            Some(session) => session.target(pointer),
            None => return false,
        };
        self.window.move_to(target)
    }

    /// Stop dragging. Idempotent.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            debug!("drag ended");
        }
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Start a resize gesture from the right-edge handle
    ///
    /// No-op unless open and not maximized.
    pub fn begin_resize(&mut self) -> bool {
        if !self.window.is_open() || self.window.is_maximized() {
            return false;
        }
        self.resize = Some(ResizeGesture::begin(&self.selection));
        true
    }

    /// Deliver a pointer event to the live resize gesture, dropping it once
    /// it reports completion
    fn dispatch_resize(&mut self, event: PointerEvent) -> bool {
        let gesture = match self.resize.as_mut() {
            Some(gesture) => gesture,
            None => return false,
        };
        if gesture.handle(event, &mut self.window, &*self.host) == GestureStatus::Finished {
            self.resize = None;
        }
        true
    }

    // =========================================================================
    // Maximize / restore
    // =========================================================================

    /// Toggle between normal and maximized
    ///
    /// Maximize snaps to the viewport as read right now. Restore returns to
    /// the default geometry, not the geometry held before maximizing. Either
    /// way the drag ends. A held resize gesture stays live until its
    /// pointer-up; its moves change nothing while maximized. The animation
    /// starts from the rect currently on screen. No-op while closed.
    pub fn toggle_maximize(&mut self, now_ms: f64) {
        if !self.window.is_open() {
            return;
        }
        let from = match &self.transition {
            Some(transition) if !transition.is_complete(now_ms) => transition.current(now_ms),
            _ => self.window.geometry(),
        };
        if self.window.is_maximized() {
            self.window.restore();
            debug!("modal restored");
        } else {
            let viewport = self.host.viewport_size();
            self.window.maximize(viewport);
            debug!(
                width = viewport.width,
                height = viewport.height,
                "modal maximized"
            );
        }
        self.drag = None;

        self.transition = if self.transition_ms > 0.0 {
            Some(GeometryTransition::new(
                from,
                self.window.geometry(),
                now_ms,
                self.transition_ms,
            ))
        } else {
            None
        };
    }

    // =========================================================================
    // Pointer routing
    // =========================================================================

    /// Handle pointer down at viewport coordinates
    ///
    /// `button` is the DOM `MouseEvent.button` value. Only the primary
    /// button interacts with the frame.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8, now_ms: f64) -> InputResult {
        if PointerButton::from(button) != PointerButton::Primary {
            return InputResult::Unhandled;
        }
        let pointer = Vec2::new(x, y);
        match self.window.region_at(pointer) {
            ModalRegion::CloseButton => {
                self.close();
                InputResult::Handled
            }
            ModalRegion::MaximizeButton => {
                self.toggle_maximize(now_ms);
                InputResult::Handled
            }
            ModalRegion::ResizeHandle => {
                self.begin_resize();
                InputResult::Handled
            }
            ModalRegion::Header => {
                self.begin_drag(pointer);
                InputResult::Handled
            }
            ModalRegion::Body | ModalRegion::None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move anywhere on the page
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);
        let dragging = self.drag.is_some();
        if dragging {
            self.update_drag(pointer);
        }
        let resizing = self.dispatch_resize(PointerEvent::Move(pointer));

        if dragging || resizing {
            trace!(x, y, "pointer move consumed");
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer up anywhere on the page
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let dragging = self.drag.is_some();
        self.end_drag();
        let resizing = self.dispatch_resize(PointerEvent::Up);

        if dragging || resizing {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Advance animations, returns true while one is still running
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(transition) = &self.transition {
            if transition.is_complete(now_ms) {
                self.transition = None;
            }
        }
        self.transition.is_some()
    }

    /// Snapshot for the renderer at `now_ms`
    pub fn view(&self, now_ms: f64) -> ModalView {
        let animating = self
            .transition
            .as_ref()
            .is_some_and(|t| !t.is_complete(now_ms));
        let rect = match &self.transition {
            Some(transition) if animating => transition.current(now_ms),
            _ => self.window.geometry(),
        };
        let maximized = self.window.is_maximized();

        ModalView {
            visible: self.window.is_open(),
            title: self.window.title.clone(),
            rect,
            mode: self.window.mode(),
            dragging: self.is_dragging(),
            cursor: if self.is_dragging() {
                Cursor::Grabbing
            } else {
                Cursor::Default
            },
            select_disabled: self.is_selection_suppressed(),
            show_resize_handle: !maximized,
            maximize_glyph: if maximized { RESTORE_GLYPH } else { MAXIMIZE_GLYPH },
            animating,
        }
    }
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("window", &self.window)
            .field("interaction", &self.interaction_state())
            .field("resizing", &self.is_resizing())
            .field("selection", &self.selection)
            .finish()
    }
}

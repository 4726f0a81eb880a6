//! Modal Gesture Integration Tests
//!
//! End-to-end pointer sequences against the public controller API.

use std::rc::Rc;

use proptest::prelude::*;
use zos_modal::{
    FixedHost, InputResult, InteractionState, ModalController, ModalRegion, Rect, Vec2,
    WindowMode,
};

fn open_modal(width: f32, height: f32) -> (Rc<FixedHost>, ModalController) {
    let host = Rc::new(FixedHost::new(width, height));
    let mut modal = ModalController::new(host.clone());
    modal.open();
    (host, modal)
}

/// Drag from (150,150) to (250,180) moves the default modal to (200,130).
#[test]
fn test_drag_scenario_from_default_geometry() {
    let (_host, mut modal) = open_modal(1920.0, 1080.0);

    modal.begin_drag(Vec2::new(150.0, 150.0));
    assert_eq!(modal.interaction_state().anchor(), Some(Vec2::new(50.0, 50.0)));

    modal.update_drag(Vec2::new(250.0, 180.0));
    modal.end_drag();

    assert_eq!(modal.geometry(), Rect::new(200.0, 130.0, 500.0, 400.0));
}

/// Dragging, maximizing, then restoring lands on the default, not the dragged spot.
#[test]
fn test_maximize_restore_is_not_memoized() {
    let (_host, mut modal) = open_modal(1920.0, 1080.0);

    modal.handle_pointer_down(150.0, 120.0, 0, 0.0);
    modal.handle_pointer_move(620.0, 480.0);
    modal.handle_pointer_up();
    assert_ne!(modal.geometry(), Rect::new(100.0, 100.0, 500.0, 400.0));

    modal.toggle_maximize(0.0);
    assert_eq!(modal.geometry(), Rect::new(0.0, 0.0, 1920.0, 1080.0));

    modal.toggle_maximize(0.0);
    assert_eq!(modal.mode(), WindowMode::Normal);
    assert_eq!(modal.geometry(), Rect::new(100.0, 100.0, 500.0, 400.0));
}

/// Resizing past the origin produces zero/negative extents without panicking.
#[test]
fn test_resize_above_left_of_origin() {
    let (host, mut modal) = open_modal(1920.0, 1080.0);

    assert_eq!(modal.region_at(595.0, 300.0), ModalRegion::ResizeHandle);
    assert_eq!(
        modal.handle_pointer_down(595.0, 300.0, 0, 0.0),
        InputResult::Handled
    );
    modal.handle_pointer_move(20.0, 30.0);

    let g = modal.geometry();
    assert_eq!(g.position(), Vec2::new(100.0, 100.0));
    assert!((g.width + 80.0).abs() < 0.001);
    assert!((g.height + 70.0).abs() < 0.001);

    modal.handle_pointer_up();
    assert!(host.selection_enabled());
}

/// The resize cap follows the viewport as it is at each move.
#[test]
fn test_resize_tracks_viewport_changes() {
    let (host, mut modal) = open_modal(1920.0, 1080.0);

    modal.handle_pointer_down(595.0, 300.0, 0, 0.0);
    modal.handle_pointer_move(4000.0, 4000.0);
    assert_eq!(modal.geometry(), Rect::new(100.0, 100.0, 1820.0, 980.0));

    host.set_viewport_size(800.0, 600.0);
    modal.handle_pointer_move(4000.0, 4000.0);
    assert_eq!(modal.geometry(), Rect::new(100.0, 100.0, 700.0, 500.0));
    modal.handle_pointer_up();
}

/// The resize gesture observes pointer-up anywhere, not just on the handle.
#[test]
fn test_resize_ends_on_any_pointer_up() {
    let (_host, mut modal) = open_modal(1920.0, 1080.0);

    modal.handle_pointer_down(595.0, 300.0, 0, 0.0);
    // Pointer leaves the modal entirely
    modal.handle_pointer_move(1500.0, 900.0);
    assert!(modal.is_resizing());
    modal.handle_pointer_up();
    assert!(!modal.is_resizing());
}

/// Reopening shows the modal where it was closed.
#[test]
fn test_reopen_preserves_layout() {
    let (_host, mut modal) = open_modal(1920.0, 1080.0);
    modal.begin_drag(Vec2::new(150.0, 150.0));
    modal.update_drag(Vec2::new(160.0, 170.0));
    modal.end_drag();

    modal.close();
    assert!(!modal.view(0.0).visible);
    modal.open();
    assert_eq!(modal.geometry(), Rect::new(110.0, 120.0, 500.0, 400.0));
}

#[derive(Clone, Debug)]
enum Step {
    Down(f32, f32),
    Move(f32, f32),
    Up,
    BeginDrag(f32, f32),
    BeginResize,
}

fn step() -> impl Strategy<Value = Step> {
    let coord = -500.0f32..3000.0;
    prop_oneof![
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Step::Down(x, y)),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Step::Move(x, y)),
        Just(Step::Up),
        (coord.clone(), coord).prop_map(|(x, y)| Step::BeginDrag(x, y)),
        Just(Step::BeginResize),
    ]
}

fn apply(modal: &mut ModalController, step: &Step) {
    match *step {
        Step::Down(x, y) => {
            // Keep the modal in its current mode: skip the header controls
            if !modal.region_at(x, y).is_button() {
                modal.handle_pointer_down(x, y, 0, 0.0);
            }
        }
        Step::Move(x, y) => {
            modal.handle_pointer_move(x, y);
        }
        Step::Up => {
            modal.handle_pointer_up();
        }
        Step::BeginDrag(x, y) => {
            modal.begin_drag(Vec2::new(x, y));
        }
        Step::BeginResize => {
            modal.begin_resize();
        }
    }
}

proptest! {
    /// While maximized, no drag or resize sequence changes the geometry
    #[test]
    fn maximized_geometry_is_frozen(steps in prop::collection::vec(step(), 0..40)) {
        let (_host, mut modal) = open_modal(1600.0, 900.0);
        modal.toggle_maximize(0.0);

        for s in &steps {
            apply(&mut modal, s);
            prop_assert_eq!(modal.geometry(), Rect::new(0.0, 0.0, 1600.0, 900.0));
        }
    }

    /// Every drag update puts the corner at pointer minus anchor, unclamped
    #[test]
    fn drag_position_is_exact(
        down in (100.0f32..600.0, 100.0f32..146.0),
        moves in prop::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 1..20),
    ) {
        let (_host, mut modal) = open_modal(1920.0, 1080.0);
        modal.begin_drag(Vec2::new(down.0, down.1));
        let anchor = match modal.interaction_state() {
            InteractionState::Dragging { anchor } => anchor,
            InteractionState::Idle => return Err(TestCaseError::fail("drag did not start")),
        };
        prop_assert_eq!(anchor, Vec2::new(down.0 - 100.0, down.1 - 100.0));

        for (x, y) in moves {
            modal.update_drag(Vec2::new(x, y));
            prop_assert_eq!(modal.geometry().position(), Vec2::new(x, y) - anchor);
        }
    }

    /// Resize never moves the origin and never exceeds the viewport
    #[test]
    fn resize_keeps_origin(moves in prop::collection::vec((-500.0f32..3000.0, -500.0f32..3000.0), 1..20)) {
        let (_host, mut modal) = open_modal(1280.0, 720.0);
        modal.begin_resize();

        for (x, y) in moves {
            modal.handle_pointer_move(x, y);
            let g = modal.geometry();
            prop_assert_eq!(g.position(), Vec2::new(100.0, 100.0));
            prop_assert!(g.right() <= 1280.0 + 0.001);
            prop_assert!(g.bottom() <= 720.0 + 0.001);
        }
    }

    /// Text selection always comes back once gestures end or the modal goes away
    #[test]
    fn selection_restored_after_any_sequence(
        steps in prop::collection::vec(step(), 0..40),
        teardown in 0u8..3,
    ) {
        let (host, mut modal) = open_modal(1920.0, 1080.0);
        for s in &steps {
            apply(&mut modal, s);
            prop_assert_eq!(host.selection_enabled(), !modal.is_selection_suppressed());
        }

        match teardown {
            0 => {
                modal.handle_pointer_up();
            }
            1 => modal.close(),
            _ => drop(modal),
        }
        prop_assert!(host.selection_enabled());
    }
}

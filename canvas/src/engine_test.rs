#![allow(clippy::float_cmp)]

use super::*;
use crate::config::CanvasBounds;
use crate::construction::ConstructionKind;
use crate::hinge::HingeStatus;

// =============================================================
// Helpers
// =============================================================

fn core(module: ModuleId) -> DiagramCore {
    let mut core = DiagramCore::new(module);
    core.set_viewport(Some(Viewport::default()));
    core
}

fn has_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn drag_vertex(core: &mut DiagramCore, v: Vertex, to: Point) {
    core.begin_drag(DragTarget::Vertex(v));
    core.update_drag(to);
    core.end_drag();
}

fn draw_all(core: &mut DiagramCore) {
    for v in Vertex::ALL {
        core.click_vertex(v);
        core.click_target(v);
    }
}

// =============================================================
// Module activation and mode
// =============================================================

#[test]
fn new_core_starts_with_initial_triangle() {
    let core = DiagramCore::new(ModuleId::Types);
    assert_eq!(core.triangle(), Triangle::new(INITIAL_A, INITIAL_B, INITIAL_C));
    assert_eq!(core.mode(), Mode::Move);
    assert!(core.construction().is_none());
    assert_eq!(core.input(), InputState::Idle);
}

#[test]
fn construction_modules_start_in_draw() {
    let core = DiagramCore::new(ModuleId::Orthocenter);
    assert_eq!(core.mode(), Mode::Draw);
    assert_eq!(core.construction().map(GuidedConstruction::kind), Some(ConstructionKind::Altitudes));
}

#[test]
fn set_module_resets_mode_and_progress() {
    let mut core = core(ModuleId::Centroid);
    core.click_vertex(Vertex::A);
    core.click_target(Vertex::A);
    core.set_mode(Mode::Move);

    let actions = core.set_module(ModuleId::Circumcircle);
    assert_eq!(core.mode(), Mode::Draw);
    assert_eq!(core.progress(), Some(ConstructionProgress::default()));
    assert!(actions.contains(&Action::ModuleChanged { module: ModuleId::Circumcircle }));
    assert!(has_render(&actions));
}

#[test]
fn reactivating_same_module_still_resets() {
    let mut core = core(ModuleId::Incircle);
    core.click_vertex(Vertex::B);
    core.set_module(ModuleId::Incircle);
    assert_eq!(core.progress(), Some(ConstructionProgress::default()));
}

#[test]
fn set_module_keeps_triangle() {
    let mut core = core(ModuleId::Types);
    drag_vertex(&mut core, Vertex::A, Point::new(150.0, 90.0));
    core.set_module(ModuleId::Centroid);
    assert_eq!(core.triangle().a, Point::new(150.0, 90.0));
}

#[test]
fn set_module_ends_drag() {
    let mut core = core(ModuleId::Types);
    core.begin_drag(DragTarget::Vertex(Vertex::A));
    core.set_module(ModuleId::MiddleLine);
    assert_eq!(core.input(), InputState::Idle);
}

#[test]
fn mode_toggle_only_in_switchable_modules() {
    let mut core = core(ModuleId::Types);
    assert!(core.set_mode(Mode::Draw).is_empty());
    assert_eq!(core.mode(), Mode::Move);

    core.set_module(ModuleId::Centroid);
    let actions = core.set_mode(Mode::Move);
    assert!(actions.contains(&Action::ModeChanged { mode: Mode::Move }));
    assert_eq!(core.mode(), Mode::Move);
}

#[test]
fn setting_current_mode_is_noop() {
    let mut core = core(ModuleId::Centroid);
    assert!(core.set_mode(Mode::Draw).is_empty());
}

#[test]
fn entering_existence_resets_hinge() {
    let mut core = core(ModuleId::Existence);
    core.set_arm_length(Arm::Left, 190.0);
    core.set_module(ModuleId::Types);
    let actions = core.set_module(ModuleId::Existence);
    assert_eq!(core.hinge(), &Hinge::default());
    assert!(actions.iter().any(|a| matches!(a, Action::HingeChanged { .. })));
}

// =============================================================
// Vertex drag
// =============================================================

#[test]
fn drag_moves_vertex() {
    let mut core = core(ModuleId::Types);
    core.begin_drag(DragTarget::Vertex(Vertex::B));
    let actions = core.update_drag(Point::new(120.0, 280.0));
    assert_eq!(core.triangle().b, Point::new(120.0, 280.0));
    assert!(matches!(actions[0], Action::TriangleChanged { .. }));
    assert!(has_render(&actions));
}

#[test]
fn drag_clamps_to_canvas() {
    let mut core = core(ModuleId::Types);
    drag_vertex(&mut core, Vertex::C, Point::new(500.0, -20.0));
    assert_eq!(core.triangle().c, Point::new(390.0, 10.0));
}

#[test]
fn drag_respects_configured_bounds() {
    let config = DiagramConfig { bounds: CanvasBounds { min: 50.0, max: 350.0 }, ..DiagramConfig::default() };
    let mut core = DiagramCore::with_config(ModuleId::Types, config);
    drag_vertex(&mut core, Vertex::A, Point::new(0.0, 400.0));
    assert_eq!(core.triangle().a, Point::new(50.0, 350.0));
}

#[test]
fn update_without_drag_is_noop() {
    let mut core = core(ModuleId::Types);
    let before = core.triangle();
    assert!(core.update_drag(Point::new(50.0, 50.0)).is_empty());
    assert_eq!(core.triangle(), before);
}

#[test]
fn update_after_end_is_noop() {
    let mut core = core(ModuleId::Types);
    drag_vertex(&mut core, Vertex::A, Point::new(100.0, 100.0));
    assert!(core.update_drag(Point::new(200.0, 200.0)).is_empty());
    assert_eq!(core.triangle().a, Point::new(100.0, 100.0));
}

#[test]
fn new_drag_replaces_previous() {
    let mut core = core(ModuleId::Types);
    core.begin_drag(DragTarget::Vertex(Vertex::A));
    core.begin_drag(DragTarget::Vertex(Vertex::C));
    core.update_drag(Point::new(280.0, 250.0));
    assert_eq!(core.triangle().a, INITIAL_A);
    assert_eq!(core.triangle().c, Point::new(280.0, 250.0));
}

#[test]
fn draw_mode_does_not_move_vertices() {
    let mut core = core(ModuleId::Centroid);
    drag_vertex(&mut core, Vertex::A, Point::new(10.0, 10.0));
    assert_eq!(core.triangle().a, INITIAL_A);
}

#[test]
fn non_finite_drag_is_ignored() {
    let mut core = core(ModuleId::Types);
    core.begin_drag(DragTarget::Vertex(Vertex::A));
    assert!(core.update_drag(Point::new(f64::NAN, 3.0)).is_empty());
    assert_eq!(core.triangle().a, INITIAL_A);
}

#[test]
fn cancel_restores_vertex() {
    let mut core = core(ModuleId::Types);
    core.begin_drag(DragTarget::Vertex(Vertex::B));
    core.update_drag(Point::new(300.0, 100.0));
    core.cancel_drag();
    assert_eq!(core.triangle().b, INITIAL_B);
    assert_eq!(core.input(), InputState::Idle);
}

#[test]
fn vertex_drag_refused_in_hinge_module() {
    let mut core = core(ModuleId::Existence);
    core.begin_drag(DragTarget::Vertex(Vertex::A));
    assert_eq!(core.input(), InputState::Idle);
}

#[test]
fn metrics_follow_every_drag_frame() {
    let mut core = core(ModuleId::Types);
    core.begin_drag(DragTarget::Vertex(Vertex::A));
    core.update_drag(Point::new(200.0, 150.0));
    let first = core.metrics().centroid;
    core.update_drag(Point::new(200.0, 90.0));
    let second = core.metrics().centroid;
    assert_ne!(first, second);
    assert!((second.y - (90.0 + 300.0 + 300.0) / 3.0).abs() < 1e-9);
}

// =============================================================
// Pointer events
// =============================================================

#[test]
fn pointer_without_viewport_is_ignored() {
    let mut core = DiagramCore::new(ModuleId::Types);
    assert!(core.pointer_down(INITIAL_A).is_empty());
    assert_eq!(core.input(), InputState::Idle);

    core.begin_drag(DragTarget::Vertex(Vertex::A));
    assert!(core.pointer_move(Point::new(50.0, 50.0)).is_empty());
    assert_eq!(core.triangle().a, INITIAL_A);
}

#[test]
fn pointer_with_singular_viewport_is_ignored() {
    let mut core = DiagramCore::new(ModuleId::Types);
    core.set_viewport(Some(Viewport::scale_translate(0.0, 0.0, 0.0)));
    assert!(core.pointer_down(INITIAL_A).is_empty());
}

#[test]
fn pointer_drag_maps_through_viewport() {
    let mut core = DiagramCore::new(ModuleId::Types);
    // Diagram drawn at double size, offset by (20, 40) on screen.
    let vp = Viewport::scale_translate(2.0, 20.0, 40.0);
    core.set_viewport(Some(vp));

    core.pointer_down(vp.model_to_screen(INITIAL_B));
    assert_eq!(core.input().target(), Some(DragTarget::Vertex(Vertex::B)));
    core.pointer_move(Point::new(320.0, 540.0));
    core.pointer_up();
    assert_eq!(core.triangle().b, Point::new(150.0, 250.0));
    assert_eq!(core.input(), InputState::Idle);
}

#[test]
fn pointer_down_on_empty_space_does_nothing() {
    let mut core = core(ModuleId::Types);
    assert!(core.pointer_down(Point::new(200.0, 200.0)).is_empty());
}

#[test]
fn pointer_down_in_draw_mode_clicks() {
    let mut core = core(ModuleId::Centroid);
    core.pointer_down(INITIAL_A);
    assert_eq!(core.construction().and_then(GuidedConstruction::pending), Some(Vertex::A));
    // Midpoint of BC is the target for A.
    core.pointer_down(Point::new(200.0, 300.0));
    assert_eq!(core.progress().map(|p| p.a), Some(true));
    assert_eq!(core.input(), InputState::Idle);
}

#[test]
fn pointer_down_grabs_arm_tip() {
    let mut core = core(ModuleId::Existence);
    let tip = core.hinge().tip(Arm::Right);
    let actions = core.pointer_down(tip);
    assert_eq!(core.input().target(), Some(DragTarget::Arm(Arm::Right)));
    assert!(actions.contains(&Action::SetCursor { cursor: Cursor::Grabbing }));
}

// =============================================================
// Construction
// =============================================================

#[test]
fn clicks_ignored_in_move_mode() {
    let mut core = core(ModuleId::Centroid);
    core.set_mode(Mode::Move);
    assert!(core.click_vertex(Vertex::A).is_empty());
    assert!(core.targets().is_empty());
}

#[test]
fn clicks_ignored_without_construction() {
    let mut core = core(ModuleId::Types);
    assert!(core.click_vertex(Vertex::A).is_empty());
    assert!(core.reset_construction().is_empty());
}

#[test]
fn full_construction_reveals_center() {
    let mut core = core(ModuleId::Orthocenter);
    draw_all(&mut core);
    assert_eq!(core.construction().map(GuidedConstruction::state), Some(ConstructionState::Complete));
    let Some(reveal) = core.reveal() else {
        panic!("complete construction should reveal the orthocenter");
    };
    assert!(reveal.center().distance(core.metrics().orthocenter) < 1e-9);
    assert_eq!(core.drawn_elements().len(), 3);
}

#[test]
fn fourth_click_is_noop() {
    let mut core = core(ModuleId::Incircle);
    for v in Vertex::ALL {
        core.click_vertex(v);
    }
    assert!(core.click_vertex(Vertex::A).is_empty());
    assert!(core.reveal().is_some());
}

#[test]
fn click_emits_construction_changed() {
    let mut core = core(ModuleId::Circumcircle);
    let actions = core.click_target(Vertex::B);
    assert_eq!(
        actions[0],
        Action::ConstructionChanged {
            progress: ConstructionProgress { a: false, b: true, c: false },
            pending: None,
            state: ConstructionState::PartiallyDrawn,
        }
    );
}

#[test]
fn reset_construction_clears_progress() {
    let mut core = core(ModuleId::Centroid);
    draw_all(&mut core);
    core.reset_construction();
    assert_eq!(core.progress(), Some(ConstructionProgress::default()));
    assert!(core.reveal().is_none());
}

#[test]
fn vertex_cursor_by_mode() {
    let mut core = core(ModuleId::Incircle);
    core.click_vertex(Vertex::A);
    assert_eq!(core.vertex_cursor(Vertex::A), Cursor::NotAllowed);
    assert_eq!(core.vertex_cursor(Vertex::B), Cursor::Pointer);
    core.set_mode(Mode::Move);
    assert_eq!(core.vertex_cursor(Vertex::A), Cursor::Move);
}

// =============================================================
// Hinge
// =============================================================

#[test]
fn arm_drag_swings_angle() {
    let mut core = core(ModuleId::Existence);
    core.begin_drag(DragTarget::Arm(Arm::Left));
    core.update_drag(Point::new(180.0, 300.0));
    assert!(core.hinge().arm_angle_deg(Arm::Left).abs() < 1e-9);
    assert_eq!(core.hinge().arm_length(Arm::Left), 80.0);
}

#[test]
fn cancel_restores_arm_angle() {
    let mut core = core(ModuleId::Existence);
    core.begin_drag(DragTarget::Arm(Arm::Right));
    core.update_drag(Point::new(320.0, 100.0));
    core.cancel_drag();
    assert_eq!(core.hinge().arm_angle_deg(Arm::Right), -135.0);
}

#[test]
fn hinge_inputs_ignored_outside_existence() {
    let mut core = core(ModuleId::Types);
    assert!(core.set_arm_length(Arm::Left, 150.0).is_empty());
    assert!(core.drag_arm_angle(Arm::Left, Point::new(0.0, 0.0)).is_empty());
    assert_eq!(core.hinge(), &Hinge::default());
}

#[test]
fn hinge_closes_through_controller() {
    let mut core = core(ModuleId::Existence);
    assert_eq!(core.hinge_readout().status, HingeStatus::CannotForm);
    core.set_arm_length(Arm::Right, 200.0);
    assert_eq!(core.hinge_readout().status, HingeStatus::Open);
    // Apex of the 80 / 200 / 240 triangle above the base.
    let apex = Point::new(130.0, 300.0 - (80.0f64 * 80.0 - 50.0 * 50.0).sqrt());
    core.drag_arm_angle(Arm::Left, apex);
    core.drag_arm_angle(Arm::Right, apex);
    assert!(core.hinge().is_formed());
}

// =============================================================
// Readouts
// =============================================================

#[test]
fn midline_and_extremes_track_triangle() {
    let core = core(ModuleId::MiddleLine);
    let m = core.midline();
    assert!((m.length - m.base_length / 2.0).abs() < 1e-9);
    assert_eq!(core.side_angle_extremes().smallest, Vertex::A);
}

#[test]
fn exterior_extension_continues_cb_past_b() {
    let core = core(ModuleId::ExternalAngles);
    let ext = core.exterior_extension();
    assert_eq!(ext.start, INITIAL_B);
    assert_eq!(ext.end, Point::new(-100.0, 300.0));
}

#[test]
fn action_serializes_with_tag() {
    let json = serde_json::to_value(Action::ModeChanged { mode: Mode::Draw }).unwrap();
    assert_eq!(json, serde_json::json!({"action": "mode_changed", "mode": "draw"}));
}

use super::*;

#[test]
fn mode_default_is_move() {
    assert_eq!(Mode::default(), Mode::Move);
}

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert_eq!(state, InputState::Idle);
    assert!(!state.is_dragging());
    assert!(state.target().is_none());
}

#[test]
fn dragging_vertex_reports_target() {
    let state = InputState::DraggingVertex { vertex: Vertex::B, orig: Point::new(1.0, 2.0) };
    assert!(state.is_dragging());
    assert_eq!(state.target(), Some(DragTarget::Vertex(Vertex::B)));
}

#[test]
fn dragging_arm_reports_target() {
    let state = InputState::DraggingArm { arm: Arm::Right, orig_angle_deg: -135.0 };
    assert_eq!(state.target(), Some(DragTarget::Arm(Arm::Right)));
}

#[test]
fn cursor_css_keywords() {
    assert_eq!(Cursor::Move.as_css(), "move");
    assert_eq!(Cursor::NotAllowed.as_css(), "not-allowed");
    assert_eq!(Cursor::default().as_css(), "default");
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Mode::Draw).unwrap(), serde_json::json!("draw"));
}

//! Shared numeric constants for the diagram crate.

use kernel::Point;

// ── Model space ─────────────────────────────────────────────────

/// Side length of the square model space.
pub const MODEL_SIZE: f64 = 400.0;

/// Dragged vertices are clamped to `[CANVAS_MIN, CANVAS_MAX]` on both axes.
pub const CANVAS_MIN: f64 = 10.0;
pub const CANVAS_MAX: f64 = 390.0;

/// Triangle shown when a diagram is first mounted.
pub const INITIAL_A: Point = Point::new(200.0, 50.0);
pub const INITIAL_B: Point = Point::new(100.0, 300.0);
pub const INITIAL_C: Point = Point::new(300.0, 300.0);

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of the invisible grab ring around each vertex, in model units.
pub const VERTEX_HIT_RADIUS: f64 = 30.0;

/// Radius around a construction target (midpoint or foot) that accepts a click.
pub const TARGET_HIT_RADIUS: f64 = 20.0;

/// Radius around a hinge arm tip that starts an angle drag.
pub const ARM_TIP_HIT_RADIUS: f64 = 20.0;

// ── Hinge ───────────────────────────────────────────────────────

/// Length of the fixed base, in model units.
pub const HINGE_BASE_LENGTH: f64 = 240.0;

/// Left end of the base. The right pivot is `HINGE_BASE_LENGTH` to its right.
pub const HINGE_ORIGIN: Point = Point::new(80.0, 300.0);

/// Arm slider domain and step.
pub const ARM_LENGTH_MIN: f64 = 30.0;
pub const ARM_LENGTH_MAX: f64 = 200.0;
pub const ARM_LENGTH_STEP: f64 = 10.0;

pub const INITIAL_LEFT_ARM_LENGTH: f64 = 80.0;
pub const INITIAL_RIGHT_ARM_LENGTH: f64 = 100.0;

/// Arm angles in degrees, measured in screen space (y down), so negative
/// angles point upward.
pub const INITIAL_LEFT_ARM_ANGLE_DEG: f64 = -45.0;
pub const INITIAL_RIGHT_ARM_ANGLE_DEG: f64 = -135.0;

/// Tip-to-tip gap under which the arms count as closed into a triangle.
pub const SNAP_THRESHOLD: f64 = 15.0;

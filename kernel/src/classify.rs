//! Triangle classification by sides and by angles.
//!
//! Both classifiers work with tolerance bands rather than exact equality, so
//! a triangle dragged by hand can actually reach "equilateral" or "right".

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use serde::{Deserialize, Serialize};

use crate::consts::{OBTUSE_THRESHOLD_DEG, RIGHT_ANGLE_TOLERANCE_DEG, SIDE_EQUALITY_TOLERANCE};
use crate::measure::{Angles, Sides};

/// Classification boundaries. `Default` uses the kernel constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Sides closer than this count as equal (model units).
    pub side_equality: f64,
    /// Half-width of the right-angle band (degrees).
    pub right_angle_band_deg: f64,
    /// Angles strictly above this are obtuse (degrees).
    pub obtuse_threshold_deg: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            side_equality: SIDE_EQUALITY_TOLERANCE,
            right_angle_band_deg: RIGHT_ANGLE_TOLERANCE_DEG,
            obtuse_threshold_deg: OBTUSE_THRESHOLD_DEG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideClass {
    Equilateral,
    Isosceles,
    Scalene,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleClass {
    Acute,
    Right,
    Obtuse,
}

/// Classify by side lengths. Equilateral wins over isosceles.
///
/// Equilateral compares `a~b` and `b~c` only, so the tolerance does not
/// chain beyond two steps. A zero-length side is never equilateral.
#[must_use]
pub fn classify_sides(sides: &Sides, tol: &Tolerances) -> SideClass {
    let eq = |x: f64, y: f64| (x - y).abs() < tol.side_equality;
    if sides.a > 0.0 && eq(sides.a, sides.b) && eq(sides.b, sides.c) {
        SideClass::Equilateral
    } else if eq(sides.a, sides.b) || eq(sides.b, sides.c) || eq(sides.a, sides.c) {
        SideClass::Isosceles
    } else {
        SideClass::Scalene
    }
}

/// Classify by interior angles: right band first, then the obtuse threshold.
#[must_use]
pub fn classify_angles(angles: &Angles, tol: &Tolerances) -> AngleClass {
    let all = angles.as_array();
    if all.iter().any(|a| (a - 90.0).abs() < tol.right_angle_band_deg) {
        AngleClass::Right
    } else if all.iter().any(|a| *a > tol.obtuse_threshold_deg) {
        AngleClass::Obtuse
    } else {
        AngleClass::Acute
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use serde::{Deserialize, Serialize};

use crate::centers::{Circle, centroid, circumcircle, incircle, orthocenter};
use crate::classify::{AngleClass, SideClass, Tolerances, classify_angles, classify_sides};
use crate::measure::{Angles, Sides};
use crate::point::Point;
use crate::triangle::Triangle;

/// Every derived quantity of a triangle, computed in one pass.
///
/// This is a snapshot. Callers recompute it from the live triangle on every
/// read instead of holding on to it across edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub sides: Sides,
    pub angles: Angles,
    pub side_class: SideClass,
    pub angle_class: AngleClass,
    pub centroid: Point,
    pub orthocenter: Point,
    pub circumcircle: Circle,
    pub incircle: Circle,
    pub perimeter: f64,
    pub area: f64,
}

#[must_use]
pub fn derived_metrics(tri: &Triangle, tol: &Tolerances) -> DerivedMetrics {
    let sides = Sides::of(tri);
    let angles = Angles::of(tri);
    DerivedMetrics {
        sides,
        angles,
        side_class: classify_sides(&sides, tol),
        angle_class: classify_angles(&angles, tol),
        centroid: centroid(tri),
        orthocenter: orthocenter(tri),
        circumcircle: circumcircle(tri),
        incircle: incircle(tri),
        perimeter: sides.perimeter(),
        area: sides.area(),
    }
}

//! Side-angle relation, the midsegment, and display units.

#[cfg(test)]
#[path = "relation_test.rs"]
mod relation_test;

use serde::{Deserialize, Serialize};

use crate::consts::MODEL_UNITS_PER_DISPLAY_UNIT;
use crate::construct::Segment;
use crate::measure::Angles;
use crate::point::Point;
use crate::triangle::{Triangle, Vertex};

/// The vertices carrying the largest and the smallest interior angle.
///
/// The longest side is opposite `largest`, the shortest opposite `smallest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideAngleExtremes {
    pub largest: Vertex,
    pub smallest: Vertex,
}

/// Ties resolve to the earliest vertex in `A, B, C` order.
#[must_use]
pub fn side_angle_extremes(tri: &Triangle) -> SideAngleExtremes {
    let angles = Angles::of(tri);
    let mut largest = Vertex::A;
    let mut smallest = Vertex::A;
    for v in [Vertex::B, Vertex::C] {
        if angles.at(v) > angles.at(largest) {
            largest = v;
        }
        if angles.at(v) < angles.at(smallest) {
            smallest = v;
        }
    }
    SideAngleExtremes { largest, smallest }
}

/// The midsegment joining the midpoints of `AC` and `BC`, parallel to `AB`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Midline {
    pub segment: Segment,
    pub length: f64,
    pub base_length: f64,
}

#[must_use]
pub fn midline(tri: &Triangle) -> Midline {
    let d = tri.a.midpoint(tri.c);
    let e = tri.b.midpoint(tri.c);
    Midline {
        segment: Segment::new(d, e),
        length: d.distance(e),
        base_length: tri.a.distance(tri.b),
    }
}

/// Model units converted to display units, rounded to one decimal.
#[must_use]
pub fn display_length(model_units: f64) -> f64 {
    (model_units / MODEL_UNITS_PER_DISPLAY_UNIT * 10.0).round() / 10.0
}

/// Display length of the segment `p q`.
#[must_use]
pub fn display_distance(p: Point, q: Point) -> f64 {
    display_length(p.distance(q))
}

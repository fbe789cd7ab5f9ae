//! Auxiliary constructions: medians, altitudes, bisectors and label anchors.

#[cfg(test)]
#[path = "construct_test.rs"]
mod construct_test;

use serde::{Deserialize, Serialize};

use crate::centers::centroid;
use crate::consts::{ANGLE_LABEL_FRACTION, LENGTH_EPSILON, PERPENDICULAR_BISECTOR_HALF_LENGTH, VERTEX_LABEL_OFFSET};
use crate::point::Point;
use crate::triangle::{Triangle, Vertex};

/// A drawable line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Orthogonal projection of a point onto a line.
///
/// `t` locates the foot along the defining segment: 0 at its start, 1 at its
/// end. Values outside `[0, 1]` mean the foot lies on the extension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Foot {
    pub point: Point,
    pub t: f64,
}

/// Project `p` onto the line through `a` and `b`.
///
/// A zero-length segment projects everything onto `a` with `t = 0`.
#[must_use]
pub fn project_onto_line(p: Point, a: Point, b: Point) -> Foot {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 < LENGTH_EPSILON {
        return Foot { point: a, t: 0.0 };
    }
    let t = (p - a).dot(ab) / len2;
    Foot { point: a + ab * t, t }
}

/// Foot of the altitude from `v` onto the line of its opposite side.
#[must_use]
pub fn altitude_foot(tri: &Triangle, v: Vertex) -> Foot {
    let (q, r) = tri.opposite_side(v);
    project_onto_line(tri.vertex(v), q, r)
}

/// An altitude, plus the stretch of the opposite side's line that must be
/// drawn when the foot falls outside the side (obtuse triangles).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Altitude {
    pub segment: Segment,
    pub foot: Foot,
    pub extension: Option<Segment>,
}

#[must_use]
pub fn altitude(tri: &Triangle, v: Vertex) -> Altitude {
    let (q, r) = tri.opposite_side(v);
    let foot = altitude_foot(tri, v);
    let extension = if foot.t < 0.0 {
        Some(Segment::new(foot.point, q))
    } else if foot.t > 1.0 {
        Some(Segment::new(r, foot.point))
    } else {
        None
    };
    Altitude { segment: Segment::new(tri.vertex(v), foot.point), foot, extension }
}

/// Midpoint of the side opposite `v`.
#[must_use]
pub fn side_midpoint(tri: &Triangle, v: Vertex) -> Point {
    let (q, r) = tri.opposite_side(v);
    q.midpoint(r)
}

/// Segment from `v` to the midpoint of its opposite side.
#[must_use]
pub fn median(tri: &Triangle, v: Vertex) -> Segment {
    Segment::new(tri.vertex(v), side_midpoint(tri, v))
}

/// A long display segment through the midpoint of `p q`, perpendicular to it.
///
/// Only the direction is geometrically meaningful; the length is
/// [`PERPENDICULAR_BISECTOR_HALF_LENGTH`] each way. A zero-length input
/// yields a zero-length segment at the midpoint.
#[must_use]
pub fn perpendicular_bisector(p: Point, q: Point) -> Segment {
    let mid = p.midpoint(q);
    match (q - p).perpendicular().normalized() {
        Some(n) => Segment::new(
            mid - n * PERPENDICULAR_BISECTOR_HALF_LENGTH,
            mid + n * PERPENDICULAR_BISECTOR_HALF_LENGTH,
        ),
        None => Segment::new(mid, mid),
    }
}

/// Perpendicular bisector of the side opposite `v`.
#[must_use]
pub fn side_bisector(tri: &Triangle, v: Vertex) -> Segment {
    let (q, r) = tri.opposite_side(v);
    perpendicular_bisector(q, r)
}

/// Where the bisector of the angle at `v` meets the opposite side.
///
/// Divides the side in the ratio of the adjacent sides. If both adjacent
/// sides vanish the side's midpoint is used.
#[must_use]
pub fn bisector_foot(tri: &Triangle, v: Vertex) -> Point {
    let p = tri.vertex(v);
    let (q, r) = tri.opposite_side(v);
    let pq = p.distance(q);
    let pr = p.distance(r);
    let total = pq + pr;
    if total < LENGTH_EPSILON {
        return q.midpoint(r);
    }
    (q * pr + r * pq) * (1.0 / total)
}

#[must_use]
pub fn angle_bisector(tri: &Triangle, v: Vertex) -> Segment {
    Segment::new(tri.vertex(v), bisector_foot(tri, v))
}

/// Continue the ray `from -> through` past `through` by `length`.
#[must_use]
pub fn exterior_ray(from: Point, through: Point, length: f64) -> Segment {
    match (through - from).normalized() {
        Some(dir) => Segment::new(through, through + dir * length),
        None => Segment::new(through, through),
    }
}

/// Anchor for the vertex name, pushed away from the centroid.
#[must_use]
pub fn vertex_label_position(tri: &Triangle, v: Vertex) -> Point {
    let p = tri.vertex(v);
    let dir = p - centroid(tri);
    let len = dir.length();
    let len = if len < LENGTH_EPSILON { 1.0 } else { len };
    p + dir * (VERTEX_LABEL_OFFSET / len)
}

/// Anchor for the angle readout, a short way in from the vertex.
#[must_use]
pub fn angle_label_position(tri: &Triangle, v: Vertex) -> Point {
    let p = tri.vertex(v);
    p.lerp(centroid(tri), ANGLE_LABEL_FRACTION)
}

//! The four classical triangle centers.
//!
//! DEGENERATE INPUT
//! ================
//! When the vertices are collinear the orthocenter and circumcenter do not
//! exist. Both fall back to the centroid, which is always finite and lies
//! on the segment the triangle collapsed to. Circles from degenerate input
//! have zero radius.

#[cfg(test)]
#[path = "centers_test.rs"]
mod centers_test;

use serde::{Deserialize, Serialize};

use crate::consts::{COLLINEAR_EPSILON, LENGTH_EPSILON, PARALLEL_EPSILON};
use crate::construct::altitude_foot;
use crate::measure::Sides;
use crate::point::Point;
use crate::triangle::{Triangle, Vertex};

/// A circle in model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

#[must_use]
pub fn centroid(tri: &Triangle) -> Point {
    Point::new((tri.a.x + tri.b.x + tri.c.x) / 3.0, (tri.a.y + tri.b.y + tri.c.y) / 3.0)
}

/// Intersection of line `p1 p2` with line `p3 p4`, or `None` if they are
/// parallel (or either line is a single point).
#[must_use]
pub fn line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let d = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if d.abs() < PARALLEL_EPSILON {
        return None;
    }
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    Some(Point::new(
        (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / d,
        (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / d,
    ))
}

/// Intersection of the altitudes from `A` and from `B`.
#[must_use]
pub fn orthocenter(tri: &Triangle) -> Point {
    let foot_a = altitude_foot(tri, Vertex::A).point;
    let foot_b = altitude_foot(tri, Vertex::B).point;
    line_intersection(tri.a, foot_a, tri.b, foot_b).unwrap_or_else(|| centroid(tri))
}

/// Circle through all three vertices, by the determinant formula.
#[must_use]
pub fn circumcircle(tri: &Triangle) -> Circle {
    let Triangle { a, b, c } = *tri;
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < COLLINEAR_EPSILON {
        return Circle { center: centroid(tri), radius: 0.0 };
    }
    let a2 = a.dot(a);
    let b2 = b.dot(b);
    let c2 = c.dot(c);
    let center = Point::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );
    Circle { center, radius: center.distance(a) }
}

/// Inscribed circle: center weighted by opposite side lengths, radius
/// `area / semiperimeter`.
#[must_use]
pub fn incircle(tri: &Triangle) -> Circle {
    let sides = Sides::of(tri);
    let p = sides.perimeter();
    if p < LENGTH_EPSILON {
        return Circle { center: centroid(tri), radius: 0.0 };
    }
    let center = (tri.a * sides.a + tri.b * sides.b + tri.c * sides.c) * (1.0 / p);
    Circle { center, radius: sides.area() / (p / 2.0) }
}

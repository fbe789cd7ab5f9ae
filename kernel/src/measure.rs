//! Side lengths, interior angles, perimeter and area.
//!
//! Side `a` is opposite vertex `A` (the length of `BC`), and likewise for
//! `b` and `c`. Angles are in degrees.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use serde::{Deserialize, Serialize};

use crate::consts::LENGTH_EPSILON;
use crate::point::Point;
use crate::triangle::{Triangle, Vertex};

#[must_use]
pub fn distance(p: Point, q: Point) -> f64 {
    p.distance(q)
}

/// Interior angle at `p` of the triangle `(p, q, r)`, by the law of cosines.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so near-straight and
/// near-zero angles stay finite. Returns 0 when either adjacent side has no
/// length.
#[must_use]
pub fn angle_at(p: Point, q: Point, r: Point) -> f64 {
    let pq = p.distance(q);
    let pr = p.distance(r);
    if pq < LENGTH_EPSILON || pr < LENGTH_EPSILON {
        return 0.0;
    }
    let qr = q.distance(r);
    let cos = ((pq * pq + pr * pr - qr * qr) / (2.0 * pq * pr)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// The three side lengths, each keyed by its opposite vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Sides {
    #[must_use]
    pub fn of(tri: &Triangle) -> Self {
        Self {
            a: tri.b.distance(tri.c),
            b: tri.c.distance(tri.a),
            c: tri.a.distance(tri.b),
        }
    }

    /// Length of the side opposite `v`.
    #[must_use]
    pub fn opposite(&self, v: Vertex) -> f64 {
        match v {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
        }
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Heron's formula. The radicand is clamped at zero so rounding on a
    /// collinear triangle cannot produce NaN.
    #[must_use]
    pub fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        let radicand = s * (s - self.a) * (s - self.b) * (s - self.c);
        radicand.max(0.0).sqrt()
    }
}

/// Interior angles in degrees: `alpha` at `A`, `beta` at `B`, `gamma` at `C`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Angles {
    #[must_use]
    pub fn of(tri: &Triangle) -> Self {
        Self {
            alpha: angle_at(tri.a, tri.b, tri.c),
            beta: angle_at(tri.b, tri.a, tri.c),
            gamma: angle_at(tri.c, tri.a, tri.b),
        }
    }

    #[must_use]
    pub fn at(&self, v: Vertex) -> f64 {
        match v {
            Vertex::A => self.alpha,
            Vertex::B => self.beta,
            Vertex::C => self.gamma,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.alpha + self.beta + self.gamma
    }

    /// The angles in vertex order, for iteration.
    #[must_use]
    pub fn as_array(&self) -> [f64; 3] {
        [self.alpha, self.beta, self.gamma]
    }
}

#[must_use]
pub fn perimeter(tri: &Triangle) -> f64 {
    Sides::of(tri).perimeter()
}

#[must_use]
pub fn area(tri: &Triangle) -> f64 {
    Sides::of(tri).area()
}

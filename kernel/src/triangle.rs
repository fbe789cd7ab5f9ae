#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// One of the three triangle corners.
///
/// Also keys the side opposite the corner: side `a` is opposite `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// The two remaining vertices, in the order that spans the opposite side:
    /// `A -> (B, C)`, `B -> (A, C)`, `C -> (A, B)`.
    #[must_use]
    pub fn others(self) -> (Self, Self) {
        match self {
            Self::A => (Self::B, Self::C),
            Self::B => (Self::A, Self::C),
            Self::C => (Self::A, Self::B),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Greek letter conventionally naming the interior angle at this vertex.
    #[must_use]
    pub fn angle_symbol(self) -> &'static str {
        match self {
            Self::A => "α",
            Self::B => "β",
            Self::C => "γ",
        }
    }
}

/// Three vertices in model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn vertex(&self, v: Vertex) -> Point {
        match v {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
        }
    }

    pub fn set_vertex(&mut self, v: Vertex, p: Point) {
        match v {
            Vertex::A => self.a = p,
            Vertex::B => self.b = p,
            Vertex::C => self.c = p,
        }
    }

    /// Endpoints of the side opposite `v`, ordered per [`Vertex::others`].
    #[must_use]
    pub fn opposite_side(&self, v: Vertex) -> (Point, Point) {
        let (p, q) = v.others();
        (self.vertex(p), self.vertex(q))
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed area; zero for collinear vertices.
    #[must_use]
    pub fn signed_double_area(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a)
    }
}

//! Angle wedge ("sector") path builder for marking angles.

#[cfg(test)]
#[path = "sector_test.rs"]
mod sector_test;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A pie-slice wedge between two rays from `center`.
///
/// `sweep` is the SVG arc sweep flag. It is set from the sign of the cross
/// product of the two ray directions, so the short (non-reflex) arc is
/// always the one drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorPath {
    pub center: Point,
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub sweep: bool,
}

impl SectorPath {
    /// Wedge at `center` between the rays toward `p1` and `p2`.
    ///
    /// Returns `None` if either ray has no direction.
    #[must_use]
    pub fn new(center: Point, p1: Point, p2: Point, radius: f64) -> Option<Self> {
        let u = p1 - center;
        let v = p2 - center;
        let d1 = u.length();
        let d2 = v.length();
        if d1 == 0.0 || d2 == 0.0 {
            return None;
        }
        Some(Self {
            center,
            start: center + u * (radius / d1),
            end: center + v * (radius / d2),
            radius,
            sweep: u.cross(v) > 0.0,
        })
    }

    /// SVG path data: move to the center, line to the first arc point, arc
    /// to the second, close.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} L {} {} A {} {} 0 0 {} {} {} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.sweep),
            self.end.x,
            self.end.y,
        )
    }
}

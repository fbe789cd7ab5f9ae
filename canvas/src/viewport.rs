#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use kernel::Point;

/// Screen transform of the diagram element.
///
/// Maps model coordinates to screen (client) pixels as
/// `screen = (a·x + c·y + e, b·x + d·y + f)`, the same six-term layout as an
/// SVG/CSS matrix. The host supplies it after layout. Until then the
/// controller has no viewport and ignores pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }
}

impl Viewport {
    /// Uniform scale followed by a translation: the common letterboxed case.
    #[must_use]
    pub fn scale_translate(scale: f64, tx: f64, ty: f64) -> Self {
        Self { a: scale, b: 0.0, c: 0.0, d: scale, e: tx, f: ty }
    }

    fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Whether this transform can be inverted.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det.is_finite() && det.abs() > f64::EPSILON && self.e.is_finite() && self.f.is_finite()
    }

    /// Convert a screen point to model coordinates, or `None` when the
    /// transform is singular.
    #[must_use]
    pub fn screen_to_model(&self, screen: Point) -> Option<Point> {
        if !self.is_invertible() {
            return None;
        }
        let det = self.determinant();
        let sx = screen.x - self.e;
        let sy = screen.y - self.f;
        let model = Point::new((self.d * sx - self.c * sy) / det, (self.a * sy - self.b * sx) / det);
        model.is_finite().then_some(model)
    }

    /// Convert a model point to screen coordinates.
    #[must_use]
    pub fn model_to_screen(&self, model: Point) -> Point {
        Point::new(
            self.a * model.x + self.c * model.y + self.e,
            self.b * model.x + self.d * model.y + self.f,
        )
    }
}

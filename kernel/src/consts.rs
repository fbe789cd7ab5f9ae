//! Shared numeric constants for the geometry kernel.

// ── Classification ──────────────────────────────────────────────

/// Two sides closer than this (model units) count as equal.
pub const SIDE_EQUALITY_TOLERANCE: f64 = 5.0;

/// Half-width of the band around 90° that classifies as "right".
pub const RIGHT_ANGLE_TOLERANCE_DEG: f64 = 2.0;

/// An angle strictly above this classifies the triangle as obtuse.
///
/// The band is asymmetric: 88.5° is right, exactly 92° is acute, 92.1° is obtuse.
pub const OBTUSE_THRESHOLD_DEG: f64 = 92.0;

// ── Numeric guards ──────────────────────────────────────────────

/// Below this the circumcenter determinant is treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-4;

/// Below this a line-intersection determinant is treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Lengths below this are treated as zero.
pub const LENGTH_EPSILON: f64 = 1e-9;

// ── Display ─────────────────────────────────────────────────────

/// Half-length of a drawn perpendicular bisector, in model units.
pub const PERPENDICULAR_BISECTOR_HALF_LENGTH: f64 = 400.0;

/// Model units per displayed length unit.
pub const MODEL_UNITS_PER_DISPLAY_UNIT: f64 = 30.0;

/// Distance of a vertex label from its vertex, pushed away from the centroid.
pub const VERTEX_LABEL_OFFSET: f64 = 30.0;

/// Fraction of the vertex-to-centroid segment where angle labels sit.
pub const ANGLE_LABEL_FRACTION: f64 = 0.15;

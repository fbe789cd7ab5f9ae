//! Pure triangle geometry for the interactive diagrams.
//!
//! Every function here is a stateless computation over three points. Nothing
//! is cached: callers recompute derived quantities from the live [`Triangle`]
//! on every read, so a drag can never observe a stale centroid or angle.
//!
//! Degenerate input (collinear or coincident vertices) never produces NaN or
//! infinity. Each computation that divides has a guard and a documented
//! fallback, usually the centroid or a zero-radius circle.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | Plane vector type and arithmetic |
//! | [`triangle`] | Vertex ids and the three-point triangle |
//! | [`consts`] | Named tolerances and display constants |
//! | [`measure`] | Side lengths, law-of-cosines angles, perimeter, Heron area |
//! | [`classify`] | Side and angle classification with tolerance bands |
//! | [`centers`] | Centroid, orthocenter, circumcircle, incircle |
//! | [`construct`] | Medians, altitudes, bisectors, label anchors |
//! | [`relation`] | Side-angle extremes, the midsegment, display units |
//! | [`sector`] | Angle-wedge path builder |
//! | [`metrics`] | One-shot bundle of every derived quantity |

pub mod centers;
pub mod classify;
pub mod consts;
pub mod construct;
pub mod measure;
pub mod metrics;
pub mod point;
pub mod relation;
pub mod sector;
pub mod triangle;

pub use centers::Circle;
pub use classify::{AngleClass, SideClass, Tolerances};
pub use metrics::{DerivedMetrics, derived_metrics};
pub use point::Point;
pub use triangle::{Triangle, Vertex};

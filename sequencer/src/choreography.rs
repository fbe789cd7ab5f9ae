//! Scene placements for each proof animation.
//!
//! Every scene is a pure function of [`AnimationState`]: the renderer asks
//! for the scene after each state change and tweens between placements.
//!
//! DESIGN
//! ======
//! Each proof is drawn on its own fixed demo triangle, not the live diagram
//! triangle. The wedge rotations of the theorem scene are tuned to that demo
//! triangle so two interior wedges exactly tile the exterior gap. Labels
//! inside a rotated wedge carry the opposite rotation so text stays upright.

#[cfg(test)]
#[path = "choreography_test.rs"]
mod choreography_test;

use kernel::construct::{Segment, exterior_ray};
use kernel::sector::SectorPath;
use kernel::{Point, Triangle, Vertex};
use serde::Serialize;

use crate::mode::ProofMode;
use crate::state::AnimationState;

// ── Demo triangles ────────────────────────────────────────────

pub const DEFINITION_TRIANGLE: Triangle =
    Triangle::new(Point::new(80.0, 220.0), Point::new(300.0, 220.0), Point::new(190.0, 60.0));
pub const SUPPLEMENTARY_TRIANGLE: Triangle =
    Triangle::new(Point::new(50.0, 200.0), Point::new(250.0, 200.0), Point::new(150.0, 50.0));
pub const THEOREM_TRIANGLE: Triangle =
    Triangle::new(Point::new(50.0, 250.0), Point::new(300.0, 250.0), Point::new(150.0, 50.0));
pub const SUM360_TRIANGLE: Triangle =
    Triangle::new(Point::new(70.0, 220.0), Point::new(210.0, 220.0), Point::new(140.0, 80.0));
pub const ANGLE_SUM_TRIANGLE: Triangle =
    Triangle::new(Point::new(50.0, 250.0), Point::new(350.0, 250.0), Point::new(200.0, 50.0));

/// Common point the exterior wedges gather around.
pub const SUM360_CENTER: Point = Point::new(340.0, 150.0);

// ── Sizes ─────────────────────────────────────────────────────

pub const WEDGE_RADIUS: f64 = 40.0;
pub const DEFINITION_ARC_RADIUS: f64 = 45.0;
pub const DEFINITION_LABEL_RADIUS: f64 = 28.0;
pub const DEFINITION_EXTENSION: f64 = 90.0;
pub const ANGLE_SUM_WEDGE_RADIUS: f64 = 50.0;

/// Exterior wedges in the 360° scene each span this much.
const SUM360_SWEEP_DEG: f64 = -120.0;

/// An angle wedge drawn at `origin`, rotated by `rotation_deg`.
///
/// The wedge's first ray lies along +x before rotation and it sweeps
/// `sweep_deg` (negative is counter-clockwise on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wedge {
    pub vertex: Vertex,
    pub origin: Point,
    pub rotation_deg: f64,
    pub label_rotation_deg: f64,
    pub sweep_deg: f64,
    pub visible: bool,
}

impl Wedge {
    fn new(vertex: Vertex, origin: Point, rotation_deg: f64, sweep_deg: f64, visible: bool) -> Self {
        Self { vertex, origin, rotation_deg, label_rotation_deg: -rotation_deg, sweep_deg, visible }
    }
}

/// Dashed side extension with its emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extension {
    pub vertex: Vertex,
    pub segment: Segment,
    pub emphasized: bool,
}

/// Everything a proof renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum Scene {
    Definition(DefinitionScene),
    Supplementary(SupplementaryScene),
    Theorem(TheoremScene),
    Sum360(Sum360Scene),
    AngleSum(AngleSumScene),
}

impl Scene {
    #[must_use]
    pub fn of(mode: ProofMode, state: &AnimationState) -> Self {
        match mode {
            ProofMode::Definition => Self::Definition(definition_scene(state)),
            ProofMode::Supplementary => Self::Supplementary(supplementary_scene(state)),
            ProofMode::Theorem => Self::Theorem(theorem_scene(state)),
            ProofMode::Sum360 => Self::Sum360(sum360_scene(state)),
            ProofMode::AngleSum => Self::AngleSum(angle_sum_scene(state)),
        }
    }
}

// =============================================================
// Definition
// =============================================================

/// Extension ray, exterior arc and label at one vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExteriorMark {
    pub vertex: Vertex,
    pub ray: Segment,
    pub arc: Option<SectorPath>,
    pub label: Point,
    pub label_text: String,
    pub ray_visible: bool,
    pub arc_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionScene {
    pub triangle: Triangle,
    /// In reveal order: B, C, A.
    pub marks: Vec<ExteriorMark>,
}

/// Reveal order as `(previous, vertex, next, step revealing the ray)`.
const DEFINITION_ORDER: [(Vertex, Vertex, Vertex, u8); 3] =
    [(Vertex::A, Vertex::B, Vertex::C, 1), (Vertex::B, Vertex::C, Vertex::A, 3), (Vertex::C, Vertex::A, Vertex::B, 5)];

#[must_use]
pub fn definition_scene(state: &AnimationState) -> DefinitionScene {
    let tri = DEFINITION_TRIANGLE;
    let marks = DEFINITION_ORDER
        .iter()
        .map(|&(prev, v, next, reveal)| {
            let at = tri.vertex(v);
            let ray = exterior_ray(tri.vertex(prev), at, DEFINITION_EXTENSION);
            let toward_next = tri.vertex(next);
            let bisector = match ((ray.end - at).normalized(), (toward_next - at).normalized()) {
                (Some(u), Some(w)) => (u + w).normalized(),
                _ => None,
            };
            ExteriorMark {
                vertex: v,
                ray,
                arc: SectorPath::new(at, ray.end, toward_next, DEFINITION_ARC_RADIUS),
                label: bisector.map_or(at, |dir| at + dir * DEFINITION_LABEL_RADIUS),
                label_text: format!("{}₁", v.angle_symbol()),
                ray_visible: state.step >= reveal,
                arc_visible: state.step > reveal,
            }
        })
        .collect();
    DefinitionScene { triangle: tri, marks }
}

// =============================================================
// Supplementary
// =============================================================

/// Hand-placed drawing for one vertex of the supplementary scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupplementaryFrame {
    pub vertex: Vertex,
    pub extension: Segment,
    pub extension_label: Point,
    pub interior_arc: &'static str,
    pub exterior_arc: &'static str,
    /// Half-circle arc spanning both angles, drawn in with a dash offset.
    pub straight_arc: &'static str,
    pub interior_label: Point,
    pub exterior_label: Point,
}

pub const SUPPLEMENTARY_FRAMES: [SupplementaryFrame; 3] = [
    SupplementaryFrame {
        vertex: Vertex::B,
        extension: Segment::new(Point::new(250.0, 200.0), Point::new(380.0, 200.0)),
        extension_label: Point::new(320.0, 220.0),
        interior_arc: "M 200 200 A 50 50 0 0 1 222 158",
        exterior_arc: "M 300 200 A 50 50 0 0 0 222 158",
        straight_arc: "M 190 200 A 60 60 0 0 1 310 200",
        interior_label: Point::new(215.0, 190.0),
        exterior_label: Point::new(260.0, 180.0),
    },
    SupplementaryFrame {
        vertex: Vertex::C,
        extension: Segment::new(Point::new(150.0, 50.0), Point::new(210.0, -40.0)),
        extension_label: Point::new(190.0, 0.0),
        interior_arc: "M 122 92 A 50 50 0 0 0 178 92",
        exterior_arc: "M 178 8 A 50 50 0 0 1 178 92",
        straight_arc: "M 183 0 A 60 60 0 0 1 117 100",
        interior_label: Point::new(150.0, 100.0),
        exterior_label: Point::new(195.0, 50.0),
    },
    SupplementaryFrame {
        vertex: Vertex::A,
        extension: Segment::new(Point::new(50.0, 200.0), Point::new(-50.0, 200.0)),
        extension_label: Point::new(0.0, 220.0),
        interior_arc: "M 100 200 A 50 50 0 0 0 78 158",
        exterior_arc: "M 0 200 A 50 50 0 0 1 78 158",
        straight_arc: "M 110 200 A 60 60 0 0 0 -10 200",
        interior_label: Point::new(70.0, 190.0),
        exterior_label: Point::new(30.0, 170.0),
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplementaryScene {
    pub triangle: Triangle,
    pub frame: SupplementaryFrame,
    pub angles_visible: bool,
    pub straight_arc_visible: bool,
    pub equation: Option<String>,
}

#[must_use]
pub fn supplementary_scene(state: &AnimationState) -> SupplementaryScene {
    let v = state.active_variant;
    let frame = SUPPLEMENTARY_FRAMES[match v {
        Vertex::B => 0,
        Vertex::C => 1,
        Vertex::A => 2,
    }];
    let symbol = v.angle_symbol();
    SupplementaryScene {
        triangle: SUPPLEMENTARY_TRIANGLE,
        frame,
        angles_visible: state.step >= 1,
        straight_arc_visible: state.step >= 2,
        equation: (state.step >= 3).then(|| format!("{symbol} + {symbol}₁ = 180°")),
    }
}

// =============================================================
// Theorem
// =============================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TheoremScene {
    pub triangle: Triangle,
    /// Vertex whose exterior angle is being filled.
    pub target: Vertex,
    pub extensions: Vec<Extension>,
    /// The two non-adjacent interior wedges.
    pub wedges: Vec<Wedge>,
    /// Dashed outlines left at the wedges' home corners once they move.
    pub ghosts_visible: bool,
    pub equation: Option<String>,
}

/// Signed sweep of each interior wedge of the theorem triangle.
fn theorem_sweep(v: Vertex) -> f64 {
    match v {
        Vertex::A => -63.4,
        Vertex::B => 53.1,
        Vertex::C => 63.5,
    }
}

/// Rotation that seats a wedge in its own corner.
fn theorem_home_rotation(v: Vertex) -> f64 {
    match v {
        Vertex::A => 0.0,
        Vertex::B => 180.0,
        Vertex::C => 53.1,
    }
}

/// Rotation that seats `source`'s wedge in `target`'s exterior gap.
fn theorem_gap_rotation(source: Vertex, target: Vertex) -> f64 {
    match (target, source) {
        (Vertex::B, Vertex::C) => -127.0,
        (Vertex::C, Vertex::A | Vertex::B) | (Vertex::A, Vertex::B) => 180.0,
        (Vertex::A, Vertex::C) => 233.1,
        _ => theorem_home_rotation(source),
    }
}

fn theorem_extension(v: Vertex) -> Segment {
    let at = THEOREM_TRIANGLE.vertex(v);
    let offset = match v {
        Vertex::A => Point::new(-100.0, 0.0),
        Vertex::B => Point::new(100.0, 0.0),
        Vertex::C => Point::new(-60.0, -80.0),
    };
    Segment::new(at, at + offset)
}

#[must_use]
pub fn theorem_scene(state: &AnimationState) -> TheoremScene {
    let tri = THEOREM_TRIANGLE;
    let target = state.active_variant;
    let moved = state.step >= 2;
    let (p, q) = target.others();
    let wedges = [p, q]
        .into_iter()
        .map(|source| {
            let (origin, rotation) = if moved {
                (tri.vertex(target), theorem_gap_rotation(source, target))
            } else {
                (tri.vertex(source), theorem_home_rotation(source))
            };
            Wedge::new(source, origin, rotation, theorem_sweep(source), state.step >= 1)
        })
        .collect();
    let extensions = Vertex::ALL
        .into_iter()
        .map(|v| Extension { vertex: v, segment: theorem_extension(v), emphasized: v == target })
        .collect();
    TheoremScene {
        triangle: tri,
        target,
        extensions,
        wedges,
        ghosts_visible: moved,
        equation: (state.step >= 3)
            .then(|| format!("{}₁ = {} + {}", target.angle_symbol(), p.angle_symbol(), q.angle_symbol())),
    }
}

// =============================================================
// Sum of exterior angles
// =============================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sum360Scene {
    pub triangle: Triangle,
    pub center: Point,
    pub extensions: Vec<Segment>,
    /// In stacking order: B, C, A.
    pub wedges: Vec<Wedge>,
    pub triangle_faded: bool,
    pub center_visible: bool,
    pub total: Option<String>,
}

#[must_use]
pub fn sum360_scene(state: &AnimationState) -> Sum360Scene {
    let tri = SUM360_TRIANGLE;
    let gathered = state.step >= 2;
    let wedges = [Vertex::B, Vertex::C, Vertex::A]
        .into_iter()
        .zip([0.0, -120.0, -240.0])
        .map(|(v, rotation)| {
            let origin = if gathered { SUM360_CENTER } else { tri.vertex(v) };
            Wedge::new(v, origin, rotation, SUM360_SWEEP_DEG, true)
        })
        .collect();
    let extensions = vec![
        Segment::new(tri.a, tri.a + Point::new(-50.0, 0.0)),
        Segment::new(tri.b, tri.b + Point::new(50.0, 0.0)),
        Segment::new(tri.c, tri.c + Point::new(-30.0, -40.0)),
    ];
    Sum360Scene {
        triangle: tri,
        center: SUM360_CENTER,
        extensions,
        wedges,
        triangle_faded: gathered,
        center_visible: gathered,
        total: (state.step >= 3).then(|| "360°".to_owned()),
    }
}

// =============================================================
// Interior angle sum
// =============================================================

/// An interior wedge and the transform applied around its corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TornWedge {
    pub vertex: Vertex,
    pub sector: Option<SectorPath>,
    pub offset: Point,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleSumScene {
    pub triangle: Triangle,
    pub wedges: Vec<TornWedge>,
    /// Line through the apex parallel to the base, once the wedges arrive.
    pub parallel: Option<Segment>,
    pub equation: Option<String>,
}

/// Offset and rotation of a base wedge: nudged off its corner at step 1,
/// carried to the apex at step 2.
fn torn_transform(v: Vertex, step: u8) -> (Point, f64) {
    let (nudge, carry, turn) = match v {
        Vertex::A => (Point::new(-10.0, 10.0), Point::new(150.0, -200.0), -180.0),
        Vertex::B => (Point::new(10.0, 10.0), Point::new(-150.0, -200.0), 180.0),
        Vertex::C => return (Point::default(), 0.0),
    };
    match step {
        0 => (Point::default(), 0.0),
        1 => (nudge, 0.0),
        _ => (carry, turn),
    }
}

#[must_use]
pub fn angle_sum_scene(state: &AnimationState) -> AngleSumScene {
    let tri = ANGLE_SUM_TRIANGLE;
    let wedges = Vertex::ALL
        .into_iter()
        .map(|v| {
            let (p, q) = v.others();
            let (offset, rotation_deg) = torn_transform(v, state.step);
            TornWedge {
                vertex: v,
                sector: SectorPath::new(tri.vertex(v), tri.vertex(p), tri.vertex(q), ANGLE_SUM_WEDGE_RADIUS),
                offset,
                rotation_deg,
            }
        })
        .collect();
    AngleSumScene {
        triangle: tri,
        wedges,
        parallel: (state.step >= 2).then(|| Segment::new(Point::new(100.0, 50.0), Point::new(300.0, 50.0))),
        equation: (state.step >= 3).then(|| "α + β + γ = 180°".to_owned()),
    }
}

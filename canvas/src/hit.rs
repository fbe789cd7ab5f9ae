#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use kernel::{Point, Triangle, Vertex};

use crate::consts::{ARM_TIP_HIT_RADIUS, TARGET_HIT_RADIUS, VERTEX_HIT_RADIUS};
use crate::construction::Target;
use crate::hinge::Hinge;
use crate::input::Arm;

/// Which part of the diagram was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Vertex(Vertex),
    /// A construction target, by key.
    Target(Vertex),
    ArmTip(Arm),
}

/// Nearest of `candidates` within `radius` of `pt`.
fn nearest<K: Copy>(pt: Point, radius: f64, candidates: impl IntoIterator<Item = (K, Point)>) -> Option<K> {
    candidates
        .into_iter()
        .map(|(key, p)| (key, p.distance(pt)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key)
}

#[must_use]
pub fn hit_vertex(tri: &Triangle, pt: Point) -> Option<Vertex> {
    nearest(pt, VERTEX_HIT_RADIUS, Vertex::ALL.map(|v| (v, tri.vertex(v))))
}

#[must_use]
pub fn hit_target(targets: &[Target], pt: Point) -> Option<Vertex> {
    nearest(pt, TARGET_HIT_RADIUS, targets.iter().map(|t| (t.key, t.point)))
}

#[must_use]
pub fn hit_arm_tip(hinge: &Hinge, pt: Point) -> Option<Arm> {
    nearest(pt, ARM_TIP_HIT_RADIUS, [Arm::Left, Arm::Right].map(|arm| (arm, hinge.tip(arm))))
}

/// Test what lies under `pt` in a free-vertex diagram.
///
/// Vertices sit above construction targets, so they are checked first.
#[must_use]
pub fn hit_test(tri: &Triangle, targets: &[Target], pt: Point) -> Option<HitPart> {
    hit_vertex(tri, pt)
        .map(HitPart::Vertex)
        .or_else(|| hit_target(targets, pt).map(HitPart::Target))
}

//! Guided constructions: the step-gated state machine behind the four
//! triangle-center diagrams.
//!
//! DESIGN
//! ======
//! Each construction needs three auxiliary lines, one per key `A | B | C`.
//! The center is revealed only once all three are drawn. How a line gets
//! committed depends on the construction:
//!
//! - Medians and altitudes use two clicks. The first click selects a source
//!   vertex (clicking it again deselects it). The second click, on the
//!   matching target on the opposite side, commits the line.
//! - Perpendicular bisectors commit by clicking a side midpoint directly.
//! - Angle bisectors commit by clicking a vertex directly.
//!
//! Progress is the only stored state. Targets, drawn lines and the reveal are
//! all derived from the live triangle on every call.

#[cfg(test)]
#[path = "construction_test.rs"]
mod construction_test;

use kernel::centers::{Circle, centroid, circumcircle, incircle, orthocenter};
use kernel::construct::{Altitude, Segment, altitude, altitude_foot, angle_bisector, median, side_bisector, side_midpoint};
use kernel::{Point, Triangle, Vertex};
use serde::{Deserialize, Serialize};

use crate::input::Cursor;

/// Which family of auxiliary lines a diagram constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionKind {
    Medians,
    Altitudes,
    PerpendicularBisectors,
    AngleBisectors,
}

/// How a single line is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStyle {
    /// Select a vertex, then click its target on the opposite side.
    SelectThenTarget,
    /// Click the target directly.
    Target,
    /// Click the vertex directly.
    Vertex,
}

impl ConstructionKind {
    #[must_use]
    pub fn commit_style(self) -> CommitStyle {
        match self {
            Self::Medians | Self::Altitudes => CommitStyle::SelectThenTarget,
            Self::PerpendicularBisectors => CommitStyle::Target,
            Self::AngleBisectors => CommitStyle::Vertex,
        }
    }

    /// Click target for `key`, if this construction has targets.
    #[must_use]
    pub fn target_point(self, tri: &Triangle, key: Vertex) -> Option<Point> {
        match self {
            Self::Medians | Self::PerpendicularBisectors => Some(side_midpoint(tri, key)),
            Self::Altitudes => Some(altitude_foot(tri, key).point),
            Self::AngleBisectors => None,
        }
    }

    /// Letter used to label the revealed center.
    #[must_use]
    pub fn center_label(self) -> &'static str {
        match self {
            Self::Medians => "T",
            Self::Altitudes => "H",
            Self::PerpendicularBisectors => "O",
            Self::AngleBisectors => "V",
        }
    }

    fn element(self, tri: &Triangle, key: Vertex) -> DrawnElement {
        match self {
            Self::Medians => DrawnElement::Median(median(tri, key)),
            Self::Altitudes => DrawnElement::Altitude(altitude(tri, key)),
            Self::PerpendicularBisectors => DrawnElement::PerpendicularBisector(side_bisector(tri, key)),
            Self::AngleBisectors => DrawnElement::AngleBisector(angle_bisector(tri, key)),
        }
    }

    fn reveal(self, tri: &Triangle) -> Reveal {
        match self {
            Self::Medians => {
                let center = centroid(tri);
                Reveal::Centroid {
                    center,
                    vertex_part: Segment::new(tri.a, center),
                    midpoint_part: Segment::new(center, side_midpoint(tri, Vertex::A)),
                }
            }
            Self::Altitudes => {
                let center = orthocenter(tri);
                Reveal::Orthocenter {
                    center,
                    spokes: Vertex::ALL.map(|v| Segment::new(tri.vertex(v), center)),
                }
            }
            Self::PerpendicularBisectors => Reveal::Circumcircle(circumcircle(tri)),
            Self::AngleBisectors => Reveal::Incircle(incircle(tri)),
        }
    }
}

/// Which of the three lines have been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct ConstructionProgress {
    pub a: bool,
    pub b: bool,
    pub c: bool,
}

impl ConstructionProgress {
    #[must_use]
    pub fn is_drawn(&self, key: Vertex) -> bool {
        match key {
            Vertex::A => self.a,
            Vertex::B => self.b,
            Vertex::C => self.c,
        }
    }

    /// Mark `key` drawn. Returns `false` if it already was.
    pub fn mark(&mut self, key: Vertex) -> bool {
        let slot = match key {
            Vertex::A => &mut self.a,
            Vertex::B => &mut self.b,
            Vertex::C => &mut self.c,
        };
        let fresh = !*slot;
        *slot = true;
        fresh
    }

    #[must_use]
    pub fn drawn_count(&self) -> usize {
        Vertex::ALL.iter().filter(|v| self.is_drawn(**v)).count()
    }

    #[must_use]
    pub fn state(&self) -> ConstructionState {
        match self.drawn_count() {
            0 => ConstructionState::NotStarted,
            3 => ConstructionState::Complete,
            _ => ConstructionState::PartiallyDrawn,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == ConstructionState::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionState {
    NotStarted,
    PartiallyDrawn,
    Complete,
}

/// Result of a construction click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// The vertex became the pending selection.
    Selected(Vertex),
    /// The pending selection was cleared by clicking it again.
    Deselected(Vertex),
    /// A line was drawn; more remain.
    Committed(Vertex),
    /// The last line was drawn and the center is now revealed.
    Completed(Vertex),
}

impl ClickOutcome {
    /// Whether the click changed any state.
    #[must_use]
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A clickable construction target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub key: Vertex,
    pub point: Point,
    /// The target accepts the next click.
    pub highlighted: bool,
}

/// An auxiliary line that has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawnElement {
    Median(Segment),
    Altitude(Altitude),
    PerpendicularBisector(Segment),
    AngleBisector(Segment),
}

/// The center shown once a construction is complete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reveal {
    /// The centroid, with median A split at it in the ratio 2:1.
    Centroid {
        center: Point,
        vertex_part: Segment,
        midpoint_part: Segment,
    },
    /// The orthocenter, joined to each vertex.
    Orthocenter { center: Point, spokes: [Segment; 3] },
    Circumcircle(Circle),
    Incircle(Circle),
}

impl Reveal {
    #[must_use]
    pub fn center(&self) -> Point {
        match self {
            Self::Centroid { center, .. } | Self::Orthocenter { center, .. } => *center,
            Self::Circumcircle(circle) | Self::Incircle(circle) => circle.center,
        }
    }
}

/// Progress through one construction, plus the pending vertex selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidedConstruction {
    kind: ConstructionKind,
    progress: ConstructionProgress,
    pending: Option<Vertex>,
}

impl GuidedConstruction {
    #[must_use]
    pub fn new(kind: ConstructionKind) -> Self {
        Self { kind, progress: ConstructionProgress::default(), pending: None }
    }

    #[must_use]
    pub fn kind(&self) -> ConstructionKind {
        self.kind
    }

    #[must_use]
    pub fn progress(&self) -> ConstructionProgress {
        self.progress
    }

    #[must_use]
    pub fn pending(&self) -> Option<Vertex> {
        self.pending
    }

    #[must_use]
    pub fn state(&self) -> ConstructionState {
        self.progress.state()
    }

    /// Handle a click on a triangle vertex.
    pub fn click_vertex(&mut self, v: Vertex) -> ClickOutcome {
        if self.progress.is_drawn(v) {
            return ClickOutcome::Ignored;
        }
        match self.kind.commit_style() {
            CommitStyle::Vertex => self.commit(v),
            CommitStyle::Target => ClickOutcome::Ignored,
            CommitStyle::SelectThenTarget => {
                if self.pending == Some(v) {
                    self.pending = None;
                    ClickOutcome::Deselected(v)
                } else {
                    self.pending = Some(v);
                    ClickOutcome::Selected(v)
                }
            }
        }
    }

    /// Handle a click on the target keyed `key`.
    pub fn click_target(&mut self, key: Vertex) -> ClickOutcome {
        if self.progress.is_drawn(key) {
            return ClickOutcome::Ignored;
        }
        match self.kind.commit_style() {
            CommitStyle::Target => self.commit(key),
            CommitStyle::Vertex => ClickOutcome::Ignored,
            CommitStyle::SelectThenTarget => {
                if self.pending == Some(key) {
                    self.pending = None;
                    self.commit(key)
                } else {
                    ClickOutcome::Ignored
                }
            }
        }
    }

    fn commit(&mut self, key: Vertex) -> ClickOutcome {
        self.progress.mark(key);
        if self.progress.is_complete() {
            ClickOutcome::Completed(key)
        } else {
            ClickOutcome::Committed(key)
        }
    }

    /// Clear all progress and the pending selection.
    pub fn reset(&mut self) {
        self.progress = ConstructionProgress::default();
        self.pending = None;
    }

    /// Targets currently on display.
    ///
    /// Two-click targets all disappear once the construction is complete;
    /// a direct-click target disappears as soon as its own line is drawn.
    #[must_use]
    pub fn targets(&self, tri: &Triangle) -> Vec<Target> {
        match self.kind.commit_style() {
            CommitStyle::Vertex => Vec::new(),
            CommitStyle::Target => Vertex::ALL
                .into_iter()
                .filter(|key| !self.progress.is_drawn(*key))
                .filter_map(|key| {
                    let point = self.kind.target_point(tri, key)?;
                    Some(Target { key, point, highlighted: true })
                })
                .collect(),
            CommitStyle::SelectThenTarget => {
                if self.progress.is_complete() {
                    return Vec::new();
                }
                Vertex::ALL
                    .into_iter()
                    .filter_map(|key| {
                        let point = self.kind.target_point(tri, key)?;
                        let highlighted = self.pending == Some(key) && !self.progress.is_drawn(key);
                        Some(Target { key, point, highlighted })
                    })
                    .collect()
            }
        }
    }

    /// Lines drawn so far, in `A, B, C` order.
    #[must_use]
    pub fn drawn_elements(&self, tri: &Triangle) -> Vec<DrawnElement> {
        Vertex::ALL
            .into_iter()
            .filter(|key| self.progress.is_drawn(*key))
            .map(|key| self.kind.element(tri, key))
            .collect()
    }

    /// The named center, once all three lines are drawn.
    #[must_use]
    pub fn reveal(&self, tri: &Triangle) -> Option<Reveal> {
        self.progress.is_complete().then(|| self.kind.reveal(tri))
    }

    /// Cursor over vertex `v` while drawing.
    #[must_use]
    pub fn vertex_cursor(&self, v: Vertex) -> Cursor {
        match self.kind.commit_style() {
            CommitStyle::Target => Cursor::Default,
            _ if self.progress.is_drawn(v) => Cursor::NotAllowed,
            _ => Cursor::Pointer,
        }
    }
}

//! Input model: editing mode, drag targets, cursors, and the drag state machine.
//!
//! `Mode` captures the user's intent when the pointer goes down. `InputState`
//! is the drag being tracked between pointer-down and pointer-up, carrying the
//! context needed to revert or report it on release. Only one drag exists at
//! a time; there is no multi-touch.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use kernel::{Point, Vertex};
use serde::{Deserialize, Serialize};

/// Editing mode for the free-vertex diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Drag vertices around.
    #[default]
    Move,
    /// Click vertices and targets to draw construction lines.
    Draw,
}

/// One of the two hinged arms in the existence diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Left,
    Right,
}

/// Something the pointer can grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    Vertex(Vertex),
    Arm(Arm),
}

/// Cursor hint for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cursor {
    #[default]
    Default,
    Move,
    Pointer,
    NotAllowed,
    Grab,
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A triangle vertex is being moved.
    DraggingVertex {
        vertex: Vertex,
        /// Vertex position when the drag began.
        orig: Point,
    },
    /// A hinge arm is being swung around its pivot.
    DraggingArm {
        arm: Arm,
        /// Arm angle in degrees when the drag began.
        orig_angle_deg: f64,
    },
}

impl InputState {
    /// The grabbed target, if a drag is active.
    #[must_use]
    pub fn target(&self) -> Option<DragTarget> {
        match *self {
            Self::Idle => None,
            Self::DraggingVertex { vertex, .. } => Some(DragTarget::Vertex(vertex)),
            Self::DraggingArm { arm, .. } => Some(DragTarget::Arm(arm)),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

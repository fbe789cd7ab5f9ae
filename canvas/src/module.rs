//! Teaching modules and the per-module strategy table.
//!
//! Every module-dependent behavior of the controller is read from the
//! [`ModuleProfile`] selected on activation. Nothing else branches on a raw
//! [`ModuleId`].

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::construction::ConstructionKind;
use crate::input::Mode;

/// Which teaching scenario a diagram is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Types,
    InternalAngles,
    ExternalAngles,
    MiddleLine,
    Centroid,
    Orthocenter,
    Circumcircle,
    Incircle,
    Existence,
    SideAngleRelation,
}

/// What the pointer edits in a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditingKind {
    /// The three triangle vertices drag freely inside the canvas.
    FreeVertices,
    /// A fixed base with two swinging arms.
    Hinge,
}

/// Module-specific behavior, looked up once per activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleProfile {
    pub default_mode: Mode,
    /// Whether the user may toggle between move and draw.
    pub mode_switchable: bool,
    pub construction: Option<ConstructionKind>,
    pub editing: EditingKind,
}

impl ModuleId {
    pub const ALL: [Self; 10] = [
        Self::Types,
        Self::InternalAngles,
        Self::ExternalAngles,
        Self::MiddleLine,
        Self::Centroid,
        Self::Orthocenter,
        Self::Circumcircle,
        Self::Incircle,
        Self::Existence,
        Self::SideAngleRelation,
    ];

    #[must_use]
    pub fn profile(self) -> ModuleProfile {
        let construction = match self {
            Self::Centroid => Some(ConstructionKind::Medians),
            Self::Orthocenter => Some(ConstructionKind::Altitudes),
            Self::Circumcircle => Some(ConstructionKind::PerpendicularBisectors),
            Self::Incircle => Some(ConstructionKind::AngleBisectors),
            _ => None,
        };
        let editing = if self == Self::Existence { EditingKind::Hinge } else { EditingKind::FreeVertices };
        ModuleProfile {
            default_mode: if construction.is_some() { Mode::Draw } else { Mode::Move },
            mode_switchable: construction.is_some(),
            construction,
            editing,
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::InternalAngles => "internal-angles",
            Self::ExternalAngles => "external-angles",
            Self::MiddleLine => "middle-line",
            Self::Centroid => "centroid",
            Self::Orthocenter => "orthocenter",
            Self::Circumcircle => "circumcircle",
            Self::Incircle => "incircle",
            Self::Existence => "existence",
            Self::SideAngleRelation => "side-angle-relation",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module: {0}")]
pub struct UnknownModule(pub String);

impl FromStr for ModuleId {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.slug() == s)
            .ok_or_else(|| UnknownModule(s.to_owned()))
    }
}

//! The proof animations a sequencer can play.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use kernel::Vertex;
use serde::{Deserialize, Serialize};

/// Which proof visualization is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofMode {
    /// Extension rays and exterior-angle arcs at B, C, then A.
    Definition,
    /// Interior and exterior angle at each vertex summing to 180°.
    Supplementary,
    /// Two interior wedges moved into the third vertex's exterior gap.
    Theorem,
    /// The three exterior wedges gathered around one point.
    Sum360,
    /// The three interior wedges torn off and laid along a straight line.
    AngleSum,
}

impl ProofMode {
    pub const ALL: [Self; 5] = [Self::Definition, Self::Supplementary, Self::Theorem, Self::Sum360, Self::AngleSum];

    /// Whether playback waits for an explicit start after mount.
    #[must_use]
    pub fn requires_manual_start(self) -> bool {
        matches!(self, Self::Definition | Self::Supplementary)
    }

    /// Lead-in before an auto-started timeline begins on mount. Restarts
    /// skip it.
    #[must_use]
    pub fn mount_delay(self) -> Duration {
        match self {
            Self::AngleSum => Duration::from_millis(500),
            _ => Duration::ZERO,
        }
    }

    /// Vertex highlighted before the first phase cue fires.
    #[must_use]
    pub fn initial_variant(self) -> Vertex {
        match self {
            Self::Theorem => Vertex::A,
            _ => Vertex::B,
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Supplementary => "supplementary",
            Self::Theorem => "theorem",
            Self::Sum360 => "sum360",
            Self::AngleSum => "angle-sum",
        }
    }
}

impl fmt::Display for ProofMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown proof mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for ProofMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.slug() == s)
            .ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

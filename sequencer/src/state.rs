//! Display state driven by a timeline.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use kernel::Vertex;
use serde::{Deserialize, Serialize};

use crate::mode::ProofMode;

/// One scheduled change to [`AnimationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Switch the demonstrated vertex.
    Focus(Vertex),
    Step(u8),
    Finish,
}

/// What the renderer reads for one mounted proof visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    pub step: u8,
    pub active_variant: Vertex,
    pub has_started: bool,
    pub is_finished: bool,
}

impl AnimationState {
    /// State right after mount, before any cue fires.
    #[must_use]
    pub fn initial(mode: ProofMode) -> Self {
        Self {
            step: 0,
            active_variant: mode.initial_variant(),
            has_started: !mode.requires_manual_start(),
            is_finished: false,
        }
    }

    /// State at the instant a timeline is armed by start or restart.
    #[must_use]
    pub fn armed(mode: ProofMode) -> Self {
        Self { has_started: true, ..Self::initial(mode) }
    }

    /// Apply `effect`, returning whether anything changed.
    pub fn apply(&mut self, effect: Effect) -> bool {
        let before = *self;
        match effect {
            Effect::Focus(v) => self.active_variant = v,
            Effect::Step(step) => self.step = step,
            Effect::Finish => self.is_finished = true,
        }
        *self != before
    }
}

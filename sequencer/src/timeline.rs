//! Declarative timelines: every cue carries an absolute offset from the
//! moment the timeline is armed.
//!
//! DESIGN
//! ======
//! Offsets are never chained. A phase that starts late because the host was
//! busy does not push later phases back; each cue fires at `armed + at`.
//! Cues sharing an offset are applied together, in listed order.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::time::Duration;

use kernel::Vertex;
use serde::Serialize;

use crate::mode::ProofMode;
use crate::state::{AnimationState, Effect};

/// One effect scheduled at an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cue {
    pub at: Duration,
    pub effect: Effect,
}

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

const fn cue(at: Duration, effect: Effect) -> Cue {
    Cue { at, effect }
}

// ── Phase shapes ──────────────────────────────────────────────

const SUPPLEMENTARY_PHASE: Duration = ms(5000);
const SUPPLEMENTARY_ORDER: [Vertex; 3] = [Vertex::B, Vertex::C, Vertex::A];
const SUPPLEMENTARY_STEPS: [Duration; 4] = [ms(0), ms(500), ms(1500), ms(3000)];

const THEOREM_PHASE: Duration = ms(6000);
const THEOREM_ORDER: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];
const THEOREM_STEPS: [Duration; 4] = [ms(0), ms(500), ms(2000), ms(4000)];

/// An ordered list of cues for one proof mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    mode: ProofMode,
    cues: Vec<Cue>,
}

impl Timeline {
    #[must_use]
    pub fn for_mode(mode: ProofMode) -> Self {
        let cues = match mode {
            ProofMode::Definition => vec![
                cue(ms(0), Effect::Focus(Vertex::B)),
                cue(ms(0), Effect::Step(0)),
                cue(ms(500), Effect::Step(1)),
                cue(ms(1500), Effect::Step(2)),
                cue(ms(3000), Effect::Focus(Vertex::C)),
                cue(ms(3000), Effect::Step(3)),
                cue(ms(4000), Effect::Step(4)),
                cue(ms(5500), Effect::Focus(Vertex::A)),
                cue(ms(5500), Effect::Step(5)),
                cue(ms(6500), Effect::Step(6)),
                cue(ms(7500), Effect::Finish),
            ],
            ProofMode::Supplementary => phased(&SUPPLEMENTARY_ORDER, SUPPLEMENTARY_PHASE, &SUPPLEMENTARY_STEPS),
            ProofMode::Theorem => phased(&THEOREM_ORDER, THEOREM_PHASE, &THEOREM_STEPS),
            ProofMode::Sum360 => vec![
                cue(ms(0), Effect::Step(0)),
                cue(ms(1000), Effect::Step(1)),
                cue(ms(2000), Effect::Step(2)),
                cue(ms(3500), Effect::Step(3)),
                cue(ms(3500), Effect::Finish),
            ],
            ProofMode::AngleSum => vec![
                cue(ms(0), Effect::Step(0)),
                cue(ms(100), Effect::Step(1)),
                cue(ms(1000), Effect::Step(2)),
                cue(ms(2500), Effect::Step(3)),
                cue(ms(2500), Effect::Finish),
            ],
        };
        Self { mode, cues }
    }

    #[must_use]
    pub fn mode(&self) -> ProofMode {
        self.mode
    }

    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Offset of the last cue.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.cues.iter().map(|c| c.at).max().unwrap_or_default()
    }

    /// Cues grouped by offset, in firing order. Each group is one timer.
    #[must_use]
    pub fn batches(&self) -> Vec<(Duration, Vec<Effect>)> {
        let mut batches: Vec<(Duration, Vec<Effect>)> = Vec::new();
        for c in &self.cues {
            match batches.last_mut() {
                Some((at, effects)) if *at == c.at => effects.push(c.effect),
                _ => batches.push((c.at, vec![c.effect])),
            }
        }
        batches
    }

    /// The state `elapsed` after arming, as if every due cue had fired.
    #[must_use]
    pub fn state_at(&self, elapsed: Duration) -> AnimationState {
        let mut state = AnimationState::armed(self.mode);
        for c in self.cues.iter().take_while(|c| c.at <= elapsed) {
            state.apply(c.effect);
        }
        state
    }
}

/// Repeat one phase shape over `order`, starting a new phase every `phase`.
/// Finishes when the last phase's slot ends.
fn phased(order: &[Vertex], phase: Duration, steps: &[Duration]) -> Vec<Cue> {
    let mut cues = Vec::with_capacity(order.len() * (steps.len() + 1) + 1);
    let mut start = Duration::ZERO;
    for &v in order {
        cues.push(cue(start, Effect::Focus(v)));
        for (step, &offset) in (0u8..).zip(steps) {
            cues.push(cue(start + offset, Effect::Step(step)));
        }
        start += phase;
    }
    cues.push(cue(start, Effect::Finish));
    cues
}

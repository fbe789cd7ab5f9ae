//! The timer-driven player for one mounted proof visualization.
//!
//! DESIGN
//! ======
//! Arming a timeline spawns one task per distinct cue offset into the
//! instance's `JoinSet`. Each task sleeps until `armed_at + offset`, so phases
//! never drift relative to each other. Cues at offset zero are applied
//! synchronously while arming.
//!
//! Restart, mode change, cancel and drop abort the whole set. A task that has
//! already woken when it is aborted still checks the arming epoch under the
//! watch lock before publishing, so no effect from a superseded arming can
//! land after the new one is in place.
//!
//! ERROR HANDLING
//! ==============
//! Arming needs a tokio runtime on the calling thread. Without one, arming
//! returns [`SequencerError::NoRuntime`] and the published state is left as
//! it was.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::{self, Instant};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use crate::config::SequencerConfig;
use crate::error::SequencerError;
use crate::mode::ProofMode;
use crate::state::{AnimationState, Effect};
use crate::timeline::Timeline;

/// Plays one [`Timeline`] into a watch channel of [`AnimationState`].
///
/// Every instance owns its timers and state; instances never affect each
/// other.
pub struct Sequencer {
    id: Uuid,
    config: SequencerConfig,
    timeline: Timeline,
    state: Arc<watch::Sender<AnimationState>>,
    epoch: Arc<AtomicU64>,
    timers: JoinSet<()>,
}

impl Sequencer {
    /// A sequencer for `mode` in its pre-mount state. Nothing is scheduled
    /// until [`Self::mount`] or [`Self::start`].
    #[must_use]
    pub fn new(mode: ProofMode, config: SequencerConfig) -> Self {
        let (state, _initial_rx) = watch::channel(AnimationState::initial(mode));
        Self {
            id: Uuid::new_v4(),
            config,
            timeline: Timeline::for_mode(mode),
            state: Arc::new(state),
            epoch: Arc::new(AtomicU64::new(0)),
            timers: JoinSet::new(),
        }
    }

    /// Reset to the mount state. Auto-start modes begin playing after their
    /// lead-in; manual modes wait for [`Self::start`].
    ///
    /// # Errors
    ///
    /// [`SequencerError::NoRuntime`] when an auto-start mode is mounted
    /// outside a tokio runtime.
    pub fn mount(&mut self) -> Result<(), SequencerError> {
        let mode = self.mode();
        if mode.requires_manual_start() {
            self.cancel();
            self.state.send_replace(AnimationState::initial(mode));
            debug!(sequencer = %self.id, %mode, "mounted; waiting for start");
            return Ok(());
        }
        self.arm(AnimationState::initial(mode), mode.mount_delay())?;
        debug!(sequencer = %self.id, %mode, "mounted; auto-started");
        Ok(())
    }

    /// Play from step 0 now.
    ///
    /// # Errors
    ///
    /// [`SequencerError::NoRuntime`] outside a tokio runtime.
    pub fn start(&mut self) -> Result<(), SequencerError> {
        self.arm(AnimationState::armed(self.mode()), Duration::ZERO)?;
        info!(sequencer = %self.id, mode = %self.mode(), "timeline started");
        Ok(())
    }

    /// Cancel every pending cue and replay from step 0 without a lead-in.
    ///
    /// # Errors
    ///
    /// [`SequencerError::NoRuntime`] outside a tokio runtime.
    pub fn restart(&mut self) -> Result<(), SequencerError> {
        self.arm(AnimationState::armed(self.mode()), Duration::ZERO)?;
        info!(sequencer = %self.id, mode = %self.mode(), "timeline restarted");
        Ok(())
    }

    /// Switch to another proof and mount it.
    ///
    /// # Errors
    ///
    /// See [`Self::mount`].
    pub fn set_mode(&mut self, mode: ProofMode) -> Result<(), SequencerError> {
        self.cancel();
        self.timeline = Timeline::for_mode(mode);
        self.mount()
    }

    /// Void every pending cue. The current state is kept.
    pub fn cancel(&mut self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        if !self.timers.is_empty() {
            debug!(sequencer = %self.id, timers = self.timers.len(), "pending cues cancelled");
        }
        self.timers.abort_all();
        self.timers = JoinSet::new();
    }

    fn arm(&mut self, base: AnimationState, lead_in: Duration) -> Result<(), SequencerError> {
        let handle = Handle::try_current().map_err(|_| SequencerError::NoRuntime)?;
        self.cancel();

        let epoch = self.epoch.load(Ordering::Acquire);
        let armed_at = Instant::now();
        let scale = self.config.time_scale();

        let mut immediate = Vec::new();
        let mut scheduled = Vec::new();
        for (at, effects) in self.timeline.batches() {
            let offset = (lead_in + at).div_f64(scale);
            if offset.is_zero() {
                immediate.extend(effects);
            } else {
                scheduled.push((armed_at + offset, effects));
            }
        }

        self.state.send_modify(|state| {
            *state = base;
            for effect in immediate {
                state.apply(effect);
            }
        });

        debug!(
            sequencer = %self.id,
            mode = %self.mode(),
            epoch,
            timers = scheduled.len(),
            ?lead_in,
            "timeline armed"
        );

        for (deadline, effects) in scheduled {
            let state = Arc::clone(&self.state);
            let current = Arc::clone(&self.epoch);
            let (id, mode) = (self.id, self.mode());
            self.timers.spawn_on(
                async move {
                    time::sleep_until(deadline).await;
                    let applied = state.send_if_modified(|s| {
                        if current.load(Ordering::Acquire) != epoch {
                            return false;
                        }
                        effects.iter().fold(false, |changed, &e| s.apply(e) || changed)
                    });
                    if !applied {
                        return;
                    }
                    let now = *state.borrow();
                    trace!(sequencer = %id, step = now.step, variant = ?now.active_variant, "cue applied");
                    if effects.contains(&Effect::Finish) {
                        info!(sequencer = %id, %mode, "timeline finished");
                    }
                },
                &handle,
            );
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn mode(&self) -> ProofMode {
        self.timeline.mode()
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn config(&self) -> SequencerConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        *self.state.borrow()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AnimationState> {
        self.state.subscribe()
    }

    /// Number of cue timers that have not fired yet.
    pub fn pending_timers(&mut self) -> usize {
        while let Some(result) = self.timers.try_join_next() {
            if let Err(err) = result {
                if err.is_panic() {
                    warn!(sequencer = %self.id, error = %err, "cue task panicked");
                }
            }
        }
        self.timers.len()
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        self.cancel();
        debug!(sequencer = %self.id, "unmounted");
    }
}

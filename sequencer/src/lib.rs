//! Timed proof animations.
//!
//! A proof visualization is a [`Timeline`] of cues at absolute offsets,
//! played by a per-instance [`Sequencer`] into a watch channel of
//! [`AnimationState`]. The renderer reads the state, asks
//! [`choreography`] for the matching scene and tweens between frames.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mode`] | The proof animations and their start behavior |
//! | [`state`] | Animation state and the effects that change it |
//! | [`timeline`] | Per-mode cue lists with absolute offsets |
//! | [`player`] | Cancellable timer player, one per mounted proof |
//! | [`choreography`] | Fixed demo triangles and scene placements |
//! | [`config`] | Playback speed from the environment |
//! | [`error`] | [`SequencerError`] |

pub mod choreography;
pub mod config;
pub mod error;
pub mod mode;
pub mod player;
pub mod state;
pub mod timeline;

pub use config::SequencerConfig;
pub use error::SequencerError;
pub use mode::ProofMode;
pub use player::Sequencer;
pub use state::{AnimationState, Effect};
pub use timeline::Timeline;

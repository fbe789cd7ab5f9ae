//! Sequencer error type.

/// Why a timeline could not be armed or configured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SequencerError {
    /// Timers need a tokio runtime; none is running on this thread.
    #[error("no tokio runtime available to schedule animation timers")]
    NoRuntime,
    #[error("{var} is not a number: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("time scale must be within {min}..={max}, got {value}")]
    InvalidTimeScale { value: f64, min: f64, max: f64 },
}

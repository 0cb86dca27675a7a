use hooke_core::StateSequence;

/// Indicates how the stepper terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an approximate integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the stepper terminated.
    pub status: Status,

    /// Displacement at each completed step (including the initial sample).
    pub values: StateSequence,

    /// Number of steps completed.
    pub steps: usize,
}

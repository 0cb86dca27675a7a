//! Closed-form solution of the undamped oscillator.
//!
//! With `ω = sqrt(k/m)` the displacement is
//!
//! ```text
//! y(t) = y0·cos(ωt) + (v0/ω)·sin(ωt)
//! ```
//!
//! When `k = 0` there is no restoring force and the mass moves freely:
//! `y(t) = y0 + v0·t`. Each sample is evaluated independently, so no state is
//! threaded between steps.

use hooke_core::{OscillatorParameters, StateSequence};
use tracing::debug;

use crate::Error;

/// The regime of motion selected by the stiffness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Sinusoidal motion at angular frequency `omega` (rad/s).
    Harmonic { omega: f64 },

    /// Uniform straight-line motion (`k = 0`).
    Free,
}

impl Motion {
    /// Selects the regime for the given parameters.
    #[must_use]
    pub fn of(params: &OscillatorParameters) -> Self {
        let omega = params.omega_squared().sqrt();
        if omega > 0.0 {
            Self::Harmonic { omega }
        } else {
            Self::Free
        }
    }
}

/// The exact solution of one initial value problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSolution {
    motion: Motion,
    displacement: f64,
    velocity: f64,
}

impl ExactSolution {
    #[must_use]
    pub fn new(params: &OscillatorParameters) -> Self {
        Self {
            motion: Motion::of(params),
            displacement: params.displacement_si(),
            velocity: params.velocity_si(),
        }
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Displacement (m) at time `t` (s).
    #[must_use]
    pub fn displacement(&self, t: f64) -> f64 {
        let Self {
            motion,
            displacement: y0,
            velocity: v0,
        } = *self;

        match motion {
            Motion::Harmonic { omega } => {
                y0 * (omega * t).cos() + v0 / omega * (omega * t).sin()
            }
            Motion::Free => y0 + v0 * t,
        }
    }

    /// Velocity (m/s) at time `t` (s).
    #[must_use]
    pub fn velocity(&self, t: f64) -> f64 {
        let Self {
            motion,
            displacement: y0,
            velocity: v0,
        } = *self;

        match motion {
            Motion::Harmonic { omega } => {
                -y0 * omega * (omega * t).sin() + v0 * (omega * t).cos()
            }
            Motion::Free => v0,
        }
    }
}

/// Evaluates the exact displacement at every step of the grid.
///
/// Returns `params.steps() + 1` samples, the first of which is exactly `y0`.
#[must_use]
pub fn solve(params: &OscillatorParameters) -> StateSequence {
    let solution = ExactSolution::new(params);
    debug!(steps = params.steps(), motion = ?solution.motion(), "evaluating exact solution");

    let values = (0..params.sample_count())
        .map(|i| solution.displacement(params.time_at(i)))
        .collect();

    StateSequence::new(params.step_si(), values)
}

/// Evaluates the exact displacement from raw SI values.
///
/// This is the flat form of [`solve`] for callers that hold loose numbers.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the step count is negative, the
/// mass is not positive, the stiffness is negative, the step size is not
/// positive, or any value is not finite.
pub fn values(
    step_count: i64,
    stiffness: f64,
    mass: f64,
    displacement: f64,
    velocity: f64,
    step_size: f64,
) -> Result<StateSequence, Error> {
    let params = OscillatorParameters::from_si(
        step_count,
        stiffness,
        mass,
        displacement,
        velocity,
        step_size,
    )?;

    Ok(solve(&params))
}

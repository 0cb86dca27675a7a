//! Coefficient-driven explicit two-step stepper for the oscillator.
//!
//! The stepper advances `y'' = f(y) = -(k/m)·y` with the explicit two-step
//! hybrid formula defined by a [`MethodCoefficients`] table (see
//! [`hooke_core::Tableau`] for the layout):
//!
//! ```text
//! Y_i     = (1 + c_i)·y_n - c_i·y_{n-1} + h²·Σ_{j<i} a_ij·f(Y_j)
//! y_{n+1} = 2·y_n - y_{n-1} + h²·Σ_i b_i·f(Y_i)
//! ```
//!
//! The table is always a parameter, so swapping methods never touches the
//! recurrence.
//!
//! # Startup
//!
//! Sample 0 is `y0`. The recurrence needs a previous sample, so it is primed
//! with `y_{-1}` from a backward Taylor expansion of the ODE, built from `y0`,
//! `v0`, and `k/m` and summed until further terms vanish in `f64`. Priming
//! never looks at the table, so its declared order is metadata only. Every
//! sample from step 1 onward comes from the table.
//!
//! # Example
//!
//! ```
//! use hooke_core::OscillatorParameters;
//! use hooke_solvers::{approximate, methods};
//!
//! let params = OscillatorParameters::builder().build()?;
//! let solution = approximate::solve_unobserved(&params, &methods::extended_numerov())?;
//!
//! assert_eq!(solution.values.len(), 101);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod event;
mod solution;
mod startup;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use std::time::Instant;

use hooke_core::{MethodCoefficients, Observer, OscillatorParameters, StateSequence, Tableau};
use tracing::{debug, trace};

use crate::Error;

/// Integrates the oscillator with the given coefficient table.
///
/// # Algorithm
///
/// 1. Parse the table into a [`Tableau`], rejecting malformed tables.
/// 2. Emit the initial sample `y0` as step 0.
/// 3. Prime `y_{-1}` from the backward Taylor expansion.
/// 4. For each step, evaluate the stages in order, combine them with the
///    weights, and emit an [`Event`].
///
/// # Observer
///
/// The observer receives an [`Event`] for every sample, starting with step 0,
/// and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the table does not supply a valid
/// tableau.
pub fn solve<Obs>(
    params: &OscillatorParameters,
    coefficients: &MethodCoefficients,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let tableau = coefficients.tableau()?;

    let started = Instant::now();
    debug!(
        method = coefficients.name(),
        stages = tableau.stages(),
        steps = params.steps(),
        "stepping approximate solution"
    );

    let h = params.step_si();
    let h2 = h * h;
    let omega_squared = params.omega_squared();
    let y0 = params.displacement_si();

    let mut values = Vec::with_capacity(params.sample_count());
    values.push(y0);

    let event = Event {
        step: 0,
        time: 0.0,
        displacement: y0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            values: StateSequence::new(h, values),
            steps: 0,
        });
    }

    let mut previous = startup::prime(omega_squared, y0, params.velocity_si(), h);
    let mut current = y0;
    let mut forces = vec![0.0; tableau.stages()];

    for step in 1..=params.steps() {
        let next = advance(&tableau, omega_squared, h2, previous, current, &mut forces);
        values.push(next);
        trace!(step, displacement = next);

        let event = Event {
            step,
            time: params.time_at(step),
            displacement: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "approximate stepping stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                values: StateSequence::new(h, values),
                steps: step,
            });
        }

        previous = current;
        current = next;
    }

    debug!(elapsed = ?started.elapsed(), "approximate stepping complete");

    Ok(Solution {
        status: Status::Complete,
        values: StateSequence::new(h, values),
        steps: params.steps(),
    })
}

/// Integrates the oscillator without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events, so the
/// solution always holds `params.steps() + 1` values.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the table does not supply a valid
/// tableau.
pub fn solve_unobserved(
    params: &OscillatorParameters,
    coefficients: &MethodCoefficients,
) -> Result<Solution, Error> {
    solve(params, coefficients, ())
}

/// Integrates the oscillator from raw SI values.
///
/// This is the flat form of [`solve_unobserved`] for callers that hold loose
/// numbers. The result always has `step_count + 1` values.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the step count is negative, a
/// physical parameter is invalid, or the table does not supply a valid tableau.
pub fn values(
    step_count: i64,
    stiffness: f64,
    mass: f64,
    displacement: f64,
    velocity: f64,
    step_size: f64,
    coefficients: &MethodCoefficients,
) -> Result<StateSequence, Error> {
    let params = OscillatorParameters::from_si(
        step_count,
        stiffness,
        mass,
        displacement,
        velocity,
        step_size,
    )?;

    Ok(solve_unobserved(&params, coefficients)?.values)
}

/// Applies the recurrence once, returning `y_{n+1}`.
///
/// `forces` is scratch space with one slot per stage.
fn advance(
    tableau: &Tableau<'_>,
    omega_squared: f64,
    h2: f64,
    previous: f64,
    current: f64,
    forces: &mut [f64],
) -> f64 {
    for (i, &c) in tableau.nodes().iter().enumerate() {
        let coupling: f64 = tableau
            .row(i)
            .iter()
            .zip(&forces[..i])
            .map(|(a, f)| a * f)
            .sum();

        let stage = (1.0 + c) * current - c * previous + h2 * coupling;
        forces[i] = -omega_squared * stage;
    }

    let weighted: f64 = tableau
        .weights()
        .iter()
        .zip(forces.iter())
        .map(|(b, f)| b * f)
        .sum();

    2.0 * current - previous + h2 * weighted
}

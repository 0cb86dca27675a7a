//! Runs both solvers on one problem and compares them.
//!
//! A [`Comparison`] evaluates the exact solution and the approximate stepper
//! for the same [`OscillatorParameters`], times each solver, and reduces the
//! pair to an [`Analysis`]. The [`Report`] it returns carries everything a
//! front end needs to display the run: per-step rows, the global error, the
//! compute times, and index windows for plotting.
//!
//! # Example
//!
//! ```
//! use hooke_core::OscillatorParameters;
//! use hooke_solvers::{comparison::{Comparison, Execution}, methods};
//!
//! let params = OscillatorParameters::builder().build()?;
//! let report = Comparison::new(params, methods::extended_numerov())
//!     .execution(Execution::Concurrent)
//!     .run()?;
//!
//! assert!(report.analysis.global.value < 1e-8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    panic,
    thread,
    time::{Duration, Instant},
};

use hooke_core::{MethodCoefficients, OscillatorParameters, StateSequence};
use tracing::debug;

use crate::{
    Error,
    analysis::{self, Analysis},
    approximate, exact,
};

/// How the two solvers are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Exact first, then approximate, on the calling thread.
    #[default]
    Sequential,

    /// Both solvers on scoped threads.
    Concurrent,
}

/// A configured comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    params: OscillatorParameters,
    coefficients: MethodCoefficients,
    execution: Execution,
}

/// Wall time spent in each solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub exact: Duration,
    pub approximate: Duration,
}

/// The outcome of a comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub exact: StateSequence,
    pub approximate: StateSequence,
    pub analysis: Analysis,
    pub timings: Timings,
}

/// One step of a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub step: usize,
    pub exact: f64,
    pub approximate: f64,
    pub difference: f64,
}

/// Samples `[from, to)` of a report, paired with their times.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<'a> {
    pub times: Vec<f64>,
    pub exact: &'a [f64],
    pub approximate: &'a [f64],
}

impl Comparison {
    #[must_use]
    pub fn new(params: OscillatorParameters, coefficients: MethodCoefficients) -> Self {
        Self {
            params,
            coefficients,
            execution: Execution::default(),
        }
    }

    /// Sets how the solvers are scheduled.
    #[must_use]
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    #[must_use]
    pub fn params(&self) -> &OscillatorParameters {
        &self.params
    }

    #[must_use]
    pub fn coefficients(&self) -> &MethodCoefficients {
        &self.coefficients
    }

    /// Runs both solvers and analyzes the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the coefficient table is
    /// malformed.
    pub fn run(&self) -> Result<Report, Error> {
        debug!(
            method = self.coefficients.name(),
            steps = self.params.steps(),
            execution = ?self.execution,
            "running comparison"
        );

        let (exact, approximate, timings) = match self.execution {
            Execution::Sequential => {
                let (exact, exact_time) = timed(|| exact::solve(&self.params));
                let (approximate, approximate_time) = timed(|| {
                    approximate::solve_unobserved(&self.params, &self.coefficients)
                });
                (
                    exact,
                    approximate?,
                    Timings {
                        exact: exact_time,
                        approximate: approximate_time,
                    },
                )
            }
            Execution::Concurrent => {
                let ((exact, exact_time), (approximate, approximate_time)) =
                    thread::scope(|scope| {
                        let exact = scope.spawn(|| timed(|| exact::solve(&self.params)));
                        let approximate = scope.spawn(|| {
                            timed(|| {
                                approximate::solve_unobserved(&self.params, &self.coefficients)
                            })
                        });
                        (join(exact), join(approximate))
                    });
                (
                    exact,
                    approximate?,
                    Timings {
                        exact: exact_time,
                        approximate: approximate_time,
                    },
                )
            }
        };

        let analysis = analysis::compare(&exact, &approximate.values)?;
        debug!(
            global_error = analysis.global.value,
            at_step = analysis.global.step,
            exact_time = ?timings.exact,
            approximate_time = ?timings.approximate,
            "comparison complete"
        );

        Ok(Report {
            exact,
            approximate: approximate.values,
            analysis,
            timings,
        })
    }
}

impl Report {
    /// Number of samples in each sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Iterates over the report one step at a time.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row> + '_ {
        self.exact
            .iter()
            .zip(self.approximate.iter())
            .zip(self.analysis.errors.iter())
            .enumerate()
            .map(|(step, ((exact, approximate), difference))| Row {
                step,
                exact,
                approximate,
                difference,
            })
    }

    /// Returns samples `[from, to)` for plotting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowOutOfRange`] if `from > to` or `to` exceeds the
    /// number of samples. The window is never clamped.
    pub fn window(&self, from: usize, to: usize) -> Result<Window<'_>, Error> {
        let len = self.len();
        if from > to || to > len {
            return Err(Error::WindowOutOfRange { from, to, len });
        }

        Ok(Window {
            times: (from..to).map(|i| self.exact.time_at(i)).collect(),
            exact: &self.exact.as_slice()[from..to],
            approximate: &self.approximate.as_slice()[from..to],
        })
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

/// Joins a scoped solver thread, re-raising its panic on the caller.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| panic::resume_unwind(payload))
}

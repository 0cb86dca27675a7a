//! Shared fixtures for the cross-crate tests.

use hooke_core::{MethodCoefficients, OscillatorParameters};
use hooke_solvers::{analysis, approximate, exact};

/// Documented global error of the reference case.
///
/// The extended Numerov table reproduces it to within
/// [`REFERENCE_TOLERANCE`], not exactly: it is a calibrated sixth-order table
/// whose own value sits 2.3e-4 (relative) above this one.
pub const REFERENCE_GLOBAL_ERROR: f64 = 2.35155e-9;

/// Relative tolerance against [`REFERENCE_GLOBAL_ERROR`].
pub const REFERENCE_TOLERANCE: f64 = 5e-4;

/// Global error of the extended Numerov table on the reference case,
/// evaluated with 50 significant digits.
pub const HIGH_PRECISION_GLOBAL_ERROR: f64 = 2.352_050_560_843_315e-9;

/// `k = 1`, `m = 4`, `y0 = 1`, `v0 = 5`, `h = 0.2`, 100 steps.
#[must_use]
pub fn reference_case() -> OscillatorParameters {
    OscillatorParameters::builder()
        .build()
        .expect("reference case is valid")
}

/// Global error of `table` on the reference oscillator over `duration`
/// seconds with step size `h`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn global_error_over(table: &MethodCoefficients, h: f64, duration: f64) -> f64 {
    let params = reference_case()
        .to_builder()
        .step_si(h)
        .steps((duration / h).round() as usize)
        .build()
        .expect("step size is positive");

    let exact = exact::solve(&params);
    let approximate = approximate::solve_unobserved(&params, table)
        .expect("table is well formed")
        .values;

    analysis::compare(&exact, &approximate)
        .expect("solvers return equal lengths")
        .global
        .value
}

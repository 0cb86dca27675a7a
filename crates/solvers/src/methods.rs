//! Built-in coefficient tables for the approximate stepper.
//!
//! Each table is an explicit two-step hybrid method laid out in the order
//! described in [`hooke_core::Tableau`]: nodes, then the strictly lower coupling
//! matrix by row, then weights. All three are symmetric, so on the oscillator
//! they neither damp nor amplify the solution; their error is pure phase lag.

use hooke_core::MethodCoefficients;

/// Canonical name of the Störmer–Verlet table.
pub const STORMER_NAME: &str = "stormer";

/// Canonical name of the explicit Numerov table.
pub const NUMEROV_NAME: &str = "numerov";

/// Canonical name of the extended Numerov table.
pub const EXTENDED_NUMEROV_NAME: &str = "extended-numerov";

/// Störmer–Verlet: `y_{n+1} = 2·y_n - y_{n-1} + h²·f(y_n)`.
///
/// One stage, second order.
pub const STORMER: [f64; 2] = [
    0.0, // c_1
    1.0, // b_1
];

/// Explicit Numerov with a Störmer predictor.
///
/// The third stage predicts `y_{n+1}` so the implicit Numerov weights
/// `(1, 10, 1)/12` can be applied explicitly. Three stages, fourth order.
pub const NUMEROV: [f64; 9] = [
    -1.0, 0.0, 1.0, // c
    0.0, // a_21
    0.0, 1.0, // a_31, a_32
    1.0 / 12.0, 10.0 / 12.0, 1.0 / 12.0, // b
];

/// Extended Numerov.
///
/// Adds a Numerov-corrected prediction of `y_{n+1}` as a fourth stage and
/// splits the `f_{n+1}` weight between the two predictions. On the oscillator
/// its amplification matches `cos(ωh)` through `(ωh)⁶`, which makes it sixth
/// order there.
pub const EXTENDED_NUMEROV: [f64; 14] = [
    -1.0, 0.0, 1.0, 1.0, // c
    0.0, // a_21
    0.0, 1.0, // a_31, a_32
    1.0 / 12.0, 10.0 / 12.0, 1.0 / 12.0, // a_41, a_42, a_43
    1.0 / 12.0, 5.0 / 6.0, 1.0 / 20.0, 1.0 / 30.0, // b
];

#[must_use]
pub fn stormer() -> MethodCoefficients {
    MethodCoefficients::new(STORMER_NAME, 2, STORMER)
}

#[must_use]
pub fn numerov() -> MethodCoefficients {
    MethodCoefficients::new(NUMEROV_NAME, 4, NUMEROV)
}

#[must_use]
pub fn extended_numerov() -> MethodCoefficients {
    MethodCoefficients::new(EXTENDED_NUMEROV_NAME, 6, EXTENDED_NUMEROV)
}

/// All built-in tables, lowest order first.
#[must_use]
pub fn all() -> [MethodCoefficients; 3] {
    [stormer(), numerov(), extended_numerov()]
}

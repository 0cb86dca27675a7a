//! Pointwise comparison of exact and approximate sequences.

use hooke_core::{ErrorSequence, GlobalError, StateSequence};

use crate::Error;

/// The result of comparing two sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// `|exact_i - approximate_i|` for every step.
    pub errors: ErrorSequence,

    /// The maximum of `errors` and where it occurs.
    pub global: GlobalError,
}

/// Computes pointwise absolute errors and reduces them to the global error.
///
/// A NaN difference makes the global error NaN rather than being skipped.
/// Two empty sequences yield an empty error sequence and a global error of
/// zero at step 0.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the sequences differ in length. They are
/// never truncated to a common length.
pub fn compare(exact: &StateSequence, approximate: &StateSequence) -> Result<Analysis, Error> {
    if exact.len() != approximate.len() {
        return Err(Error::ShapeMismatch {
            exact: exact.len(),
            approximate: approximate.len(),
        });
    }

    let errors: Vec<f64> = exact
        .iter()
        .zip(approximate.iter())
        .map(|(e, a)| (e - a).abs())
        .collect();

    let global = errors.iter().enumerate().fold(
        GlobalError {
            value: 0.0,
            step: 0,
        },
        |worst, (step, &value)| {
            if worst.value.is_nan() || !(value > worst.value || value.is_nan()) {
                worst
            } else {
                GlobalError { value, step }
            }
        },
    );

    Ok(Analysis {
        errors: ErrorSequence::new(errors),
        global,
    })
}

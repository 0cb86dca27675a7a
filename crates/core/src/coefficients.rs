//! Method coefficient tables and their two-step hybrid interpretation.
//!
//! A [`MethodCoefficients`] value is an ordered array of real numbers that
//! identifies one explicit two-step hybrid (Numerov-type) formula for
//! `y'' = f(y)`. For a method with `s` stages the coefficients are consumed in
//! this order:
//!
//! ```text
//! c_1 .. c_s                         nodes
//! a_21, a_31, a_32, .., a_s(s-1)     strictly lower coupling matrix, by row
//! b_1 .. b_s                         weights
//! ```
//!
//! so a table with `s` stages holds exactly `s(s+3)/2` values. The formula they
//! define advances a pair of consecutive samples `(y_{n-1}, y_n)`:
//!
//! ```text
//! Y_i     = (1 + c_i)·y_n - c_i·y_{n-1} + h²·Σ_{j<i} a_ij·f(Y_j)
//! y_{n+1} = 2·y_n - y_{n-1} + h²·Σ_i b_i·f(Y_i)
//! ```
//!
//! [`Tableau`] is the typed, validated view of a table.

use thiserror::Error;

/// Minimum number of coefficients in a table: one node and one weight.
pub const MIN_COEFFICIENTS: usize = 2;

/// Errors raised when a coefficient table cannot be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoefficientError {
    #[error("expected at least {required} coefficients, got {supplied}")]
    TooFew { supplied: usize, required: usize },

    #[error("{supplied} coefficients do not match any stage count (expected s(s+3)/2)")]
    Arity { supplied: usize },

    #[error("coefficient at index {index} is not finite")]
    NonFinite { index: usize },
}

/// An ordered table of method coefficients.
///
/// The table is opaque to its holder: it carries a display name, the order of
/// accuracy the method claims, and the raw values in consumption order. It is
/// only interpreted when parsed into a [`Tableau`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCoefficients {
    name: String,
    order: u32,
    values: Vec<f64>,
}

impl MethodCoefficients {
    /// Creates a coefficient table.
    ///
    /// No validation happens here; the stepper checks the table on entry.
    #[must_use]
    pub fn new(name: impl Into<String>, order: u32, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            order,
            values: values.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The global order of accuracy the method claims.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses the table into its typed view.
    ///
    /// # Errors
    ///
    /// See [`Tableau::parse`].
    pub fn tableau(&self) -> Result<Tableau<'_>, CoefficientError> {
        Tableau::parse(&self.values)
    }
}

/// A validated view of an `s`-stage explicit two-step hybrid method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tableau<'a> {
    nodes: &'a [f64],
    matrix: &'a [f64],
    weights: &'a [f64],
}

impl<'a> Tableau<'a> {
    /// Splits an ordered coefficient array into nodes, coupling matrix, and weights.
    ///
    /// # Errors
    ///
    /// Returns a [`CoefficientError`] if fewer than [`MIN_COEFFICIENTS`] values
    /// are supplied, if the length is not `s(s+3)/2` for any stage count `s`,
    /// or if any coefficient is not finite.
    pub fn parse(values: &'a [f64]) -> Result<Self, CoefficientError> {
        if values.len() < MIN_COEFFICIENTS {
            return Err(CoefficientError::TooFew {
                supplied: values.len(),
                required: MIN_COEFFICIENTS,
            });
        }

        let stages = stage_count(values.len()).ok_or(CoefficientError::Arity {
            supplied: values.len(),
        })?;

        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(CoefficientError::NonFinite { index });
        }

        let (nodes, rest) = values.split_at(stages);
        let (matrix, weights) = rest.split_at(rest.len() - stages);

        Ok(Self {
            nodes,
            matrix,
            weights,
        })
    }

    #[must_use]
    pub fn stages(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes `c_i`, one per stage.
    #[must_use]
    pub fn nodes(&self) -> &'a [f64] {
        self.nodes
    }

    /// Weights `b_i`, one per stage.
    #[must_use]
    pub fn weights(&self) -> &'a [f64] {
        self.weights
    }

    /// Coupling coefficients `a_i0 .. a_i(i-1)` of stage `i` (zero-based).
    ///
    /// The first stage has an empty row.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.stages()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &'a [f64] {
        assert!(i < self.stages(), "stage {i} out of range");
        let start = i * (i.saturating_sub(1)) / 2;
        &self.matrix[start..start + i]
    }
}

/// Returns the stage count `s` with `s(s+3)/2 == len`, if there is one.
fn stage_count(len: usize) -> Option<usize> {
    (1..)
        .map(|s: usize| (s, s * (s + 3) / 2))
        .take_while(|&(_, size)| size <= len)
        .find_map(|(s, size)| (size == len).then_some(s))
}

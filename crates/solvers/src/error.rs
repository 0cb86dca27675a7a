use hooke_core::{CoefficientError, ParameterError};
use thiserror::Error;

/// Errors returned by the solvers and the error analyzer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("shape mismatch: exact sequence has {exact} values, approximate has {approximate}")]
    ShapeMismatch { exact: usize, approximate: usize },

    #[error("window [{from}, {to}) is out of range for {len} samples")]
    WindowOutOfRange { from: usize, to: usize, len: usize },
}

impl From<CoefficientError> for Error {
    fn from(err: CoefficientError) -> Self {
        Self::InvalidParameter(ParameterError::Coefficients(err))
    }
}

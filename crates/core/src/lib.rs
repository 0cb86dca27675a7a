//! Core types for the Hooke oscillator toolkit.
//!
//! This crate defines the shared values that solvers and front ends build on:
//!
//! - [`OscillatorParameters`]: a validated, immutable description of an
//!   undamped spring-mass system and its time grid
//! - [`StateSequence`], [`ErrorSequence`], [`GlobalError`]: per-step results
//!   and their reduction
//! - [`MethodCoefficients`] and [`Tableau`]: an ordered coefficient table and
//!   its typed two-step hybrid interpretation
//! - [`Observer`]: receives solver events and optionally returns control actions

mod coefficients;
mod observer;
mod parameters;
mod sequence;

pub use coefficients::{CoefficientError, MIN_COEFFICIENTS, MethodCoefficients, Tableau};
pub use observer::Observer;
pub use parameters::{OscillatorParameters, ParameterError, ParametersBuilder, Stiffness};
pub use sequence::{ErrorSequence, GlobalError, StateSequence};

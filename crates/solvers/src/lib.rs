//! Solvers for the undamped spring-mass oscillator.
//!
//! The pipeline has three stages:
//!
//! - [`exact`]: evaluates the closed-form solution at every step
//! - [`approximate`]: advances an explicit two-step hybrid recurrence driven by
//!   a caller-supplied coefficient table
//! - [`analysis`]: compares the two sequences pointwise and reduces them to a
//!   global error
//!
//! [`comparison`] runs all three and times the solvers, [`methods`] holds the
//! built-in coefficient tables, and [`registry`] resolves them by name.

mod error;

pub mod analysis;
pub mod approximate;
pub mod comparison;
pub mod exact;
pub mod methods;
pub mod registry;

pub use error::Error;
pub use registry::{MethodRegistry, UnknownMethod};

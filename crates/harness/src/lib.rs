//! Batch harness and front-end controls for the Hooke solvers.
//!
//! The `hooke` binary loads a [`HarnessConfig`], runs a
//! [`Comparison`](hooke_solvers::comparison::Comparison) and prints the
//! per-step report followed by the global error. The [`controls`] module
//! describes the slider panel of an interactive front end.

pub mod cli;
pub mod config;
pub mod controls;
pub mod report;

use std::io::{self, Write};

use hooke_core::ParameterError;
use hooke_solvers::{MethodRegistry, UnknownMethod, comparison::Comparison};
use thiserror::Error;

pub use config::{ConfigError, HarnessConfig};

/// Everything that can stop a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    #[error("invalid oscillator: {0}")]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Solver(#[from] hooke_solvers::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Runs the comparison described by `config` and writes the report.
///
/// # Errors
///
/// Returns a [`HarnessError`] if the method is unknown, the oscillator is
/// invalid, a solver fails, or the report cannot be written.
pub fn run(
    config: &HarnessConfig,
    registry: &MethodRegistry,
    out: impl Write,
) -> Result<(), HarnessError> {
    let table = registry.get(&config.run.method)?;
    let params = config.parameters()?;

    let report = Comparison::new(params, table)
        .execution(config.run.execution())
        .run()?;

    report::write_report(out, &report, config.output.per_step)?;
    Ok(())
}

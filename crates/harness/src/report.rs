//! Plain-text report of a comparison run.
//!
//! Each step is written as `(i, exact) : (i, approximate) : (i, difference)`
//! and the report ends with `Global error: <value>`. Values use Rust's
//! shortest round-trip float formatting, so they parse back exactly.

use std::io::{self, Write};

use hooke_solvers::comparison::{Report, Row};

/// Writes one line per step (if `per_step`) and then the global error line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report(mut out: impl Write, report: &Report, per_step: bool) -> io::Result<()> {
    if per_step {
        for row in report.rows() {
            writeln!(out, "{}", format_row(&row))?;
        }
    }

    writeln!(out, "{}", format_global_error(report.analysis.global.value))
}

#[must_use]
pub fn format_row(row: &Row) -> String {
    let Row {
        step,
        exact,
        approximate,
        difference,
    } = *row;

    format!("({step}, {exact:?}) : ({step}, {approximate:?}) : ({step}, {difference:?})")
}

#[must_use]
pub fn format_global_error(value: f64) -> String {
    format!("Global error: {value:?}")
}

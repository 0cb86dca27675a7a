//! The control surface an interactive front end exposes.
//!
//! A front end shows one slider per [`Control`], each bounded by a
//! [`ControlRange`]. When the user presses update, the raw slider values are
//! gathered into [`ControlValues`] and checked here before any solver runs;
//! a bad combination becomes a [`ControlError`] whose message the front end
//! can show in place of the global error.

use std::time::Duration;

use hooke_core::{OscillatorParameters, ParameterError};
use hooke_solvers::comparison::Report;
use thiserror::Error;

/// One adjustable value on the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Stiffness,
    Mass,
    Displacement,
    Velocity,
    StepSize,
    StopStep,
    GraphFrom,
    GraphTo,
}

/// The inclusive bounds and slider resolution of a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub resolution: f64,
}

impl ControlRange {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::Stiffness,
        Control::Mass,
        Control::Displacement,
        Control::Velocity,
        Control::StepSize,
        Control::StopStep,
        Control::GraphFrom,
        Control::GraphTo,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Control::Stiffness => "Spring Constant, k (N/m)",
            Control::Mass => "Mass, m (kg)",
            Control::Displacement => "Initial Displacement, y0 (m)",
            Control::Velocity => "Velocity, y0' (m/s)",
            Control::StepSize => "Time Step, h (s)",
            Control::StopStep => "Stop Step",
            Control::GraphFrom => "Graph From",
            Control::GraphTo => "Graph To",
        }
    }

    #[must_use]
    pub fn range(self) -> ControlRange {
        let (min, max, resolution) = match self {
            Control::Stiffness => (0.0, 50.0, 0.01),
            Control::Mass => (0.0, 100.0, 0.1),
            Control::Displacement => (-10.0, 10.0, 0.01),
            Control::Velocity => (0.0, 50.0, 0.1),
            Control::StepSize => (0.0, 3.0, 0.01),
            Control::StopStep | Control::GraphFrom | Control::GraphTo => (0.0, 10_000.0, 10.0),
        };
        ControlRange {
            min,
            max,
            resolution,
        }
    }
}

/// Errors raised when control values cannot drive a run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    #[error("{} must be between {} and {}, got {value}", .control.label(), .control.range().min, .control.range().max)]
    OutOfRange { control: Control, value: f64 },

    #[error("graph window [{from}, {to}) is empty or reversed")]
    GraphWindow { from: usize, to: usize },

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Raw values read from the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlValues {
    pub stiffness: f64,
    pub mass: f64,
    pub displacement: f64,
    pub velocity: f64,
    pub step_size: f64,
    pub stop_step: usize,
    pub graph_from: usize,
    pub graph_to: usize,
}

/// What one update produces: a solver problem and the plot window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checked {
    pub params: OscillatorParameters,
    pub graph_from: usize,
    pub graph_to: usize,
}

impl Default for ControlValues {
    /// The values the reset button restores.
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            mass: 4.0,
            displacement: 1.0,
            velocity: 5.0,
            step_size: 0.2,
            stop_step: 1000,
            graph_from: 0,
            graph_to: 25,
        }
    }
}

impl ControlValues {
    /// Reads a control as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, control: Control) -> f64 {
        match control {
            Control::Stiffness => self.stiffness,
            Control::Mass => self.mass,
            Control::Displacement => self.displacement,
            Control::Velocity => self.velocity,
            Control::StepSize => self.step_size,
            Control::StopStep => self.stop_step as f64,
            Control::GraphFrom => self.graph_from as f64,
            Control::GraphTo => self.graph_to as f64,
        }
    }

    /// Checks every control against its range and builds the run.
    ///
    /// The graph window must be non-empty. Its upper end is not compared with
    /// the stop step here; [`Report::window`] rejects a window past the end of
    /// the run.
    ///
    /// # Errors
    ///
    /// Returns a [`ControlError`] naming the first control out of range, a bad
    /// graph window, or a physical value the solvers reject (such as a mass of
    /// zero, which the slider allows).
    pub fn check(&self) -> Result<Checked, ControlError> {
        if let Some(control) = Control::ALL
            .into_iter()
            .find(|&control| !control.range().contains(self.get(control)))
        {
            return Err(ControlError::OutOfRange {
                control,
                value: self.get(control),
            });
        }

        if self.graph_from >= self.graph_to {
            return Err(ControlError::GraphWindow {
                from: self.graph_from,
                to: self.graph_to,
            });
        }

        let params = OscillatorParameters::builder()
            .stiffness_si(self.stiffness)
            .mass_si(self.mass)
            .displacement_si(self.displacement)
            .velocity_si(self.velocity)
            .step_si(self.step_size)
            .steps(self.stop_step)
            .build()?;

        Ok(Checked {
            params,
            graph_from: self.graph_from,
            graph_to: self.graph_to,
        })
    }
}

/// Text for the status labels under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    pub global_error: String,
    pub numerical_time: String,
    pub exact_time: String,
}

impl StatusLabels {
    /// Global error to 10 decimal places, compute times to 4.
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            global_error: format!("Global error: {:.10}", report.analysis.global.value),
            numerical_time: format!(
                "Numerical compute time: {}s",
                seconds(report.timings.approximate)
            ),
            exact_time: format!("Exact value compute time: {}s", seconds(report.timings.exact)),
        }
    }

    /// Labels for a run that was rejected before solving.
    #[must_use]
    pub fn rejected(error: &ControlError) -> Self {
        Self {
            global_error: format!("Global error: {error}"),
            numerical_time: "Numerical compute time:".to_string(),
            exact_time: "Exact value compute time:".to_string(),
        }
    }
}

fn seconds(duration: Duration) -> String {
    format!("{:.4}", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    use hooke_solvers::{
        analysis::Analysis,
        comparison::{Comparison, Timings},
        methods,
    };

    #[test]
    fn reset_values_are_valid() {
        let checked = ControlValues::default().check().unwrap();

        assert_eq!(checked.params.steps(), 1000);
        assert_eq!(checked.params.step_si(), 0.2);
        assert_eq!((checked.graph_from, checked.graph_to), (0, 25));
    }

    #[test]
    fn reset_values_lie_within_their_ranges() {
        let values = ControlValues::default();
        for control in Control::ALL {
            assert!(control.range().contains(values.get(control)), "{control:?}");
        }
    }

    #[test]
    fn out_of_range_values_name_the_control() {
        let values = ControlValues {
            stiffness: 60.0,
            ..ControlValues::default()
        };

        let err = values.check().unwrap_err();
        assert_eq!(
            err,
            ControlError::OutOfRange {
                control: Control::Stiffness,
                value: 60.0
            }
        );
        assert_eq!(
            err.to_string(),
            "Spring Constant, k (N/m) must be between 0 and 50, got 60"
        );
    }

    #[test]
    fn negative_velocity_is_outside_the_slider() {
        let values = ControlValues {
            velocity: -1.0,
            ..ControlValues::default()
        };

        assert!(matches!(
            values.check(),
            Err(ControlError::OutOfRange {
                control: Control::Velocity,
                ..
            })
        ));
    }

    #[test]
    fn zero_mass_is_in_range_but_rejected() {
        let values = ControlValues {
            mass: 0.0,
            ..ControlValues::default()
        };

        assert_eq!(
            values.check(),
            Err(ControlError::Parameter(ParameterError::Mass(0.0)))
        );
    }

    #[test]
    fn zero_step_size_is_rejected() {
        let values = ControlValues {
            step_size: 0.0,
            ..ControlValues::default()
        };

        assert_eq!(
            values.check(),
            Err(ControlError::Parameter(ParameterError::StepSize(0.0)))
        );
    }

    #[test]
    fn empty_graph_window_is_rejected() {
        let values = ControlValues {
            graph_from: 30,
            graph_to: 30,
            ..ControlValues::default()
        };

        assert_eq!(
            values.check(),
            Err(ControlError::GraphWindow { from: 30, to: 30 })
        );
    }

    #[test]
    fn checked_values_drive_a_comparison_and_window() {
        let checked = ControlValues::default().check().unwrap();
        let report = Comparison::new(checked.params, methods::extended_numerov())
            .run()
            .unwrap();

        let window = report.window(checked.graph_from, checked.graph_to).unwrap();
        assert_eq!(window.exact.len(), 25);
        assert!(report.analysis.global.value < 1e-7);
    }

    #[test]
    fn status_labels_round_like_the_panel() {
        let mut report = Comparison::new(
            OscillatorParameters::builder().build().unwrap(),
            methods::extended_numerov(),
        )
        .run()
        .unwrap();
        report.timings = Timings {
            exact: Duration::from_micros(1500),
            approximate: Duration::from_millis(12),
        };
        report.analysis = Analysis {
            global: hooke_core::GlobalError {
                value: 2.35155e-9,
                step: 0,
            },
            ..report.analysis
        };

        let labels = StatusLabels::from_report(&report);
        assert_eq!(labels.global_error, "Global error: 0.0000000024");
        assert_eq!(labels.numerical_time, "Numerical compute time: 0.0120s");
        assert_eq!(labels.exact_time, "Exact value compute time: 0.0015s");
    }

    #[test]
    fn rejected_labels_carry_the_message() {
        let err = ControlError::GraphWindow { from: 5, to: 2 };
        let labels = StatusLabels::rejected(&err);

        assert_eq!(
            labels.global_error,
            "Global error: graph window [5, 2) is empty or reversed"
        );
    }
}

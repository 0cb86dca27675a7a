use thiserror::Error;
use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length, Mass, Time, Velocity},
        force::newton,
        length::meter,
        mass::kilogram,
        time::second,
        velocity::meter_per_second,
    },
    typenum::{N2, P1, Z0},
};

use crate::CoefficientError;

/// Stiffness is a force per unit length (N/m or kg/s²).
pub type Stiffness = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Errors raised when oscillator parameters or a method table are invalid.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("mass must be finite and positive, got {0}")]
    Mass(f64),

    #[error("stiffness must be finite and non-negative, got {0}")]
    Stiffness(f64),

    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("step count must be non-negative, got {0}")]
    NegativeStepCount(i64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("method coefficients: {0}")]
    Coefficients(#[from] CoefficientError),
}

/// An undamped spring-mass oscillator together with its time grid.
///
/// Describes `m·y'' + k·y = 0` with `y(0) = y0` and `y'(0) = v0`, sampled at
/// `t_i = i·h` for `i` in `0..=steps`.
///
/// Values are always valid: construct them with [`OscillatorParameters::builder`]
/// or [`OscillatorParameters::from_si`], both of which check that the mass is
/// positive, the stiffness non-negative, the step size positive, and every
/// quantity finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParameters {
    stiffness: Stiffness,
    mass: Mass,
    displacement: Length,
    velocity: Velocity,
    step: Time,
    steps: usize,
}

/// Builder for [`OscillatorParameters`].
///
/// Starts from the reference case: `k = 1 N/m`, `m = 4 kg`, `y0 = 1 m`,
/// `v0 = 5 m/s`, `h = 0.2 s`, and 100 steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametersBuilder {
    stiffness: Stiffness,
    mass: Mass,
    displacement: Length,
    velocity: Velocity,
    step: Time,
    steps: usize,
}

impl OscillatorParameters {
    /// Returns a builder initialized to the reference case.
    #[must_use]
    pub fn builder() -> ParametersBuilder {
        ParametersBuilder::default()
    }

    /// Creates parameters from raw SI values.
    ///
    /// The step count is signed so that callers holding untyped control values
    /// get a typed error for negative counts instead of a wrapping cast.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any value violates the invariants.
    pub fn from_si(
        step_count: i64,
        stiffness: f64,
        mass: f64,
        displacement: f64,
        velocity: f64,
        step_size: f64,
    ) -> Result<Self, ParameterError> {
        let steps =
            usize::try_from(step_count).map_err(|_| ParameterError::NegativeStepCount(step_count))?;

        Self::builder()
            .stiffness_si(stiffness)
            .mass_si(mass)
            .displacement_si(displacement)
            .velocity_si(velocity)
            .step_si(step_size)
            .steps(steps)
            .build()
    }

    #[must_use]
    pub fn stiffness(&self) -> Stiffness {
        self.stiffness
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Initial displacement `y0`.
    #[must_use]
    pub fn displacement(&self) -> Length {
        self.displacement
    }

    /// Initial velocity `v0`.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Time step `h`.
    #[must_use]
    pub fn step(&self) -> Time {
        self.step
    }

    /// Number of steps after the initial sample.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of samples in a sequence over this grid (`steps + 1`).
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.steps + 1
    }

    #[must_use]
    pub fn stiffness_si(&self) -> f64 {
        self.stiffness.value
    }

    #[must_use]
    pub fn mass_si(&self) -> f64 {
        self.mass.value
    }

    #[must_use]
    pub fn displacement_si(&self) -> f64 {
        self.displacement.value
    }

    #[must_use]
    pub fn velocity_si(&self) -> f64 {
        self.velocity.value
    }

    #[must_use]
    pub fn step_si(&self) -> f64 {
        self.step.value
    }

    /// The ratio `k/m`, which is the squared angular frequency `ω²`.
    ///
    /// This is the coefficient of the restoring term in `y'' = -(k/m)·y`.
    #[must_use]
    pub fn omega_squared(&self) -> f64 {
        self.stiffness.value / self.mass.value
    }

    /// Time in seconds at step index `i`.
    #[must_use]
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.step.value
    }

    /// Returns a builder seeded with these parameters.
    #[must_use]
    pub fn to_builder(&self) -> ParametersBuilder {
        let Self {
            stiffness,
            mass,
            displacement,
            velocity,
            step,
            steps,
        } = *self;

        ParametersBuilder {
            stiffness,
            mass,
            displacement,
            velocity,
            step,
            steps,
        }
    }
}

impl ParametersBuilder {
    /// Sets stiffness from a `Stiffness` quantity.
    #[must_use]
    pub fn stiffness(mut self, stiffness: Stiffness) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets stiffness in SI units (N/m).
    #[must_use]
    pub fn stiffness_si(self, stiffness: f64) -> Self {
        self.stiffness(Force::new::<newton>(stiffness) / Length::new::<meter>(1.0))
    }

    /// Sets mass from a `uom::Mass`.
    #[must_use]
    pub fn mass(mut self, mass: Mass) -> Self {
        self.mass = mass;
        self
    }

    /// Sets mass in SI units (kg).
    #[must_use]
    pub fn mass_si(self, mass: f64) -> Self {
        self.mass(Mass::new::<kilogram>(mass))
    }

    /// Sets the initial displacement from a `uom::Length`.
    #[must_use]
    pub fn displacement(mut self, displacement: Length) -> Self {
        self.displacement = displacement;
        self
    }

    /// Sets the initial displacement in SI units (m).
    #[must_use]
    pub fn displacement_si(self, displacement: f64) -> Self {
        self.displacement(Length::new::<meter>(displacement))
    }

    /// Sets the initial velocity from a `uom::Velocity`.
    #[must_use]
    pub fn velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the initial velocity in SI units (m/s).
    #[must_use]
    pub fn velocity_si(self, velocity: f64) -> Self {
        self.velocity(Velocity::new::<meter_per_second>(velocity))
    }

    /// Sets the time step from a `uom::Time`.
    #[must_use]
    pub fn step(mut self, step: Time) -> Self {
        self.step = step;
        self
    }

    /// Sets the time step in SI units (s).
    #[must_use]
    pub fn step_si(self, step: f64) -> Self {
        self.step(Time::new::<second>(step))
    }

    /// Sets the number of steps after the initial sample.
    #[must_use]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Validates and builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the mass is not positive, the stiffness
    /// is negative, the step size is not positive, or any value is not finite.
    pub fn build(self) -> Result<OscillatorParameters, ParameterError> {
        let Self {
            stiffness,
            mass,
            displacement,
            velocity,
            step,
            steps,
        } = self;

        if !mass.value.is_finite() || mass.value <= 0.0 {
            return Err(ParameterError::Mass(mass.value));
        }
        if !stiffness.value.is_finite() || stiffness.value < 0.0 {
            return Err(ParameterError::Stiffness(stiffness.value));
        }
        if !step.value.is_finite() || step.value <= 0.0 {
            return Err(ParameterError::StepSize(step.value));
        }
        if !displacement.value.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "displacement",
                value: displacement.value,
            });
        }
        if !velocity.value.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "velocity",
                value: velocity.value,
            });
        }

        Ok(OscillatorParameters {
            stiffness,
            mass,
            displacement,
            velocity,
            step,
            steps,
        })
    }
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self {
            stiffness: Force::new::<newton>(1.0) / Length::new::<meter>(1.0),
            mass: Mass::new::<kilogram>(4.0),
            displacement: Length::new::<meter>(1.0),
            velocity: Velocity::new::<meter_per_second>(5.0),
            step: Time::new::<second>(0.2),
            steps: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_builder_is_reference_case() {
        let params = OscillatorParameters::builder().build().unwrap();

        assert_relative_eq!(params.stiffness_si(), 1.0);
        assert_relative_eq!(params.mass_si(), 4.0);
        assert_relative_eq!(params.displacement_si(), 1.0);
        assert_relative_eq!(params.velocity_si(), 5.0);
        assert_relative_eq!(params.step_si(), 0.2);
        assert_eq!(params.steps(), 100);
        assert_eq!(params.sample_count(), 101);
        assert_relative_eq!(params.omega_squared(), 0.25);
    }

    #[test]
    fn from_si_matches_builder() {
        let params = OscillatorParameters::from_si(10, 2.0, 0.5, -1.0, 3.0, 0.01).unwrap();
        let expected = OscillatorParameters::builder()
            .stiffness_si(2.0)
            .mass_si(0.5)
            .displacement_si(-1.0)
            .velocity_si(3.0)
            .step_si(0.01)
            .steps(10)
            .build()
            .unwrap();

        assert_eq!(params, expected);
        assert_relative_eq!(params.omega_squared(), 4.0);
        assert_relative_eq!(params.time_at(7), 0.07);
    }

    #[test]
    fn zero_stiffness_is_valid() {
        let params = OscillatorParameters::builder()
            .stiffness_si(0.0)
            .build()
            .unwrap();

        assert_relative_eq!(params.omega_squared(), 0.0);
    }

    #[test]
    fn rejects_invalid_values() {
        let builder = OscillatorParameters::builder();

        assert_eq!(
            builder.mass_si(0.0).build(),
            Err(ParameterError::Mass(0.0))
        );
        assert_eq!(
            builder.mass_si(-2.0).build(),
            Err(ParameterError::Mass(-2.0))
        );
        assert_eq!(
            builder.stiffness_si(-1.0).build(),
            Err(ParameterError::Stiffness(-1.0))
        );
        assert_eq!(
            builder.step_si(0.0).build(),
            Err(ParameterError::StepSize(0.0))
        );
        assert!(matches!(
            builder.velocity_si(f64::INFINITY).build(),
            Err(ParameterError::NonFinite {
                name: "velocity",
                ..
            })
        ));
        assert!(matches!(
            builder.displacement_si(f64::NAN).build(),
            Err(ParameterError::NonFinite {
                name: "displacement",
                ..
            })
        ));
        assert!(matches!(
            builder.mass_si(f64::NAN).build(),
            Err(ParameterError::Mass(_))
        ));
    }

    #[test]
    fn rejects_negative_step_count() {
        assert_eq!(
            OscillatorParameters::from_si(-1, 1.0, 4.0, 1.0, 5.0, 0.2),
            Err(ParameterError::NegativeStepCount(-1))
        );
    }

    #[test]
    fn to_builder_round_trips() {
        let params = OscillatorParameters::builder()
            .steps(3)
            .step_si(0.5)
            .build()
            .unwrap();

        assert_eq!(params.to_builder().build().unwrap(), params);
        assert_eq!(params.to_builder().steps(4).build().unwrap().steps(), 4);
    }
}

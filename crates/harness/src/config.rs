//! TOML configuration for the batch harness.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```toml
//! [oscillator]
//! stiffness = 2.0
//! steps = 500
//!
//! [run]
//! method = "numerov"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use hooke_core::{OscillatorParameters, ParameterError};
use hooke_solvers::{comparison::Execution, methods};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub oscillator: OscillatorConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

/// The physical system and time grid, in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    pub stiffness: f64,
    pub mass: f64,
    pub displacement: f64,
    pub velocity: f64,
    pub step_size: f64,
    pub steps: usize,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            mass: 4.0,
            displacement: 1.0,
            velocity: 5.0,
            step_size: 0.2,
            steps: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Registry name or alias of the coefficient table.
    pub method: String,

    /// Run the two solvers on separate threads.
    pub concurrent: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            method: methods::EXTENDED_NUMEROV_NAME.to_string(),
            concurrent: false,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn execution(&self) -> Execution {
        if self.concurrent {
            Execution::Concurrent
        } else {
            Execution::Sequential
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print one line per step before the global error.
    pub per_step: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { per_step: true }
    }
}

impl HarnessConfig {
    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid TOML for this schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config file");
        content.parse()
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validates the oscillator section into solver parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if a physical value is out of range.
    pub fn parameters(&self) -> Result<OscillatorParameters, ParameterError> {
        let osc = &self.oscillator;

        OscillatorParameters::builder()
            .stiffness_si(osc.stiffness)
            .mass_si(osc.mass)
            .displacement_si(osc.displacement)
            .velocity_si(osc.velocity)
            .step_si(osc.step_size)
            .steps(osc.steps)
            .build()
    }
}

impl std::str::FromStr for HarnessConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_reference_case() {
        let config: HarnessConfig = "".parse().unwrap();

        assert_eq!(config, HarnessConfig::default());
        assert_eq!(
            config.parameters().unwrap(),
            OscillatorParameters::builder().build().unwrap()
        );
        assert_eq!(config.run.method, "extended-numerov");
        assert_eq!(config.run.execution(), Execution::Sequential);
        assert!(config.output.per_step);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: HarnessConfig = r#"
            [oscillator]
            stiffness = 2.5
            steps = 40

            [run]
            method = "verlet"
            concurrent = true
        "#
        .parse()
        .unwrap();

        assert_eq!(config.oscillator.stiffness, 2.5);
        assert_eq!(config.oscillator.steps, 40);
        assert_eq!(config.oscillator.mass, 4.0);
        assert_eq!(config.run.method, "verlet");
        assert_eq!(config.run.execution(), Execution::Concurrent);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        let result = "[oscillator]\nsteps = \"many\"".parse::<HarnessConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_negative_steps() {
        let result = "[oscillator]\nsteps = -3".parse::<HarnessConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_physics_surfaces_as_parameter_error() {
        let config: HarnessConfig = "[oscillator]\nmass = 0.0".parse().unwrap();
        assert_eq!(config.parameters(), Err(ParameterError::Mass(0.0)));
    }

    #[test]
    fn serializes_back_to_equivalent_toml() {
        let mut config = HarnessConfig::default();
        config.oscillator.velocity = -1.5;
        config.output.per_step = false;

        let text = config.to_toml().unwrap();
        assert_eq!(text.parse::<HarnessConfig>().unwrap(), config);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = HarnessConfig::load("/nonexistent/hooke.toml").unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/hooke.toml"));
    }
}

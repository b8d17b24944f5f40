//! Annealing configuration.

use crate::error::{AnnealError, AnnealResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(50.0)
///     .with_max_iterations(10_000)
///     .with_tolerance(1e-8, 500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature, also restored on reannealing.
    pub initial_temperature: f64,

    /// Iteration ceiling, counted since the last reannealing.
    pub max_iterations: usize,

    /// Plateau threshold on the mean absolute energy change.
    pub tolerance_value: f64,

    /// Number of trailing energy differences averaged by the plateau check.
    pub tolerance_iter: usize,

    /// The run stops once the current energy is at or below this value.
    pub objective_floor: f64,

    /// Restart from the best state when the current energy exceeds the
    /// best energy by more than this.
    pub reanneal_tolerance: f64,

    /// Emit run events at `info` instead of `debug`.
    pub verbose: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            max_iterations: 1_000_000,
            tolerance_value: 1e-6,
            tolerance_iter: 1000,
            objective_floor: -1e10,
            reanneal_tolerance: 100.0,
            verbose: false,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the plateau threshold and its window length together.
    pub fn with_tolerance(mut self, value: f64, window: usize) -> Self {
        self.tolerance_value = value;
        self.tolerance_iter = window;
        self
    }

    pub fn with_objective_floor(mut self, floor: f64) -> Self {
        self.objective_floor = floor;
        self
    }

    pub fn with_reanneal_tolerance(mut self, tol: f64) -> Self {
        self.reanneal_tolerance = tol;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A plateau window longer than `max_iterations` is accepted; the
    /// plateau check then simply never fires.
    pub fn validate(&self) -> AnnealResult<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(AnnealError::InvalidTemperature {
                value: self.initial_temperature,
            });
        }
        if self.max_iterations == 0 {
            return Err(AnnealError::InvalidMaxIterations {
                max_iterations: self.max_iterations,
            });
        }
        if !(self.tolerance_value >= 0.0) {
            return Err(AnnealError::InvalidTolerance {
                value: self.tolerance_value,
            });
        }
        if self.tolerance_iter == 0 {
            return Err(AnnealError::InvalidToleranceWindow {
                window: self.tolerance_iter,
            });
        }
        if self.objective_floor.is_nan() {
            return Err(AnnealError::InvalidObjectiveFloor {
                value: self.objective_floor,
            });
        }
        if !(self.reanneal_tolerance >= 0.0) {
            return Err(AnnealError::InvalidReannealTolerance {
                value: self.reanneal_tolerance,
            });
        }
        Ok(())
    }
}

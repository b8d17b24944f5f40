//! Cooling schedules.
//!
//! # References
//!
//! - Geometric: standard textbook approach
//! - Boltzmann (logarithmic): Geman & Geman (1984)

use super::config::AnnealConfig;
use crate::error::{AnnealError, AnnealResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computes the next temperature from the current one.
pub trait CoolingStrategy: Send + Sync {
    /// Temperature for the next iteration. `iteration` is the 1-based
    /// counter of the iteration that just finished.
    fn next_temperature(&self, current: f64, iteration: usize) -> f64;

    /// Checks the captured parameters against the run configuration.
    fn validate(&self, _config: &AnnealConfig) -> AnnealResult<()> {
        Ok(())
    }
}

/// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
///
/// Typical `alpha`: 0.95–0.99.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometricCooling {
    /// Decay factor in (0, 1). Higher = slower cooling.
    pub alpha: f64,
}

impl GeometricCooling {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Default for GeometricCooling {
    fn default() -> Self {
        Self { alpha: 0.95 }
    }
}

impl CoolingStrategy for GeometricCooling {
    fn next_temperature(&self, current: f64, _iteration: usize) -> f64 {
        current * self.alpha
    }

    fn validate(&self, _config: &AnnealConfig) -> AnnealResult<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(AnnealError::InvalidAlpha { alpha: self.alpha });
        }
        Ok(())
    }
}

/// Logarithmic cooling: `T_k = T_0 / ln(k)` for `k > 1`, else `T_0`.
///
/// Depends only on the iteration counter, so it restarts along with the
/// counter after reannealing. Never reaches zero.
///
/// `initial_temperature` duplicates [`AnnealConfig::initial_temperature`]:
/// the engine starts (and restarts) at the configured value while this
/// schedule computes from its own copy. [`BoltzmannCooling::from_config`]
/// keeps the two in step, and validation rejects a mismatch.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoltzmannCooling {
    pub initial_temperature: f64,
}

impl BoltzmannCooling {
    pub fn new(initial_temperature: f64) -> Self {
        Self {
            initial_temperature,
        }
    }

    /// Schedule starting from the configured initial temperature.
    pub fn from_config(config: &AnnealConfig) -> Self {
        Self::new(config.initial_temperature)
    }
}

impl CoolingStrategy for BoltzmannCooling {
    fn next_temperature(&self, _current: f64, iteration: usize) -> f64 {
        if iteration <= 1 {
            self.initial_temperature
        } else {
            self.initial_temperature / (iteration as f64).ln()
        }
    }

    fn validate(&self, config: &AnnealConfig) -> AnnealResult<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(AnnealError::InvalidTemperature {
                value: self.initial_temperature,
            });
        }
        if self.initial_temperature != config.initial_temperature {
            return Err(AnnealError::CoolingTemperatureMismatch {
                cooling: self.initial_temperature,
                config: config.initial_temperature,
            });
        }
        Ok(())
    }
}

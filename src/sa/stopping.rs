//! Termination criteria.

use super::config::AnnealConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a run ended. Every variant is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// Iteration counter reached the configured ceiling.
    MaxIter,
    /// Mean absolute energy change over the trailing window fell below
    /// the tolerance.
    Tolerance,
    /// Current energy reached the objective floor.
    ObjLimit,
    /// Temperature dropped to zero or below after cooling.
    TempLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StopReason::MaxIter => "Max Iter",
            StopReason::Tolerance => "Tolerance",
            StopReason::ObjLimit => "Obj Limit",
            StopReason::TempLimit => "Temp Limit",
            StopReason::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// The composite stopping rule of a run.
///
/// The engine asks [`max_iterations_reached`](Self::max_iterations_reached)
/// first, then [`after_cooling`](Self::after_cooling), which checks
/// temperature collapse, plateau and objective floor in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingPolicy {
    pub max_iterations: usize,
    pub tolerance_value: f64,
    pub tolerance_iter: usize,
    pub objective_floor: f64,
}

impl StoppingPolicy {
    pub fn from_config(config: &AnnealConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            tolerance_value: config.tolerance_value,
            tolerance_iter: config.tolerance_iter,
            objective_floor: config.objective_floor,
        }
    }

    pub fn max_iterations_reached(&self, iteration: usize) -> bool {
        iteration >= self.max_iterations
    }

    /// Mean of `|e[i] - e[i-1]|` over the last `tolerance_iter` pairs.
    ///
    /// `None` until the history holds `tolerance_iter + 1` energies.
    pub fn plateau_mean(&self, energies: &[f64]) -> Option<f64> {
        let window = self.tolerance_iter;
        if window == 0 || energies.len() <= window {
            return None;
        }
        let tail = &energies[energies.len() - window - 1..];
        let sum: f64 = tail.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
        Some(sum / window as f64)
    }

    /// Checks the criteria evaluated after cooling, first match wins.
    pub fn after_cooling(
        &self,
        temperature: f64,
        energies: &[f64],
        energy: f64,
    ) -> Option<StopReason> {
        if temperature <= 0.0 {
            return Some(StopReason::TempLimit);
        }
        if self
            .plateau_mean(energies)
            .is_some_and(|mean| mean < self.tolerance_value)
        {
            return Some(StopReason::Tolerance);
        }
        if energy <= self.objective_floor {
            return Some(StopReason::ObjLimit);
        }
        None
    }
}

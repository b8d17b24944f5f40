//! Error type for annealing configuration and runs.
//!
//! Stopping criteria are not errors: every [`StopReason`](crate::sa::StopReason)
//! is a successful outcome. `AnnealError` only covers configurations the
//! engine cannot run with and objectives that are not defined at the
//! starting point.

/// Crate-wide result alias.
pub type AnnealResult<T> = Result<T, AnnealError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AnnealError {
    // ---- Search domain ----
    /// Interval bounds must be finite with `lower < upper`.
    InvalidInterval {
        lower: f64,
        upper: f64,
    },

    // ---- AnnealConfig ----
    /// Initial temperature must be positive and finite.
    InvalidTemperature {
        value: f64,
    },
    /// Iteration ceiling must be at least 1.
    InvalidMaxIterations {
        max_iterations: usize,
    },
    /// Plateau tolerance must be non-negative.
    InvalidTolerance {
        value: f64,
    },
    /// Plateau window must hold at least one energy difference.
    InvalidToleranceWindow {
        window: usize,
    },
    /// Objective floor must not be NaN.
    InvalidObjectiveFloor {
        value: f64,
    },
    /// Reannealing tolerance must be non-negative.
    InvalidReannealTolerance {
        value: f64,
    },

    // ---- Cooling ----
    /// Geometric decay factor must lie in (0, 1).
    InvalidAlpha {
        alpha: f64,
    },
    /// Logarithmic cooling must start from the configured temperature.
    CoolingTemperatureMismatch {
        cooling: f64,
        config: f64,
    },

    // ---- Objective ----
    /// The objective returned NaN or an infinity at the starting point.
    NonFiniteEnergy {
        x: f64,
        y: f64,
        value: f64,
    },
}

impl std::fmt::Display for AnnealError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnealError::InvalidInterval { lower, upper } => write!(
                f,
                "Anneal Error: invalid interval [{lower}, {upper}], bounds must be finite with lower < upper"
            ),
            AnnealError::InvalidTemperature { value } => write!(
                f,
                "Anneal Error: initial temperature must be positive and finite, got {value}"
            ),
            AnnealError::InvalidMaxIterations { max_iterations } => write!(
                f,
                "Anneal Error: max iterations must be at least 1, got {max_iterations}"
            ),
            AnnealError::InvalidTolerance { value } => write!(
                f,
                "Anneal Error: tolerance value must be non-negative, got {value}"
            ),
            AnnealError::InvalidToleranceWindow { window } => write!(
                f,
                "Anneal Error: tolerance window must be at least 1, got {window}"
            ),
            AnnealError::InvalidObjectiveFloor { value } => {
                write!(f, "Anneal Error: objective floor must not be NaN, got {value}")
            }
            AnnealError::InvalidReannealTolerance { value } => write!(
                f,
                "Anneal Error: reannealing tolerance must be non-negative, got {value}"
            ),
            AnnealError::InvalidAlpha { alpha } => {
                write!(f, "Anneal Error: geometric alpha must be in (0, 1), got {alpha}")
            }
            AnnealError::CoolingTemperatureMismatch { cooling, config } => write!(
                f,
                "Anneal Error: cooling starts at {cooling} but the configured initial temperature is {config}"
            ),
            AnnealError::NonFiniteEnergy { x, y, value } => write!(
                f,
                "Anneal Error: objective returned non-finite energy {value} at ({x}, {y})"
            ),
        }
    }
}

impl std::error::Error for AnnealError {}

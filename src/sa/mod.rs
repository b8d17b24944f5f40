//! Simulated Annealing (SA) over a 2D box.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima. When the current energy drifts too far above the best
//! energy seen, the run restarts from the best state at the initial
//! temperature (reannealing) while keeping its recorded history.
//!
//! Move, acceptance and cooling are pluggable through
//! [`MoveStrategy`], [`AcceptanceStrategy`] and [`CoolingStrategy`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Ingber (1989), "Very Fast Simulated Re-Annealing"

mod acceptance;
mod batch;
mod config;
mod cooling;
mod moves;
mod runner;
mod stopping;
mod types;

pub use acceptance::{AcceptanceStrategy, BoltzmannAcceptance};
pub use batch::{run_batch, BatchJob, BatchOutcome};
pub use config::AnnealConfig;
pub use cooling::{BoltzmannCooling, CoolingStrategy, GeometricCooling};
pub use moves::{BoltzmannMove, MoveStrategy};
pub use runner::{Annealer, RunResult};
pub use stopping::{StopReason, StoppingPolicy};
pub use types::{Interval, State, Trajectory, TrajectoryPoint};

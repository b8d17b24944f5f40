//! Simulated annealing for box-bounded 2D continuous minimization.
//!
//! Provides a pluggable annealing engine:
//!
//! - **Move strategy**: proposes a neighbor of the current point, kept inside
//!   the feasible box by randomized reflection.
//! - **Acceptance strategy**: turns an energy change and a temperature into
//!   an acceptance probability (Metropolis rule by default).
//! - **Cooling strategy**: geometric or logarithmic temperature decay.
//! - **Stopping policy**: iteration ceiling, temperature collapse, energy
//!   plateau and objective floor, each ending the run on its own.
//! - **Reannealing**: restarts from the best state seen when the search
//!   drifts too far above it, keeping the full trajectory.
//!
//! The objective is any `Fn(State) -> f64`; [`functions`] ships the usual
//! 2D benchmarks (Ackley, Himmelblau, Rastrigin, Rosenbrock).
//!
//! # Example
//!
//! ```
//! use u_anneal::functions::TestFunction;
//! use u_anneal::sa::{AnnealConfig, Annealer};
//!
//! let config = AnnealConfig::default().with_max_iterations(1_000).with_seed(42);
//! let annealer = Annealer::new(config).unwrap();
//!
//! let f = TestFunction::Himmelblau;
//! let result = annealer.run(&f.objective(), f.default_interval()).unwrap();
//! println!("{result}");
//! ```

pub mod error;
pub mod functions;
pub mod sa;

pub use error::{AnnealError, AnnealResult};

//! Annealing execution loop.

use super::acceptance::{AcceptanceStrategy, BoltzmannAcceptance};
use super::config::AnnealConfig;
use super::cooling::{CoolingStrategy, GeometricCooling};
use super::moves::{BoltzmannMove, MoveStrategy};
use super::stopping::{StopReason, StoppingPolicy};
use super::types::{Interval, State, Trajectory, TrajectoryPoint};
use crate::error::{AnnealError, AnnealResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logs at `info` for verbose runs and at `debug` otherwise.
macro_rules! run_event {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+);
        } else {
            tracing::debug!($($arg)+);
        }
    };
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// Every recorded iteration, including history from before any
    /// reannealing.
    pub trajectory: Trajectory,

    /// Iteration counter at exit. Reset to zero by each reannealing, so it
    /// can be smaller than the trajectory length.
    pub iterations: usize,

    /// The criterion that ended the run.
    pub stop_reason: StopReason,

    /// Whether at least one reannealing happened.
    pub reannealed: bool,

    /// Number of reannealing events.
    pub reannealings: usize,

    /// Lowest-energy state seen (earliest on ties).
    pub best_state: State,

    /// Energy of `best_state`.
    pub best_energy: f64,

    /// Temperature when the loop exited.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that strictly lowered the energy.
    pub improving_moves: usize,

    /// Candidates discarded because the objective was not finite there.
    pub rejected_non_finite: usize,
}

impl std::fmt::Display for RunResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stopping criterion: {}", self.stop_reason)?;
        writeln!(f, "Number of iterations: {}", self.iterations)?;
        writeln!(f, "Reannealing: {}", self.reannealed)?;
        write!(
            f,
            "Best energy: {:.6} at ({:.6}, {:.6})",
            self.best_energy, self.best_state.x, self.best_state.y
        )
    }
}

/// Simulated annealing engine over a 2D box.
///
/// Holds the configuration and the three pluggable strategies. The
/// objective and the interval are supplied per run.
///
/// # Usage
///
/// ```
/// use u_anneal::sa::{AnnealConfig, Annealer, Interval, State, StopReason};
///
/// let config = AnnealConfig::default().with_max_iterations(200).with_seed(7);
/// let annealer = Annealer::new(config).unwrap();
/// let sphere = |s: State| s.x * s.x + s.y * s.y;
///
/// let result = annealer.run(&sphere, Interval::new(-5.0, 5.0).unwrap()).unwrap();
/// assert!(result.best_energy <= result.trajectory.energies()[0]);
/// assert_ne!(result.stop_reason, StopReason::Cancelled);
/// ```
#[derive(Debug, Clone)]
pub struct Annealer<C = GeometricCooling, M = BoltzmannMove, A = BoltzmannAcceptance> {
    config: AnnealConfig,
    cooling: C,
    mover: M,
    acceptance: A,
}

impl Annealer {
    /// Creates an engine with geometric cooling, the Boltzmann move and
    /// Boltzmann acceptance.
    pub fn new(config: AnnealConfig) -> AnnealResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cooling: GeometricCooling::default(),
            mover: BoltzmannMove,
            acceptance: BoltzmannAcceptance,
        })
    }
}

impl<C, M, A> Annealer<C, M, A>
where
    C: CoolingStrategy,
    M: MoveStrategy,
    A: AcceptanceStrategy,
{
    /// Replaces the cooling schedule after validating its parameters
    /// against the engine's configuration.
    pub fn with_cooling<C2: CoolingStrategy>(
        self,
        cooling: C2,
    ) -> AnnealResult<Annealer<C2, M, A>> {
        cooling.validate(&self.config)?;
        Ok(Annealer {
            config: self.config,
            cooling,
            mover: self.mover,
            acceptance: self.acceptance,
        })
    }

    pub fn with_move<M2: MoveStrategy>(self, mover: M2) -> Annealer<C, M2, A> {
        Annealer {
            config: self.config,
            cooling: self.cooling,
            mover,
            acceptance: self.acceptance,
        }
    }

    pub fn with_acceptance<A2: AcceptanceStrategy>(self, acceptance: A2) -> Annealer<C, M, A2> {
        Annealer {
            config: self.config,
            cooling: self.cooling,
            mover: self.mover,
            acceptance,
        }
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs with a stream seeded from `config.seed`, or from a fresh random
    /// seed when none is set.
    pub fn run<F>(&self, objective: &F, interval: Interval) -> AnnealResult<RunResult>
    where
        F: Fn(State) -> f64,
    {
        self.run_with_cancel(objective, interval, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked at the start of every iteration; once it is
    /// set the run ends with [`StopReason::Cancelled`].
    pub fn run_with_cancel<F>(
        &self,
        objective: &F,
        interval: Interval,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AnnealResult<RunResult>
    where
        F: Fn(State) -> f64,
    {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.execute(objective, interval, &mut rng, cancel.as_deref())
    }

    /// Runs on a caller-owned random stream.
    ///
    /// Draw order per iteration: the move's direction bit and any clip
    /// draws, then the acceptance draw. Replaying the same stream replays
    /// the same trajectory.
    pub fn run_with_rng<F, R>(
        &self,
        objective: &F,
        interval: Interval,
        rng: &mut R,
    ) -> AnnealResult<RunResult>
    where
        F: Fn(State) -> f64,
        R: Rng,
    {
        self.execute(objective, interval, rng, None)
    }

    fn execute<F, R>(
        &self,
        objective: &F,
        interval: Interval,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> AnnealResult<RunResult>
    where
        F: Fn(State) -> f64,
        R: Rng,
    {
        let config = &self.config;
        let policy = StoppingPolicy::from_config(config);

        let mut current = interval.sample(rng);
        let mut current_energy = objective(current);
        if !current_energy.is_finite() {
            return Err(AnnealError::NonFiniteEnergy {
                x: current.x,
                y: current.y,
                value: current_energy,
            });
        }

        run_event!(
            config.verbose,
            x = current.x,
            y = current.y,
            energy = current_energy,
            "simulated annealing started"
        );

        let mut temperature = config.initial_temperature;
        let mut trajectory = Trajectory::new();
        let mut best_state = current;
        let mut best_energy = current_energy;

        let mut k = 0usize;
        let mut reannealings = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut rejected_non_finite = 0usize;

        let stop_reason = loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                break StopReason::Cancelled;
            }

            k += 1;

            let candidate = self.mover.propose(current, temperature, &interval, rng);
            let candidate_energy = objective(candidate);

            trajectory.push(TrajectoryPoint {
                state: current,
                energy: current_energy,
                temperature,
            });
            // Strict comparison keeps the earliest of equal minima.
            if current_energy < best_energy {
                best_state = current;
                best_energy = current_energy;
            }

            tracing::trace!(
                iteration = k,
                energy = current_energy,
                candidate_energy,
                temperature,
                "iteration recorded"
            );

            if policy.max_iterations_reached(k) {
                break StopReason::MaxIter;
            }

            temperature = self.cooling.next_temperature(temperature, k);

            if let Some(reason) =
                policy.after_cooling(temperature, trajectory.energies(), current_energy)
            {
                break reason;
            }

            if current_energy > best_energy + config.reanneal_tolerance {
                run_event!(
                    config.verbose,
                    energy = current_energy,
                    best_energy,
                    history = trajectory.len(),
                    "reannealing from best state"
                );
                current = best_state;
                current_energy = best_energy;
                temperature = config.initial_temperature;
                k = 0;
                reannealings += 1;
                continue;
            }

            if !candidate_energy.is_finite() {
                rejected_non_finite += 1;
                continue;
            }

            let probability =
                self.acceptance
                    .probability(current_energy, candidate_energy, temperature);
            if rng.random::<f64>() <= probability {
                if candidate_energy < current_energy {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_energy = candidate_energy;
            }
        };

        run_event!(
            config.verbose,
            reason = %stop_reason,
            iterations = k,
            recorded = trajectory.len(),
            best_energy,
            reannealings,
            "simulated annealing finished"
        );

        Ok(RunResult {
            trajectory,
            iterations: k,
            stop_reason,
            reannealed: reannealings > 0,
            reannealings,
            best_state,
            best_energy,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            rejected_non_finite,
        })
    }
}

//! Independent runs over several objectives.

use super::acceptance::AcceptanceStrategy;
use super::cooling::CoolingStrategy;
use super::moves::MoveStrategy;
use super::runner::{Annealer, RunResult};
use super::types::{Interval, State};
use crate::error::AnnealResult;
use crate::functions::TestFunction;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One objective to minimize, with its search box.
#[derive(Debug, Clone)]
pub struct BatchJob<F> {
    pub name: String,
    pub objective: F,
    pub interval: Interval,
}

impl<F> BatchJob<F>
where
    F: Fn(State) -> f64,
{
    pub fn new(name: impl Into<String>, objective: F, interval: Interval) -> Self {
        Self {
            name: name.into(),
            objective,
            interval,
        }
    }
}

impl BatchJob<fn(State) -> f64> {
    /// The four benchmark functions on their default boxes.
    pub fn benchmarks() -> Vec<Self> {
        TestFunction::ALL
            .iter()
            .map(|f| BatchJob::new(f.name(), f.objective(), f.default_interval()))
            .collect()
    }
}

/// Result of one job, in job order.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub name: String,
    pub seed: u64,
    pub result: AnnealResult<RunResult>,
}

/// Runs every job with its own random stream.
///
/// With `config.seed = Some(s)` job `i` is seeded with `s + i`, so a batch
/// is reproducible and each job matches a single run seeded the same way.
/// Without a seed every job draws a fresh one. Under the `parallel`
/// feature jobs run on the rayon pool.
pub fn run_batch<C, M, A, F>(
    annealer: &Annealer<C, M, A>,
    jobs: &[BatchJob<F>],
) -> Vec<BatchOutcome>
where
    C: CoolingStrategy,
    M: MoveStrategy,
    A: AcceptanceStrategy,
    F: Fn(State) -> f64 + Sync,
{
    let base = annealer.config().seed;
    let seeds: Vec<u64> = (0..jobs.len())
        .map(|i| match base {
            Some(seed) => seed.wrapping_add(i as u64),
            None => rand::random(),
        })
        .collect();

    let run_one = |(job, &seed): (&BatchJob<F>, &u64)| {
        let span = tracing::debug_span!("anneal_job", name = %job.name, seed);
        let _guard = span.enter();

        let mut rng = StdRng::seed_from_u64(seed);
        let result = annealer.run_with_rng(&job.objective, job.interval, &mut rng);
        if let Ok(ref r) = result {
            tracing::debug!(
                reason = %r.stop_reason,
                iterations = r.iterations,
                best_energy = r.best_energy,
                "job finished"
            );
        }
        BatchOutcome {
            name: job.name.clone(),
            seed,
            result,
        }
    };

    #[cfg(feature = "parallel")]
    {
        jobs.par_iter().zip(seeds.par_iter()).map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter().zip(seeds.iter()).map(run_one).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::{AnnealConfig, StopReason};

    #[test]
    fn test_benchmarks_cover_all_functions() {
        let jobs = BatchJob::benchmarks();
        let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, ["Ackley", "Himmelblau", "Rastrigin", "Rosenbrock"]);
        assert_eq!(jobs[2].interval.upper(), 5.12);
    }

    #[test]
    fn test_batch_keeps_order_and_budget() {
        let config = AnnealConfig::default()
            .with_max_iterations(50)
            .with_reanneal_tolerance(1e12)
            .with_seed(100);
        let annealer = Annealer::new(config).unwrap();
        let outcomes = run_batch(&annealer, &BatchJob::benchmarks());

        assert_eq!(outcomes.len(), 4);
        for (i, (outcome, f)) in outcomes.iter().zip(TestFunction::ALL).enumerate() {
            assert_eq!(outcome.name, f.name());
            assert_eq!(outcome.seed, 100 + i as u64);
            let result = outcome.result.as_ref().unwrap();
            assert_eq!(result.stop_reason, StopReason::MaxIter);
            assert_eq!(result.trajectory.len(), 50);
        }
    }

    #[test]
    fn test_batch_job_matches_single_run() {
        let config = AnnealConfig::default().with_max_iterations(300).with_seed(7);
        let annealer = Annealer::new(config).unwrap();
        let jobs = BatchJob::benchmarks();
        let outcomes = run_batch(&annealer, &jobs);

        // Job 1 is seeded with 7 + 1.
        let mut rng = StdRng::seed_from_u64(8);
        let single = annealer
            .run_with_rng(&jobs[1].objective, jobs[1].interval, &mut rng)
            .unwrap();
        assert_eq!(outcomes[1].result.as_ref().unwrap(), &single);
    }

    #[test]
    fn test_custom_closure_jobs() {
        let config = AnnealConfig::default().with_max_iterations(10).with_seed(1);
        let annealer = Annealer::new(config).unwrap();
        let offset = 3.0;
        let jobs = vec![BatchJob::new(
            "shifted",
            move |s: State| (s.x - offset).powi(2) + s.y * s.y,
            Interval::new(-5.0, 5.0).unwrap(),
        )];
        let outcomes = run_batch(&annealer, &jobs);
        assert!(outcomes[0].result.is_ok());
    }
}

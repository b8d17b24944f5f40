//! Run-level behavior of the annealing engine on the benchmark objectives.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_anneal::functions::TestFunction;
use u_anneal::sa::{AnnealConfig, Annealer, Interval, State, StopReason};

/// Bounded to [-2, 2], far below the default reannealing tolerance.
fn wave(s: State) -> f64 {
    s.x.sin() + s.y.cos()
}

#[test]
fn max_iter_five_on_benchmarks() {
    for f in [TestFunction::Ackley, TestFunction::Rastrigin] {
        let config = AnnealConfig::default().with_max_iterations(5).with_seed(42);
        let result = Annealer::new(config)
            .unwrap()
            .run(&f.objective(), f.default_interval())
            .unwrap();

        assert_eq!(result.stop_reason, StopReason::MaxIter, "{f}");
        assert_eq!(result.iterations, 5, "{f}");
        assert_eq!(result.trajectory.len(), 5, "{f}");
    }
}

#[test]
fn rosenbrock_reaches_objective_floor() {
    // A very hot start accepts nearly every uphill step, and a zero
    // reannealing tolerance sends the search back to the best point after
    // each one, so the run keeps sampling around its best state until the
    // floor is reached.
    let floor = 1.0;
    let config = AnnealConfig::default()
        .with_initial_temperature(1e9)
        .with_tolerance(0.0, 1000)
        .with_reanneal_tolerance(0.0)
        .with_objective_floor(floor)
        .with_seed(2024);
    let f = TestFunction::Rosenbrock;
    let result = Annealer::new(config)
        .unwrap()
        .run(&f.objective(), f.default_interval())
        .unwrap();

    assert_eq!(result.stop_reason, StopReason::ObjLimit);
    assert!(result.best_energy <= floor);
    assert!(result.best_energy >= f.global_minimum());
    assert!(result.trajectory.last().unwrap().energy <= floor);
}

#[test]
fn large_tolerance_stops_once_window_fills() {
    for f in TestFunction::ALL {
        let config = AnnealConfig::default().with_tolerance(1e10, 2).with_seed(7);
        let result = Annealer::new(config)
            .unwrap()
            .run(&f.objective(), f.default_interval())
            .unwrap();

        assert_eq!(result.stop_reason, StopReason::Tolerance, "{f}");
        assert_eq!(result.trajectory.len(), 3, "{f}");
    }
}

#[test]
fn replayed_stream_replays_trajectory() {
    let config = AnnealConfig::default().with_max_iterations(2_000);
    let annealer = Annealer::new(config).unwrap();
    let f = TestFunction::Himmelblau;

    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);
    let a = annealer
        .run_with_rng(&f.objective(), f.default_interval(), &mut rng_a)
        .unwrap();
    let b = annealer
        .run_with_rng(&f.objective(), f.default_interval(), &mut rng_b)
        .unwrap();

    assert_eq!(a.trajectory, b.trajectory);
    assert_eq!(a.stop_reason, b.stop_reason);
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn trajectory_stays_inside_box() {
    let config = AnnealConfig::default().with_max_iterations(5_000).with_seed(3);
    let annealer = Annealer::new(config).unwrap();
    for f in TestFunction::ALL {
        let interval = f.default_interval();
        let result = annealer.run(&f.objective(), interval).unwrap();
        for s in result.trajectory.states() {
            assert!(interval.contains(s.x) && interval.contains(s.y), "{f}: {s:?}");
        }
    }
}

#[test]
fn best_energy_never_above_start() {
    let config = AnnealConfig::default().with_max_iterations(3_000).with_seed(11);
    let annealer = Annealer::new(config).unwrap();
    for f in TestFunction::ALL {
        let result = annealer.run(&f.objective(), f.default_interval()).unwrap();
        let first = result.trajectory.energies()[0];
        assert!(result.best_energy <= first, "{f}");
        assert!(result.best_energy >= f.global_minimum() - 1e-12, "{f}");
    }
}

proptest! {
    #[test]
    fn clip_stays_in_interval(
        lower in -1e3f64..1e3,
        width in 1e-3f64..1e3,
        frac in 0.0f64..=1.0,
        candidate in -1e4f64..1e4,
        seed in any::<u64>(),
    ) {
        let interval = Interval::new(lower, lower + width).unwrap();
        let original = lower + frac * width;
        prop_assume!(interval.contains(original));
        let mut rng = StdRng::seed_from_u64(seed);
        let clipped = interval.clip(candidate, original, &mut rng);
        prop_assert!(interval.contains(clipped), "{} outside [{}, {}]", clipped, interval.lower(), interval.upper());
    }

    #[test]
    fn max_iter_five_on_any_interval(
        lower in -50.0f64..50.0,
        width in 1e-2f64..100.0,
        seed in any::<u64>(),
    ) {
        let interval = Interval::new(lower, lower + width).unwrap();
        let config = AnnealConfig::default().with_max_iterations(5).with_seed(seed);
        let result = Annealer::new(config).unwrap().run(&wave, interval).unwrap();

        prop_assert_eq!(result.stop_reason, StopReason::MaxIter);
        prop_assert_eq!(result.iterations, 5);
        prop_assert_eq!(result.trajectory.len(), 5);
    }
}

//! Neighbor generation.

use super::types::{Interval, State};
use rand::Rng;

/// Generates a candidate state from the current one.
///
/// Implementations must not keep per-run state; all randomness comes from
/// the stream passed in by the engine.
pub trait MoveStrategy: Send + Sync {
    /// Proposes a neighbor of `state` that lies inside `interval`.
    fn propose<R: Rng>(
        &self,
        state: State,
        temperature: f64,
        interval: &Interval,
        rng: &mut R,
    ) -> State;
}

/// Diagonal step of length `sqrt(T)`.
///
/// One random bit picks the sign; both coordinates move by the same signed
/// step, so the step shrinks from coarse to fine as the system cools.
/// Coordinates that leave the box are pulled back with [`Interval::clip`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoltzmannMove;

impl MoveStrategy for BoltzmannMove {
    fn propose<R: Rng>(
        &self,
        state: State,
        temperature: f64,
        interval: &Interval,
        rng: &mut R,
    ) -> State {
        let step = temperature.sqrt();
        let moved = if rng.random::<bool>() {
            state.shifted(step)
        } else {
            state.shifted(-step)
        };
        let x = interval.clip(moved.x, state.x, rng);
        let y = interval.clip(moved.y, state.y, rng);
        State::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_move_is_diagonal_inside_box() {
        let interval = Interval::new(-100.0, 100.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let start = State::new(1.0, -2.0);

        for _ in 0..100 {
            let next = BoltzmannMove.propose(start, 4.0, &interval, &mut rng);
            let dx = next.x - start.x;
            let dy = next.y - start.y;
            assert!((dx.abs() - 2.0).abs() < 1e-12, "step was {dx}");
            assert!((dx - dy).abs() < 1e-12, "axes moved independently");
        }
    }

    #[test]
    fn test_move_takes_both_directions() {
        let interval = Interval::new(-100.0, 100.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let start = State::new(0.0, 0.0);

        let ups = (0..200)
            .filter(|_| BoltzmannMove.propose(start, 1.0, &interval, &mut rng).x > 0.0)
            .count();
        assert!(ups > 50 && ups < 150, "direction bit looks biased: {ups}/200");
    }

    #[test]
    fn test_move_stays_feasible_at_high_temperature() {
        let interval = Interval::new(-6.0, 6.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut s = State::new(5.5, -5.5);

        for _ in 0..500 {
            s = BoltzmannMove.propose(s, 1e4, &interval, &mut rng);
            assert!(interval.contains(s.x) && interval.contains(s.y), "{s:?}");
        }
    }
}

//! Search-space value types: points, the feasible box, and the recorded
//! trajectory.

use crate::error::{AnnealError, AnnealResult};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the 2D search domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    pub x: f64,
    pub y: f64,
}

impl State {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves both coordinates by the same signed amount.
    pub fn shifted(&self, step: f64) -> Self {
        Self::new(self.x + step, self.y + step)
    }
}

impl From<(f64, f64)> for State {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Feasible box `[lower, upper]`, shared by both axes.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::Interval;
///
/// let interval = Interval::new(-5.12, 5.12).unwrap();
/// assert!(interval.contains(0.0));
/// assert!(Interval::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-finite bounds and `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> AnnealResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(AnnealError::InvalidInterval { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Samples a state uniformly inside the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> State {
        let x = rng.random_range(self.lower..self.upper);
        let y = rng.random_range(self.lower..self.upper);
        State::new(x, y)
    }

    /// Pulls an out-of-bounds coordinate back into the box.
    ///
    /// A `candidate` below `lower` is replaced by a uniform draw between
    /// `lower` and `original` (the coordinate before the move); one above
    /// `upper` by a draw between `original` and `upper`. In-bounds values
    /// pass through untouched and consume no randomness.
    ///
    /// `original` must lie inside the box.
    pub fn clip<R: Rng>(&self, candidate: f64, original: f64, rng: &mut R) -> f64 {
        if candidate < self.lower {
            rng.random_range(self.lower..=original)
        } else if candidate > self.upper {
            rng.random_range(original..=self.upper)
        } else {
            candidate
        }
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = AnnealError;

    fn try_from((lower, upper): (f64, f64)) -> AnnealResult<Self> {
        Interval::new(lower, upper)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.lower, interval.upper)
    }
}

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryPoint {
    pub state: State,
    pub energy: f64,
    pub temperature: f64,
}

/// Append-only history of a run, one entry per iteration.
///
/// Stored column-wise so the stopping policy can read the energy series
/// as a contiguous slice.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    states: Vec<State>,
    energies: Vec<f64>,
    temperatures: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, point: TrajectoryPoint) {
        self.states.push(point.state);
        self.energies.push(point.energy);
        self.temperatures.push(point.temperature);
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn get(&self, index: usize) -> Option<TrajectoryPoint> {
        Some(TrajectoryPoint {
            state: *self.states.get(index)?,
            energy: *self.energies.get(index)?,
            temperature: *self.temperatures.get(index)?,
        })
    }

    pub fn last(&self) -> Option<TrajectoryPoint> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = TrajectoryPoint> + '_ {
        self.states
            .iter()
            .zip(&self.energies)
            .zip(&self.temperatures)
            .map(|((&state, &energy), &temperature)| TrajectoryPoint {
                state,
                energy,
                temperature,
            })
    }

    /// First minimum-energy entry, scanning the whole history.
    pub fn best(&self) -> Option<TrajectoryPoint> {
        let mut best: Option<usize> = None;
        for (i, &e) in self.energies.iter().enumerate() {
            if best.is_none_or(|b| e < self.energies[b]) {
                best = Some(i);
            }
        }
        best.and_then(|i| self.get(i))
    }
}

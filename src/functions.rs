//! Standard 2D benchmark objectives.
//!
//! All four have a known global minimum of 0:
//!
//! | Function   | Minimum location(s)                         | Default box       |
//! |------------|---------------------------------------------|-------------------|
//! | Ackley     | (0, 0)                                      | [-6, 6]           |
//! | Himmelblau | (3, 2), (-2.805, 3.131), (-3.779, -3.283), (3.584, -1.848) | [-6, 6] |
//! | Rastrigin  | (0, 0)                                      | [-5.12, 5.12]     |
//! | Rosenbrock | (1, 1)                                      | [-6, 6]           |

use crate::sa::{Interval, State};
use std::f64::consts::{E, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TestFunction {
    Ackley,
    Himmelblau,
    Rastrigin,
    Rosenbrock,
}

impl TestFunction {
    pub const ALL: [TestFunction; 4] = [
        TestFunction::Ackley,
        TestFunction::Himmelblau,
        TestFunction::Rastrigin,
        TestFunction::Rosenbrock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TestFunction::Ackley => "Ackley",
            TestFunction::Himmelblau => "Himmelblau",
            TestFunction::Rastrigin => "Rastrigin",
            TestFunction::Rosenbrock => "Rosenbrock",
        }
    }

    pub fn energy(&self, state: State) -> f64 {
        (self.objective())(state)
    }

    /// The function as a plain pointer, usable wherever an objective
    /// closure is expected.
    pub fn objective(&self) -> fn(State) -> f64 {
        match self {
            TestFunction::Ackley => ackley,
            TestFunction::Himmelblau => himmelblau,
            TestFunction::Rastrigin => rastrigin,
            TestFunction::Rosenbrock => rosenbrock,
        }
    }

    pub fn default_interval(&self) -> Interval {
        let (lower, upper) = match self {
            TestFunction::Rastrigin => (-5.12, 5.12),
            _ => (-6.0, 6.0),
        };
        Interval::new(lower, upper).expect("benchmark bounds are ordered")
    }

    pub fn global_minimum(&self) -> f64 {
        0.0
    }
}

impl std::fmt::Display for TestFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn ackley(s: State) -> f64 {
    let exp1 = (-0.2 * (0.5 * (s.x * s.x + s.y * s.y)).sqrt()).exp();
    let exp2 = (0.5 * ((2.0 * PI * s.x).cos() + (2.0 * PI * s.y).cos())).exp();
    -20.0 * exp1 - exp2 + E + 20.0
}

pub fn himmelblau(s: State) -> f64 {
    (s.x * s.x + s.y - 11.0).powi(2) + (s.x + s.y * s.y - 7.0).powi(2)
}

pub fn rastrigin(s: State) -> f64 {
    20.0 + s.x * s.x + s.y * s.y - 10.0 * ((2.0 * PI * s.x).cos() + (2.0 * PI * s.y).cos())
}

pub fn rosenbrock(s: State) -> f64 {
    (1.0 - s.x).powi(2) + 100.0 * (s.y - s.x * s.x).powi(2)
}

//! Acceptance criteria.

/// Maps an energy change at a given temperature to an acceptance probability.
pub trait AcceptanceStrategy: Send + Sync {
    /// Probability of moving from `energy` to `new_energy` at `temperature`.
    fn probability(&self, energy: f64, new_energy: f64, temperature: f64) -> f64;
}

/// Metropolis rule: improvements always pass, worsening moves pass with
/// probability `exp(-delta / T)`.
///
/// The engine never calls this with `T <= 0`; that case ends the run first.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoltzmannAcceptance;

impl AcceptanceStrategy for BoltzmannAcceptance {
    fn probability(&self, energy: f64, new_energy: f64, temperature: f64) -> f64 {
        let delta = new_energy - energy;
        if delta < 0.0 {
            1.0
        } else {
            (-delta / temperature).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_improvement_always_accepted() {
        assert_eq!(BoltzmannAcceptance.probability(10.0, 9.999, 1e-9), 1.0);
    }

    #[test]
    fn test_equal_energy_is_one() {
        assert_eq!(BoltzmannAcceptance.probability(3.0, 3.0, 0.5), 1.0);
    }

    #[test]
    fn test_worsening_matches_boltzmann_factor() {
        let p = BoltzmannAcceptance.probability(1.0, 3.0, 2.0);
        assert!((p - (-1.0f64).exp()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_worsening_probability_in_unit_interval(
            energy in -1e3f64..1e3,
            delta in 0.0f64..1e2,
            temperature in 1.0f64..1e3,
        ) {
            let p = BoltzmannAcceptance.probability(energy, energy + delta, temperature);
            prop_assert!(p > 0.0 && p <= 1.0, "p = {}", p);
        }

        #[test]
        fn prop_improvement_probability_is_one(
            energy in -1e3f64..1e3,
            delta in 1e-6f64..1e3,
            temperature in 1e-6f64..1e3,
        ) {
            prop_assert_eq!(
                BoltzmannAcceptance.probability(energy, energy - delta, temperature),
                1.0
            );
        }
    }
}

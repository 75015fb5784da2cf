//! Binomial distribution
//!
//! Number of successes in `trials` independent Bernoulli trials, each
//! succeeding with `success_probability`. Values are integers in `[0, trials]`.

use super::{Distribution, SimRng};
use crate::error::SimError;
use rand_distr::Binomial;
use rand_distr::Distribution as _;

/// Binomial distribution `B(trials, p)`
pub struct BinomialDistribution {
    inner: Binomial,
}

impl BinomialDistribution {
    /// Create a new binomial distribution
    ///
    /// `trials` must be at least 1 and `success_probability` in `[0, 1]`.
    pub fn new(trials: u64, success_probability: f64) -> Result<Self, SimError> {
        if trials < 1 {
            return Err(SimError::invalid("binomial", "trials must be at least 1"));
        }
        let inner = Binomial::new(trials, success_probability)
            .map_err(|e| SimError::invalid("binomial", e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Distribution for BinomialDistribution {
    fn next_value(&self, rng: &mut SimRng) -> f64 {
        self.inner.sample(rng) as f64
    }

    fn is_discrete(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_binomial_distribution_range() {
        let dist = BinomialDistribution::new(10, 0.5).unwrap();
        let mut rng = SimRng::seed_from_u64(3);

        for _ in 0..1000 {
            let v = dist.next_value(&mut rng);
            assert!((0.0..=10.0).contains(&v));
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn test_binomial_distribution_degenerate_probabilities() {
        let mut rng = SimRng::seed_from_u64(3);
        let never = BinomialDistribution::new(8, 0.0).unwrap();
        let always = BinomialDistribution::new(8, 1.0).unwrap();

        for _ in 0..20 {
            assert_eq!(never.next_value(&mut rng), 0.0);
            assert_eq!(always.next_value(&mut rng), 8.0);
        }
    }

    #[test]
    fn test_binomial_distribution_invalid() {
        assert!(BinomialDistribution::new(0, 0.5).is_err());
        assert!(BinomialDistribution::new(10, -0.1).is_err());
        assert!(BinomialDistribution::new(10, 1.1).is_err());
    }
}

//! Poisson distribution
//!
//! Counts of independent events with mean `rate`. Values are non-negative
//! integers.

use super::{Distribution, SimRng};
use crate::error::SimError;
use rand_distr::Distribution as _;
use rand_distr::Poisson;

/// Poisson distribution with mean `rate`
pub struct PoissonDistribution {
    inner: Poisson<f64>,
}

impl PoissonDistribution {
    /// Create a new Poisson distribution (`rate` must be > 0)
    pub fn new(rate: f64) -> Result<Self, SimError> {
        let inner = Poisson::new(rate).map_err(|e| SimError::invalid("poisson", e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Distribution for PoissonDistribution {
    fn next_value(&self, rng: &mut SimRng) -> f64 {
        self.inner.sample(rng)
    }

    fn is_discrete(&self) -> bool {
        true
    }
}

//! Uniform continuous distribution
//!
//! Every value in `[low, high)` is equally likely.
//!
//! # Example
//!
//! ```
//! use randsim::distribution::{Distribution, SimRng, uniform::UniformDistribution};
//! use rand::SeedableRng;
//!
//! let dist = UniformDistribution::new(-2.0, 2.0).unwrap();
//! let mut rng = SimRng::seed_from_u64(7);
//!
//! for _ in 0..10 {
//!     let v = dist.next_value(&mut rng);
//!     assert!((-2.0..2.0).contains(&v));
//! }
//! ```

use super::{Distribution, SimRng};
use crate::error::SimError;
use rand::distributions::Distribution as _;
use rand::distributions::Uniform;

/// Uniform distribution over `[low, high)`
pub struct UniformDistribution {
    inner: Uniform<f64>,
}

impl UniformDistribution {
    /// Create a new uniform distribution
    ///
    /// Fails unless both bounds are finite, `high > low`, and the width
    /// `high - low` is itself finite.
    pub fn new(low: f64, high: f64) -> Result<Self, SimError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(SimError::invalid("uniform", "bounds must be finite"));
        }
        if high <= low {
            return Err(SimError::invalid(
                "uniform",
                format!("high ({}) must be greater than low ({})", high, low),
            ));
        }
        if !(high - low).is_finite() {
            return Err(SimError::invalid("uniform", "range high - low overflows"));
        }
        Ok(Self {
            inner: Uniform::new(low, high),
        })
    }
}

impl Distribution for UniformDistribution {
    #[inline(always)]
    fn next_value(&self, rng: &mut SimRng) -> f64 {
        self.inner.sample(rng)
    }
}

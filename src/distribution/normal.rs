//! Normal (Gaussian) distribution
//!
//! Bell curve with configurable mean and standard deviation. A standard
//! deviation of zero is allowed and yields the mean on every draw.

use super::{Distribution, SimRng};
use crate::error::SimError;
use rand_distr::Distribution as _;
use rand_distr::Normal;

/// Normal distribution `N(mean, std_dev²)`
pub struct NormalDistribution {
    inner: Normal<f64>,
}

impl NormalDistribution {
    /// Create a new normal distribution
    ///
    /// # Arguments
    ///
    /// * `mean` - Center of the bell curve (finite)
    /// * `std_dev` - Standard deviation (must be >= 0)
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, SimError> {
        if !(std_dev >= 0.0) {
            return Err(SimError::invalid(
                "normal",
                format!("std_dev must be >= 0, got {}", std_dev),
            ));
        }
        let inner = Normal::new(mean, std_dev)
            .map_err(|e| SimError::invalid("normal", e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Distribution for NormalDistribution {
    fn next_value(&self, rng: &mut SimRng) -> f64 {
        self.inner.sample(rng)
    }
}

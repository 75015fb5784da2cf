//! Random distribution implementations
//!
//! This module turns a [`DistributionSpec`] into a fixed-size [`Sample`]. Every
//! sampler owns its own xoshiro256++ generator, created fresh for each run,
//! so two runs never share hidden generator state.
//!
//! # Distributions
//!
//! - **Uniform**: continuous values in `[low, high)`
//! - **Normal**: Gaussian with mean and standard deviation
//! - **Binomial**: successes out of `trials` with probability `p`
//! - **Poisson**: event counts with mean `rate`
//!
//! # Example
//!
//! ```
//! use randsim::distribution::{DistributionSpec, Sampler};
//!
//! let spec = DistributionSpec::Uniform { low: 0.0, high: 1.0 };
//! let mut sampler = Sampler::with_seed(42);
//! let sample = sampler.generate(&spec, 100).unwrap();
//! assert_eq!(sample.len(), 100);
//! ```

pub mod binomial;
pub mod normal;
pub mod poisson;
pub mod uniform;

use crate::error::SimError;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generator type threaded through every distribution
pub type SimRng = Xoshiro256PlusPlus;

/// Distribution trait for value generation
///
/// Implementations hold validated parameters only; the generator is passed in
/// by the [`Sampler`] that owns it.
pub trait Distribution: Send {
    /// Draw the next value
    fn next_value(&self, rng: &mut SimRng) -> f64;

    /// Whether every value this distribution produces is an integer
    fn is_discrete(&self) -> bool {
        false
    }
}

/// Distribution tag
///
/// Parsed case-insensitively from its lowercase name. Unknown names are
/// rejected with [`SimError::UnsupportedDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DistributionKind {
    Uniform,
    Normal,
    Binomial,
    Poisson,
}

impl DistributionKind {
    /// All supported kinds, in menu order
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Uniform,
        DistributionKind::Normal,
        DistributionKind::Binomial,
        DistributionKind::Poisson,
    ];

    /// Lowercase tag used in file names and config
    pub fn tag(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Normal => "normal",
            DistributionKind::Binomial => "binomial",
            DistributionKind::Poisson => "poisson",
        }
    }

    /// Capitalized name used in chart titles
    pub fn title(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Normal => "Normal",
            DistributionKind::Binomial => "Binomial",
            DistributionKind::Poisson => "Poisson",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DistributionKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(DistributionKind::Uniform),
            "normal" => Ok(DistributionKind::Normal),
            "binomial" => Ok(DistributionKind::Binomial),
            "poisson" => Ok(DistributionKind::Poisson),
            _ => Err(SimError::UnsupportedDistribution(s.to_string())),
        }
    }
}

impl TryFrom<String> for DistributionKind {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DistributionKind> for String {
    fn from(kind: DistributionKind) -> Self {
        kind.tag().to_string()
    }
}

/// Distribution specification: a tag plus that distribution's parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DistributionSpec {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
    Binomial { trials: u64, success_probability: f64 },
    Poisson { rate: f64 },
}

impl DistributionSpec {
    /// Default parameters for a kind
    pub fn default_for(kind: DistributionKind) -> Self {
        match kind {
            DistributionKind::Uniform => DistributionSpec::Uniform { low: 0.0, high: 1.0 },
            DistributionKind::Normal => DistributionSpec::Normal { mean: 0.0, std_dev: 1.0 },
            DistributionKind::Binomial => DistributionSpec::Binomial {
                trials: 1,
                success_probability: 0.5,
            },
            DistributionKind::Poisson => DistributionSpec::Poisson { rate: 1.0 },
        }
    }

    /// The tag of this specification
    pub fn kind(&self) -> DistributionKind {
        match self {
            DistributionSpec::Uniform { .. } => DistributionKind::Uniform,
            DistributionSpec::Normal { .. } => DistributionKind::Normal,
            DistributionSpec::Binomial { .. } => DistributionKind::Binomial,
            DistributionSpec::Poisson { .. } => DistributionKind::Poisson,
        }
    }

    /// Range-check the parameters
    pub fn validate(&self) -> Result<(), SimError> {
        match *self {
            DistributionSpec::Uniform { low, high } => {
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
            }
            DistributionSpec::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(SimError::invalid("normal", "mean must be finite"));
                }
                if !(std_dev >= 0.0) || !std_dev.is_finite() {
                    return Err(SimError::invalid(
                        "normal",
                        format!("std_dev must be >= 0, got {}", std_dev),
                    ));
                }
            }
            DistributionSpec::Binomial { trials, success_probability } => {
                if trials < 1 {
                    return Err(SimError::invalid("binomial", "trials must be at least 1"));
                }
                if !(0.0..=1.0).contains(&success_probability) {
                    return Err(SimError::invalid(
                        "binomial",
                        format!("success_probability must be in [0, 1], got {}", success_probability),
                    ));
                }
            }
            DistributionSpec::Poisson { rate } => {
                if !(rate > 0.0) || !rate.is_finite() {
                    return Err(SimError::invalid(
                        "poisson",
                        format!("rate must be > 0, got {}", rate),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Build the distribution this specification describes
    pub fn build(&self) -> Result<Box<dyn Distribution>, SimError> {
        self.validate()?;
        let dist: Box<dyn Distribution> = match *self {
            DistributionSpec::Uniform { low, high } => {
                Box::new(uniform::UniformDistribution::new(low, high)?)
            }
            DistributionSpec::Normal { mean, std_dev } => {
                Box::new(normal::NormalDistribution::new(mean, std_dev)?)
            }
            DistributionSpec::Binomial { trials, success_probability } => {
                Box::new(binomial::BinomialDistribution::new(trials, success_probability)?)
            }
            DistributionSpec::Poisson { rate } => Box::new(poisson::PoissonDistribution::new(rate)?),
        };
        Ok(dist)
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionSpec::Uniform { low, high } => write!(f, "Uniform(low={}, high={})", low, high),
            DistributionSpec::Normal { mean, std_dev } => {
                write!(f, "Normal(mean={}, std_dev={})", mean, std_dev)
            }
            DistributionSpec::Binomial { trials, success_probability } => {
                write!(f, "Binomial(trials={}, p={})", trials, success_probability)
            }
            DistributionSpec::Poisson { rate } => write!(f, "Poisson(rate={})", rate),
        }
    }
}

/// An immutable, ordered sample
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    discrete: bool,
}

impl Sample {
    pub fn new(values: Vec<f64>, discrete: bool) -> Self {
        Self { values, discrete }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// True for integer-valued samples (Binomial, Poisson)
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Owns the generator for one run
pub struct Sampler {
    rng: SimRng,
}

impl Sampler {
    /// Create a sampler with a random seed
    pub fn from_entropy() -> Self {
        Self {
            rng: SimRng::from_entropy(),
        }
    }

    /// Create a sampler with a specific seed
    ///
    /// Identical seeds give bit-identical samples for the same specification.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, random otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw `count` values from `spec`
    ///
    /// A count of zero yields an empty sample.
    pub fn generate(&mut self, spec: &DistributionSpec, count: usize) -> Result<Sample, SimError> {
        let dist = spec.build()?;
        let values = (0..count).map(|_| dist.next_value(&mut self.rng)).collect();
        Ok(Sample::new(values, dist.is_discrete()))
    }
}

/// One-shot generation with a fresh sampler
pub fn generate(spec: &DistributionSpec, count: usize, seed: Option<u64>) -> Result<Sample, SimError> {
    Sampler::new(seed).generate(spec, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!("Uniform".parse::<DistributionKind>().unwrap(), DistributionKind::Uniform);
        assert_eq!("NORMAL".parse::<DistributionKind>().unwrap(), DistributionKind::Normal);
        assert_eq!(" poisson ".parse::<DistributionKind>().unwrap(), DistributionKind::Poisson);
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "cauchy".parse::<DistributionKind>().unwrap_err();
        assert!(matches!(err, SimError::UnsupportedDistribution(ref name) if name == "cauchy"));
    }

    #[test]
    fn test_kind_deserialize_unknown() {
        #[derive(Deserialize)]
        struct Holder {
            #[allow(dead_code)]
            kind: DistributionKind,
        }
        let err = serde_json::from_str::<Holder>(r#"{"kind": "gamma"}"#).err().unwrap();
        assert!(err.to_string().contains("Unsupported distribution: gamma"));
    }

    #[test]
    fn test_generate_exact_count() {
        for kind in DistributionKind::ALL {
            let spec = DistributionSpec::default_for(kind);
            let sample = generate(&spec, 257, None).unwrap();
            assert_eq!(sample.len(), 257, "{} produced wrong count", kind);
        }
    }

    #[test]
    fn test_generate_zero_count() {
        let sample = generate(&DistributionSpec::default_for(DistributionKind::Normal), 0, Some(1)).unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    fn test_generate_seeded_deterministic() {
        for kind in DistributionKind::ALL {
            let spec = DistributionSpec::default_for(kind);
            let a = generate(&spec, 1000, Some(42)).unwrap();
            let b = generate(&spec, 1000, Some(42)).unwrap();
            let a_bits: Vec<u64> = a.values().iter().map(|v| v.to_bits()).collect();
            let b_bits: Vec<u64> = b.values().iter().map(|v| v.to_bits()).collect();
            assert_eq!(a_bits, b_bits, "{} is not reproducible", kind);
        }

        let spec = DistributionSpec::Uniform { low: 0.0, high: 1.0 };
        let a = generate(&spec, 1000, Some(42)).unwrap();
        let mean = a.values().iter().sum::<f64>() / a.len() as f64;
        assert!((0.0..=1.0).contains(&mean));
        assert!((mean - 0.5).abs() < 0.05, "mean {} too far from 0.5", mean);
    }

    #[test]
    fn test_generate_different_seeds_differ() {
        let spec = DistributionSpec::Normal { mean: 0.0, std_dev: 1.0 };
        let a = generate(&spec, 50, Some(1)).unwrap();
        let b = generate(&spec, 50, Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_poisson_non_negative_integers() {
        let sample = generate(&DistributionSpec::Poisson { rate: 2.0 }, 500, None).unwrap();
        assert!(sample.is_discrete());
        for &v in sample.values() {
            assert!(v >= 0.0);
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn test_discrete_flags() {
        let uniform = generate(&DistributionSpec::default_for(DistributionKind::Uniform), 1, Some(0)).unwrap();
        let binomial = generate(&DistributionSpec::default_for(DistributionKind::Binomial), 1, Some(0)).unwrap();
        assert!(!uniform.is_discrete());
        assert!(binomial.is_discrete());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad = [
            DistributionSpec::Uniform { low: 1.0, high: 1.0 },
            DistributionSpec::Uniform { low: 0.0, high: f64::INFINITY },
            DistributionSpec::Normal { mean: 0.0, std_dev: -1.0 },
            DistributionSpec::Binomial { trials: 0, success_probability: 0.5 },
            DistributionSpec::Binomial { trials: 5, success_probability: 1.5 },
            DistributionSpec::Poisson { rate: 0.0 },
        ];
        for spec in bad {
            assert!(
                matches!(spec.validate(), Err(SimError::InvalidParameter { .. })),
                "{} should be rejected",
                spec
            );
        }
    }

    #[test]
    fn test_overflowing_uniform_range_rejected_before_sampling() {
        let spec = DistributionSpec::Uniform { low: -1e308, high: 1e308 };
        assert!(matches!(spec.validate(), Err(SimError::InvalidParameter { .. })));
        assert!(generate(&spec, 10, Some(1)).is_err());
    }

    #[test]
    fn test_spec_kind_roundtrip() {
        for kind in DistributionKind::ALL {
            assert_eq!(DistributionSpec::default_for(kind).kind(), kind);
            assert_eq!(kind.tag().parse::<DistributionKind>().unwrap(), kind);
        }
    }
}

//! CLI to run-request conversion utilities

use crate::config::cli::Cli;
use crate::config::Config;
use crate::distribution::{DistributionKind, DistributionSpec};
use crate::pipeline::RunRequest;
use anyhow::{Context, Result};

/// Parse a distribution name
///
/// Unknown names fail with `UnsupportedDistribution`.
pub fn parse_distribution(name: &str) -> Result<DistributionKind> {
    Ok(name.parse::<DistributionKind>()?)
}

/// Build a specification for `kind`, filling unset parameters with defaults
pub fn build_spec(kind: DistributionKind, cli: &Cli) -> DistributionSpec {
    match DistributionSpec::default_for(kind) {
        DistributionSpec::Uniform { low, high } => DistributionSpec::Uniform {
            low: cli.low.unwrap_or(low),
            high: cli.high.unwrap_or(high),
        },
        DistributionSpec::Normal { mean, std_dev } => DistributionSpec::Normal {
            mean: cli.mean.unwrap_or(mean),
            std_dev: cli.std_dev.unwrap_or(std_dev),
        },
        DistributionSpec::Binomial { trials, success_probability } => DistributionSpec::Binomial {
            trials: cli.trials.unwrap_or(trials),
            success_probability: cli.probability.unwrap_or(success_probability),
        },
        DistributionSpec::Poisson { rate } => DistributionSpec::Poisson {
            rate: cli.rate.unwrap_or(rate),
        },
    }
}

/// Build the run request described by run-mode flags
///
/// Count and seed fall back to the configuration defaults.
pub fn build_run_request(cli: &Cli, config: &Config) -> Result<RunRequest> {
    let name = cli
        .distribution
        .as_deref()
        .context("--distribution is required in run mode")?;
    let kind = parse_distribution(name)?;
    let spec = build_spec(kind, cli);
    spec.validate()
        .with_context(|| format!("Invalid parameters for {}", kind))?;

    Ok(RunRequest {
        spec,
        count: cli.count.unwrap_or(config.defaults.count),
        sample_name: cli.name.clone(),
        seed: cli.seed.or(config.defaults.seed),
        animate: cli.animate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("randsim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_distribution_unknown() {
        let err = parse_distribution("weibull").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimError>(),
            Some(SimError::UnsupportedDistribution(_))
        ));
    }

    #[test]
    fn test_build_spec_defaults() {
        let cli = parse(&[]);
        assert_eq!(
            build_spec(DistributionKind::Binomial, &cli),
            DistributionSpec::Binomial { trials: 1, success_probability: 0.5 }
        );
    }

    #[test]
    fn test_build_spec_overrides() {
        let cli = parse(&["--trials", "10", "--probability", "0.3", "--rate", "2.5"]);
        assert_eq!(
            build_spec(DistributionKind::Binomial, &cli),
            DistributionSpec::Binomial { trials: 10, success_probability: 0.3 }
        );
        assert_eq!(build_spec(DistributionKind::Poisson, &cli), DistributionSpec::Poisson { rate: 2.5 });
    }

    #[test]
    fn test_build_run_request() {
        let cli = parse(&["--mode", "run", "-d", "Normal", "--mean", "-2", "--std-dev", "0.5", "-s", "9"]);
        let request = build_run_request(&cli, &Config::default()).unwrap();

        assert_eq!(request.spec, DistributionSpec::Normal { mean: -2.0, std_dev: 0.5 });
        assert_eq!(request.count, 1000);
        assert_eq!(request.seed, Some(9));
        assert!(request.sample_name.is_none());
    }

    #[test]
    fn test_build_run_request_config_seed() {
        let cli = parse(&["--mode", "run", "-d", "poisson"]);
        let mut config = Config::default();
        config.defaults.seed = Some(77);
        config.defaults.count = 50;

        let request = build_run_request(&cli, &config).unwrap();
        assert_eq!(request.seed, Some(77));
        assert_eq!(request.count, 50);
    }

    #[test]
    fn test_build_run_request_invalid_parameters() {
        let cli = parse(&["--mode", "run", "-d", "uniform", "--low", "3", "--high", "1"]);
        assert!(build_run_request(&cli, &Config::default()).is_err());
    }
}

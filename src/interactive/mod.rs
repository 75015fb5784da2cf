//! Interactive menu
//!
//! ```text
//! === Randomness Simulator ===
//! 1) Uniform  2) Normal  3) Binomial  4) Poisson  5) All  0) Exit
//! ```
//!
//! Each pass through the menu performs one selection; the menu repeats until
//! the user chooses 0 or input ends.

pub mod prompt;

use crate::distribution::{DistributionKind, DistributionSpec};
use crate::output::text;
use crate::pipeline::{Pipeline, RunArtifacts, RunRequest};
use crate::Result;
use prompt::Prompter;
use std::io::{BufRead, Write};

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Single(DistributionKind),
    All,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to a choice
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::Single(DistributionKind::Uniform)),
            2 => Some(MenuChoice::Single(DistributionKind::Normal)),
            3 => Some(MenuChoice::Single(DistributionKind::Binomial)),
            4 => Some(MenuChoice::Single(DistributionKind::Poisson)),
            5 => Some(MenuChoice::All),
            _ => None,
        }
    }
}

/// Interactive session driving a pipeline
pub struct Menu<'a, R, W> {
    prompter: Prompter<R, W>,
    pipeline: &'a Pipeline,
    default_count: usize,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(prompter: Prompter<R, W>, pipeline: &'a Pipeline, default_count: usize) -> Self {
        Self {
            prompter,
            pipeline,
            default_count,
        }
    }

    /// Loop until the user exits; returns every completed run
    pub fn run(&mut self) -> Result<Vec<RunArtifacts>> {
        let mut completed = Vec::new();
        loop {
            match self.select()? {
                MenuChoice::Exit => {
                    self.prompter.say("Exiting.")?;
                    return Ok(completed);
                }
                MenuChoice::All => completed.extend(self.run_all()?),
                MenuChoice::Single(kind) => completed.push(self.run_single(kind)?),
            }
        }
    }

    fn select(&mut self) -> Result<MenuChoice> {
        let p = &mut self.prompter;
        p.say("=== Randomness Simulator ===")?;
        p.say("Choose distribution:")?;
        p.say("1) Uniform")?;
        p.say("2) Normal")?;
        p.say("3) Binomial")?;
        p.say("4) Poisson")?;
        p.say("5) All (generate one example of each)")?;
        p.say("0) Exit")?;

        loop {
            let n = p.ask_int("Select option [1-5,0]: ", Some(1), Some(0))?;
            match MenuChoice::from_number(n) {
                Some(choice) => return Ok(choice),
                None => p.say("Please choose a number between 0 and 5.")?,
            }
        }
    }

    fn ask_count(&mut self, prompt: &str) -> Result<usize> {
        let n = self
            .prompter
            .ask_int(prompt, Some(self.default_count as i64), Some(1))?;
        Ok(n as usize)
    }

    fn run_all(&mut self) -> Result<Vec<RunArtifacts>> {
        let seed = self.prompter.ask_optional_u64("Optional seed (blank for random): ")?;
        let prompt = format!("Number of samples (default {}): ", self.default_count);
        let count = self.ask_count(&prompt)?;

        let runs = self.pipeline.run_all(count, seed)?;
        for run in &runs {
            self.report(run)?;
        }
        Ok(runs)
    }

    fn run_single(&mut self, kind: DistributionKind) -> Result<RunArtifacts> {
        let prompt = format!("Number of samples to generate (default {}): ", self.default_count);
        let count = self.ask_count(&prompt)?;
        let seed = self
            .prompter
            .ask_optional_u64("Optional integer seed for reproducibility (blank for random): ")?;
        let spec = self.ask_parameters(kind)?;
        let name = self.ask_sample_name()?;

        let mut request = RunRequest::new(spec, count).with_seed(seed);
        request.sample_name = name;

        let run = self.pipeline.run(&request)?;
        self.report(&run)?;
        Ok(run)
    }

    /// Prompt for the parameters of `kind`
    pub fn ask_parameters(&mut self, kind: DistributionKind) -> Result<DistributionSpec> {
        let p = &mut self.prompter;
        let spec = match kind {
            DistributionKind::Uniform => loop {
                let low = p.ask_float("Uniform low (default 0.0): ", Some(0.0), None)?;
                let high = p.ask_float("Uniform high (default 1.0): ", Some(1.0), None)?;
                if !(high - low).is_finite() {
                    p.say("Range between low and high is too large.")?;
                    continue;
                }
                if high > low {
                    break DistributionSpec::Uniform { low, high };
                }
                if high < low {
                    p.say("High must be > low. Swapping values.")?;
                    break DistributionSpec::Uniform { low: high, high: low };
                }
                p.say("High must differ from low.")?;
            },
            DistributionKind::Normal => {
                let mean = p.ask_float("Normal mean (default 0.0): ", Some(0.0), None)?;
                let std_dev = p.ask_float("Normal std dev (default 1.0): ", Some(1.0), Some(0.0))?;
                DistributionSpec::Normal { mean, std_dev }
            }
            DistributionKind::Binomial => {
                let trials = p.ask_int("Binomial trials (default 1): ", Some(1), Some(1))?;
                let prob = p.ask_float("Binomial p (prob of success) (0-1) (default 0.5): ", Some(0.5), None)?;
                DistributionSpec::Binomial {
                    trials: trials as u64,
                    success_probability: prob.clamp(0.0, 1.0),
                }
            }
            DistributionKind::Poisson => {
                let rate = p.ask_parsed(
                    "Poisson lambda (mean rate) (default 1.0): ",
                    Some(1.0),
                    "Please enter a valid number.",
                    |v: &f64| {
                        if v.is_finite() && *v > 0.0 {
                            None
                        } else {
                            Some("Please enter a value > 0".to_string())
                        }
                    },
                )?;
                DistributionSpec::Poisson { rate }
            }
        };
        Ok(spec)
    }

    fn ask_sample_name(&mut self) -> Result<Option<String>> {
        loop {
            match self.prompter.ask_optional_text("Optional sample name prefix (blank = auto): ")? {
                Some(name) if name.contains(['/', '\\']) => {
                    self.prompter.say("Sample name must not contain path separators.")?;
                }
                other => return Ok(other),
            }
        }
    }

    fn report(&mut self, run: &RunArtifacts) -> Result<()> {
        let p = &mut self.prompter;
        p.say(format!("Done. Files created for {}:", run.sample_name))?;
        p.say(run.raw_data_path.display())?;
        p.say(run.stats_path.display())?;
        p.say(run.histogram_path.display())?;
        if let Some(ref record) = run.stats {
            for line in text::summary_lines(Some(record)) {
                p.say(line)?;
            }
        }
        Ok(())
    }

    /// Consume the menu, returning the prompter
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }
}

//! randsim CLI entry point

use anyhow::{Context, Result};
use randsim::config::cli::{Cli, ExecutionMode};
use randsim::config::{cli_convert, toml, validator, Config};
use randsim::interactive::prompt::Prompter;
use randsim::interactive::Menu;
use randsim::output::{json, text};
use randsim::pipeline::Pipeline;
use randsim::service::FormService;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;
    setup_logging(cli.verbose)?;

    let config = toml::load_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    debug!(?config, "Configuration loaded");

    match cli.mode {
        ExecutionMode::Interactive => run_interactive(&config),
        ExecutionMode::Run => run_once(&cli, &config),
        ExecutionMode::Serve => run_service(&config),
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set log subscriber")
}

/// Numbered menu on stdin/stdout
fn run_interactive(config: &Config) -> Result<()> {
    let pipeline = Pipeline::new(config.output.clone()).quiet();
    let stdin = std::io::stdin();
    let prompter = Prompter::new(stdin.lock(), std::io::stdout());

    let mut menu = Menu::new(prompter, &pipeline, config.defaults.count);
    let runs = menu.run()?;
    debug!("Interactive session completed {} runs", runs.len());
    Ok(())
}

/// One run (or one per distribution) from command-line flags
fn run_once(cli: &Cli, config: &Config) -> Result<()> {
    let pipeline = Pipeline::new(config.output.clone());

    let runs = if cli.is_all() {
        let count = cli.count.unwrap_or(config.defaults.count);
        let seed = cli.seed.or(config.defaults.seed);
        pipeline.run_all(count, seed)?
    } else {
        let request = cli_convert::build_run_request(cli, config)?;
        vec![pipeline.run(&request)?]
    };

    for run in &runs {
        text::print_artifacts(run);
    }

    if let Some(ref path) = cli.json_output {
        json::write_run_summaries(&runs, path)?;
        println!("Run summary written to {}", path.display());
    }

    Ok(())
}

fn run_service(config: &Config) -> Result<()> {
    // Service mode uses tokio runtime
    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    runtime.block_on(async {
        let service = FormService::new(&config.server, config.output.bins);
        service.run().await
    })
}

//! Simulates a stellar population and writes its main-sequence and evolved
//! stars to CSV.

mod output;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use stellar_population::{simulate, DomainPolicy, IfmrVariant, SimulationConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Monte Carlo stellar population and remnant synthesis")]
struct Cli {
    /// YAML configuration file (flags below override its values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of candidate stars drawn before IMF rejection
    #[arg(long)]
    stars: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// IFMR rule set: kalirai2007 or kalirai2008-raithel2018
    #[arg(long)]
    variant: Option<IfmrVariant>,

    /// What to do with stars outside the IFMR: flag, drop or abort
    #[arg(long)]
    on_domain_error: Option<DomainPolicy>,

    /// Directory for evolved_stars.csv and ms_stars.csv
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(stars) = self.stars {
            config.stars = stars;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(policy) = self.on_domain_error {
            config.on_domain_error = policy;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.simulation_config()?;
    let start = Instant::now();

    let population = simulate(&config)?;
    if !population.domain_errors.is_empty() {
        warn!(
            count = population.domain_errors.len(),
            policy = %config.on_domain_error,
            "Evolved stars outside the {} relations",
            config.variant
        );
    }

    let tables = output::write_population(&cli.output_dir, &population)?;
    info!(
        evolved = %tables.evolved.display(),
        main_sequence = %tables.main_sequence.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Wrote population tables"
    );
    println!("Remnants: {}", population.census());

    Ok(())
}

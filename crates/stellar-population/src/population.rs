//! End-to-end population synthesis.
//!
//! [`simulate`] runs every stage over one seeded random stream. Draws are
//! taken in a fixed order so a seed and configuration always reproduce the
//! same population:
//!
//! 1. one acceptance draw per candidate
//! 2. one uniform mass per candidate
//! 3. one uniform age per star accepted under the IMF
//! 4. one classification draw per evolved star in the NS/BH overlap band
//! 5. two draws per evolved star in a stochastic IFMR band
//!
//! Within each stage stars are visited in index order.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use units::{Mass, Time};

use crate::config::{DomainPolicy, SimulationConfig};
use crate::error::{IfmrError, PopulationError};
use crate::evolution::{classify_evolution, main_sequence_lifetimes};
use crate::ifmr::compute_final_mass;
use crate::remnant::{classify_remnants, RemnantCensus, RemnantType};
use crate::sampling::{sample_uniform, select, RejectionSampler};

/// A star still burning hydrogen in its core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainSequenceStar {
    pub mass: Mass,
    pub age: Time,
}

/// A star that has left the main sequence, with its remnant.
///
/// `final_mass` is `None` when the IFMR defines no final mass for the star's
/// initial mass and remnant type; the matching [`StarDomainError`] explains
/// why.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvolvedStar {
    /// Initial mass
    pub mass: Mass,
    pub age: Time,
    pub remnant: RemnantType,
    pub final_mass: Option<Mass>,
}

/// An evolved star without a final mass.
#[derive(Debug, Clone, PartialEq)]
pub struct StarDomainError {
    /// Index among all evolved stars, before any were dropped.
    pub index: usize,
    pub mass: Mass,
    pub error: IfmrError,
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    /// Candidates drawn before IMF rejection.
    pub candidates: usize,
    /// Candidates accepted under the IMF.
    pub accepted: usize,
    pub main_sequence: Vec<MainSequenceStar>,
    pub evolved: Vec<EvolvedStar>,
    pub domain_errors: Vec<StarDomainError>,
}

impl Population {
    pub fn census(&self) -> RemnantCensus {
        RemnantCensus::from_remnants(self.evolved.iter().map(|star| &star.remnant))
    }
}

/// Runs a full simulation from `config.seed`.
///
/// # Example
/// ```
/// use stellar_population::{simulate, SimulationConfig};
///
/// let config = SimulationConfig {
///     stars: 10_000,
///     seed: 3,
///     ..SimulationConfig::default()
/// };
/// let population = simulate(&config).unwrap();
/// assert_eq!(population.candidates, 10_000);
/// ```
pub fn simulate(config: &SimulationConfig) -> Result<Population, PopulationError> {
    let mut rng = ChaChaRng::seed_from_u64(config.seed);
    simulate_with_rng(&mut rng, config)
}

/// Runs a full simulation on a caller-supplied stream, ignoring `config.seed`.
pub fn simulate_with_rng(
    rng: &mut ChaChaRng,
    config: &SimulationConfig,
) -> Result<Population, PopulationError> {
    config.validate()?;

    info!(
        stars = config.stars,
        seed = config.seed,
        variant = %config.variant,
        "Simulating stellar population"
    );

    let sampler = RejectionSampler::new(config.mass_range);
    let random_probs = sample_uniform(rng, config.stars, 0.0, 1.0);
    let random_masses = sampler.sample_masses(rng, config.stars);

    let in_imf = sampler.accept(&random_masses, &random_probs)?;
    let masses = select(&random_masses, &in_imf, true)?;
    debug!(
        accepted = masses.len(),
        envelope = sampler.envelope(),
        "Filtered candidates below the IMF"
    );

    let ages = sample_uniform(rng, masses.len(), 0.0, config.max_age_gyr);
    let lifetimes = main_sequence_lifetimes(&masses);
    let is_evolved = classify_evolution(&ages, &lifetimes)?;

    let main_sequence: Vec<MainSequenceStar> = select(&masses, &is_evolved, false)?
        .into_iter()
        .zip(select(&ages, &is_evolved, false)?)
        .map(|(mass, age)| MainSequenceStar {
            mass: Mass::from_solar_masses(mass),
            age: Time::from_gyr(age),
        })
        .collect();
    let evolved_masses = select(&masses, &is_evolved, true)?;
    let evolved_ages = select(&ages, &is_evolved, true)?;
    info!(
        main_sequence = main_sequence.len(),
        evolved = evolved_masses.len(),
        "Split main-sequence and evolved stars"
    );

    let remnants = classify_remnants(rng, &evolved_masses);
    let final_masses = compute_final_mass(rng, &evolved_masses, &remnants, config.variant)?;

    let (evolved, domain_errors) = assemble_evolved(
        &evolved_masses,
        &evolved_ages,
        &remnants,
        final_masses,
        config.on_domain_error,
    )?;

    let population = Population {
        candidates: config.stars,
        accepted: masses.len(),
        main_sequence,
        evolved,
        domain_errors,
    };
    info!(
        census = %population.census(),
        domain_errors = population.domain_errors.len(),
        "Classified remnants"
    );

    Ok(population)
}

/// Builds evolved rows from per-star IFMR outcomes under `policy`.
///
/// Stars are visited in index order, so with [`DomainPolicy::Abort`] the
/// error names the first star without a final mass.
pub(crate) fn assemble_evolved(
    masses: &[f64],
    ages: &[f64],
    remnants: &[RemnantType],
    final_masses: Vec<Result<f64, IfmrError>>,
    policy: DomainPolicy,
) -> Result<(Vec<EvolvedStar>, Vec<StarDomainError>), PopulationError> {
    PopulationError::check_lengths("masses", masses.len(), "ages", ages.len())?;
    PopulationError::check_lengths("masses", masses.len(), "remnants", remnants.len())?;
    PopulationError::check_lengths(
        "masses",
        masses.len(),
        "final_masses",
        final_masses.len(),
    )?;

    let mut evolved = Vec::with_capacity(masses.len());
    let mut domain_errors = Vec::new();
    for (index, (((&mass, &age), &remnant), outcome)) in masses
        .iter()
        .zip(ages)
        .zip(remnants)
        .zip(final_masses)
        .enumerate()
    {
        let star = EvolvedStar {
            mass: Mass::from_solar_masses(mass),
            age: Time::from_gyr(age),
            remnant,
            final_mass: None,
        };

        match outcome {
            Ok(value) => evolved.push(EvolvedStar {
                final_mass: Some(Mass::from_solar_masses(value)),
                ..star
            }),
            Err(error) => {
                if policy == DomainPolicy::Abort {
                    return Err(PopulationError::Domain {
                        index,
                        source: error,
                    });
                }
                warn!(index, policy = %policy, "{}", error);
                if policy == DomainPolicy::Flag {
                    evolved.push(star);
                }
                domain_errors.push(StarDomainError {
                    index,
                    mass: star.mass,
                    error,
                });
            }
        }
    }

    Ok((evolved, domain_errors))
}

//! Monte Carlo synthesis of a stellar population and its remnants.
//!
//! Candidate masses are drawn uniformly and kept under the Kroupa (2001) IMF,
//! aged uniformly over the lifetime of the Milky Way, split into
//! main-sequence and evolved stars, and the evolved stars are classified into
//! white dwarfs, neutron stars and black holes with final masses from an
//! initial-mass–final-mass relation.

pub mod config;
pub mod error;
pub mod evolution;
pub mod ifmr;
pub mod imf;
pub mod population;
pub mod remnant;
pub mod sampling;

#[cfg(test)]
mod sampling_test;

pub use config::{ConfigError, DomainPolicy, MassRange, SimulationConfig};
pub use error::{IfmrError, PopulationError};
pub use evolution::{
    classify_evolution, is_evolved, main_sequence_lifetime, main_sequence_lifetimes,
};
pub use ifmr::{compute_final_mass, final_mass, IfmrVariant};
pub use imf::{imf_densities, imf_density};
pub use population::{
    simulate, simulate_with_rng, EvolvedStar, MainSequenceStar, Population, StarDomainError,
};
pub use remnant::{classify_remnant, classify_remnants, RemnantCensus, RemnantType};
pub use sampling::{sample_accepted, sample_gaussian, sample_uniform, select, RejectionSampler};

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::config::MassRange;
use crate::error::PopulationError;
use crate::imf::imf_density;

/// Draw `count` values uniformly from [low, high)
///
/// Each value takes one draw from `rng`, in index order.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `count` - Number of values to draw
/// * `low` - Inclusive lower bound
/// * `high` - Exclusive upper bound, must exceed `low` when `count > 0`
pub fn sample_uniform(rng: &mut ChaChaRng, count: usize, low: f64, high: f64) -> Vec<f64> {
    (0..count).map(|_| rng.random_range(low..high)).collect()
}

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// Consumes exactly two uniform draws from `rng`.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the logarithm argument in (0, 1]
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Accept each candidate whose uniform draw falls below its IMF density
///
/// `imf_probs[i]` and `random_draws[i]` belong to the same candidate star.
/// Returns a mask with one entry per candidate.
pub fn sample_accepted(
    imf_probs: &[f64],
    random_draws: &[f64],
) -> Result<Vec<bool>, PopulationError> {
    PopulationError::check_lengths(
        "imf_probs",
        imf_probs.len(),
        "random_draws",
        random_draws.len(),
    )?;

    Ok(imf_probs
        .iter()
        .zip(random_draws)
        .map(|(&prob, &draw)| draw < prob)
        .collect())
}

/// Keep the entries of `values` whose mask entry equals `keep`
///
/// Passing `keep = false` selects the complement of the mask.
pub fn select(values: &[f64], mask: &[bool], keep: bool) -> Result<Vec<f64>, PopulationError> {
    PopulationError::check_lengths("values", values.len(), "mask", mask.len())?;

    Ok(values
        .iter()
        .zip(mask)
        .filter(|(_, m)| **m == keep)
        .map(|(&v, _)| v)
        .collect())
}

/// Rejection sampler for the Kroupa IMF over a uniform mass proposal
///
/// Densities are divided by the envelope, the largest IMF density over the
/// mass range, so acceptance probabilities never exceed 1. The IMF decreases
/// monotonically and the envelope is the density at the lower bound: exactly
/// 1 for ranges starting at the hydrogen-burning limit, where densities are
/// compared against draws unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectionSampler {
    range: MassRange,
    envelope: f64,
}

impl RejectionSampler {
    pub fn new(range: MassRange) -> Self {
        let envelope = imf_density(range.min);
        Self { range, envelope }
    }

    pub fn range(&self) -> MassRange {
        self.range
    }

    pub fn envelope(&self) -> f64 {
        self.envelope
    }

    /// IMF densities scaled so that none exceeds 1 over the mass range.
    pub fn acceptance_probabilities(&self, masses: &[f64]) -> Vec<f64> {
        masses
            .iter()
            .map(|&mass| imf_density(mass) / self.envelope)
            .collect()
    }

    /// Draw candidate masses uniformly from the mass range.
    pub fn sample_masses(&self, rng: &mut ChaChaRng, count: usize) -> Vec<f64> {
        sample_uniform(rng, count, self.range.min, self.range.max)
    }

    /// Acceptance mask for candidate masses against their uniform draws.
    pub fn accept(
        &self,
        masses: &[f64],
        random_draws: &[f64],
    ) -> Result<Vec<bool>, PopulationError> {
        let probs = self.acceptance_probabilities(masses);
        sample_accepted(&probs, random_draws)
    }
}

//! Main-sequence lifetimes and the evolved / main-sequence split.

use crate::error::PopulationError;

/// Main-sequence lifetime of the Sun in Gyr, the normalisation of the
/// lifetime power law.
pub const SOLAR_MS_LIFETIME_GYR: f64 = 10.0;

/// Exponent of the mass-lifetime power law.
const LIFETIME_EXPONENT: f64 = 2.5;

/// Main-sequence lifetime in Gyr: t_MS = 10 / M^2.5
///
/// # Example
/// ```
/// use stellar_population::evolution::main_sequence_lifetime;
///
/// assert_eq!(main_sequence_lifetime(1.0), 10.0);
/// ```
pub fn main_sequence_lifetime(mass: f64) -> f64 {
    SOLAR_MS_LIFETIME_GYR / mass.powf(LIFETIME_EXPONENT)
}

pub fn main_sequence_lifetimes(masses: &[f64]) -> Vec<f64> {
    masses.iter().map(|&mass| main_sequence_lifetime(mass)).collect()
}

/// A star has left the main sequence once its age reaches its lifetime.
pub fn is_evolved(age: f64, ms_lifetime: f64) -> bool {
    age >= ms_lifetime
}

/// Evolved mask for parallel arrays of ages and main-sequence lifetimes.
///
/// The complement of the mask is the main-sequence population.
pub fn classify_evolution(ages: &[f64], lifetimes: &[f64]) -> Result<Vec<bool>, PopulationError> {
    PopulationError::check_lengths("ages", ages.len(), "lifetimes", lifetimes.len())?;

    Ok(ages
        .iter()
        .zip(lifetimes)
        .map(|(&age, &lifetime)| is_evolved(age, lifetime))
        .collect())
}

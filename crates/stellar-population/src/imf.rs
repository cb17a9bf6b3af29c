//! Kroupa (2001) initial mass function.

/// Hydrogen-burning limit and the normalisation mass of the IMF (M☉).
pub const HYDROGEN_BURNING_LIMIT: f64 = 0.08;

/// Mass where the power-law slope steepens (M☉).
pub const KROUPA_BREAK_MASS: f64 = 0.5;

/// Power-law exponent below the break mass.
const LOW_MASS_SLOPE: f64 = -1.3;

/// Power-law exponent above the break mass.
const HIGH_MASS_SLOPE: f64 = -2.3;

/// Relative IMF density at a given mass.
///
/// The Kroupa IMF is a broken power law:
/// - M ≤ 0.5 M☉: ξ(M) = (M / 0.08)^-1.3
/// - M > 0.5 M☉: ξ(M) = (0.5 / 0.08)^-1.3 · (M / 0.5)^-2.3
///
/// The density is not normalised: it equals 1 at the hydrogen-burning limit
/// and decreases monotonically, so on [0.08, ∞) it can be compared directly
/// against uniform draws in [0, 1).
///
/// # Example
/// ```
/// use stellar_population::imf::imf_density;
///
/// assert_eq!(imf_density(0.08), 1.0);
/// assert!(imf_density(1.0) < imf_density(0.5));
/// ```
pub fn imf_density(mass: f64) -> f64 {
    if mass <= KROUPA_BREAK_MASS {
        (mass / HYDROGEN_BURNING_LIMIT).powf(LOW_MASS_SLOPE)
    } else {
        (KROUPA_BREAK_MASS / HYDROGEN_BURNING_LIMIT).powf(LOW_MASS_SLOPE)
            * (mass / KROUPA_BREAK_MASS).powf(HIGH_MASS_SLOPE)
    }
}

/// Evaluates [`imf_density`] for every mass.
pub fn imf_densities(masses: &[f64]) -> Vec<f64> {
    masses.iter().map(|&mass| imf_density(mass)).collect()
}

use serde::{Deserialize, Serialize};

/// A stellar mass using f64 precision.
///
/// Solar masses are the base unit, matching how initial masses and remnant
/// masses are quoted in the IMF and IFMR literature.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let progenitor = Mass::from_solar_masses(20.0);
/// let remnant = Mass::from_solar_masses(1.6);
///
/// assert!(remnant < progenitor);
/// assert_eq!(remnant.to_solar_masses(), 1.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }
}

use serde::{Deserialize, Serialize};

/// A stellar age or lifetime using f64 precision.
///
/// Gyr is the base unit: population ages span 0 to the age of the Milky Way
/// (13.9 Gyr) and main-sequence lifetimes are quoted in Gyr.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let age = Time::from_gyr(4.6);
/// assert_eq!(age.to_gyr(), 4.6);
/// assert!(age < Time::from_gyr(13.9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Gyr

impl Time {
    /// Creates a new `Time` from a value in billions of years.
    pub fn from_gyr(value: f64) -> Self {
        Self(value)
    }

    /// Returns the time in billions of years.
    pub fn to_gyr(&self) -> f64 {
        self.0
    }
}

//! Configuration loading and validation for a population run.
//!
//! A run is fully described by a [`SimulationConfig`]. Every field has a
//! default, so a YAML file only needs the keys it overrides:
//!
//! ```yaml
//! stars: 100000
//! seed: 7
//! variant: kalirai2007
//! mass_range: { min: 0.08, max: 100.0 }
//! on_domain_error: drop
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ifmr::IfmrVariant;
use crate::imf::HYDROGEN_BURNING_LIMIT;

/// Age of the Milky Way in Gyr, the upper bound of sampled stellar ages.
pub const MILKY_WAY_AGE_GYR: f64 = 13.9;

/// Upper bound of the default candidate mass range (M☉).
pub const DEFAULT_MAX_MASS: f64 = 100.0;

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yaml::Error,
    },

    /// The run must simulate at least one star.
    #[error("star count must be positive, got {0}")]
    InvalidStarCount(usize),

    /// The candidate mass range is empty, inverted, or not positive.
    #[error("invalid mass range [{min}, {max}]: bounds must be finite with 0 < min < max")]
    InvalidMassRange {
        /// Lower bound (M☉).
        min: f64,
        /// Upper bound (M☉).
        max: f64,
    },

    /// The maximum stellar age is not a positive finite number.
    #[error("maximum age must be positive and finite, got {0} Gyr")]
    InvalidAgeRange(f64),

    /// An IFMR variant name was not recognised.
    #[error("unknown IFMR variant '{0}' (expected kalirai2007 or kalirai2008-raithel2018)")]
    UnknownVariant(String),

    /// A domain error policy name was not recognised.
    #[error("unknown domain error policy '{0}' (expected flag, drop or abort)")]
    UnknownPolicy(String),
}

/// Bounds of the uniform candidate mass draw, in solar masses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassRange {
    pub min: f64,
    pub max: f64,
}

impl Default for MassRange {
    fn default() -> Self {
        Self {
            min: HYDROGEN_BURNING_LIMIT,
            max: DEFAULT_MAX_MASS,
        }
    }
}

impl MassRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min < self.max;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidMassRange {
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// What to do with an evolved star that has no defined final mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainPolicy {
    /// Keep the star without a final mass and record the error.
    #[default]
    Flag,
    /// Leave the star out of the evolved table and record the error.
    Drop,
    /// Stop the run at the first such star.
    Abort,
}

impl fmt::Display for DomainPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            DomainPolicy::Flag => "flag",
            DomainPolicy::Drop => "drop",
            DomainPolicy::Abort => "abort",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for DomainPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flag" => Ok(DomainPolicy::Flag),
            "drop" => Ok(DomainPolicy::Drop),
            "abort" => Ok(DomainPolicy::Abort),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of candidate stars drawn before IMF rejection.
    pub stars: usize,
    /// Seed of the single random stream used by every stage.
    pub seed: u64,
    /// IFMR rule set used for final masses.
    pub variant: IfmrVariant,
    /// Bounds of the uniform candidate mass draw.
    pub mass_range: MassRange,
    /// Upper bound of the uniform age draw, in Gyr.
    pub max_age_gyr: f64,
    pub on_domain_error: DomainPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            stars: 100,
            seed: 1,
            variant: IfmrVariant::default(),
            mass_range: MassRange::default(),
            max_age_gyr: MILKY_WAY_AGE_GYR,
            on_domain_error: DomainPolicy::default(),
        }
    }
}

impl SimulationConfig {
    /// Reads and validates a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parses and validates YAML configuration text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stars == 0 {
            return Err(ConfigError::InvalidStarCount(self.stars));
        }
        self.mass_range.validate()?;
        if !(self.max_age_gyr.is_finite() && self.max_age_gyr > 0.0) {
            return Err(ConfigError::InvalidAgeRange(self.max_age_gyr));
        }
        Ok(())
    }
}

//! Error types for the `stellar-population` crate.
//!
//! Per-star IFMR failures are reported as [`IfmrError`] values alongside the
//! rest of the batch; [`PopulationError`] is reserved for failures that stop a
//! whole run.

use crate::config::ConfigError;
use crate::ifmr::IfmrVariant;
use crate::remnant::RemnantType;

/// A final mass that could not be assigned to one evolved star.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IfmrError {
    /// The initial mass lies outside every band the variant defines for this
    /// remnant type.
    #[error("no {variant} final mass for a {remnant} with initial mass {mass} M☉")]
    OutOfDomain {
        /// Initial mass in solar masses.
        mass: f64,
        /// Remnant type the star was classified as.
        remnant: RemnantType,
        /// Rule set that was applied.
        variant: IfmrVariant,
    },

    /// A stochastic band produced a final mass that is not positive.
    #[error("non-physical {remnant} final mass {value} M☉ drawn for initial mass {mass} M☉")]
    NonPhysical {
        /// Initial mass in solar masses.
        mass: f64,
        /// Remnant type the star was classified as.
        remnant: RemnantType,
        /// The rejected draw.
        value: f64,
    },
}

/// Errors that abort a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum PopulationError {
    /// The simulation configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Two per-star arrays that must be parallel have different lengths.
    #[error("{left} has {left_len} entries but {right} has {right_len}")]
    LengthMismatch {
        /// Name of the first array.
        left: &'static str,
        /// Length of the first array.
        left_len: usize,
        /// Name of the second array.
        right: &'static str,
        /// Length of the second array.
        right_len: usize,
    },

    /// A star had no final mass and the run was configured to abort.
    #[error("evolved star {index} has no final mass: {source}")]
    Domain {
        /// Index of the star within the evolved population.
        index: usize,
        /// The underlying per-star failure.
        source: IfmrError,
    },
}

impl PopulationError {
    pub(crate) fn check_lengths(
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    ) -> Result<(), Self> {
        if left_len == right_len {
            Ok(())
        } else {
            Err(Self::LengthMismatch {
                left,
                left_len,
                right,
                right_len,
            })
        }
    }
}

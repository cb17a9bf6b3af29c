//! Remnant-type classification of evolved stars.

use std::fmt;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Initial mass below which a star ends as a white dwarf (M☉).
pub const WHITE_DWARF_MAX_MASS: f64 = 9.0;

/// Initial mass where neutron stars and black holes start to overlap (M☉).
pub const OVERLAP_MIN_MASS: f64 = 15.0;

/// Initial mass above which every star ends as a black hole (M☉).
///
/// Inclusive: a star of exactly this mass still takes the overlap draw. The
/// neutron star relations stop below it, so a neutron star drawn here has no
/// final mass under either IFMR variant.
pub const OVERLAP_MAX_MASS: f64 = 27.5;

/// Probability that a star in the overlap band collapses to a black hole.
pub const OVERLAP_BLACK_HOLE_PROBABILITY: f64 = 0.4;

/// End state of an evolved star.
///
/// Serialized as its numeric code (1 = WD, 2 = NS, 3 = BH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RemnantType {
    WhiteDwarf = 1,
    NeutronStar = 2,
    BlackHole = 3,
}

impl RemnantType {
    pub const ALL: [RemnantType; 3] = [
        RemnantType::WhiteDwarf,
        RemnantType::NeutronStar,
        RemnantType::BlackHole,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RemnantType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            RemnantType::WhiteDwarf => "WD",
            RemnantType::NeutronStar => "NS",
            RemnantType::BlackHole => "BH",
        };
        write!(f, "{}", str)
    }
}

impl From<RemnantType> for u8 {
    fn from(remnant: RemnantType) -> u8 {
        remnant.code()
    }
}

impl TryFrom<u8> for RemnantType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(RemnantType::WhiteDwarf),
            2 => Ok(RemnantType::NeutronStar),
            3 => Ok(RemnantType::BlackHole),
            other => Err(format!("invalid remnant code {}", other)),
        }
    }
}

/// Classify one evolved star by its initial mass.
///
/// # Mass Bands
/// * M < 9 M☉: white dwarf
/// * 9 ≤ M < 15 M☉: neutron star
/// * 15 ≤ M ≤ 27.5 M☉: black hole with probability 0.4, otherwise neutron star
/// * M > 27.5 M☉: black hole
///
/// Only the overlap band consumes a draw from `rng`. A draw u in [0, 1) gives
/// a black hole when u < 0.4, so a draw of exactly 0.4 is a neutron star.
pub fn classify_remnant(rng: &mut ChaChaRng, mass: f64) -> RemnantType {
    match mass {
        m if m < WHITE_DWARF_MAX_MASS => RemnantType::WhiteDwarf,
        m if m < OVERLAP_MIN_MASS => RemnantType::NeutronStar,
        m if m <= OVERLAP_MAX_MASS => {
            let u: f64 = rng.random();
            if u < OVERLAP_BLACK_HOLE_PROBABILITY {
                RemnantType::BlackHole
            } else {
                RemnantType::NeutronStar
            }
        }
        _ => RemnantType::BlackHole,
    }
}

/// Classify every evolved star, drawing in index order.
pub fn classify_remnants(rng: &mut ChaChaRng, masses: &[f64]) -> Vec<RemnantType> {
    masses
        .iter()
        .map(|&mass| classify_remnant(rng, mass))
        .collect()
}

/// Number of evolved stars per remnant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemnantCensus {
    pub white_dwarfs: usize,
    pub neutron_stars: usize,
    pub black_holes: usize,
}

impl RemnantCensus {
    pub fn from_remnants<'a>(remnants: impl IntoIterator<Item = &'a RemnantType>) -> Self {
        remnants
            .into_iter()
            .fold(Self::default(), |mut census, remnant| {
                match remnant {
                    RemnantType::WhiteDwarf => census.white_dwarfs += 1,
                    RemnantType::NeutronStar => census.neutron_stars += 1,
                    RemnantType::BlackHole => census.black_holes += 1,
                }
                census
            })
    }

    pub fn total(&self) -> usize {
        self.white_dwarfs + self.neutron_stars + self.black_holes
    }

    pub fn count(&self, remnant: RemnantType) -> usize {
        match remnant {
            RemnantType::WhiteDwarf => self.white_dwarfs,
            RemnantType::NeutronStar => self.neutron_stars,
            RemnantType::BlackHole => self.black_holes,
        }
    }

    /// Share of the evolved population in percent, 0 for an empty census.
    pub fn percentage(&self, remnant: RemnantType) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.count(remnant) as f64 / total as f64,
        }
    }
}

impl fmt::Display for RemnantCensus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = RemnantType::ALL
            .iter()
            .map(|&remnant| {
                format!(
                    "{}s: {} ({:.2}%)",
                    remnant,
                    self.count(remnant),
                    self.percentage(remnant)
                )
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

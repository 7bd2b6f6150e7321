//! Core types for the Vimshottari dasa engine.

use crate::cycle::{DASA_LORDS, DASA_YEARS, entry_index_for_nakshatra};
use crate::error::DasaError;
use crate::graha::Graha;
use crate::util::DAYS_PER_YEAR;

/// Maximum dasa depth. Levels 0-4 supported.
pub const MAX_DASA_LEVEL: u8 = 4;

/// Default resolver walk bound: one full master cycle.
///
/// A query further than 120 years past the cycle entry is unreachable and
/// reported as unresolved rather than wrapping into a second cycle.
pub const DEFAULT_MAX_ITERATIONS: usize = 9;

/// The 5 hierarchical dasa levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DasaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

impl DasaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasa period at some level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DasaPeriod {
    /// The lord ruling this period.
    pub lord: Graha,
    /// Hierarchical level.
    pub level: DasaLevel,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
}

impl DasaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in dasa years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether the period contains `jd` under the half-open `[start, end)`
    /// convention. An epoch exactly on a boundary belongs to the following
    /// period, never the preceding one.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// The anchor of the whole recursive computation: at `reference_jd` the
/// top-level cycle is `entry_fraction` of the way through the segment at
/// `entry_index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// Reference epoch (JD UTC), typically the birth moment.
    pub reference_jd: f64,
    /// Entry segment index in Vimshottari order (0-8).
    pub entry_index: u8,
    /// Fraction of the entry segment already elapsed at the reference
    /// epoch, in [0, 1).
    pub entry_fraction: f64,
}

impl ReferencePoint {
    /// Construct a validated reference point.
    pub fn new(reference_jd: f64, entry_index: u8, entry_fraction: f64) -> Result<Self, DasaError> {
        if entry_index > 8 {
            return Err(DasaError::InvalidEntryIndex(entry_index));
        }
        if !(0.0..1.0).contains(&entry_fraction) {
            return Err(DasaError::InvalidFraction(entry_fraction));
        }
        Ok(Self {
            reference_jd,
            entry_index,
            entry_fraction,
        })
    }

    /// Construct from the Moon's nakshatra at birth.
    ///
    /// `nakshatra` is 1-based (1 = Ashwini .. 27 = Revati);
    /// `traversed_percent` is how much of the nakshatra the Moon has
    /// crossed, in [0, 100). The nakshatra maps linearly onto its lord's
    /// period, so the traversed share of the nakshatra equals the elapsed
    /// share of the entry mahadasha.
    pub fn from_nakshatra(
        nakshatra: u8,
        traversed_percent: f64,
        birth_jd: f64,
    ) -> Result<Self, DasaError> {
        if !(1..=27).contains(&nakshatra) {
            return Err(DasaError::InvalidNakshatra(nakshatra));
        }
        if !(0.0..100.0).contains(&traversed_percent) {
            return Err(DasaError::InvalidPercentage(traversed_percent));
        }
        Self::new(
            birth_jd,
            entry_index_for_nakshatra(nakshatra),
            traversed_percent / 100.0,
        )
    }

    /// The lord of the entry mahadasha.
    pub fn entry_lord(&self) -> Graha {
        DASA_LORDS[self.entry_index as usize]
    }

    /// Years of the entry mahadasha remaining at the reference epoch.
    pub fn balance_years(&self) -> f64 {
        (1.0 - self.entry_fraction) * DASA_YEARS[self.entry_index as usize]
    }
}

//! Error types for dasa engine input validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from dasa calculations.
///
/// The engine itself never fails for a validated reference point; these
/// only arise when constructing one from raw caller inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DasaError {
    /// Entry segment index outside 0-8.
    InvalidEntryIndex(u8),
    /// Entry offset fraction outside [0, 1).
    InvalidFraction(f64),
    /// Nakshatra number outside 1-27.
    InvalidNakshatra(u8),
    /// Traversed percentage outside [0, 100).
    InvalidPercentage(f64),
}

impl Display for DasaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntryIndex(i) => write!(f, "invalid entry index: {i} (expected 0-8)"),
            Self::InvalidFraction(v) => write!(f, "invalid entry fraction: {v} (expected [0, 1))"),
            Self::InvalidNakshatra(n) => write!(f, "invalid nakshatra number: {n} (expected 1-27)"),
            Self::InvalidPercentage(p) => {
                write!(f, "invalid traversed percentage: {p} (expected [0, 100))")
            }
        }
    }
}

impl Error for DasaError {}

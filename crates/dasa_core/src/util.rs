//! Shared unit conversions for dasa calculations.

/// Mean Gregorian year length in days.
///
/// The single year constant used for every time-unit conversion at every
/// nesting level. Mixing year constants across levels causes cumulative
/// drift in deep sub-periods.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Convert dasa years to days.
pub fn years_to_days(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Convert days to dasa years.
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

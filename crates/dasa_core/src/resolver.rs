//! Position resolver: the cyclic-walk primitive shared by all levels.
//!
//! Given a weighted 9-segment cycle, an entry position, and a query epoch,
//! finds which segment contains the query. The descender reuses this at
//! every nesting level with rescaled weights; the walk itself never knows
//! what level it is resolving.

use crate::cycle::CYCLE_LEN;
use crate::util::{days_to_years, years_to_days};

/// The segment found by a resolver walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    /// Index of the segment containing the query epoch (0-8).
    pub index: usize,
    /// Time already elapsed within that segment at the query epoch, in the
    /// cycle's year units.
    pub elapsed_years: f64,
    /// Absolute start of the segment (JD UTC).
    pub start_jd: f64,
    /// Absolute end of the segment (JD UTC, exclusive).
    pub end_jd: f64,
}

/// Resolve which segment of a weighted cycle contains `query_jd`.
///
/// `weights_years[entry_index]` is the segment in progress at
/// `reference_jd`, already `entry_fraction` elapsed; its true start is
/// back-dated by that amount. The walk accumulates full segment weights
/// forward from the entry index, wrapping modulo 9, until the running
/// total strictly exceeds the elapsed time. The strict comparison makes
/// periods half-open: a query exactly on a boundary resolves to the
/// following segment.
///
/// The walk runs in days, converting each weight with the one fixed year
/// constant in the same order a schedule walk does, so both sides place
/// every boundary at the identical representable value.
///
/// Returns `None` when the walk visits `max_iterations` segments without
/// resolving (query beyond the materialized cycle) or when the query
/// precedes the entry segment's back-dated start. Callers degrade this to
/// an unresolved marker rather than an error.
pub fn resolve_position(
    weights_years: &[f64; CYCLE_LEN],
    entry_index: usize,
    entry_fraction: f64,
    reference_jd: f64,
    query_jd: f64,
    max_iterations: usize,
) -> Option<ResolvedPosition> {
    let elapsed_before_reference =
        years_to_days(entry_fraction * weights_years[entry_index % CYCLE_LEN]);
    let total_elapsed_days = elapsed_before_reference + (query_jd - reference_jd);
    if total_elapsed_days < 0.0 {
        return None;
    }

    let mut accumulated = 0.0;
    for step in 0..max_iterations {
        let index = (entry_index + step) % CYCLE_LEN;
        let weight_days = years_to_days(weights_years[index]);
        if accumulated + weight_days > total_elapsed_days {
            let elapsed_days = total_elapsed_days - accumulated;
            let start_jd = query_jd - elapsed_days;
            let end_jd = start_jd + weight_days;
            return Some(ResolvedPosition {
                index,
                elapsed_years: days_to_years(elapsed_days),
                start_jd,
                end_jd,
            });
        }
        accumulated += weight_days;
    }
    None
}

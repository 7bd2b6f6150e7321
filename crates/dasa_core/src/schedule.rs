//! Schedule materializer: the absolute-dated partition of one master cycle.
//!
//! Walks the full 120-year cycle once from the reference point, producing
//! 9 mahadashas with their 9 bhuktis each. The entry mahadasha is
//! back-dated by the already-elapsed offset, so its start precedes the
//! reference epoch; all later periods are full-duration. Only this first
//! segment gets the partial treatment — sub-segments of later mahadashas
//! are never back-dated (the traditional schedule convention).

use crate::cycle::{CYCLE_LEN, DASA_LORDS, DASA_YEARS, sub_weights};
use crate::graha::Graha;
use crate::types::{DasaLevel, DasaPeriod, ReferencePoint};
use crate::util::years_to_days;

/// One bhukti (sub-period) entry in the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubDasa {
    pub period: DasaPeriod,
    /// Whether the reference epoch falls inside this bhukti.
    pub contains_reference: bool,
}

/// One mahadasha entry with its 9 bhuktis.
#[derive(Debug, Clone, PartialEq)]
pub struct MahaDasa {
    pub period: DasaPeriod,
    /// Whether the reference epoch falls inside this mahadasha. True for
    /// exactly one entry — the first one walked.
    pub contains_reference: bool,
    pub sub_periods: Vec<SubDasa>,
}

/// The fully materialized 9×9 master-cycle table from a reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct DasaSchedule {
    /// The anchoring epoch (JD UTC).
    pub reference_jd: f64,
    /// Lord of the mahadasha in progress at the reference epoch.
    pub birth_lord: Graha,
    /// Years of that mahadasha remaining at the reference epoch.
    pub balance_years: f64,
    /// All 9 mahadashas in walk order, starting with the entry segment.
    pub maha_dasas: Vec<MahaDasa>,
}

/// Materialize the complete master-cycle schedule for a reference point.
///
/// Pure function of the anchor: identical inputs yield identical schedules.
pub fn full_schedule(anchor: &ReferencePoint) -> DasaSchedule {
    let entry_index = anchor.entry_index as usize;
    let entry_years = DASA_YEARS[entry_index];
    let entry_start = anchor.reference_jd - years_to_days(anchor.entry_fraction * entry_years);

    let mut maha_dasas = Vec::with_capacity(CYCLE_LEN);
    let mut cursor = entry_start;

    for step in 0..CYCLE_LEN {
        let index = (entry_index + step) % CYCLE_LEN;
        let end = cursor + years_to_days(DASA_YEARS[index]);
        let period = DasaPeriod {
            lord: DASA_LORDS[index],
            level: DasaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: end,
        };
        maha_dasas.push(MahaDasa {
            contains_reference: period.contains(anchor.reference_jd),
            sub_periods: sub_dasas(&period, index, anchor.reference_jd),
            period,
        });
        cursor = end;
    }

    DasaSchedule {
        reference_jd: anchor.reference_jd,
        birth_lord: anchor.entry_lord(),
        balance_years: anchor.balance_years(),
        maha_dasas,
    }
}

/// Generate the 9 bhuktis of a mahadasha, self-starting at its own index.
fn sub_dasas(parent: &DasaPeriod, parent_index: usize, reference_jd: f64) -> Vec<SubDasa> {
    let weights = sub_weights(DASA_YEARS[parent_index]);
    let mut subs = Vec::with_capacity(CYCLE_LEN);
    let mut cursor = parent.start_jd;

    for step in 0..CYCLE_LEN {
        let index = (parent_index + step) % CYCLE_LEN;
        let end = cursor + years_to_days(weights[index]);
        let period = DasaPeriod {
            lord: DASA_LORDS[index],
            level: DasaLevel::Antardasha,
            start_jd: cursor,
            end_jd: end,
        };
        subs.push(SubDasa {
            contains_reference: period.contains(reference_jd),
            period,
        });
        cursor = end;
    }

    // Snap the last bhukti's end to the parent's end to absorb float drift
    if let Some(last) = subs.last_mut() {
        last.period.end_jd = parent.end_jd;
    }
    subs
}

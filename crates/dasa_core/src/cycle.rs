//! The Vimshottari cycle definition.
//!
//! A fixed ordered sequence of 9 lords whose year weights sum to 120.
//! The same ordered identities repeat at every nesting level, rescaled so
//! each sub-segment's weight is `parent_years * base_years / 120`, and a
//! sub-cycle always starts at its parent's own position (self-starting).
//!
//! Provenance: standard Vimshottari assignments (BPHS).

use crate::graha::Graha;

/// Number of segments in the cycle.
pub const CYCLE_LEN: usize = 9;

/// Total cycle length in dasa years.
pub const CYCLE_TOTAL_YEARS: f64 = 120.0;

/// Dasa lords in Vimshottari order.
pub const DASA_LORDS: [Graha; CYCLE_LEN] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha duration in years for each lord, in Vimshottari order.
pub const DASA_YEARS: [f64; CYCLE_LEN] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Rescaled weights one level down from a parent segment.
///
/// Each child's weight is the parent's duration times the child's share of
/// the full cycle. The children sum to `parent_years` exactly (up to
/// floating rounding), which is what keeps every level a zero-gap
/// partition of its parent.
pub fn sub_weights(parent_years: f64) -> [f64; CYCLE_LEN] {
    let mut weights = [0.0; CYCLE_LEN];
    for (w, &base) in weights.iter_mut().zip(DASA_YEARS.iter()) {
        *w = parent_years * base / CYCLE_TOTAL_YEARS;
    }
    weights
}

/// Entry index (0-8) for a 1-based nakshatra number.
///
/// The 27 nakshatras map onto the 9 lords cyclically: Ashwini (1) opens
/// with Ketu, and the pattern repeats every 9 nakshatras.
pub fn entry_index_for_nakshatra(nakshatra: u8) -> u8 {
    (nakshatra.max(1) - 1) % CYCLE_LEN as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_sum_to_120() {
        let total: f64 = DASA_YEARS.iter().sum();
        assert!((total - CYCLE_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn ketu_opens_the_cycle() {
        assert_eq!(DASA_LORDS[0], Graha::Ketu);
        assert!((DASA_YEARS[0] - 7.0).abs() < 1e-15);
    }

    #[test]
    fn sub_weights_sum_to_parent() {
        for &parent in &DASA_YEARS {
            let total: f64 = sub_weights(parent).iter().sum();
            assert!(
                (total - parent).abs() < 1e-10,
                "children of {parent}y sum to {total}"
            );
        }
    }

    #[test]
    fn sub_weight_formula() {
        // Venus sub-period of a Ketu mahadasha: 7 * 20 / 120 years
        let w = sub_weights(7.0);
        assert!((w[1] - 7.0 * 20.0 / 120.0).abs() < 1e-12);
    }

    #[test]
    fn nakshatra_reduction_wraps() {
        assert_eq!(entry_index_for_nakshatra(1), 0); // Ashwini → Ketu
        assert_eq!(entry_index_for_nakshatra(2), 1); // Bharani → Shukra
        assert_eq!(entry_index_for_nakshatra(9), 8);
        assert_eq!(entry_index_for_nakshatra(10), 0); // Magha → Ketu again
        assert_eq!(entry_index_for_nakshatra(27), 8);
    }
}

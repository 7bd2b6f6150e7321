//! Nested cyclic period partitioning for the Vimshottari dasa system.
//!
//! Given a reference point — an epoch, an entry segment of the fixed
//! 9-lord/120-year cycle, and the fraction of that segment already
//! elapsed — this crate answers two questions:
//! - [`active_path`]: which chain of nested periods (Mahadasha down to
//!   Pranadasha) contains an arbitrary query epoch
//! - [`full_schedule`]: the complete absolute-dated 9×9 partition of one
//!   master cycle from the reference point
//!
//! All epochs are JD UTC `f64`. Everything here is pure computation with
//! no I/O or shared state; calls are independent and safe to issue from
//! any number of threads.

pub mod cycle;
pub mod descend;
pub mod error;
pub mod graha;
pub mod julian;
pub mod resolver;
pub mod schedule;
pub mod types;
pub mod util;

pub use cycle::{
    CYCLE_LEN, CYCLE_TOTAL_YEARS, DASA_LORDS, DASA_YEARS, entry_index_for_nakshatra, sub_weights,
};
pub use descend::{ActivePath, PathLevel, active_path, active_path_bounded};
pub use error::DasaError;
pub use graha::Graha;
pub use julian::{calendar_to_jd, datetime_to_jd, format_jd, jd_to_calendar};
pub use resolver::{ResolvedPosition, resolve_position};
pub use schedule::{DasaSchedule, MahaDasa, SubDasa, full_schedule};
pub use types::{
    DEFAULT_MAX_ITERATIONS, DasaLevel, DasaPeriod, MAX_DASA_LEVEL, ReferencePoint,
};
pub use util::{DAYS_PER_YEAR, days_to_years, years_to_days};

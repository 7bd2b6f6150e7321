//! Julian Date ↔ Gregorian calendar conversions.
//!
//! All engine epochs are JD UTC `f64`. These helpers exist for callers
//! that work in calendar dates (the CLI, tests). Standard Meeus formulas.

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day_frac` is the day of month plus the fractional day (e.g. 15.5 for
/// noon on the 15th).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let y = year as f64;
    let m = month as f64;

    let (y2, m2) = if m <= 2.0 {
        (y - 1.0, m + 12.0)
    } else {
        (y, m)
    };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a calendar date/time to Julian Date.
pub fn datetime_to_jd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let day_frac =
        day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0 + second / 86_400.0;
    calendar_to_jd(year, month, day_frac)
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Format a Julian Date as `YYYY-MM-DD` (UTC calendar day).
pub fn format_jd(jd: f64) -> String {
    let (year, month, day_frac) = jd_to_calendar(jd);
    format!("{:04}-{:02}-{:02}", year, month, day_frac.floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 UTC = JD 2451545.0
        let jd = datetime_to_jd(2000, 1, 1, 12, 0, 0.0);
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn calendar_round_trip() {
        let jd = datetime_to_jd(1990, 1, 15, 6, 30, 0.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!(y, 1990);
        assert_eq!(m, 1);
        assert_eq!(d.floor() as u32, 15);
        // fractional day: 6h30m = 0.2708...
        assert!((d.fract() - (6.5 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn january_handled_as_month_13() {
        let jd = datetime_to_jd(2024, 1, 1, 0, 0, 0.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m, d.floor() as u32), (2024, 1, 1));
    }

    #[test]
    fn format_ymd() {
        let jd = datetime_to_jd(2024, 6, 1, 12, 0, 0.0);
        assert_eq!(format_jd(jd), "2024-06-01");
    }

    #[test]
    fn day_boundary() {
        // Midnight starts the calendar day
        let jd = datetime_to_jd(2024, 3, 20, 0, 0, 0.0);
        assert_eq!(format_jd(jd), "2024-03-20");
        assert_eq!(format_jd(jd - 1e-6), "2024-03-19");
    }
}

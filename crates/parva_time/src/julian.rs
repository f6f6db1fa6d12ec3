//! Gregorian ↔ Julian Day Number conversions.
//!
//! Fliegel–Van Flandern algorithm over the proleptic Gregorian calendar.
//! Accuracy is only claimed for a few centuries around the present; the
//! arithmetic itself is exact for any representable input.

/// Julian Day of the J2000.0 epoch (2000 Jan 1, 12:00 UTC).
pub const J2000_JDN: f64 = 2_451_545.0;

/// A civil Gregorian date. Month is 1-based (January = 1) everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Create a date from year, 1-based month, and day of month.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian Day Number of this civil day.
    pub fn to_jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }
}

/// Convert a Gregorian date to its Julian Day Number.
///
/// Fliegel–Van Flandern: valid over the whole proleptic Gregorian range.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let year = year as i64;
    let month = month as i64;
    let day = day as i64;

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian Day Number back to a Gregorian date.
///
/// Inverse of [`gregorian_to_jdn`]: the round trip is exact for every
/// integer JDN.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let j = jdn + 32044;
    let g = j.div_euclid(146_097);
    let dg = j.rem_euclid(146_097);
    let c = (dg.div_euclid(36_524) + 1) * 3 / 4;
    let dc = dg - c * 36_524;
    let b = dc.div_euclid(1461);
    let db = dc.rem_euclid(1461);
    let a = (db.div_euclid(365) + 1) * 3 / 4;
    let da = db - a * 365;

    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308).div_euclid(153) - 2;
    let d = da - (m + 4) * 153 / 5 + 122;

    GregorianDate {
        year: (y - 4800 + (m + 2).div_euclid(12)) as i32,
        month: ((m + 2).rem_euclid(12) + 1) as u32,
        day: (d + 1) as u32,
    }
}

/// Julian centuries elapsed since J2000.0 at a fractional Julian Day.
pub fn jdn_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JDN) / 36_525.0
}

/// Civil day number containing a fractional Julian Day in a fixed-offset zone.
///
/// The Julian Day starts at noon; adding 0.5 plus the zone offset and
/// flooring yields the local civil day (e.g. offset 8.0 for China standard
/// time).
pub fn civil_day_from_jd(jd: f64, utc_offset_hours: f64) -> i64 {
    (jd + 0.5 + utc_offset_hours / 24.0).floor() as i64
}

/// Day of week for an integer JDN, 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_jdn(jdn: i64) -> u32 {
    (jdn + 1).rem_euclid(7) as u32
}

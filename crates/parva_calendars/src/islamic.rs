//! Islamic (Hijri) calendar: tabular arithmetic and astronomical month
//! starts.
//!
//! Two paths coexist. The tabular civil calendar (30-year cycle of 354- and
//! 355-day years) gives closed-form Hijri ↔ JDN conversion and locates Eid
//! al-Adha. The astronomical path seeds the tabular estimate into the shared
//! new-moon series and starts the month on the civil day after conjunction;
//! it locates Eid al-Fitr. Because real month starts are sighting-dependent,
//! either path is within about one day of observed dates — a documented
//! approximation, not an error.

use parva_ephem::nearest_new_moon;
use parva_time::{GregorianDate, jdn_to_gregorian};

/// JDN of 1 Muharram AH 1 (16 July 622, civil).
pub const ISLAMIC_EPOCH_JDN: i64 = 1_948_440;

/// A Hijri calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IslamicDate {
    pub year: i64,
    /// 1 = Muharram .. 9 = Ramadan, 10 = Shawwal, 12 = Dhu al-Hijjah.
    pub month: u32,
    pub day: u32,
}

/// JDN of a tabular civil Hijri date.
///
/// Months alternate 30/29 days; eleven leap days are inserted per 30-year
/// cycle by the `(3 + 11y) / 30` rule.
pub fn islamic_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let day = day as i64;
    day + (59 * (month - 1) + 1) / 2 + 354 * (year - 1) + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH_JDN
        - 1
}

/// Tabular civil Hijri date of a JDN.
pub fn jdn_to_islamic(jdn: i64) -> IslamicDate {
    let year = (30 * (jdn - ISLAMIC_EPOCH_JDN) + 10_646).div_euclid(10_631);
    let past_first_month = jdn - 29 - islamic_to_jdn(year, 1, 1);
    let month = if past_first_month <= 0 {
        1
    } else {
        ((2 * past_first_month + 58) / 59 + 1).min(12) as u32
    };
    let day = (jdn - islamic_to_jdn(year, month, 1) + 1) as u32;
    IslamicDate { year, month, day }
}

/// Hijri year running through most of a Gregorian year.
fn estimated_hijri_year(gregorian_year: i32) -> i64 {
    ((gregorian_year as i64 - 622) * 33).div_euclid(32)
}

/// Astronomical start of a Hijri month falling in the given Gregorian year.
///
/// The tabular date of the month's first day seeds the new-moon search; the
/// month begins on the civil day after conjunction. Nearby Hijri years are
/// tried so the result lands in the requested Gregorian year; `None` when
/// the month does not occur in that year.
pub fn month_start(gregorian_year: i32, month: u32) -> Option<GregorianDate> {
    let estimate = estimated_hijri_year(gregorian_year);
    for adjust in -1..=1 {
        let seed = islamic_to_jdn(estimate + adjust, month, 1) as f64;
        let conjunction = nearest_new_moon(seed - 1.0);
        let first_day = (conjunction + 0.5).floor() as i64 + 1;
        let date = jdn_to_gregorian(first_day);
        if date.year == gregorian_year {
            return Some(date);
        }
    }
    None
}

/// Eid al-Fitr: the first three days of Shawwal, astronomical month start.
pub fn eid_al_fitr(gregorian_year: i32) -> Vec<GregorianDate> {
    let Some(start) = month_start(gregorian_year, 10) else {
        return Vec::new();
    };
    let jdn = start.to_jdn();
    (0..3).map(|i| jdn_to_gregorian(jdn + i)).collect()
}

/// Eid al-Adha: 10-13 Dhu al-Hijjah, tabular arithmetic only.
pub fn eid_al_adha(gregorian_year: i32) -> Vec<GregorianDate> {
    let estimate = estimated_hijri_year(gregorian_year);
    for adjust in -1..=1 {
        let start = islamic_to_jdn(estimate + adjust, 12, 10);
        if jdn_to_gregorian(start).year == gregorian_year {
            return (0..4).map(|i| jdn_to_gregorian(start + i)).collect();
        }
    }
    Vec::new()
}

/// Whether a civil date falls in the Eid al-Fitr window of the tabular
/// calendar: Shawwal 1-3, or the tail of Ramadan from day 29 — the lead-in
/// hedge against the one-day month-start uncertainty.
pub fn is_eid_al_fitr(date: &GregorianDate) -> bool {
    let islamic = jdn_to_islamic(date.to_jdn());
    (islamic.month == 10 && islamic.day <= 3) || (islamic.month == 9 && islamic.day >= 29)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parva_time::gregorian_to_jdn;

    #[test]
    fn epoch_first_day() {
        assert_eq!(islamic_to_jdn(1, 1, 1), ISLAMIC_EPOCH_JDN);
        let d = jdn_to_islamic(ISLAMIC_EPOCH_JDN);
        assert_eq!((d.year, d.month, d.day), (1, 1, 1));
    }

    #[test]
    fn tabular_round_trip_year_1445() {
        let start = islamic_to_jdn(1445, 1, 1);
        let end = islamic_to_jdn(1446, 1, 1);
        // 1445 is a leap year of the 30-year cycle
        assert_eq!(end - start, 355);
        for jdn in start..end {
            let d = jdn_to_islamic(jdn);
            assert_eq!(islamic_to_jdn(d.year, d.month, d.day), jdn, "at {d:?}");
            assert!((1..=12).contains(&d.month));
            assert!((1..=30).contains(&d.day));
        }
    }

    #[test]
    fn shawwal_1445_anchor() {
        // 1 Shawwal 1445 = 10 April 2024 in the tabular calendar
        let jdn = islamic_to_jdn(1445, 10, 1);
        assert_eq!(jdn, gregorian_to_jdn(2024, 4, 10));
    }

    #[test]
    fn hijri_year_estimate() {
        assert_eq!(estimated_hijri_year(2024), 1445);
        assert_eq!(estimated_hijri_year(622), 0);
    }

    #[test]
    fn month_lengths_alternate() {
        for month in 1..=11u32 {
            let len = islamic_to_jdn(1444, month + 1, 1) - islamic_to_jdn(1444, month, 1);
            let expected = if month % 2 == 1 { 30 } else { 29 };
            assert_eq!(len, expected, "month {month}");
        }
    }
}

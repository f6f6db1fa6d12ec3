//! Gregorian rule helpers: Easter computus, nth-weekday observances, and
//! month/day ranges.

use parva_time::{GregorianDate, gregorian_to_jdn, jdn_to_gregorian, weekday_from_jdn};

/// Easter Sunday of a Gregorian year (anonymous Gregorian computus).
pub fn easter(year: i32) -> GregorianDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let total = h + l - 7 * m + 114;
    GregorianDate::new(year, (total / 31) as u32, (total % 31 + 1) as u32)
}

/// JDN of Easter Sunday.
pub fn easter_jdn(year: i32) -> i64 {
    easter(year).to_jdn()
}

/// JDN of the nth occurrence (1-based) of a weekday (0 = Sunday) in a month.
pub fn nth_weekday_jdn(year: i32, month: u32, n: u32, weekday: u32) -> i64 {
    let first = gregorian_to_jdn(year, month, 1);
    let offset = (weekday + 7 - weekday_from_jdn(first)) % 7 + (n - 1) * 7;
    first + offset as i64
}

/// Thanksgiving: fourth Thursday of November in the US, second Monday of
/// October in Canada.
pub fn thanksgiving(year: i32, us: bool) -> GregorianDate {
    let jdn = if us {
        nth_weekday_jdn(year, 11, 4, 4)
    } else {
        nth_weekday_jdn(year, 10, 2, 1)
    };
    jdn_to_gregorian(jdn)
}

/// Whether a date falls in an inclusive month/day range of its own year.
pub fn in_month_day_range(date: &GregorianDate, start: (u32, u32), end: (u32, u32)) -> bool {
    let key = (date.month, date.day);
    key >= start && key <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easter_fixtures() {
        assert_eq!(easter(2024), GregorianDate::new(2024, 3, 31));
        assert_eq!(easter(2025), GregorianDate::new(2025, 4, 20));
        assert_eq!(easter(2016), GregorianDate::new(2016, 3, 27));
        assert_eq!(easter(2038), GregorianDate::new(2038, 4, 25));
    }

    #[test]
    fn easter_is_always_sunday() {
        for year in 1990..2050 {
            assert_eq!(weekday_from_jdn(easter_jdn(year)), 0, "year {year}");
        }
    }

    #[test]
    fn good_friday_2024() {
        assert_eq!(
            jdn_to_gregorian(easter_jdn(2024) - 2),
            GregorianDate::new(2024, 3, 29)
        );
    }

    #[test]
    fn thanksgiving_2024() {
        assert_eq!(thanksgiving(2024, true), GregorianDate::new(2024, 11, 28));
        assert_eq!(thanksgiving(2024, false), GregorianDate::new(2024, 10, 14));
    }

    #[test]
    fn mothers_day_2024() {
        // Second Sunday of May 2024 was the 12th
        assert_eq!(
            jdn_to_gregorian(nth_weekday_jdn(2024, 5, 2, 0)),
            GregorianDate::new(2024, 5, 12)
        );
    }

    #[test]
    fn month_day_range_bounds() {
        let date = GregorianDate::new(2024, 9, 16);
        assert!(in_month_day_range(&date, (9, 16), (10, 7)));
        assert!(!in_month_day_range(&date, (9, 17), (10, 7)));
        assert!(in_month_day_range(&GregorianDate::new(2024, 10, 7), (9, 16), (10, 7)));
        assert!(!in_month_day_range(&GregorianDate::new(2024, 10, 8), (9, 16), (10, 7)));
    }
}

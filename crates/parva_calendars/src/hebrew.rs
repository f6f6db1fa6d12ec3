//! Hebrew arithmetic calendar.
//!
//! Purely rule-based, no astronomical search: the Metonic 19-year leap
//! cycle, the classical molad (mean conjunction) arithmetic in days, hours,
//! and 1080-per-hour parts, and the four postponement rules (dehiyyot) that
//! move Rosh Hashanah off Sunday, Wednesday, and Friday.
//!
//! Month numbering is 1 = Nisan through 6 = Elul, 7 = Tishri through
//! 12 = Adar (Adar I in leap years) and 13 = Adar II; the civil year begins
//! at Tishri. The year-length invariant — 353/354/355 days, or 383/384/385
//! in leap years — is checked wherever month lengths are derived, and a
//! violation is an internal defect reported as
//! [`CalendarError::InvalidYearLength`].

use parva_time::{GregorianDate, jdn_to_gregorian};

use crate::error::CalendarError;

/// JDN of the day before 1 Tishri AM 1, so that
/// `rosh_hashanah_jdn(1) == 347998` (7 October 3761 BCE proleptic).
pub const HEBREW_EPOCH_JDN: i64 = 347_997;

/// Molad-parts threshold for the Molad Zaken postponement (18 hours).
const MOLAD_ZAKEN_PARTS: i64 = 19_440;

/// Molad-parts threshold for the GaTaRaD postponement
/// (Tuesday, 9 hours 204 parts).
const GATARAD_PARTS: i64 = 9924;

/// Molad-parts threshold for the BeTuTaKFoT postponement
/// (Monday, 15 hours 589 parts).
const BETUTAKFOT_PARTS: i64 = 16_789;

/// A Hebrew calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    pub year: i64,
    /// 1 = Nisan .. 7 = Tishri .. 13 = Adar II.
    pub month: u32,
    pub day: u32,
}

/// Hebrew year length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    /// 353 or 383 days: Cheshvan and Kislev both 29.
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: Cheshvan and Kislev both 30.
    Complete,
}

/// Metonic leap-year rule: seven leap years per 19-year cycle.
pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Day count from the Hebrew epoch to 1 Tishri of `year`, with all four
/// postponement rules applied.
///
/// The molad is accumulated in whole months of 29d 12h 793p; the remainder
/// parts drive Molad Zaken, GaTaRaD, and BeTuTaKFoT, and the final day is
/// shifted off Sunday/Wednesday/Friday (Lo ADU Rosh). Day-of-week here is
/// molad-day mod 7, where 0 is Sunday.
pub fn elapsed_days(year: i64) -> i64 {
    let cycles = (year - 1).div_euclid(19);
    let in_cycle = (year - 1).rem_euclid(19);
    let months = 235 * cycles + 12 * in_cycle + (7 * in_cycle + 1) / 19;

    let parts_elapsed = 204 + 793 * (months % 1080);
    let hours_elapsed = 5 + 12 * months + 793 * (months / 1080) + parts_elapsed / 1080;
    let mut day = 1 + 29 * months + hours_elapsed / 24;
    let parts = (hours_elapsed % 24) * 1080 + parts_elapsed % 1080;

    if parts >= MOLAD_ZAKEN_PARTS {
        day += 1;
    } else if day % 7 == 2 && parts >= GATARAD_PARTS && !is_leap_year(year) {
        day += 1;
    } else if day % 7 == 1 && parts >= BETUTAKFOT_PARTS && is_leap_year(year - 1) {
        day += 1;
    }
    if matches!(day % 7, 0 | 3 | 5) {
        day += 1;
    }
    day
}

/// JDN of 1 Tishri (Rosh Hashanah) of a Hebrew year.
pub fn rosh_hashanah_jdn(year: i64) -> i64 {
    HEBREW_EPOCH_JDN + elapsed_days(year)
}

/// Number of days in a Hebrew year.
pub fn days_in_year(year: i64) -> i64 {
    rosh_hashanah_jdn(year + 1) - rosh_hashanah_jdn(year)
}

/// Year length class, or the fatal invariant violation.
pub fn year_type(year: i64) -> Result<YearType, CalendarError> {
    let days = days_in_year(year);
    match days {
        353 | 383 => Ok(YearType::Deficient),
        354 | 384 => Ok(YearType::Regular),
        355 | 385 => Ok(YearType::Complete),
        _ => Err(CalendarError::InvalidYearLength { year, days }),
    }
}

/// Days in a Hebrew month. Month 13 exists only in leap years.
pub fn days_in_month(year: i64, month: u32) -> Result<u32, CalendarError> {
    Ok(match month {
        1 | 3 | 5 | 7 | 11 => 30,
        2 | 4 | 6 | 10 => 29,
        8 => match year_type(year)? {
            YearType::Complete => 30,
            _ => 29,
        },
        9 => match year_type(year)? {
            YearType::Deficient => 29,
            _ => 30,
        },
        12 => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
        13 => {
            if is_leap_year(year) {
                29
            } else {
                0
            }
        }
        _ => 0,
    })
}

/// JDN of a Hebrew date.
///
/// Sums month lengths in civil order (Tishri first) from the postponed year
/// start. No range validation: out-of-range fields produce consistent
/// nonsense, as elsewhere in the workspace.
pub fn to_jdn(date: &HebrewDate) -> Result<i64, CalendarError> {
    let rh = rosh_hashanah_jdn(date.year);
    let last_month = if is_leap_year(date.year) { 13 } else { 12 };

    let mut offset = 0i64;
    for month in (7..=last_month).chain(1..=6) {
        if month == date.month {
            break;
        }
        offset += days_in_month(date.year, month)? as i64;
    }
    Ok(rh + offset + date.day as i64 - 1)
}

fn holiday_dates(
    year: i64,
    month: u32,
    day: u32,
    count: i64,
) -> Result<Vec<GregorianDate>, CalendarError> {
    let start = to_jdn(&HebrewDate { year, month, day })?;
    Ok((0..count).map(|i| jdn_to_gregorian(start + i)).collect())
}

/// Hebrew year whose Tishri-side months (7..=13) fall in Gregorian `year`.
fn tishri_side_year(gregorian_year: i32) -> i64 {
    gregorian_year as i64 + 3761
}

/// Hebrew year whose Nisan-side months (1..=6) fall in Gregorian `year`.
fn nisan_side_year(gregorian_year: i32) -> i64 {
    gregorian_year as i64 + 3760
}

/// Rosh Hashanah (1 Tishri) of the Gregorian year.
pub fn rosh_hashanah(gregorian_year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    holiday_dates(tishri_side_year(gregorian_year), 7, 1, 1)
}

/// Yom Kippur (10 Tishri).
pub fn yom_kippur(gregorian_year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    holiday_dates(tishri_side_year(gregorian_year), 7, 10, 1)
}

/// Hanukkah: eight days from 25 Kislev.
pub fn hanukkah(gregorian_year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    holiday_dates(tishri_side_year(gregorian_year), 9, 25, 8)
}

/// Passover: eight days from 15 Nisan (diaspora count).
pub fn passover(gregorian_year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    holiday_dates(nisan_side_year(gregorian_year), 1, 15, 8)
}

/// Shavuot (6 Sivan).
pub fn shavuot(gregorian_year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    holiday_dates(nisan_side_year(gregorian_year), 3, 6, 1)
}

/// Sukkot: nine days from 15 Tishri, through Shemini Atzeret and Simchat
/// Torah.
pub fn sukkot(gregorian_year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    holiday_dates(tishri_side_year(gregorian_year), 7, 15, 9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_anchor() {
        // 1 Tishri AM 1 = JDN 347998
        assert_eq!(rosh_hashanah_jdn(1), 347_998);
    }

    #[test]
    fn metonic_leap_pattern() {
        // Leap years fall at positions {0,3,6,8,11,14,17} of each 19-year cycle
        let pattern = [0, 3, 6, 8, 11, 14, 17];
        for year in 5700..5760 {
            let expected = pattern.contains(&(year % 19));
            assert_eq!(is_leap_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn seven_leaps_per_cycle() {
        let leaps = (5776..5795).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 7);
    }

    #[test]
    fn months_fill_the_year() {
        for year in [5783, 5784, 5785] {
            let last = if is_leap_year(year) { 13 } else { 12 };
            let total: i64 = (1..=last)
                .map(|m| days_in_month(year, m).unwrap() as i64)
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn tishri_first_of_civil_year() {
        let year = 5785;
        let tishri1 = to_jdn(&HebrewDate { year, month: 7, day: 1 }).unwrap();
        assert_eq!(tishri1, rosh_hashanah_jdn(year));
    }
}

//! Chinese lunisolar calendar: festival dates and the sexagenary cycle.
//!
//! Festival rules follow the civil calendar of mainland China: all instants
//! round to the UTC+8 civil day. Lunar New Year is the second new moon after
//! the previous December solstice; numbered months are walked from there
//! with intercalary months skipped.

use parva_ephem::{CHINA_UTC_OFFSET_HOURS, lunar_month, new_moon_after, solar_term_jd};
use parva_time::{GregorianDate, civil_day_from_jd, jdn_to_gregorian};

/// Solar-term index of the December solstice (Sun at 270 degrees).
const WINTER_SOLSTICE_TERM: u32 = 18;

/// Solar-term index of Qingming (Sun at 15 degrees).
const QINGMING_TERM: u32 = 1;

/// Days of public celebration emitted for Lunar New Year.
const NEW_YEAR_CELEBRATION_DAYS: i64 = 15;

/// The ten heavenly stems.
pub const HEAVENLY_STEMS: [&str; 10] =
    ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches.
pub const EARTHLY_BRANCHES: [&str; 12] =
    ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

/// Zodiac animal for each earthly branch.
pub const ZODIAC_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Position of a Gregorian year in the sexagenary cycle.
///
/// Anchored at 1984, a Jia-Zi (stem 0, branch 0) year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclicYear {
    /// Traditional continuous year count.
    pub year: i32,
    /// Heavenly stem index, 0..=9.
    pub stem: u8,
    /// Earthly branch index, 0..=11.
    pub branch: u8,
}

impl CyclicYear {
    /// Stem character.
    pub fn stem_name(self) -> &'static str {
        HEAVENLY_STEMS[self.stem as usize]
    }

    /// Branch character.
    pub fn branch_name(self) -> &'static str {
        EARTHLY_BRANCHES[self.branch as usize]
    }

    /// Zodiac animal of the branch.
    pub fn zodiac(self) -> &'static str {
        ZODIAC_ANIMALS[self.branch as usize]
    }
}

/// Sexagenary cycle position of the Chinese year beginning in a Gregorian
/// year.
pub fn cyclic_year(gregorian_year: i32) -> CyclicYear {
    let offset = gregorian_year - 1984;
    CyclicYear {
        year: gregorian_year - 2697,
        stem: offset.rem_euclid(10) as u8,
        branch: offset.rem_euclid(12) as u8,
    }
}

fn china_civil_date(jd: f64) -> GregorianDate {
    jdn_to_gregorian(civil_day_from_jd(jd, CHINA_UTC_OFFSET_HOURS))
}

/// New-moon instant opening lunar month 1 of the Chinese year that begins
/// in `year`: the second new moon strictly after the previous December
/// solstice.
fn new_year_new_moon(year: i32) -> f64 {
    let solstice = solar_term_jd(year - 1, WINTER_SOLSTICE_TERM);
    let first = new_moon_after(solstice);
    new_moon_after(first + 1.0)
}

/// New-moon instant opening a numbered (non-leap) lunar month of the
/// Chinese year beginning in `year`.
///
/// Walks new moons from Lunar New Year, skipping intercalary months. A
/// `None` means the walk failed to find the month within a full year of
/// lunations, which does not occur for month numbers 1..=12.
fn month_start_new_moon(year: i32, month: u8) -> Option<f64> {
    let mut nm = new_year_new_moon(year);
    if month == 1 {
        return Some(nm);
    }
    for _ in 0..15 {
        let next = new_moon_after(nm + 1.0);
        let lm = lunar_month(next);
        if lm.month == month && !lm.is_leap {
            return Some(next);
        }
        nm = next;
    }
    None
}

/// Lunar New Year: the first fifteen civil days of the Chinese year
/// beginning in `year` (New Year's Day through the Lantern Festival).
pub fn lunar_new_year(year: i32) -> Vec<GregorianDate> {
    let start = civil_day_from_jd(new_year_new_moon(year), CHINA_UTC_OFFSET_HOURS);
    (0..NEW_YEAR_CELEBRATION_DAYS)
        .map(|i| jdn_to_gregorian(start + i))
        .collect()
}

/// Mid-Autumn Festival: day 15 of lunar month 8.
pub fn mid_autumn_festival(year: i32) -> Vec<GregorianDate> {
    let Some(nm) = month_start_new_moon(year, 8) else {
        return Vec::new();
    };
    let start = civil_day_from_jd(nm, CHINA_UTC_OFFSET_HOURS);
    vec![jdn_to_gregorian(start + 14)]
}

/// Dragon Boat Festival: day 5 of lunar month 5.
pub fn dragon_boat_festival(year: i32) -> Vec<GregorianDate> {
    let Some(nm) = month_start_new_moon(year, 5) else {
        return Vec::new();
    };
    let start = civil_day_from_jd(nm, CHINA_UTC_OFFSET_HOURS);
    vec![jdn_to_gregorian(start + 4)]
}

/// Qingming Festival: the exact solar term at Sun longitude 15 degrees.
pub fn qingming(year: i32) -> Vec<GregorianDate> {
    vec![china_civil_date(solar_term_jd(year, QINGMING_TERM))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_year_anchor() {
        let y1984 = cyclic_year(1984);
        assert_eq!((y1984.stem, y1984.branch), (0, 0));
        assert_eq!(y1984.zodiac(), "Rat");
    }

    #[test]
    fn cyclic_year_2024_dragon() {
        let y = cyclic_year(2024);
        assert_eq!(y.stem_name(), "甲");
        assert_eq!(y.branch_name(), "辰");
        assert_eq!(y.zodiac(), "Dragon");
        assert_eq!(y.year, 2024 - 2697);
    }

    #[test]
    fn cycle_repeats_every_sixty_years() {
        let a = cyclic_year(1964);
        let b = cyclic_year(2024);
        assert_eq!((a.stem, a.branch), (b.stem, b.branch));
    }

    #[test]
    fn month_one_is_new_year() {
        let nm = month_start_new_moon(2024, 1).unwrap();
        assert_eq!(nm.to_bits(), new_year_new_moon(2024).to_bits());
    }
}

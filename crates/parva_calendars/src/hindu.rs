//! Hindu festival searches over tithi and paksha.
//!
//! Each festival seeds a guess date and scans a 31-day window of civil
//! days in ascending order, evaluating the tithi at noon UTC of each
//! candidate; the first day satisfying the defining lunar condition wins.
//! If the window misses — possible in pathological years — the festival
//! yields no dates for that year. The window bound is a deliberate
//! simplification and a known approximation limit.

use parva_ephem::{Paksha, moon_true_longitude, paksha, tithi};
use parva_time::{GregorianDate, gregorian_to_jdn, jdn_to_centuries, jdn_to_gregorian};

/// Lahiri ayanamsa at 2000 CE, degrees.
pub const AYANAMSA_BASE: f64 = 23.85;

/// Annual ayanamsa drift used by the linear approximation, degrees.
pub const AYANAMSA_ANNUAL_MOTION: f64 = 0.000_238;

/// Half-width of the festival search window, days.
const SEARCH_RADIUS: i64 = 15;

/// Arc of one nakshatra, degrees (27 divisions of the ecliptic).
const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Lahiri ayanamsa (tropical-to-sidereal correction) for a fractional year.
pub fn ayanamsa(year: f64) -> f64 {
    AYANAMSA_BASE + AYANAMSA_ANNUAL_MOTION * (year - 2000.0)
}

/// Moon's nakshatra (lunar mansion) at a fractional JD, 1..=27.
pub fn nakshatra(jd: f64) -> u8 {
    let t = jdn_to_centuries(jd);
    let sidereal = (moon_true_longitude(t) - ayanamsa(2000.0 + t * 100.0)).rem_euclid(360.0);
    (sidereal / NAKSHATRA_SPAN_DEG) as u8 + 1
}

/// Lunar-day snapshot at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VedicTime {
    /// Tithi 1..=30.
    pub tithi: u8,
    /// Waxing or waning fortnight.
    pub paksha: Paksha,
    /// Nakshatra 1..=27.
    pub nakshatra: u8,
}

/// Tithi, paksha, and nakshatra at a fractional JD.
pub fn vedic_time(jd: f64) -> VedicTime {
    let t = tithi(jd);
    VedicTime {
        tithi: t,
        paksha: paksha(t),
        nakshatra: nakshatra(jd),
    }
}

/// Ascending scan over the 31-day window around a seed date: the first
/// civil day whose noon-UTC tithi satisfies the predicate.
fn scan_tithi(
    year: i32,
    seed_month: u32,
    seed_day: u32,
    matches: impl Fn(u8) -> bool,
) -> Option<i64> {
    let seed = gregorian_to_jdn(year, seed_month, seed_day);
    (-SEARCH_RADIUS..=SEARCH_RADIUS)
        .map(|offset| seed + offset)
        .find(|&jdn| matches(tithi(jdn as f64)))
}

/// Diwali: the Amavasya (new-moon day, tithi 30) of Kartika.
///
/// Seeded at November 1 so the window always brackets the Kartika new moon
/// (which ranges from late October to mid-November) and never the preceding
/// Ashvina one.
pub fn diwali(year: i32) -> Vec<GregorianDate> {
    scan_tithi(year, 11, 1, |t| t == 30)
        .map(|jdn| vec![jdn_to_gregorian(jdn)])
        .unwrap_or_default()
}

/// Holi: the day after the Purnima (full-moon day, tithi 15) of Phalguna.
pub fn holi(year: i32) -> Vec<GregorianDate> {
    scan_tithi(year, 3, 15, |t| t == 15)
        .map(|jdn| vec![jdn_to_gregorian(jdn + 1)])
        .unwrap_or_default()
}

/// Krishna Janmashtami: the Ashtami of the Krishna paksha in Bhadrapada,
/// i.e. tithi 23.
pub fn janmashtami(year: i32) -> Vec<GregorianDate> {
    scan_tithi(year, 8, 25, |t| t == 23)
        .map(|jdn| vec![jdn_to_gregorian(jdn)])
        .unwrap_or_default()
}

/// Sharad Navaratri: nine consecutive days from the Shukla Pratipada
/// (tithi 1) of Ashvina.
pub fn navaratri(year: i32) -> Vec<GregorianDate> {
    let Some(start) = scan_tithi(year, 10, 1, |t| t == 1) else {
        return Vec::new();
    };
    (0..9).map(|i| jdn_to_gregorian(start + i)).collect()
}

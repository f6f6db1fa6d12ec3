//! Lunar position series, new-moon instants, tithi, and lunisolar months.
//!
//! New moons come from the mean-lunation epoch plus a 25-term periodic
//! correction in the lunar and solar anomalies — a single-shot correction,
//! not iterative refinement, accurate to a few minutes. The lunar true
//! longitude uses the thirteen largest periodic terms, good to under a
//! tenth of a degree, which holds tithi boundaries to well under an hour.

use parva_time::{civil_day_from_jd, jdn_to_centuries};

use crate::solar;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

/// Mean new-moon epoch: JD of the lunation-zero conjunction near J2000.
const NEW_MOON_EPOCH_JD: f64 = 2_451_550.097_66;

/// UTC offset, in hours, of the civil day used by the Chinese calendar.
pub const CHINA_UTC_OFFSET_HOURS: f64 = 8.0;

/// Degrees of Moon–Sun elongation per tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Moon's mean elongation from the Sun, degrees in [0, 360).
pub fn mean_elongation(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0)
        .rem_euclid(360.0)
}

/// Moon's mean anomaly, degrees in [0, 360).
pub fn moon_mean_anomaly(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0)
        .rem_euclid(360.0)
}

/// Moon's mean longitude, degrees in [0, 360).
pub fn moon_mean_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    (218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0)
        .rem_euclid(360.0)
}

/// Moon's mean argument of latitude, degrees in [0, 360).
fn argument_of_latitude(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    (93.272_095 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0)
        .rem_euclid(360.0)
}

/// Principal periodic terms of the lunar longitude.
///
/// Each row: `[coefficient_deg, nD, nM, nM', nF]` where D is the mean
/// elongation, M the Sun's mean anomaly, M' the Moon's mean anomaly, and F
/// the argument of latitude. Thirteen largest terms of the standard series.
#[rustfmt::skip]
static MOON_LONGITUDE_TERMS: [(f64, i8, i8, i8, i8); 13] = [
    //  coeff        nD  nM  nM' nF
    ( 6.288_774,      0,  0,  1,  0),
    ( 1.274_027,      2,  0, -1,  0),
    ( 0.658_314,      2,  0,  0,  0),
    ( 0.213_618,      0,  0,  2,  0),
    (-0.185_116,      0,  1,  0,  0),
    (-0.114_332,      0,  0,  0,  2),
    ( 0.058_793,      2,  0, -2,  0),
    ( 0.057_066,      2, -1, -1,  0),
    ( 0.053_322,      2,  0,  1,  0),
    ( 0.045_758,      2, -1,  0,  0),
    (-0.040_923,      0,  1, -1,  0),
    (-0.034_720,      1,  0,  0,  0),
    (-0.030_383,      0,  1,  1,  0),
];

/// Moon's true ecliptic longitude, degrees in [0, 360).
pub fn moon_true_longitude(t: f64) -> f64 {
    let d = mean_elongation(t).to_radians();
    let m = solar::mean_anomaly(t).to_radians();
    let mp = moon_mean_anomaly(t).to_radians();
    let f = argument_of_latitude(t).to_radians();

    let mut correction = 0.0;
    for &(coeff, nd, nm, nmp, nf) in &MOON_LONGITUDE_TERMS {
        let arg = nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f;
        correction += coeff * arg.sin();
    }
    (moon_mean_longitude(t) + correction).rem_euclid(360.0)
}

/// True Moon–Sun elongation at a fractional JD, degrees in [0, 360).
///
/// Zero at conjunction (new moon), 180 at opposition (full moon).
pub fn true_elongation(jd: f64) -> f64 {
    let t = jdn_to_centuries(jd);
    (moon_true_longitude(t) - solar::true_longitude(t)).rem_euclid(360.0)
}

/// Tithi (lunar day) at a fractional JD: 1..=30, twelve degrees of
/// elongation each.
pub fn tithi(jd: f64) -> u8 {
    (true_elongation(jd) / TITHI_SEGMENT_DEG) as u8 + 1
}

/// Lunar fortnight: waxing (Shukla) or waning (Krishna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithi 1-15.
    Shukla,
    /// Waning half, tithi 16-30.
    Krishna,
}

impl Paksha {
    /// Conventional English-transliterated name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Paksha of a 1..=30 tithi.
pub fn paksha(tithi: u8) -> Paksha {
    if tithi <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// 1-based tithi number within its paksha (1..=15).
pub fn tithi_in_paksha(tithi: u8) -> u8 {
    if tithi <= 15 { tithi } else { tithi - 15 }
}

/// Periodic corrections from mean to true new moon.
///
/// Each row: `[coefficient_days, e_power, nM', nM, nF, nOmega]` applied as
/// `coeff * E^e * sin(nM'*M' + nM*M + nF*F + nOmega*Omega)` where E is the
/// eccentricity factor. Twenty-five terms of the standard syzygy series.
#[rustfmt::skip]
static NEW_MOON_TERMS: [(f64, u8, i8, i8, i8, i8); 25] = [
    //  coeff      E  nM' nM  nF  nOm
    (-0.407_20,    0,  1,  0,  0,  0),
    ( 0.172_41,    1,  0,  1,  0,  0),
    ( 0.016_08,    0,  2,  0,  0,  0),
    ( 0.010_39,    0,  0,  0,  2,  0),
    ( 0.007_39,    1,  1, -1,  0,  0),
    (-0.005_14,    1,  1,  1,  0,  0),
    ( 0.002_08,    2,  0,  2,  0,  0),
    (-0.001_11,    0,  1,  0, -2,  0),
    (-0.000_57,    0,  1,  0,  2,  0),
    ( 0.000_56,    1,  2,  1,  0,  0),
    (-0.000_42,    0,  3,  0,  0,  0),
    ( 0.000_42,    1,  0,  1,  2,  0),
    ( 0.000_38,    1,  0,  1, -2,  0),
    (-0.000_24,    1,  2, -1,  0,  0),
    (-0.000_17,    0,  0,  0,  0,  1),
    (-0.000_07,    0,  1,  2,  0,  0),
    ( 0.000_04,    0,  2,  0, -2,  0),
    ( 0.000_04,    0,  0,  3,  0,  0),
    ( 0.000_03,    0,  1,  1, -2,  0),
    ( 0.000_03,    0,  2,  0,  2,  0),
    (-0.000_03,    0,  1,  1,  2,  0),
    ( 0.000_03,    0,  1, -1,  2,  0),
    (-0.000_02,    0,  1, -1, -2,  0),
    (-0.000_02,    0,  3,  1,  0,  0),
    ( 0.000_02,    0,  4,  0,  0,  0),
];

/// True new-moon instant for integer lunation number `k` (k = 0 is the first
/// new moon of 2000).
fn new_moon_at_cycle(k: f64) -> f64 {
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = NEW_MOON_EPOCH_JD + SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    // Anomalies at the mean syzygy, in degrees per lunation
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let omega =
        (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let mut correction = 0.0;
    for &(coeff, e_pow, nmp, nm, nf, nom) in &NEW_MOON_TERMS {
        let arg = nmp as f64 * mp + nm as f64 * m + nf as f64 * f + nom as f64 * omega;
        let scale = match e_pow {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        correction += coeff * scale * arg.sin();
    }

    mean + correction
}

/// Refined instant of the new moon nearest to `jd`.
pub fn nearest_new_moon(jd: f64) -> f64 {
    let k = ((jd - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH).round();
    new_moon_at_cycle(k)
}

/// Instant of the first new moon strictly after `jd`.
pub fn new_moon_after(jd: f64) -> f64 {
    let mut k = ((jd - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH).floor();
    let mut nm = new_moon_at_cycle(k);
    while nm <= jd {
        k += 1.0;
        nm = new_moon_at_cycle(k);
    }
    nm
}

/// A numbered lunisolar month, possibly intercalary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMonth {
    /// Month number 1..=12.
    pub month: u8,
    /// True for an intercalary (leap) month, which repeats its number.
    pub is_leap: bool,
}

/// Classify the lunar month beginning at a new-moon instant.
///
/// The month spans the China civil days from this new moon up to (and
/// excluding) the next. A month containing a principal term (Sun longitude
/// at a multiple of 30 degrees) takes its number from that term; a month
/// containing none is a leap month and repeats the previous number. The
/// December-solstice term belongs to month 11.
pub fn lunar_month(new_moon_jd: f64) -> LunarMonth {
    let next_nm = new_moon_after(new_moon_jd + 1.0);
    let cd_start = civil_day_from_jd(new_moon_jd, CHINA_UTC_OFFSET_HOURS);
    let cd_end = civil_day_from_jd(next_nm, CHINA_UTC_OFFSET_HOURS);

    // At most two principal terms can straddle one lunar month; track the
    // last one before the month and the last one inside it.
    let l_start = solar::true_longitude_total(jdn_to_centuries(new_moon_jd));
    let first = (l_start / 30.0).floor() as i64;
    let mut last_before = first;
    let mut last_inside = None;
    for n in first..=first + 2 {
        let jd_term = solar::crossing_jd(n as f64 * 30.0);
        let cd = civil_day_from_jd(jd_term, CHINA_UTC_OFFSET_HOURS);
        if cd < cd_start {
            last_before = n;
        } else if cd < cd_end {
            last_inside = Some(n);
        }
    }

    match last_inside {
        Some(n) => LunarMonth {
            month: month_of_principal(n),
            is_leap: false,
        },
        None => LunarMonth {
            month: month_of_principal(last_before),
            is_leap: true,
        },
    }
}

/// Month number owning the principal term at longitude `30 * n` degrees.
///
/// Longitude 270 (December solstice) anchors month 11.
fn month_of_principal(n: i64) -> u8 {
    let j = n.rem_euclid(12) as u8;
    (j + 1) % 12 + 1
}

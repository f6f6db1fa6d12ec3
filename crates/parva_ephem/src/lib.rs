//! Solar and lunar position series shared by every calendar calculator.
//!
//! This crate provides:
//! - Truncated solar longitude series and closed-form solar-term instants
//! - Mean and corrected new-moon (syzygy) instants
//! - Lunar true longitude, Moon–Sun elongation, tithi and paksha
//! - The Chinese intercalation rule (leap-month detection)
//!
//! All series are short expansions accurate to a fraction of a degree —
//! enough for day-level festival dating, not for precision ephemeris work.
//! Every function is pure: same input, bit-identical output.

pub mod lunar;
pub mod solar;

pub use lunar::{
    CHINA_UTC_OFFSET_HOURS, LunarMonth, Paksha, SYNODIC_MONTH, lunar_month, mean_elongation,
    moon_mean_anomaly, moon_mean_longitude, moon_true_longitude, nearest_new_moon, new_moon_after,
    paksha, tithi, tithi_in_paksha, true_elongation,
};
pub use solar::{
    TROPICAL_YEAR, crossing_jd, equation_of_center, mean_anomaly, mean_longitude, solar_term_jd,
    true_longitude, true_longitude_total,
};

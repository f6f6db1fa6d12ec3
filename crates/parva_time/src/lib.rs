//! Civil-date and Julian Day Number conversions.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day Number conversions
//! - Julian centuries since J2000.0 for the ephemeris series
//! - Civil-day rounding for timezone-offset calendars
//!
//! The JDN is the common currency between every calendar system in the
//! workspace: integer part identifies the civil day, fractional part the
//! time of day. All conversions are pure functions with no validation;
//! out-of-range input produces mathematically consistent but meaningless
//! results.

pub mod julian;

pub use julian::{
    GregorianDate, J2000_JDN, civil_day_from_jd, gregorian_to_jdn, jdn_to_centuries,
    jdn_to_gregorian, weekday_from_jdn,
};

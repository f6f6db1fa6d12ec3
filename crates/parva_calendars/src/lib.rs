//! Calendar calculators for the four festival calendar systems.
//!
//! This crate provides:
//! - Chinese lunisolar festivals (Lunar New Year, Mid-Autumn, Dragon Boat,
//!   Qingming) and the sexagenary year cycle
//! - Hebrew arithmetic calendar (Metonic cycle, molad, dehiyyot) and its
//!   holidays
//! - Islamic calendar, both tabular-arithmetic and astronomical month starts,
//!   and the two Eids
//! - Hindu tithi-based festival searches (Diwali, Holi, Janmashtami,
//!   Navaratri)
//!
//! Every entry point takes a Gregorian year and returns the civil dates of
//! that year's occurrence, zero or more per call. All calculators are pure
//! functions: no state, no clocks, deterministic output.

pub mod chinese;
pub mod error;
pub mod hebrew;
pub mod hindu;
pub mod islamic;

pub use chinese::{
    CyclicYear, cyclic_year, dragon_boat_festival, lunar_new_year, mid_autumn_festival, qingming,
};
pub use error::CalendarError;
pub use hebrew::{
    HebrewDate, YearType, days_in_year, elapsed_days, hanukkah, is_leap_year, passover,
    rosh_hashanah, rosh_hashanah_jdn, shavuot, sukkot, year_type, yom_kippur,
};
pub use hindu::{VedicTime, ayanamsa, diwali, holi, janmashtami, nakshatra, navaratri, vedic_time};
pub use islamic::{
    IslamicDate, eid_al_adha, eid_al_fitr, is_eid_al_fitr, islamic_to_jdn, jdn_to_islamic,
    month_start,
};

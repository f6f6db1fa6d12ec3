//! Holiday registry and date matcher.
//!
//! This crate provides:
//! - A static registry of holiday definitions: name, greeting phrase,
//!   emblematic emoji, and a declarative matching rule
//! - Rules for fixed dates, nth-weekday observances, date ranges,
//!   Easter-relative days, and calendar-derived festivals
//! - A matcher resolving a UTC instant against an IANA timezone and
//!   returning every holiday falling on that civil day
//!
//! Timezone resolution is the only impure-looking edge: an unknown zone
//! name logs a warning and falls back to UTC interpretation, never an
//! error. Calendar-rule defects (the Hebrew year-length invariant)
//! propagate as errors.

pub mod error;
pub mod matcher;
pub mod registry;
pub mod types;
pub mod western;

pub use error::HolidayError;
pub use matcher::{holidays_at, holidays_on_date, rule_matches};
pub use registry::HOLIDAYS;
pub use types::{FestivalFn, Greeting, Holiday, HolidayRule};
pub use western::{easter, easter_jdn, in_month_day_range, nth_weekday_jdn, thanksgiving};

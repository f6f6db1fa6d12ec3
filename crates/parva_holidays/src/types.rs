//! Holiday definition types.

use parva_calendars::CalendarError;
use parva_time::GregorianDate;

/// Calendar-derived rule: the festival's civil dates in a Gregorian year,
/// zero or more per call.
pub type FestivalFn = fn(i32) -> Result<Vec<GregorianDate>, CalendarError>;

/// Declarative matching rule for one holiday.
#[derive(Debug, Clone, Copy)]
pub enum HolidayRule {
    /// A fixed month and day every year.
    MonthDay { month: u32, day: u32 },
    /// Any of several fixed month/day pairs.
    MonthDaySet(&'static [(u32, u32)]),
    /// The nth occurrence of a weekday (0 = Sunday) within a month.
    NthWeekday { month: u32, n: u32, weekday: u32 },
    /// An inclusive month/day range within one year.
    DateRange { start: (u32, u32), end: (u32, u32) },
    /// A fixed offset in days from Easter Sunday.
    EasterOffset(i64),
    /// An inclusive range of offsets from Easter Sunday.
    EasterRange { start: i64, end: i64 },
    /// Dates computed by a calendar calculator.
    Festival(FestivalFn),
    /// A direct single-date predicate.
    Predicate(fn(&GregorianDate) -> bool),
}

/// One holiday definition. The registry is static and read-only.
#[derive(Debug, Clone, Copy)]
pub struct Holiday {
    pub name: &'static str,
    pub greeting: &'static str,
    pub emoji: &'static str,
    pub rule: HolidayRule,
}

/// A successful match: the greeting and symbol returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greeting {
    pub name: &'static str,
    pub greeting: &'static str,
    pub emoji: &'static str,
}

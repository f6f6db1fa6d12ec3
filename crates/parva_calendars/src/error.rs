//! Error types for calendar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar arithmetic.
///
/// A variant here signals an internal defect in the rule tables, never a
/// legitimate "no holiday" outcome — approximation misses are expressed as
/// empty result lists instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// A Hebrew year length outside {353,354,355,383,384,385}.
    InvalidYearLength {
        /// The Hebrew year whose length was computed.
        year: i64,
        /// The impossible day count.
        days: i64,
    },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYearLength { year, days } => {
                write!(f, "impossible Hebrew year length: year {year} has {days} days")
            }
        }
    }
}

impl Error for CalendarError {}

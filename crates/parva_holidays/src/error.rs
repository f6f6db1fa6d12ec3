//! Error type for holiday matching.

use std::error::Error;
use std::fmt::{Display, Formatter};

use parva_calendars::CalendarError;

/// Errors surfaced while evaluating holiday rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HolidayError {
    /// A calendar calculator reported an internal defect.
    Calendar(CalendarError),
}

impl Display for HolidayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for HolidayError {}

impl From<CalendarError> for HolidayError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

//! Rule evaluation and timezone-aware date matching.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

use parva_time::GregorianDate;

use crate::error::HolidayError;
use crate::registry::HOLIDAYS;
use crate::types::{Greeting, HolidayRule};
use crate::western;

/// Whether a rule matches a civil date.
pub fn rule_matches(rule: &HolidayRule, date: &GregorianDate) -> Result<bool, HolidayError> {
    Ok(match rule {
        HolidayRule::MonthDay { month, day } => date.month == *month && date.day == *day,
        HolidayRule::MonthDaySet(days) => {
            days.iter().any(|&(m, d)| date.month == m && date.day == d)
        }
        HolidayRule::NthWeekday { month, n, weekday } => {
            date.month == *month
                && date.to_jdn() == western::nth_weekday_jdn(date.year, *month, *n, *weekday)
        }
        HolidayRule::DateRange { start, end } => western::in_month_day_range(date, *start, *end),
        HolidayRule::EasterOffset(days) => date.to_jdn() == western::easter_jdn(date.year) + days,
        HolidayRule::EasterRange { start, end } => {
            let offset = date.to_jdn() - western::easter_jdn(date.year);
            (*start..=*end).contains(&offset)
        }
        HolidayRule::Festival(festival) => festival(date.year)?.contains(date),
        HolidayRule::Predicate(predicate) => predicate(date),
    })
}

/// Every holiday falling on a civil date, in registry order.
pub fn holidays_on_date(date: &GregorianDate) -> Result<Vec<Greeting>, HolidayError> {
    let mut found = Vec::new();
    for holiday in HOLIDAYS {
        if rule_matches(&holiday.rule, date)? {
            found.push(Greeting {
                name: holiday.name,
                greeting: holiday.greeting,
                emoji: holiday.emoji,
            });
        }
    }
    Ok(found)
}

/// Every holiday falling on the civil day containing a UTC instant,
/// resolved in the given IANA timezone.
///
/// Time of day is ignored once the civil date is resolved. An unknown
/// timezone identifier is recovered locally: a warning is logged and the
/// instant is interpreted in UTC.
pub fn holidays_at(
    instant: DateTime<Utc>,
    timezone: Option<&str>,
) -> Result<Vec<Greeting>, HolidayError> {
    holidays_on_date(&civil_date_in_zone(instant, timezone))
}

fn civil_date_in_zone(instant: DateTime<Utc>, timezone: Option<&str>) -> GregorianDate {
    let naive = match timezone {
        None => instant.date_naive(),
        Some(name) => match name.parse::<Tz>() {
            Ok(tz) => instant.with_timezone(&tz).date_naive(),
            Err(_) => {
                warn!(timezone = name, "unknown IANA timezone, interpreting in UTC");
                instant.date_naive()
            }
        },
    };
    GregorianDate::new(naive.year(), naive.month(), naive.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_rule() {
        let rule = HolidayRule::MonthDay { month: 12, day: 25 };
        assert!(rule_matches(&rule, &GregorianDate::new(2024, 12, 25)).unwrap());
        assert!(!rule_matches(&rule, &GregorianDate::new(2024, 12, 26)).unwrap());
    }

    #[test]
    fn easter_offset_rule() {
        let good_friday = HolidayRule::EasterOffset(-2);
        assert!(rule_matches(&good_friday, &GregorianDate::new(2024, 3, 29)).unwrap());
        assert!(!rule_matches(&good_friday, &GregorianDate::new(2024, 3, 31)).unwrap());
    }

    #[test]
    fn easter_range_rule() {
        let carnival = HolidayRule::EasterRange { start: -47, end: -42 };
        // Easter 2024 was March 31; 47 days earlier is February 13
        assert!(rule_matches(&carnival, &GregorianDate::new(2024, 2, 13)).unwrap());
        assert!(rule_matches(&carnival, &GregorianDate::new(2024, 2, 18)).unwrap());
        assert!(!rule_matches(&carnival, &GregorianDate::new(2024, 2, 19)).unwrap());
    }

    #[test]
    fn month_day_set_rule() {
        let junkanoo = HolidayRule::MonthDaySet(&[(12, 26), (1, 1)]);
        assert!(rule_matches(&junkanoo, &GregorianDate::new(2024, 12, 26)).unwrap());
        assert!(rule_matches(&junkanoo, &GregorianDate::new(2025, 1, 1)).unwrap());
        assert!(!rule_matches(&junkanoo, &GregorianDate::new(2024, 12, 27)).unwrap());
    }
}

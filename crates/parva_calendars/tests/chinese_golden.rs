//! Golden-value tests for the Chinese lunisolar calculator against published
//! calendar dates.

use parva_calendars::{dragon_boat_festival, lunar_new_year, mid_autumn_festival, qingming};
use parva_time::GregorianDate;

fn assert_consecutive(dates: &[GregorianDate]) {
    for pair in dates.windows(2) {
        assert_eq!(
            pair[1].to_jdn() - pair[0].to_jdn(),
            1,
            "gap between {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Lunar New Year 2024 fell on February 10 (Year of the Dragon).
#[test]
fn lunar_new_year_2024() {
    let dates = lunar_new_year(2024);
    assert_eq!(dates.len(), 15);
    assert_consecutive(&dates);
    assert_eq!(dates[0], GregorianDate::new(2024, 2, 10));
    assert_eq!(dates[14], GregorianDate::new(2024, 2, 24));
}

/// Lunar New Year 2023 fell on January 22, 2025 on January 29.
#[test]
fn lunar_new_year_neighbors() {
    assert_eq!(lunar_new_year(2023)[0], GregorianDate::new(2023, 1, 22));
    assert_eq!(lunar_new_year(2025)[0], GregorianDate::new(2025, 1, 29));
}

/// Qingming falls on April 4 or 5; 2024 was April 4.
#[test]
fn qingming_dates() {
    assert_eq!(qingming(2024), vec![GregorianDate::new(2024, 4, 4)]);

    let d2025 = qingming(2025);
    assert_eq!(d2025.len(), 1);
    assert_eq!((d2025[0].year, d2025[0].month), (2025, 4));
    assert!((3..=5).contains(&d2025[0].day), "2025-04-{}", d2025[0].day);
}

/// Dragon Boat 2024 fell on June 10, 2025 on May 31.
#[test]
fn dragon_boat_dates() {
    assert_eq!(
        dragon_boat_festival(2024),
        vec![GregorianDate::new(2024, 6, 10)]
    );
    assert_eq!(
        dragon_boat_festival(2025),
        vec![GregorianDate::new(2025, 5, 31)]
    );
}

/// Mid-Autumn 2024 fell on September 17; 2025 (a leap-month year) on
/// October 6 — the walk must skip the intercalary sixth month.
#[test]
fn mid_autumn_dates() {
    assert_eq!(
        mid_autumn_festival(2024),
        vec![GregorianDate::new(2024, 9, 17)]
    );
    assert_eq!(
        mid_autumn_festival(2025),
        vec![GregorianDate::new(2025, 10, 6)]
    );
}

/// Identical arguments, identical output.
#[test]
fn deterministic() {
    assert_eq!(lunar_new_year(2024), lunar_new_year(2024));
    assert_eq!(mid_autumn_festival(2025), mid_autumn_festival(2025));
}

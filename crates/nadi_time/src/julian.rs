//! Gregorian calendar ↔ Julian Date arithmetic.
//!
//! Uses the Meeus convention (*Astronomical Algorithms*, Ch. 7): January and
//! February are counted as months 13 and 14 of the previous year, and the
//! Gregorian correction is derived from the century digits. Valid for the
//! proleptic Gregorian calendar only.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date from a Gregorian calendar date and UT hours past midnight.
///
/// No validity checks: out-of-range days or months feed straight into the
/// formula.
pub fn calendar_to_jd(year: i32, month: i32, day: i32, ut_hours: f64) -> f64 {
    // f64 so that i32::MIN years and months cannot overflow
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    // JD at 0h UT
    let jd0 = (365.25 * (y + 4716.0)).floor()
        + (30.6001 * (m + 1.0)).floor()
        + day as f64
        + b
        - 1524.5;

    jd0 + ut_hours / 24.0
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// Months outside 1..=12 report 31 so that rollover arithmetic on
/// unvalidated input never panics.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

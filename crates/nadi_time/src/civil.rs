//! Local civil moments and their UTC equivalents.
//!
//! A [`CivilMoment`] is what a caller knows about a birth: a calendar date,
//! a wall-clock time with minute resolution, and a signed UTC offset in
//! hours. [`CivilMoment::to_utc`] subtracts the offset and rolls the date
//! backward or forward across month and year boundaries with plain calendar
//! arithmetic.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month};

const MINUTES_PER_DAY: f64 = 1440.0;

/// Local calendar date and time with a numeric UTC offset.
///
/// Fields are deliberately unvalidated: a month of 13 or a day of 35 is
/// carried through the Julian Date formula unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    /// Signed hours east of Greenwich (IST = 5.5).
    pub utc_offset_hours: f64,
}

impl CivilMoment {
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        }
    }

    /// Build from `YYYY-MM-DD` and `HH:MM` text.
    ///
    /// Fails only when the component count is wrong or a component is not an
    /// integer.
    pub fn parse(date: &str, time: &str, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let [year, month, day] = split_components::<3>(date, '-')
            .ok_or_else(|| TimeError::MalformedDate(date.to_string()))?;
        let [hour, minute] = split_components::<2>(time, ':')
            .ok_or_else(|| TimeError::MalformedTime(time.to_string()))?;
        Ok(Self::new(year, month, day, hour, minute, utc_offset_hours))
    }

    /// Convert to UTC, rolling the calendar date when the offset pushes the
    /// clock outside [00:00, 24:00).
    pub fn to_utc(&self) -> UtcTime {
        let local_minutes = self.hour as f64 * 60.0 + self.minute as f64;
        let utc_minutes = local_minutes - self.utc_offset_hours * 60.0;

        let mut day_shift = (utc_minutes / MINUTES_PER_DAY).floor();
        let mut minute_of_day = utc_minutes - day_shift * MINUTES_PER_DAY;
        if minute_of_day >= MINUTES_PER_DAY {
            minute_of_day -= MINUTES_PER_DAY;
            day_shift += 1.0;
        }

        let hour = (minute_of_day / 60.0).floor();
        let rem = minute_of_day - hour * 60.0;
        let minute = rem.floor();
        let second = (rem - minute) * 60.0;

        let (year, month, day) = shift_days(self.year, self.month, self.day, day_shift as i64);
        UtcTime::new(year, month, day, hour as i32, minute as i32, second)
    }

    /// Julian Date of this moment (UTC-based).
    pub fn to_jd(&self) -> f64 {
        self.to_utc().to_jd()
    }
}

/// UTC calendar date and time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Decimal hours past UTC midnight.
    pub fn ut_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Julian Date via the Meeus formula.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day, self.ut_hours())
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.round() as i64
        )
    }
}

/// Split `text` on `sep` into exactly `N` integer components.
fn split_components<const N: usize>(text: &str, sep: char) -> Option<[i32; N]> {
    let mut out = [0_i32; N];
    let mut parts = text.split(sep);
    for slot in out.iter_mut() {
        *slot = i32::from_str(parts.next()?.trim()).ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Day-number range kept by [`shift_days`]; about ±2e9 years, inside `i32`.
const MAX_DAY_NUMBER: i64 = 365 * 2_000_000_000;

/// Julian Day Number of a Gregorian date, month in 1..=12, any day.
fn day_number(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

/// Gregorian date of a Julian Day Number.
fn date_of_day_number(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year, month, day)
}

/// Move a calendar date by `days`.
///
/// A zero shift returns the input untouched. Otherwise out-of-range months
/// and days are folded into a real date first, the same way the Julian Date
/// formula reads them, and the result is clamped to a year that fits `i32`.
fn shift_days(year: i32, month: i32, day: i32, days: i64) -> (i32, i32, i32) {
    if days == 0 {
        return (year, month, day);
    }
    let month0 = month as i64 - 1;
    let start = day_number(
        year as i64 + month0.div_euclid(12),
        month0.rem_euclid(12) + 1,
        1,
    ) + (day as i64 - 1);
    let target = start
        .saturating_add(days)
        .clamp(-MAX_DAY_NUMBER, MAX_DAY_NUMBER);
    let (y, m, d) = date_of_day_number(target);
    (
        y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        m as i32,
        d as i32,
    )
}

//! Optional range checks on birth details.
//!
//! The calculation itself accepts any integers in the date and time fields;
//! these checks run only when [`crate::CalculatorConfig::validate_input`] is
//! set, or when a caller invokes [`BirthDetails::validate`] directly.

use nadi_time::days_in_month;
use thiserror::Error;

use crate::calculate::BirthDetails;
use crate::config::CalculatorConfig;

/// Shortest accepted place name after trimming.
pub const MIN_PLACE_LEN: usize = 2;

/// A birth detail outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("date must be in YYYY-MM-DD format")]
    DateFormat,
    #[error("date must contain valid numbers")]
    DateNotNumeric,
    #[error("year {year} must be between {min} and {max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("month {0} must be between 1 and 12")]
    MonthOutOfRange(i32),
    #[error("day {day} is not valid for {year}-{month:02}")]
    DayOutOfRange { year: i32, month: i32, day: i32 },
    #[error("time must be in HH:MM format (24-hour)")]
    TimeFormat,
    #[error("time must contain valid numbers")]
    TimeNotNumeric,
    #[error("hour {0} must be between 0 and 23")]
    HourOutOfRange(i32),
    #[error("minute {0} must be between 0 and 59")]
    MinuteOutOfRange(i32),
    #[error("latitude {0} must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} must be between -180 and 180")]
    LongitudeOutOfRange(f64),
    #[error("place of birth is required")]
    PlaceMissing,
    #[error("place of birth must be at least 2 characters")]
    PlaceTooShort,
}

fn split_fields<const N: usize>(
    text: &str,
    sep: char,
    format_err: ValidationError,
    numeric_err: ValidationError,
) -> Result<[i32; N], ValidationError> {
    let parts: Vec<&str> = text.trim().split(sep).collect();
    if parts.len() != N {
        return Err(format_err);
    }
    let mut out = [0_i32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.trim().parse().map_err(|_| numeric_err.clone())?;
    }
    Ok(out)
}

/// Check a `YYYY-MM-DD` date against the calendar and a year range.
pub fn validate_date(text: &str, min_year: i32, max_year: i32) -> Result<(), ValidationError> {
    let [year, month, day] = split_fields::<3>(
        text,
        '-',
        ValidationError::DateFormat,
        ValidationError::DateNotNumeric,
    )?;
    if !(min_year..=max_year).contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: min_year,
            max: max_year,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(ValidationError::DayOutOfRange { year, month, day });
    }
    Ok(())
}

/// Check a 24-hour `HH:MM` time.
pub fn validate_time(text: &str) -> Result<(), ValidationError> {
    let [hour, minute] = split_fields::<2>(
        text,
        ':',
        ValidationError::TimeFormat,
        ValidationError::TimeNotNumeric,
    )?;
    if !(0..=23).contains(&hour) {
        return Err(ValidationError::HourOutOfRange(hour));
    }
    if !(0..=59).contains(&minute) {
        return Err(ValidationError::MinuteOutOfRange(minute));
    }
    Ok(())
}

/// Check geographic coordinates in degrees.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

/// Check a place-of-birth name.
pub fn validate_place(place: &str) -> Result<(), ValidationError> {
    let place = place.trim();
    if place.is_empty() {
        return Err(ValidationError::PlaceMissing);
    }
    if place.chars().count() < MIN_PLACE_LEN {
        return Err(ValidationError::PlaceTooShort);
    }
    Ok(())
}

impl BirthDetails {
    /// Run every range check using the year bounds in `config`.
    ///
    /// The place name is checked only when one is present.
    pub fn validate(&self, config: &CalculatorConfig) -> Result<(), ValidationError> {
        validate_date(&self.birth_date, config.min_year, config.max_year)?;
        validate_time(&self.birth_time)?;
        validate_coordinates(self.latitude, self.longitude)?;
        if let Some(place) = &self.place {
            validate_place(place)?;
        }
        Ok(())
    }
}

//! Civil time to Julian Date conversion.
//!
//! This crate provides:
//! - `YYYY-MM-DD` / `HH:MM` parsing into a [`CivilMoment`]
//! - Local → UTC conversion with day/month/year rollover
//! - Gregorian calendar → Julian Date (Meeus) and Julian centuries since J2000.0

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilMoment, UtcTime};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_centuries,
};

//! Nakshatra, pada and nadi from birth date, time and UTC offset.
//!
//! This crate ties the pipeline together:
//! - [`Calculator`] runs parse → UTC → JD → Moon → sidereal → nakshatra → nadi
//! - [`CalculatorConfig`] controls offset handling and input validation
//! - [`compare`] checks two results for nadi dosha
//!
//! # Quick start
//!
//! ```rust
//! use nadi_rs::{BirthDetails, calculate_nadi};
//!
//! let details = BirthDetails::new("2000-01-01", "05:30", "+05:30");
//! let result = calculate_nadi(&details).unwrap();
//! assert_eq!(result.nakshatra.name(), "Swati");
//! assert_eq!(result.nadi.name(), "Antya");
//! ```

pub mod calculate;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod offset;
pub mod result;
pub mod validate;

pub use calculate::{BirthDetails, Calculator, Person, calculate_nadi};
pub use compatibility::{NadiMatch, PersonRecord, compare};
pub use config::{CalculatorConfig, OffsetPolicy};
pub use error::NadiError;
pub use offset::{
    MAX_OFFSET_HOURS, ResolvedOffset, estimate_offset_from_longitude, parse_utc_offset,
    resolve_utc_offset,
};
pub use result::{ACCURACY_NOTE, NadiRecord, NadiResult, round6};
pub use validate::{
    ValidationError, validate_coordinates, validate_date, validate_place, validate_time,
};

// Re-export domain types so callers don't need the lower crates directly.
pub use nadi_time::{CivilMoment, TimeError, UtcTime};
pub use nadi_vedic_base::{Nadi, Nakshatra};

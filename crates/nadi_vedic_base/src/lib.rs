//! Sidereal classification of the Moon's longitude.
//!
//! This crate provides:
//! - Lahiri ayanamsha (secular term + simplified nutation)
//! - Tropical → sidereal rotation
//! - 27-nakshatra / 4-pada mapping with lower-inclusive boundaries
//! - Nadi classification from a static 9/9/9 partition

pub mod ayanamsha;
pub mod nadi;
pub mod nadi_data;
pub mod nakshatra;

pub use ayanamsha::{
    Ayanamsha, LAHIRI_BASE_DEG, LAHIRI_REFERENCE_JD, lahiri_ayanamsha_deg, lahiri_secular_deg,
    moon_node_longitude_deg, nutation_correction_deg, tropical_to_sidereal,
};
pub use nadi::{ALL_NADIS, Nadi, nadi_from_name, nadi_from_nakshatra};
pub use nadi_data::NADI_GROUPS;
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_from_tropical,
};

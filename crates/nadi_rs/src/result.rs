//! Calculation output and its serialized form.

use nadi_vedic_base::{Nadi, Nakshatra};
use serde::Serialize;

/// Accuracy note attached to every result.
pub const ACCURACY_NOTE: &str = "Enhanced (±0.5 arc-minutes)";

/// Everything the pipeline derives for one birth moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NadiResult {
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    pub nadi: Nadi,
    /// Sidereal (Lahiri) longitude of the Moon, degrees [0, 360).
    pub sidereal_longitude: f64,
    /// Tropical longitude of the Moon, degrees [0, 360).
    pub tropical_longitude: f64,
    /// Lahiri ayanamsha applied, degrees.
    pub ayanamsha: f64,
    /// Julian Date (UT) of the moment.
    pub julian_date: f64,
    /// UTC offset used for the conversion, hours.
    pub utc_offset_hours: f64,
    /// The offset text did not parse and zero was used instead.
    pub offset_defaulted: bool,
    pub accuracy: &'static str,
}

/// Serialized result with longitudes rounded to 6 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NadiRecord {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub nadi: Nadi,
    pub sidereal_longitude: f64,
    pub tropical_longitude: f64,
    pub accuracy: &'static str,
}

/// Round to 6 decimal places, halves away from zero.
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

impl NadiResult {
    pub fn to_record(&self) -> NadiRecord {
        NadiRecord {
            nakshatra: self.nakshatra,
            nakshatra_index: self.nakshatra_index,
            pada: self.pada,
            nadi: self.nadi,
            sidereal_longitude: round6(self.sidereal_longitude),
            tropical_longitude: round6(self.tropical_longitude),
            accuracy: self.accuracy,
        }
    }
}

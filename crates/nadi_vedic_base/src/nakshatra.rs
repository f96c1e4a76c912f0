//! Nakshatra (lunar mansion) and pada from sidereal longitude.
//!
//! The sidereal ecliptic is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, and each nakshatra into 4 padas of 3 deg 20'.
//! Intervals are half-open and lower-inclusive: a longitude exactly on a
//! boundary belongs to the nakshatra (and pada) that starts there.

use std::fmt::{Display, Formatter};

use nadi_lunar::normalize_360;
use serde::{Serialize, Serializer};

use crate::ayanamsha::{lahiri_ayanamsha_deg, tropical_to_sidereal};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Moola,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Moola,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Display name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Moola => "Moola",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra at a 0-based index, if in range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 27 {
            Some(ALL_NAKSHATRAS_27[index as usize])
        } else {
            None
        }
    }

    /// Look up a nakshatra by display name, ignoring case and surrounding
    /// whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_NAKSHATRAS_27
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(name))
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }

    /// Sidereal longitude where this nakshatra begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Index of the half-open bin `[k·width, (k+1)·width)` holding `value`,
/// clamped to `0..=max`.
fn bin_index(value: f64, width: f64, max: u8) -> u8 {
    let mut k = (value / width).floor().clamp(0.0, max as f64) as u8;
    // The quotient can round across a boundary; settle against k·width.
    if k < max && (k + 1) as f64 * width <= value {
        k += 1;
    } else if k > 0 && k as f64 * width > value {
        k -= 1;
    }
    k
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = bin_index(lon, NAKSHATRA_SPAN_27, 26);
    let degrees_in_nakshatra = lon - nak_idx as f64 * NAKSHATRA_SPAN_27;
    let pada_idx = bin_index(degrees_in_nakshatra, PADA_SPAN, 3);
    let degrees_in_pada = degrees_in_nakshatra - pada_idx as f64 * PADA_SPAN;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// Convenience: nakshatra from tropical longitude and the Lahiri ayanamsha at `jd`.
pub fn nakshatra_from_tropical(tropical_lon_deg: f64, jd: f64) -> NakshatraInfo {
    let aya = lahiri_ayanamsha_deg(jd);
    nakshatra_from_longitude(tropical_to_sidereal(tropical_lon_deg, aya))
}

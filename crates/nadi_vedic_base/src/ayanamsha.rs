//! Lahiri ayanamsha with a simplified nutation correction.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to the fixed
//! stars). It is modelled here as two parts:
//!
//! - secular: a base value at a reference epoch plus a constant precession
//!   rate of 0.013888889 deg/yr (50″/yr) times Julian years elapsed;
//! - nutation: `-0.00569 - 0.00478 · sin Ω`, where Ω is the mean longitude of
//!   the Moon's ascending node (cubic in Julian centuries since J2000.0).
//!
//! The sum is a small signed angle and is not normalized.

use nadi_lunar::normalize_360;
use nadi_time::jd_to_centuries;

/// Reference Julian Date of the secular term (JD 2433282.5).
pub const LAHIRI_REFERENCE_JD: f64 = 2_433_282.5;

/// Secular ayanamsha at [`LAHIRI_REFERENCE_JD`], degrees.
pub const LAHIRI_BASE_DEG: f64 = 23.85;

/// Precession rate, degrees per Julian year.
pub const LAHIRI_RATE_DEG_PER_YEAR: f64 = 0.013888889;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Constant part of the nutation correction, degrees.
const NUTATION_OFFSET_DEG: f64 = -0.00569;

/// Amplitude of the sin Ω nutation term, degrees.
const NUTATION_AMPLITUDE_DEG: f64 = -0.00478;

/// Secular and nutation parts of the ayanamsha at one epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ayanamsha {
    /// Base value plus linear precession, degrees.
    pub secular_deg: f64,
    /// Simplified nutation correction, degrees.
    pub nutation_deg: f64,
}

impl Ayanamsha {
    /// Lahiri ayanamsha components at a Julian Date.
    pub fn lahiri(jd: f64) -> Self {
        Self {
            secular_deg: lahiri_secular_deg(jd),
            nutation_deg: nutation_correction_deg(jd),
        }
    }

    /// Total ayanamsha in degrees.
    pub fn total_deg(&self) -> f64 {
        self.secular_deg + self.nutation_deg
    }
}

/// Secular Lahiri ayanamsha: base + rate × Julian years since the reference.
pub fn lahiri_secular_deg(jd: f64) -> f64 {
    let years = (jd - LAHIRI_REFERENCE_JD) / DAYS_PER_JULIAN_YEAR;
    LAHIRI_BASE_DEG + LAHIRI_RATE_DEG_PER_YEAR * years
}

/// Mean longitude of the Moon's ascending node Ω in degrees (not normalized).
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_node_longitude_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450000.0
}

/// Nutation correction `-0.00569 - 0.00478 · sin Ω`, degrees.
pub fn nutation_correction_deg(jd: f64) -> f64 {
    let omega = moon_node_longitude_deg(jd_to_centuries(jd));
    NUTATION_OFFSET_DEG + NUTATION_AMPLITUDE_DEG * omega.to_radians().sin()
}

/// Lahiri ayanamsha (secular + nutation) in degrees at a Julian Date.
pub fn lahiri_ayanamsha_deg(jd: f64) -> f64 {
    Ayanamsha::lahiri(jd).total_deg()
}

/// Rotate a tropical longitude into the sidereal frame, [0, 360).
pub fn tropical_to_sidereal(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}

//! Mean lunar and solar elements.

use crate::angle::normalize_360;
use crate::elp_terms::{
    ARGUMENT_OF_LATITUDE, MEAN_ELONGATION, MEAN_LONGITUDE, MOON_MEAN_ANOMALY, Quartic,
    SUN_MEAN_ANOMALY,
};

/// Evaluate `c0 + c1·T + c2·T² + c3·T³ + c4·T⁴` by accumulating powers of T.
pub fn polynomial(coeffs: &Quartic, t: f64) -> f64 {
    let mut result = coeffs[0];
    let mut t_power = t;
    for &c in &coeffs[1..] {
        result += c * t_power;
        t_power *= t;
    }
    result
}

/// The five mean elements at one epoch, each in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// L′: mean longitude of the Moon.
    pub mean_longitude: f64,
    /// D: mean elongation of the Moon from the Sun.
    pub elongation: f64,
    /// M: mean anomaly of the Sun.
    pub sun_anomaly: f64,
    /// M′: mean anomaly of the Moon.
    pub moon_anomaly: f64,
    /// F: mean argument of latitude of the Moon.
    pub argument_of_latitude: f64,
}

/// Polynomial sets for the five elements, in [`MeanElements`] field order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementPolynomials {
    pub mean_longitude: Quartic,
    pub elongation: Quartic,
    pub sun_anomaly: Quartic,
    pub moon_anomaly: Quartic,
    pub argument_of_latitude: Quartic,
}

/// Meeus Ch. 47 mean-element polynomials.
pub const MEEUS_ELEMENTS: ElementPolynomials = ElementPolynomials {
    mean_longitude: MEAN_LONGITUDE,
    elongation: MEAN_ELONGATION,
    sun_anomaly: SUN_MEAN_ANOMALY,
    moon_anomaly: MOON_MEAN_ANOMALY,
    argument_of_latitude: ARGUMENT_OF_LATITUDE,
};

impl ElementPolynomials {
    /// Evaluate all five polynomials at `t` (Julian centuries since J2000.0).
    pub fn evaluate(&self, t: f64) -> MeanElements {
        MeanElements {
            mean_longitude: normalize_360(polynomial(&self.mean_longitude, t)),
            elongation: normalize_360(polynomial(&self.elongation, t)),
            sun_anomaly: normalize_360(polynomial(&self.sun_anomaly, t)),
            moon_anomaly: normalize_360(polynomial(&self.moon_anomaly, t)),
            argument_of_latitude: normalize_360(polynomial(&self.argument_of_latitude, t)),
        }
    }
}

/// Mean elements from the Meeus polynomials.
pub fn mean_elements(t: f64) -> MeanElements {
    MEEUS_ELEMENTS.evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_constant_at_zero() {
        assert_eq!(polynomial(&[1.5, 2.0, 3.0, 4.0, 5.0], 0.0), 1.5);
    }

    #[test]
    fn polynomial_at_one_sums_coefficients() {
        assert_eq!(polynomial(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.0), 15.0);
    }

    #[test]
    fn polynomial_at_two() {
        // 1 + 2·2 + 3·4 + 4·8 + 5·16
        assert_eq!(polynomial(&[1.0, 2.0, 3.0, 4.0, 5.0], 2.0), 129.0);
    }

    #[test]
    fn elements_at_j2000_are_constant_terms() {
        let el = mean_elements(0.0);
        assert!((el.mean_longitude - 218.3164477).abs() < 1e-9);
        assert!((el.elongation - 297.8501921).abs() < 1e-9);
        assert!((el.sun_anomaly - 357.5291092).abs() < 1e-9);
        assert!((el.moon_anomaly - 134.9633964).abs() < 1e-9);
        assert!((el.argument_of_latitude - 93.2720950).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_47a_elements() {
        // 1992-04-12 0h TD, T = -0.077221081451
        let el = mean_elements(-0.077_221_081_451);
        assert!((el.mean_longitude - 134.290182).abs() < 1e-5, "L' = {}", el.mean_longitude);
        assert!((el.elongation - 113.842304).abs() < 1e-5, "D = {}", el.elongation);
        assert!((el.sun_anomaly - 97.643514).abs() < 1e-5, "M = {}", el.sun_anomaly);
        assert!((el.moon_anomaly - 5.150833).abs() < 1e-5, "M' = {}", el.moon_anomaly);
        assert!((el.argument_of_latitude - 219.889721).abs() < 1e-5, "F = {}", el.argument_of_latitude);
    }

    #[test]
    fn elements_always_in_range() {
        for i in -40..=40 {
            let t = i as f64 * 0.25;
            let el = mean_elements(t);
            for v in [
                el.mean_longitude,
                el.elongation,
                el.sun_anomaly,
                el.moon_anomaly,
                el.argument_of_latitude,
            ] {
                assert!((0.0..360.0).contains(&v), "T = {t}: {v}");
            }
        }
    }
}

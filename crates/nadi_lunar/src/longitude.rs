//! Apparent tropical longitude of the Moon from the truncated series.
//!
//! λ = L′ + Σ Aᵢ · sin(dᵢ·D + mᵢ·M + m′ᵢ·M′ + fᵢ·F), normalized to [0, 360).
//! With the 59-term table this is good to roughly ±0.5′ against full
//! lunar theory over the 20th and 21st centuries.

use crate::angle::normalize_360;
use crate::elements::{ElementPolynomials, MEEUS_ELEMENTS, MeanElements};
use crate::elp_terms::{LONGITUDE_TERMS, PeriodicTerm};

/// A mean-element set plus a periodic longitude table.
///
/// The evaluation in [`LunarTheory::tropical_longitude`] only depends on the
/// shape of the data, so a longer table can be dropped in without touching
/// it.
#[derive(Debug, Clone, Copy)]
pub struct LunarTheory {
    pub elements: ElementPolynomials,
    pub longitude_terms: &'static [PeriodicTerm],
}

/// Meeus mean elements with the 59 leading ELP2000-85 longitude terms.
pub const ELP2000_TRUNCATED: LunarTheory = LunarTheory {
    elements: MEEUS_ELEMENTS,
    longitude_terms: &LONGITUDE_TERMS,
};

impl Default for LunarTheory {
    fn default() -> Self {
        ELP2000_TRUNCATED
    }
}

impl LunarTheory {
    /// Sum of the periodic terms in degrees for already-evaluated elements.
    pub fn periodic_correction(&self, el: &MeanElements) -> f64 {
        self.longitude_terms
            .iter()
            .map(|&term| term_contribution(term, el))
            .sum()
    }

    /// Tropical ecliptic longitude of the Moon in degrees [0, 360).
    ///
    /// `t` = Julian centuries since J2000.0.
    pub fn tropical_longitude(&self, t: f64) -> f64 {
        let el = self.elements.evaluate(t);
        // Accumulate onto L′ term by term; pre-summing the series rounds differently.
        let mut lambda = el.mean_longitude;
        for &term in self.longitude_terms {
            lambda += term_contribution(term, &el);
        }
        normalize_360(lambda)
    }
}

fn term_contribution(term: PeriodicTerm, el: &MeanElements) -> f64 {
    let [amplitude, d, m, mp, f] = term;
    let argument = (d as f64 * el.elongation
        + m as f64 * el.sun_anomaly
        + mp as f64 * el.moon_anomaly
        + f as f64 * el.argument_of_latitude)
        .to_radians();
    (amplitude as f64 / 1_000_000.0) * argument.sin()
}

/// Tropical longitude of the Moon using [`ELP2000_TRUNCATED`].
pub fn tropical_longitude(t: f64) -> f64 {
    ELP2000_TRUNCATED.tropical_longitude(t)
}

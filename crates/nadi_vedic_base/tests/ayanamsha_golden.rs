//! Golden values for the Lahiri ayanamsha with nutation correction.

use nadi_time::{J2000_JD, calendar_to_jd};
use nadi_vedic_base::{
    Ayanamsha, LAHIRI_REFERENCE_JD, lahiri_ayanamsha_deg, nutation_correction_deg,
    tropical_to_sidereal,
};

#[test]
fn at_j2000_noon() {
    let val = lahiri_ayanamsha_deg(J2000_JD);
    assert!((val - 24.534_841_034_763_843).abs() < 1e-9, "aya = {val}");
}

#[test]
fn at_j2000_midnight() {
    let val = lahiri_ayanamsha_deg(2_451_544.5);
    assert!((val - 24.534_823_290_695_85).abs() < 1e-9, "aya = {val}");
}

#[test]
fn at_reference_epoch() {
    let val = lahiri_ayanamsha_deg(LAHIRI_REFERENCE_JD);
    assert!((val - 23.843_306_949_145_37).abs() < 1e-9, "aya = {val}");
}

#[test]
fn at_2025() {
    let val = lahiri_ayanamsha_deg(calendar_to_jd(2025, 1, 1, 0.0));
    assert!((val - 24.885_861_276_971_05).abs() < 1e-9, "aya = {val}");
}

#[test]
fn increases_over_a_century() {
    let a = lahiri_ayanamsha_deg(calendar_to_jd(1950, 1, 1, 0.0));
    let b = lahiri_ayanamsha_deg(calendar_to_jd(2050, 1, 1, 0.0));
    assert!((b - a - 1.389).abs() < 0.02, "drift = {}", b - a);
}

#[test]
fn nutation_oscillates_with_node_period() {
    // Ω regresses through 360 deg in ~18.6 yr; half a cycle flips the sign of sin Ω
    let jd = J2000_JD;
    let half = 18.6 * 365.25 / 2.0;
    let a = nutation_correction_deg(jd) + 0.00569;
    let b = nutation_correction_deg(jd + half) + 0.00569;
    assert!(a * b < 0.0, "a = {a}, b = {b}");
}

#[test]
fn components_are_exposed() {
    let parts = Ayanamsha::lahiri(J2000_JD);
    assert!((parts.secular_deg - 24.544_444_45).abs() < 1e-6, "{parts:?}");
    assert!(parts.nutation_deg.abs() < 0.011);
}

#[test]
fn sidereal_from_j2000_moon() {
    let s = tropical_to_sidereal(217.283_042_427_667_06, 24.534_823_290_695_85);
    assert!((s - 192.748_219_136_971_22).abs() < 1e-9);
}

//! Constant tables for the truncated lunar theory.
//!
//! Mean elements: quartic polynomials in T (Julian centuries since J2000.0),
//! degrees, lowest order first. Values as tabulated in Meeus,
//! *Astronomical Algorithms* (2nd ed.), Ch. 47 (Eqs. 47.1–47.5).
//!
//! Periodic terms: the 59 leading longitude terms of ELP2000-85
//! (Meeus Table 47.A), without the eccentricity factor E.

/// Coefficients of a quartic polynomial, `[c0, c1, c2, c3, c4]`.
pub type Quartic = [f64; 5];

/// One periodic longitude term: `[amplitude_microdeg, D, M, M', F]`.
pub type PeriodicTerm = [i32; 5];

/// L′: mean longitude of the Moon.
pub const MEAN_LONGITUDE: Quartic = [
    218.3164477,
    481267.88123421,
    -0.0015786,
    1.0 / 538841.0,
    -1.0 / 65194000.0,
];

/// D: mean elongation of the Moon from the Sun.
pub const MEAN_ELONGATION: Quartic = [
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.0 / 545868.0,
    -1.0 / 113065000.0,
];

/// M: mean anomaly of the Sun.
pub const SUN_MEAN_ANOMALY: Quartic = [357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0, 0.0];

/// M′: mean anomaly of the Moon.
pub const MOON_MEAN_ANOMALY: Quartic = [
    134.9633964,
    477198.8675055,
    0.0087414,
    1.0 / 69699.0,
    -1.0 / 14712000.0,
];

/// F: mean argument of latitude of the Moon.
pub const ARGUMENT_OF_LATITUDE: Quartic = [
    93.2720950,
    483202.0175233,
    -0.0036539,
    -1.0 / 3526000.0,
    1.0 / 863310000.0,
];

/// ELP2000-85 longitude terms, largest amplitude first.
#[rustfmt::skip]
pub const LONGITUDE_TERMS: [PeriodicTerm; 59] = [
    //  amp(µdeg)  D   M   M'  F
    [  6_288_774,  0,  0,  1,  0],
    [  1_274_027,  2,  0, -1,  0],
    [    658_314,  2,  0,  0,  0],
    [    213_618,  0,  0,  2,  0],
    [   -185_116,  0,  1,  0,  0],
    [   -114_332,  0,  0,  0,  2],
    [     58_793,  2,  0, -2,  0],
    [     57_066,  2, -1, -1,  0],
    [     53_322,  2,  0,  1,  0],
    [     45_758,  2, -1,  0,  0],
    [    -40_923,  0,  1, -1,  0],
    [    -34_720,  1,  0,  0,  0],
    [    -30_383,  0,  1,  1,  0],
    [     15_327,  2,  0,  0, -2],
    [    -12_528,  0,  0,  1,  2],
    [     10_980,  0,  0,  1, -2],
    [     10_675,  4,  0, -1,  0],
    [     10_034,  0,  0,  3,  0],
    [      8_548,  4,  0, -2,  0],
    [     -7_888,  2,  1, -1,  0],
    [     -6_766,  2,  1,  0,  0],
    [     -5_163,  1,  0, -1,  0],
    [      4_987,  1,  1,  0,  0],
    [      4_036,  2, -1,  1,  0],
    [      3_994,  2,  0,  2,  0],
    [      3_861,  4,  0,  0,  0],
    [      3_665,  2,  0, -3,  0],
    [     -2_689,  0,  1, -2,  0],
    [     -2_602,  2,  0, -1,  2],
    [      2_390,  2, -1, -2,  0],
    [     -2_348,  1,  0,  1,  0],
    [      2_236,  2, -2,  0,  0],
    [     -2_120,  0,  1,  2,  0],
    [     -2_069,  0,  2,  0,  0],
    [      2_048,  2, -2, -1,  0],
    [     -1_773,  2,  0,  1, -2],
    [     -1_595,  2,  0,  0,  2],
    [      1_215,  4, -1, -1,  0],
    [     -1_110,  0,  0,  2,  2],
    [       -892,  3,  0, -1,  0],
    [       -810,  2,  1,  1,  0],
    [        759,  4, -1, -2,  0],
    [       -713,  0,  2, -1,  0],
    [       -700,  2,  2, -1,  0],
    [        691,  2,  1, -2,  0],
    [        596,  2, -1,  0, -2],
    [        549,  4,  0,  1,  0],
    [        537,  0,  0,  4,  0],
    [        520,  4, -1,  0,  0],
    [       -487,  1,  0, -2,  0],
    [       -399,  2,  1,  0, -2],
    [       -381,  0,  0,  2, -2],
    [        351,  1,  1,  1,  0],
    [       -340,  3,  0, -2,  0],
    [        330,  4,  0, -3,  0],
    [        327,  2, -1,  2,  0],
    [       -323,  0,  2,  1,  0],
    [        299,  1,  1, -1,  0],
    [        294,  2,  0,  3,  0],
];

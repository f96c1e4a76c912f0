//! Angle normalization shared by every stage that produces a longitude.

/// Normalize an angle to [0, 360) degrees.
///
/// Same range contract as `((x mod 360) + 360) mod 360`, but a value already
/// in [0, 360) comes back bit-identical. Nakshatra and pada bins are
/// lower-inclusive, so an exact boundary such as `k * 360/27` must reach the
/// mapper unchanged: the `+ 360` lift applied to a positive value rounds it
/// and can drop it into the previous bin. Keep the lift for negatives only.
/// A tiny negative remainder whose lift rounds to exactly 360 folds to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

//! UTC offset parsing and resolution.
//!
//! Accepted forms: a decimal number of hours (`5.5`, `-3`, `+9`), or
//! `±HH:MM` / `±HH:MM:SS`. Anything else, non-finite values, and offsets
//! beyond ±24 hours are unparseable.

use tracing::warn;

use crate::config::OffsetPolicy;
use crate::error::NadiError;

/// Largest accepted offset magnitude in hours.
pub const MAX_OFFSET_HOURS: f64 = 24.0;

/// An offset after policy has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOffset {
    /// Signed hours east of Greenwich.
    pub hours: f64,
    /// True when the text was unparseable and zero was substituted.
    pub defaulted: bool,
}

/// Parse offset text into signed hours.
pub fn parse_utc_offset(text: &str) -> Option<f64> {
    let text = text.trim();
    let hours = if text.contains(':') {
        parse_sexagesimal(text)?
    } else {
        text.parse::<f64>().ok()?
    };
    (hours.is_finite() && hours.abs() <= MAX_OFFSET_HOURS).then_some(hours)
}

fn parse_sexagesimal(text: &str) -> Option<f64> {
    let (sign, body) = match text.as_bytes().first()? {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let mut parts = body.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    let seconds: u32 = match parts.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }
    Some(sign * (hours as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0))
}

/// Parse offset text and apply `policy` when it does not parse.
pub fn resolve_utc_offset(text: &str, policy: OffsetPolicy) -> Result<ResolvedOffset, NadiError> {
    if let Some(hours) = parse_utc_offset(text) {
        return Ok(ResolvedOffset {
            hours,
            defaulted: false,
        });
    }
    match policy {
        OffsetPolicy::Lenient => {
            warn!(offset = text, "unparseable UTC offset, using 0.0");
            Ok(ResolvedOffset {
                hours: 0.0,
                defaulted: true,
            })
        }
        OffsetPolicy::Strict => Err(NadiError::UnparseableOffset(text.to_string())),
    }
}

/// Rough local mean time offset for a longitude: 15 degrees per hour,
/// east positive.
///
/// This ignores political time zones and daylight saving.
pub fn estimate_offset_from_longitude(longitude_deg: f64) -> f64 {
    longitude_deg / 15.0
}

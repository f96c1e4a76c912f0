//! Error types for civil time parsing.

use thiserror::Error;

/// Structurally invalid date or time text.
///
/// Both variants are "malformed input": the text did not split into the
/// expected number of numeric components. Out-of-range values that do parse
/// (month 13, hour 25) are not errors here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date was not three dash-separated integers (`YYYY-MM-DD`).
    #[error("malformed date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),
    /// Time was not two colon-separated integers (`HH:MM`).
    #[error("malformed time {0:?}: expected HH:MM")]
    MalformedTime(String),
}

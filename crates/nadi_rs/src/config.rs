//! Calculator configuration.

use serde::{Deserialize, Serialize};

use crate::error::NadiError;

/// What to do with UTC offset text that does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetPolicy {
    /// Log a warning and calculate with a zero offset.
    #[default]
    Lenient,
    /// Fail with [`NadiError::UnparseableOffset`].
    Strict,
}

/// Configuration used when building a [`crate::Calculator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub offset_policy: OffsetPolicy,
    /// Range-check date, time, coordinates and place before calculating.
    pub validate_input: bool,
    /// Earliest accepted birth year when validating.
    pub min_year: i32,
    /// Latest accepted birth year when validating.
    pub max_year: i32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            offset_policy: OffsetPolicy::Lenient,
            validate_input: false,
            min_year: 1900,
            max_year: 2100,
        }
    }
}

impl CalculatorConfig {
    /// Strict offsets and input validation with the default year range.
    pub fn strict() -> Self {
        Self {
            offset_policy: OffsetPolicy::Strict,
            validate_input: true,
            ..Self::default()
        }
    }

    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, NadiError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), NadiError> {
        if self.min_year > self.max_year {
            return Err(NadiError::InvalidConfig("min_year must not exceed max_year"));
        }
        Ok(())
    }
}

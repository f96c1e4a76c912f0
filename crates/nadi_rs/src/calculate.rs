//! The birth-details-to-nadi pipeline.
//!
//! parse → local to UTC → Julian Date → tropical Moon → Lahiri ayanamsha →
//! sidereal Moon → nakshatra/pada → nadi.

use nadi_lunar::{ELP2000_TRUNCATED, LunarTheory};
use nadi_time::{CivilMoment, jd_to_centuries};
use nadi_vedic_base::{lahiri_ayanamsha_deg, nakshatra_from_longitude, tropical_to_sidereal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compatibility::{NadiMatch, PersonRecord, compare};
use crate::config::CalculatorConfig;
use crate::error::NadiError;
use crate::offset::resolve_utc_offset;
use crate::result::{ACCURACY_NOTE, NadiResult};

/// Birth details as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH:MM`, 24-hour local time.
    pub birth_time: String,
    /// UTC offset text, e.g. `5.5` or `+05:30`.
    pub timezone: String,
    /// Degrees north. Only range-checked; not used in the calculation.
    #[serde(default)]
    pub latitude: f64,
    /// Degrees east. Only range-checked; not used in the calculation.
    #[serde(default)]
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl BirthDetails {
    pub fn new(
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            timezone: timezone.into(),
            latitude: 0.0,
            longitude: 0.0,
            place: None,
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }
}

/// A named person for [`Calculator::compare`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub details: BirthDetails,
}

/// Runs the pipeline with a fixed configuration and lunar theory.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
    theory: LunarTheory,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Result<Self, NadiError> {
        config.validate()?;
        Ok(Self {
            config,
            theory: ELP2000_TRUNCATED,
        })
    }

    /// Replace the lunar theory, e.g. with a longer periodic table.
    pub fn with_theory(mut self, theory: LunarTheory) -> Self {
        self.theory = theory;
        self
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Calculate nakshatra, pada and nadi from birth details.
    pub fn calculate(&self, details: &BirthDetails) -> Result<NadiResult, NadiError> {
        if self.config.validate_input {
            details.validate(&self.config)?;
        }
        let offset = resolve_utc_offset(&details.timezone, self.config.offset_policy)?;
        let moment = CivilMoment::parse(&details.birth_date, &details.birth_time, offset.hours)?;

        let mut result = self.calculate_moment(&moment);
        result.offset_defaulted = offset.defaulted;
        info!(
            nakshatra = %result.nakshatra,
            pada = result.pada,
            nadi = %result.nadi,
            "calculation complete"
        );
        Ok(result)
    }

    /// Calculate from an already-parsed local moment. Never fails.
    pub fn calculate_moment(&self, moment: &CivilMoment) -> NadiResult {
        let utc = moment.to_utc();
        let jd = utc.to_jd();
        let t = jd_to_centuries(jd);

        let tropical = self.theory.tropical_longitude(t);
        let ayanamsha = lahiri_ayanamsha_deg(jd);
        let sidereal = tropical_to_sidereal(tropical, ayanamsha);
        debug!(%utc, jd, t, tropical, ayanamsha, sidereal, "lunar position");

        let info = nakshatra_from_longitude(sidereal);
        let nadi = info.nakshatra.nadi();
        debug!(
            nakshatra = %info.nakshatra,
            index = info.nakshatra_index,
            pada = info.pada,
            %nadi,
            "classified"
        );

        NadiResult {
            nakshatra: info.nakshatra,
            nakshatra_index: info.nakshatra_index,
            pada: info.pada,
            nadi,
            sidereal_longitude: sidereal,
            tropical_longitude: tropical,
            ayanamsha,
            julian_date: jd,
            utc_offset_hours: moment.utc_offset_hours,
            offset_defaulted: false,
            accuracy: ACCURACY_NOTE,
        }
    }

    /// Calculate for one or two people and check for nadi dosha.
    pub fn compare(&self, person1: &Person, person2: Option<&Person>) -> Result<NadiMatch, NadiError> {
        let r1 = self.calculate(&person1.details)?;
        let p1 = PersonRecord::new(person1.name.as_deref(), &r1);
        let p2 = match person2 {
            Some(p) => {
                let r2 = self.calculate(&p.details)?;
                Some(PersonRecord::new(p.name.as_deref(), &r2))
            }
            None => None,
        };
        let outcome = compare(p1, p2);
        info!(
            dosha = outcome.has_dosha,
            compatible = outcome.compatible,
            "comparison complete"
        );
        Ok(outcome)
    }
}

/// Calculate with the default configuration.
pub fn calculate_nadi(details: &BirthDetails) -> Result<NadiResult, NadiError> {
    Calculator::default().calculate(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OffsetPolicy;
    use nadi_vedic_base::{Nadi, Nakshatra};

    #[test]
    fn default_uses_truncated_theory() {
        let calc = Calculator::default();
        assert_eq!(calc.theory.longitude_terms.len(), 59);
        assert_eq!(calc.config(), &CalculatorConfig::default());
    }

    #[test]
    fn new_rejects_bad_config() {
        let config = CalculatorConfig {
            min_year: 2100,
            max_year: 1900,
            ..CalculatorConfig::default()
        };
        assert!(matches!(Calculator::new(config), Err(NadiError::InvalidConfig(_))));
    }

    #[test]
    fn j2000_midnight_is_swati() {
        let r = calculate_nadi(&BirthDetails::new("2000-01-01", "00:00", "0")).unwrap();
        assert_eq!(r.nakshatra, Nakshatra::Swati);
        assert_eq!(r.nakshatra_index, 14);
        assert_eq!(r.pada, 2);
        assert_eq!(r.nadi, Nadi::Antya);
        assert_eq!(r.julian_date, 2_451_544.5);
        assert!(!r.offset_defaulted);
    }

    #[test]
    fn moment_and_details_agree() {
        let calc = Calculator::default();
        let from_text = calc
            .calculate(&BirthDetails::new("1990-05-15", "14:30", "5.5"))
            .unwrap();
        let from_moment = calc.calculate_moment(&CivilMoment::new(1990, 5, 15, 14, 30, 5.5));
        assert_eq!(from_text, from_moment);
    }

    #[test]
    fn lenient_offset_flags_default() {
        let r = calculate_nadi(&BirthDetails::new("2000-01-01", "00:00", "IST")).unwrap();
        assert!(r.offset_defaulted);
        assert_eq!(r.utc_offset_hours, 0.0);
        assert_eq!(r.nakshatra, Nakshatra::Swati);
    }

    #[test]
    fn strict_offset_errors() {
        let calc = Calculator::new(CalculatorConfig {
            offset_policy: OffsetPolicy::Strict,
            ..CalculatorConfig::default()
        })
        .unwrap();
        let err = calc
            .calculate(&BirthDetails::new("2000-01-01", "00:00", "IST"))
            .unwrap_err();
        assert!(matches!(err, NadiError::UnparseableOffset(_)));
    }

    #[test]
    fn validation_only_when_enabled() {
        let details = BirthDetails::new("2000-02-30", "00:00", "0");
        assert!(calculate_nadi(&details).is_ok());

        let calc = Calculator::new(CalculatorConfig {
            validate_input: true,
            ..CalculatorConfig::default()
        })
        .unwrap();
        assert!(matches!(calc.calculate(&details), Err(NadiError::Validation(_))));
    }

    #[test]
    fn birth_details_json() {
        let d: BirthDetails = serde_json::from_str(
            r#"{"birth_date": "1990-05-15", "birth_time": "14:30", "timezone": "+05:30"}"#,
        )
        .unwrap();
        assert_eq!(d, BirthDetails::new("1990-05-15", "14:30", "+05:30"));
    }

    #[test]
    fn person_json_flattens_details() {
        let p: Person = serde_json::from_str(
            r#"{"name": "Asha", "birth_date": "1990-05-15", "birth_time": "14:30", "timezone": "5.5"}"#,
        )
        .unwrap();
        assert_eq!(p.name.as_deref(), Some("Asha"));
        assert_eq!(p.details.timezone, "5.5");
    }
}

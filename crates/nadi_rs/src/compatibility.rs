//! Nadi dosha check between two people.
//!
//! Two people whose Moon falls in the same nadi have nadi dosha and are
//! reported incompatible. With only one person the result describes that
//! person's nadi and is always compatible.

use nadi_vedic_base::Nadi;
use serde::Serialize;

use crate::result::{NadiRecord, NadiResult};

/// One person's result with an optional display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRecord {
    pub name: Option<String>,
    #[serde(flatten)]
    pub record: NadiRecord,
}

impl PersonRecord {
    pub fn new(name: Option<&str>, result: &NadiResult) -> Self {
        Self {
            name: name.map(str::to_string),
            record: result.to_record(),
        }
    }

    fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Person",
        }
    }
}

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NadiMatch {
    pub person1: PersonRecord,
    pub person2: Option<PersonRecord>,
    pub has_dosha: bool,
    /// The shared nadi when `has_dosha` is set.
    pub dosha_type: Option<Nadi>,
    pub compatible: bool,
    pub message: String,
}

/// Compare two people, or describe one when `person2` is `None`.
pub fn compare(person1: PersonRecord, person2: Option<PersonRecord>) -> NadiMatch {
    let nadi1 = person1.record.nadi;
    let (has_dosha, message) = match &person2 {
        Some(p2) if p2.record.nadi == nadi1 => (
            true,
            format!(
                "Nadi Dosha present! Both have {nadi1} Nadi. \
                 This combination is not recommended for marriage."
            ),
        ),
        Some(p2) => (
            false,
            format!(
                "No Nadi Dosha. {nadi1} and {} Nadis are compatible.",
                p2.record.nadi
            ),
        ),
        None => (
            false,
            format!(
                "{} has {nadi1} Nadi ({} Nakshatra, Pada {}).",
                person1.display_name(),
                person1.record.nakshatra,
                person1.record.pada
            ),
        ),
    };

    NadiMatch {
        person1,
        person2,
        has_dosha,
        dosha_type: has_dosha.then_some(nadi1),
        compatible: !has_dosha,
        message,
    }
}

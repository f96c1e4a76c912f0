//! Nadi (tri-group) classification of nakshatras.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::nadi_data::{NADI_BY_NAKSHATRA, NADI_GROUPS};
use crate::nakshatra::Nakshatra;

/// The three nadis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nadi {
    /// Vata, "first".
    Aadi,
    /// Pitta, "middle".
    Madhya,
    /// Kapha, "last".
    Antya,
}

/// All nadis in order.
pub const ALL_NADIS: [Nadi; 3] = [Nadi::Aadi, Nadi::Madhya, Nadi::Antya];

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aadi => "Aadi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }

    /// 0-based index (Aadi=0, Madhya=1, Antya=2).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nadi; 3] {
        &ALL_NADIS
    }

    /// The nine nakshatras belonging to this nadi.
    pub const fn members(self) -> &'static [Nakshatra; 9] {
        let groups: &'static [[Nakshatra; 9]; 3] = &NADI_GROUPS;
        &groups[self.index() as usize]
    }
}

impl Display for Nadi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Nadi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Nakshatra {
    /// Nadi this nakshatra belongs to.
    pub const fn nadi(self) -> Nadi {
        NADI_BY_NAKSHATRA[self.index() as usize]
    }
}

/// Nadi for a nakshatra.
pub const fn nadi_from_nakshatra(nakshatra: Nakshatra) -> Nadi {
    nakshatra.nadi()
}

/// Nadi for an externally supplied nakshatra name.
///
/// Unknown names yield `None`; there is no default group.
pub fn nadi_from_name(name: &str) -> Option<Nadi> {
    Nakshatra::from_name(name).map(Nakshatra::nadi)
}

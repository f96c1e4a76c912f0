//! Static partition of the 27 nakshatras into the three nadis.
//!
//! The grouping is traditional and hand-authored; it follows the
//! boustrophedon Aadi-Madhya-Antya-Antya-Madhya-Aadi cycle through the
//! nakshatra sequence. [`NADI_BY_NAKSHATRA`] is built from [`NADI_GROUPS`]
//! at compile time, and the build fails if any nakshatra is missing or
//! listed twice.

use crate::nadi::{ALL_NADIS, Nadi};
use crate::nakshatra::Nakshatra::{self, *};

/// Members of each nadi, in [`ALL_NADIS`] order.
#[rustfmt::skip]
pub const NADI_GROUPS: [[Nakshatra; 9]; 3] = [
    // Aadi (Vata)
    [Ashwini, Ardra, Punarvasu, UttaraPhalguni, Hasta, Jyeshtha, Moola, Shatabhisha, PurvaBhadrapada],
    // Madhya (Pitta)
    [Bharani, Mrigashira, Pushya, PurvaPhalguni, Chitra, Anuradha, PurvaAshadha, Dhanishta, UttaraBhadrapada],
    // Antya (Kapha)
    [Krittika, Rohini, Ashlesha, Magha, Swati, Vishakha, UttaraAshadha, Shravana, Revati],
];

/// Nadi of each nakshatra, indexed by [`Nakshatra::index`].
pub const NADI_BY_NAKSHATRA: [Nadi; 27] = invert_groups(&NADI_GROUPS);

const fn invert_groups(groups: &[[Nakshatra; 9]; 3]) -> [Nadi; 27] {
    let mut out = [Nadi::Aadi; 27];
    let mut seen = [false; 27];
    let mut g = 0;
    while g < 3 {
        let mut i = 0;
        while i < 9 {
            let idx = groups[g][i].index() as usize;
            assert!(!seen[idx], "nakshatra listed in two nadi groups");
            seen[idx] = true;
            out[idx] = ALL_NADIS[g];
            i += 1;
        }
        g += 1;
    }
    let mut k = 0;
    while k < 27 {
        assert!(seen[k], "nakshatra missing from nadi groups");
        k += 1;
    }
    out
}

//! Key signature reference data
//!
//! Holds:
//! - Both accidental families in circle-of-fifths order
//! - Accidental counts and the fixed accidental cycles
//! - Major scale spellings as quizzed

/// Which kind of accidentals a key signature uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Sharp,
    Flat,
}

impl Family {
    /// Both families, in the order used for the fair coin
    pub const BOTH: [Family; 2] = [Family::Sharp, Family::Flat];

    /// Lowercase family word
    pub fn word(self) -> &'static str {
        match self {
            Family::Sharp => "sharp",
            Family::Flat => "flat",
        }
    }

    /// Family word as it appears in a count answer: empty for zero
    /// accidentals, singular for one, plural otherwise
    pub fn word_for(self, count: u8) -> String {
        match count {
            0 => String::new(),
            1 => self.word().to_string(),
            _ => format!("{}s", self.word()),
        }
    }

    /// The order accidentals accumulate on the staff for this family.
    /// Sharps add in fifths (F C G D A E B), flats in fourths (the reverse).
    pub fn cycle(self) -> &'static str {
        match self {
            Family::Sharp => "fcgdaeb",
            Family::Flat => "beadgcf",
        }
    }
}

/// One key signature: name, accidental count, and the five scale
/// tokens quizzed for it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySig {
    pub name: &'static str,
    pub accidentals: u8,
    pub scale: &'static str,
}

const fn key(name: &'static str, accidentals: u8, scale: &'static str) -> KeySig {
    KeySig {
        name,
        accidentals,
        scale,
    }
}

/// Sharp-family keys, ordered by accidental count
pub static SHARP_KEYS: [KeySig; 8] = [
    key("C", 0, "c e g b c"),
    key("G", 1, "g b d fis g"),
    key("D", 2, "d fis a cis d"),
    key("A", 3, "a cis e gis a"),
    key("E", 4, "e gis b dis e"),
    key("B", 5, "b dis fis ais b"),
    key("F#", 6, "fis ais cis eis fis"),
    key("C#", 7, "cis eis gis bis cis"),
];

/// Flat-family keys, ordered by accidental count
pub static FLAT_KEYS: [KeySig; 7] = [
    key("F", 1, "f a c e f"),
    key("Bb", 2, "bes d f a bes"),
    key("Eb", 3, "es g bes d es"),
    key("Ab", 4, "as c es g as"),
    key("Db", 5, "des f as c des"),
    key("Gb", 6, "ges bes des f ges"),
    key("Cb", 7, "ces es ges bes ces"),
];

/// All keys of a family, in canonical order
pub fn keys(family: Family) -> &'static [KeySig] {
    match family {
        Family::Sharp => &SHARP_KEYS,
        Family::Flat => &FLAT_KEYS,
    }
}

/// The accidental letters present in a key signature: the first
/// `accidentals` letters of the family cycle
pub fn accidentals_present(family: Family, key: &KeySig) -> &'static str {
    &family.cycle()[..key.accidentals as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_increase_along_each_family() {
        for family in Family::BOTH {
            let keys = keys(family);
            for pair in keys.windows(2) {
                assert!(
                    pair[0].accidentals < pair[1].accidentals,
                    "{} should come before {}",
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn accidentals_present_is_cycle_prefix() {
        for family in Family::BOTH {
            for key in keys(family) {
                let present = accidentals_present(family, key);
                assert_eq!(present.len(), key.accidentals as usize);
                assert!(family.cycle().starts_with(present));
            }
        }
    }

    #[test]
    fn every_scale_has_five_tokens() {
        for family in Family::BOTH {
            for key in keys(family) {
                assert_eq!(
                    key.scale.split(' ').count(),
                    5,
                    "bad spelling for {}",
                    key.name
                );
            }
        }
    }

    #[test]
    fn word_for_pluralizes() {
        assert_eq!(Family::Flat.word_for(0), "");
        assert_eq!(Family::Flat.word_for(1), "flat");
        assert_eq!(Family::Sharp.word_for(2), "sharps");
    }
}

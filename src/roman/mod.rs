//! Roman numeral harmony: `IV`, `vi`, `viidim`, `V7/IV` relative to a key.
//!
//! The case of a numeral says whether the chord is major or minor, and is
//! decoded into a `Mode` when the numeral is parsed.

pub mod error;

use std::str::FromStr;

use regex::Regex;

use crate::chords::data::{chord_regex, expand_degree_sign, quality_by_notation};
use crate::chords::{captured_quality, Chord};
use crate::notes::data::{Key, Mode, NoteName};
use crate::notes::error::NoteError;
use crate::notes::spelling;
use crate::trust::Trust;

use self::error::RomanError;

pub const ROMAN_ALPHABET: [&str; 14] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "i", "ii", "iii", "iv", "v", "vi", "vii",
];

lazy_static! {
    static ref NUMERAL_REGEX: Regex =
        Regex::new("^(?P<numeral>[IV]+|[iv]+)(?P<alteration>#*|b*)$").trust();
    static ref ROMAN_CHORD_REGEX: Regex = chord_regex(&ROMAN_ALPHABET);
}

/// A scale degree written as a roman numeral, with an optional alteration
/// (`VII#`, `IIIb`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Numeral {
    /// Zero based: `I` is `0`.
    pub degree: usize,
    pub mode: Mode,
    pub alteration: i8,
}

impl FromStr for Numeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RomanError::UnparseableRomanNumeral(s.to_owned());
        let captures = NUMERAL_REGEX.captures(s).ok_or_else(invalid)?;

        let numeral = &captures["numeral"];
        let position = ROMAN_ALPHABET
            .iter()
            .position(|&roman| roman == numeral)
            .ok_or_else(invalid)?;
        let (degree, mode) = if position < 7 {
            (position, Mode::Major)
        } else {
            (position - 7, Mode::Minor)
        };

        let alteration = &captures["alteration"];
        let count = i8::try_from(alteration.len()).map_err(|_| invalid())?;
        let alteration = if alteration.starts_with('b') {
            -count
        } else {
            count
        };

        Ok(Numeral {
            degree,
            mode,
            alteration,
        })
    }
}

impl Numeral {
    /// The spelled degree of the key, with the alteration applied on top.
    pub fn note_name(&self, key: &Key) -> Result<NoteName, RomanError> {
        let name = spelling(key)?.scale[self.degree];
        let accidentals = name
            .accidentals
            .checked_add(self.alteration)
            .ok_or_else(|| NoteError::TooManyAccidentals(key.to_string()))?;
        Ok(NoteName::new(name.letter, accidentals))
    }
}

pub fn note_name_from_roman(roman: &str, key: &str) -> Result<NoteName, RomanError> {
    let key: Key = key.parse()?;
    roman.parse::<Numeral>()?.note_name(&key)
}

/// The chord a roman numeral names in `key`.
///
/// Lowercase numerals make the chord minor unless the written quality is
/// already minor or diminished: `ii7` is `Dm7` in C, `viidim` is `Bdim`.
/// `°` may be written for `dim`, so `vii°` is `Bdim` too.
pub fn chord_name_from_roman(roman: &str, key: &str) -> Result<Chord, RomanError> {
    let invalid = || RomanError::UnparseableRomanNumeral(roman.to_owned());
    let key: Key = key.parse()?;
    let symbol = expand_degree_sign(roman);
    let captures = ROMAN_CHORD_REGEX.captures(&symbol).ok_or_else(invalid)?;

    let numeral: Numeral = captures["root"].parse()?;
    let mut quality = captured_quality(&captures);
    if numeral.mode == Mode::Minor && !quality.is_minor() && !quality.is_diminished() {
        quality = quality_by_notation(&format!("m{}", quality.notation)).ok_or_else(invalid)?;
    }

    let over = match captures.name("over") {
        Some(m) => Some(m.as_str().parse::<Numeral>()?.note_name(&key)?),
        None => None,
    };

    Ok(Chord {
        root: numeral.note_name(&key)?,
        quality,
        over,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(roman: &str, key: &str) -> String {
        chord_name_from_roman(roman, key).unwrap().to_string()
    }

    #[test]
    fn numerals() {
        assert_eq!(
            "VII#".parse::<Numeral>().unwrap(),
            Numeral {
                degree: 6,
                mode: Mode::Major,
                alteration: 1
            }
        );
        assert_eq!(
            "iibb".parse::<Numeral>().unwrap(),
            Numeral {
                degree: 1,
                mode: Mode::Minor,
                alteration: -2
            }
        );
        for bad in &["VV", "IIII", "Iv", "I#b", "X", ""] {
            assert_eq!(
                bad.parse::<Numeral>(),
                Err(RomanError::UnparseableRomanNumeral(bad.to_string()))
            );
        }
    }

    #[test]
    fn note_names_from_roman() {
        fn test(roman: &str, name: &str) {
            assert_eq!(note_name_from_roman(roman, "C").unwrap().to_string(), name);
        }

        test("I", "C");
        test("II", "D");
        test("III", "E");
        test("IV", "F");
        test("V", "G");
        test("VI", "A");
        test("VII", "B");
        test("VII#", "B#");
        test("VIIbb", "Bbb");
    }

    #[test]
    fn long_alterations() {
        let sharps = "#".repeat(127);
        assert_eq!(
            note_name_from_roman(&format!("I{}", sharps), "C")
                .unwrap()
                .to_string(),
            format!("C{}", sharps)
        );
        assert_eq!(
            note_name_from_roman(&format!("VII{}", sharps), "A"),
            Err(RomanError::Note(NoteError::TooManyAccidentals("A".to_owned())))
        );

        let roman = format!("I{}", "b".repeat(128));
        assert_eq!(
            note_name_from_roman(&roman, "C"),
            Err(RomanError::UnparseableRomanNumeral(roman.clone()))
        );
    }

    #[test]
    fn chords_in_a_major_key() {
        fn test(roman: &str, name: &str) {
            assert_eq!(chord(roman, "C"), name, "{} in C", roman);
        }

        test("I", "C");
        test("II", "D");
        test("III", "E");
        test("IV", "F");
        test("V", "G");
        test("VI", "A");
        test("VII", "B");

        test("i", "Cm");
        test("ii", "Dm");
        test("ii7", "Dm7");
        test("iii", "Em");
        test("iv", "Fm");
        test("v", "Gm");
        test("vi", "Am");
        test("vii", "Bm");

        test("VIIdim", "Bdim");
        test("viidim", "Bdim");
        test("I7", "C7");
        test("IVmaj7", "Fmaj7");
        test("IV/I", "F/C");
        test("IVmaj7/iii", "Fmaj7/E");
    }

    #[test]
    fn degree_sign_means_diminished() {
        fn test(roman: &str, key: &str, name: &str) {
            assert_eq!(chord(roman, key), name, "{} in {}", roman, key);
        }

        test("vii°", "C", "Bdim");
        test("VII°", "C", "Bdim");
        test("ii°7", "C", "Ddim7");
        test("ii°", "e", "F#dim");
        test("vii°/V", "C", "Bdim/G");

        assert_eq!(
            chord_name_from_roman("°", "C"),
            Err(RomanError::UnparseableRomanNumeral("°".to_owned()))
        );
    }

    #[test]
    fn chords_in_a_minor_key() {
        fn test(roman: &str, name: &str) {
            assert_eq!(chord(roman, "e"), name, "{} in e", roman);
        }

        test("I", "E");
        test("II", "F#");
        test("III", "G");
        test("IV", "A");
        test("V", "B");
        test("VI", "C");
        test("VII", "D");
        test("VII#", "D#");
        test("VIIdim", "Ddim");
        test("viidim", "Ddim");
    }

    #[test]
    fn diatonic_chords_of_each_mode() {
        let major = Mode::Major
            .romans()
            .iter()
            .map(|roman| chord(roman, "A"))
            .collect::<Vec<_>>();
        assert_eq!(major, vec!["A", "Bm", "C#m", "D", "E", "F#m", "G#dim"]);

        let minor = Mode::Minor
            .romans()
            .iter()
            .map(|roman| chord(roman, "e"))
            .collect::<Vec<_>>();
        assert_eq!(minor, vec!["Em", "F#dim", "G", "Am", "Bm", "C", "D"]);
    }

    #[test]
    fn unparseable_roman_numerals() {
        for roman in &["VV", "Imajor", "I/", "vsus4"] {
            assert_eq!(
                chord_name_from_roman(roman, "C"),
                Err(RomanError::UnparseableRomanNumeral(roman.to_string()))
            );
        }
    }
}

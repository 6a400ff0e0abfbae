use std::collections::HashMap;

use crate::notes::data::Key;
use crate::trust::Trust;

/// Major keys in ascending fifths, from seven flats to seven sharps.
pub const MAJOR_KEYS: [&str; 15] = [
    "Cb", "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];

/// The relative minor of each entry in `MAJOR_KEYS`.
pub const MINOR_KEYS: [&str; 15] = [
    "ab", "eb", "bb", "f", "c", "g", "d", "a", "e", "b", "f#", "c#", "g#", "d#", "a#",
];

const NATURAL_INDEX: i8 = 7;

lazy_static! {
    static ref KEY_SIGNATURES: HashMap<Key, i8> = {
        let mut signatures = HashMap::new();

        for (index, (major, minor)) in MAJOR_KEYS.iter().zip(MINOR_KEYS.iter()).enumerate() {
            let count = index as i8 - NATURAL_INDEX;
            signatures.insert(major.parse::<Key>().trust(), count);
            signatures.insert(minor.parse::<Key>().trust(), count);
        }

        signatures
    };
}

/// Number of sharps (positive) or flats (negative) in the key's signature.
///
/// Returns `None` for keys outside the fifteen conventional spellings, such as
/// `G#` major or `fb` minor, which can only be written with double accidentals.
pub fn signature_of(key: &Key) -> Option<i8> {
    KEY_SIGNATURES.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(key: &str) -> Option<i8> {
        signature_of(&key.parse().unwrap())
    }

    #[test]
    fn signatures_follow_the_circle_of_fifths() {
        assert_eq!(signature("C"), Some(0));
        assert_eq!(signature("a"), Some(0));
        assert_eq!(signature("G"), Some(1));
        assert_eq!(signature("e"), Some(1));
        assert_eq!(signature("F"), Some(-1));
        assert_eq!(signature("d"), Some(-1));
        assert_eq!(signature("Cb"), Some(-7));
        assert_eq!(signature("ab"), Some(-7));
        assert_eq!(signature("C#"), Some(7));
        assert_eq!(signature("a#"), Some(7));
    }

    #[test]
    fn theoretical_keys_have_no_signature() {
        assert_eq!(signature("G#"), None);
        assert_eq!(signature("Fb"), None);
        assert_eq!(signature("db"), None);
        assert_eq!(signature("A##"), None);
    }

    #[test]
    fn every_conventional_key_is_listed_once() {
        assert_eq!(KEY_SIGNATURES.len(), 30);
    }
}

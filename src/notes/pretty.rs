//! Unicode spellings for display: `♯`, `♭`, `𝄪`, `𝄫` and `°`.

use crate::notes::data::{Key, NoteName};

const SHARP: &str = "♯";
const FLAT: &str = "♭";
const DOUBLE_SHARP: &str = "𝄪";
const DOUBLE_FLAT: &str = "𝄫";
const DIMINISHED: &str = "°";

fn prettify_accidentals(accidentals: i8) -> String {
    let (single, double) = if accidentals < 0 {
        (FLAT, DOUBLE_FLAT)
    } else {
        (SHARP, DOUBLE_SHARP)
    };
    let count = accidentals.unsigned_abs() as usize;
    double.repeat(count / 2) + &single.repeat(count % 2)
}

pub fn prettify_note(note: &NoteName) -> String {
    format!("{}{}", note.letter.as_char(), prettify_accidentals(note.accidentals))
}

/// `cb` becomes `C♭ minor`.
pub fn prettify_key(key: &Key) -> String {
    format!("{} {}", prettify_note(&key.root), key.mode.name())
}

/// Prettify a plain chord name. Chord quality tokens never contain a
/// lowercase `b` other than as a flat, so every `b` can be replaced.
pub fn prettify_chord(chord: &str) -> String {
    chord
        .replace("dim", DIMINISHED)
        .replace('#', SHARP)
        .replace('b', FLAT)
}

/// Prettify an interval name such as `b3` or `#11`.
pub fn prettify_interval(interval: &str) -> String {
    interval.replace('#', SHARP).replace('b', FLAT)
}

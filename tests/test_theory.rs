#[macro_use]
extern crate pretty_assertions;

use frets::chords::data::CHORD_QUALITIES;
use frets::chords::{
    chord_name_from_pitches, chord_name_to_note_names, chord_name_to_pitches, Chord,
};
use frets::notes::data::{Key, Mode, NoteName, MAJOR_SCALE, MINOR_SCALE};
use frets::notes::error::NoteError;
use frets::notes::signature::{MAJOR_KEYS, MINOR_KEYS};
use frets::notes::{key_name_to_note_names, note_name_from_pitch, note_name_to_pitch};
use frets::roman::chord_name_from_roman;

fn strings(names: &[NoteName]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn scale_degrees_land_on_the_diatonic_pitches() {
    for key in MAJOR_KEYS.iter().chain(MINOR_KEYS.iter()) {
        let parsed: Key = key.parse().unwrap();
        let intervals = match parsed.mode {
            Mode::Major => MAJOR_SCALE,
            Mode::Minor => MINOR_SCALE,
        };
        let root = i32::from(parsed.root.pitch_class());

        for (name, interval) in key_name_to_note_names(key).unwrap().iter().zip(&intervals) {
            let expected = (root + interval).rem_euclid(12) as u8;
            assert_eq!(
                note_name_to_pitch(&name.to_string()).unwrap(),
                expected,
                "{} in {}",
                name,
                key
            );
        }
    }
}

#[test]
fn documented_spellings() {
    assert_eq!(
        strings(&key_name_to_note_names("C").unwrap()),
        vec!["C", "D", "E", "F", "G", "A", "B"]
    );
    assert_eq!(
        strings(&key_name_to_note_names("e").unwrap()),
        vec!["E", "F#", "G", "A", "B", "C", "D"]
    );
    assert_eq!(
        strings(&key_name_to_note_names("Fb").unwrap()),
        vec!["Fb", "Gb", "Ab", "Bbb", "Cb", "Db", "Eb"]
    );

    assert_eq!(note_name_from_pitch(1, "C").unwrap().to_string(), "C#");
    assert_eq!(note_name_from_pitch(1, "Db").unwrap().to_string(), "Db");
}

#[test]
fn unwritable_keys() {
    for key in &["A##", "Fbb"] {
        let err = key_name_to_note_names(key).unwrap_err();
        assert_eq!(err, NoteError::TooManyAccidentals(key.to_string()));
        assert!(err.to_string().contains(key));
    }
}

#[test]
fn augment_undoes_diminish() {
    for letter in &["C", "D", "E", "F", "G", "A", "B"] {
        for accidentals in &["b", "", "#"] {
            let name: NoteName = format!("{}{}", letter, accidentals).parse().unwrap();
            assert_eq!(name.diminish().augment(), name);
            assert_eq!(name.augment().diminish(), name);
        }
    }
}

#[test]
fn documented_chords() {
    assert_eq!(chord_name_to_pitches("Cmaj7").unwrap(), vec![0, 4, 7, 11]);
    assert_eq!(
        strings(&chord_name_to_note_names("Cmaj7").unwrap()),
        vec!["C", "E", "G", "B"]
    );

    assert_eq!(chord_name_from_roman("viidim", "C").unwrap().to_string(), "Bdim");
    assert_eq!(chord_name_from_roman("IV/I", "C").unwrap().to_string(), "F/C");
}

#[test]
fn chords_survive_a_trip_through_pitches() {
    for quality in CHORD_QUALITIES.iter() {
        for root in &["C", "Eb", "F#", "Bb"] {
            let name = format!("{}{}", root, quality.notation);
            let pitches = chord_name_to_pitches(&name).unwrap();
            let named = chord_name_from_pitches(&pitches, "C").unwrap();
            let original: Chord = name.parse().unwrap();

            assert_eq!(named.pitches(), pitches, "{} became {}", name, named);
            assert_eq!(named.root.pitch_class(), original.root.pitch_class());
        }
    }
}

#[test]
fn slash_chords_survive_a_trip_through_pitches() {
    let pitches = chord_name_to_pitches("C/B").unwrap();
    assert_eq!(pitches, vec![-1, 0, 4, 7]);
    assert_eq!(chord_name_from_pitches(&pitches, "C").unwrap().to_string(), "C/B");
}

#[test]
fn every_diatonic_chord_is_spelled() {
    for key in MAJOR_KEYS.iter().chain(MINOR_KEYS.iter()) {
        let parsed: Key = key.parse().unwrap();
        for roman in parsed.mode.romans() {
            let chord = chord_name_from_roman(roman, key).unwrap();
            let scale = key_name_to_note_names(key).unwrap();

            assert!(scale.contains(&chord.root), "{} in {}", roman, key);
            assert!(chord.note_names().is_ok(), "{} in {}", chord, key);
        }
    }
}

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

#[macro_use]
extern crate lazy_static;

pub mod chords;
pub mod colors;
pub mod fretboard;
pub mod notes;
pub mod roman;
pub mod songs;
pub mod tracks;

mod trust;

use crate::chords::Chord;
use crate::fretboard::data::{Color, Marker, Orientation};
use crate::fretboard::Fretboard;
use crate::notes::data::{Key, Mode, NoteName, Pitch};
use crate::notes::error::NoteError;

pub use crate::tracks::data::MidiOptions;

/// Colors for scale degrees, root first.
pub const SCALE_NOTE_COLORS: [Color; 7] = [
    Color::Red,
    Color::Black,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Black,
    Color::Magenta,
];

const DIATONIC_FUNCTIONS: [&str; 7] = ["R", "2", "3", "4", "5", "6", "7"];

/// Degrees of the diatonic scale kept in the pentatonic one.
const PENTATONIC_DEGREES: [usize; 5] = [0, 2, 3, 4, 6];

#[derive(Debug, Default)]
pub struct RenderOptions {
    pub orientation: Orientation,
    /// Label markers with note names instead of their function.
    pub note_names: bool,
}

/// One marked note: its function in the scale or chord, and its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub function: String,
    pub name: NoteName,
}

/// A fretboard ready to be dumped, with the labels placed on it.
#[derive(Debug)]
pub struct Diagram {
    pub name: String,
    pub labels: Vec<Label>,
    pub fretboard: Fretboard,
}

fn diagram(
    name: String,
    labels: Vec<Label>,
    pitches: &[Pitch],
    colors: &[Color],
    options: &RenderOptions,
) -> Diagram {
    let markers = labels
        .iter()
        .zip(pitches)
        .zip(colors)
        .map(|((label, &pitch), &color)| Marker {
            pitch,
            color,
            text: if options.note_names {
                label.name.to_string()
            } else {
                label.function.clone()
            },
        })
        .collect::<Vec<_>>();

    let mut fretboard = Fretboard::new();
    fretboard.place(&markers);

    Diagram {
        name,
        labels,
        fretboard,
    }
}

/// The diatonic or pentatonic scale of `key` on the fretboard.
pub fn scale_diagram(key: &str, pentatonic: bool, options: &RenderOptions) -> Result<Diagram, NoteError> {
    let key: Key = key.parse()?;
    let spelling = notes::spelling(&key)?;
    let root = Pitch::from(key.root.pitch_class());

    let degrees = if pentatonic {
        PENTATONIC_DEGREES.to_vec()
    } else {
        (0..7).collect()
    };

    let labels = degrees
        .iter()
        .map(|&degree| Label {
            function: DIATONIC_FUNCTIONS[degree].to_owned(),
            name: spelling.scale[degree],
        })
        .collect();
    let pitches = degrees
        .iter()
        .map(|&degree| root + key.mode.intervals()[degree])
        .collect::<Vec<_>>();
    let colors = degrees
        .iter()
        .map(|&degree| SCALE_NOTE_COLORS[degree])
        .collect::<Vec<_>>();

    let name = format!(
        "{}-{}-{}",
        if pentatonic { "pentatonic" } else { "diatonic" },
        key.root.to_string().to_lowercase(),
        match key.mode {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    );

    Ok(diagram(name, labels, &pitches, &colors, options))
}

/// The tones of a chord on the fretboard, labelled by interval.
pub fn chord_diagram(chord: &str, options: &RenderOptions) -> Result<Diagram, chords::error::ChordError> {
    let parsed: Chord = chord.parse()?;

    let labels = parsed
        .interval_names()?
        .into_iter()
        .zip(parsed.note_names()?)
        .map(|(function, name)| Label { function, name })
        .collect();
    let pitches = parsed.pitches();
    let colors = SCALE_NOTE_COLORS
        .iter()
        .cycle()
        .take(pitches.len())
        .copied()
        .collect::<Vec<_>>();

    // A slash in the name would make it a path.
    let name = format!("chord-{}", chord.replace('/', "-over-"));

    Ok(diagram(name, labels, &pitches, &colors, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn functions(diagram: &Diagram) -> Vec<String> {
        diagram
            .labels
            .iter()
            .map(|label| format!("{} = {}", label.function, label.name))
            .collect()
    }

    #[test]
    fn diatonic_scale() {
        let diagram = scale_diagram("Eb", false, &RenderOptions::default()).unwrap();

        assert_eq!(diagram.name, "diatonic-eb-major");
        assert_eq!(
            functions(&diagram),
            vec!["R = Eb", "2 = F", "3 = G", "4 = Ab", "5 = Bb", "6 = C", "7 = D"]
        );
    }

    #[test]
    fn pentatonic_minor_scale() {
        let diagram = scale_diagram("f#", true, &RenderOptions::default()).unwrap();

        assert_eq!(diagram.name, "pentatonic-f#-minor");
        assert_eq!(
            functions(&diagram),
            vec!["R = F#", "3 = A", "4 = B", "5 = C#", "7 = E"]
        );

        // Open low E is the seventh.
        let open = diagram
            .fretboard
            .get(fretboard::data::Position { fret: 0, string: 0 })
            .unwrap();
        assert_eq!(open.text, "7");
        assert_eq!(open.color, Color::Magenta);
    }

    #[test]
    fn note_name_labels() {
        let options = RenderOptions {
            note_names: true,
            ..RenderOptions::default()
        };
        let diagram = scale_diagram("C", false, &options).unwrap();
        let open = diagram
            .fretboard
            .get(fretboard::data::Position { fret: 0, string: 0 })
            .unwrap();

        assert_eq!(open.text, "E");
    }

    #[test]
    fn chord() {
        let diagram = chord_diagram("C/B", &RenderOptions::default()).unwrap();

        assert_eq!(diagram.name, "chord-C-over-B");
        assert_eq!(
            functions(&diagram),
            vec!["7 = B", "1 = C", "3 = E", "5 = G"]
        );

        let open_b = diagram
            .fretboard
            .get(fretboard::data::Position { fret: 0, string: 4 })
            .unwrap();
        assert_eq!(open_b.text, "7");
        assert_eq!(open_b.color, SCALE_NOTE_COLORS[0]);
    }

    #[test]
    fn errors() {
        assert_eq!(
            scale_diagram("H", false, &RenderOptions::default()).unwrap_err(),
            NoteError::InvalidKeyName("H".to_owned())
        );
        assert!(chord_diagram("Cblah", &RenderOptions::default()).is_err());
    }
}

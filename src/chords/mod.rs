pub mod data;
pub mod error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::notes::data::*;
use crate::notes::spelling;
use crate::trust::Trust;

use self::data::*;
use self::error::ChordError;

lazy_static! {
    static ref CHORD_REGEX: Regex = chord_regex(&["C", "D", "E", "F", "G", "A", "B"]);
}

/// A chord symbol such as `Cmaj7`, `Ebm` or `F/C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: NoteName,
    pub quality: &'static Quality,
    pub over: Option<NoteName>,
}

/// Fetch the quality named by a `quality` capture, missing meaning a major triad.
pub(crate) fn captured_quality(captures: &Captures) -> &'static Quality {
    let notation = captures.name("quality").map_or("", |m| m.as_str());
    quality_by_notation(notation).trust()
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = expand_degree_sign(s);
        let captures = CHORD_REGEX
            .captures(&symbol)
            .ok_or_else(|| ChordError::UnparseableChordName(s.to_owned()))?;

        let root = captures["root"].parse()?;
        let quality = captured_quality(&captures);
        let over = match captures.name("over") {
            Some(m) => Some(m.as_str().parse()?),
            None => None,
        };

        Ok(Chord {
            root,
            quality,
            over,
        })
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.notation)?;
        if let Some(over) = self.over {
            write!(f, "/{}", over)?;
        }
        Ok(())
    }
}

impl Chord {
    pub fn new(root: NoteName, quality: &'static Quality) -> Self {
        Chord {
            root,
            quality,
            over: None,
        }
    }

    /// Pitches from the root's pitch class upwards. A bass note goes first,
    /// below the root.
    pub fn pitches(&self) -> Vec<Pitch> {
        let root_pitch = Pitch::from(self.root.pitch_class());
        let mut pitches = shift(root_pitch, &self.quality.pitches);

        if let Some(over) = self.over {
            let mut over_pitch = Pitch::from(over.pitch_class());
            if over_pitch >= root_pitch {
                over_pitch -= 12;
            }
            pitches.insert(0, over_pitch);
        }

        pitches
    }

    /// Spell each chord tone from the major scale of the root.
    pub fn note_names(&self) -> Result<Vec<NoteName>, ChordError> {
        let scale = spelling(&Key::major(self.root))?.scale;

        let mut names = self
            .quality
            .intervals
            .iter()
            .map(|interval| {
                let interval: Interval = interval.parse().trust();
                let mut name = scale[interval.offset % 7];
                for _ in 0..interval.alterations.abs() {
                    name = if interval.alterations > 0 {
                        name.augment()
                    } else {
                        name.diminish()
                    };
                }
                name
            })
            .collect::<Vec<_>>();

        if let Some(over) = self.over {
            names.insert(0, over);
        }

        Ok(names)
    }

    /// The quality's intervals. A bass note is named by its interval above the
    /// root in the root's major scale.
    pub fn interval_names(&self) -> Result<Vec<String>, ChordError> {
        let mut names = self
            .quality
            .intervals
            .iter()
            .map(|interval| interval.to_string())
            .collect::<Vec<_>>();

        if let Some(over) = self.over {
            let scale = spelling(&Key::major(self.root))?.scale;
            let degree = (over.letter.index() + 7 - self.root.letter.index()) % 7;
            let alteration = over.accidentals - scale[degree].accidentals;
            let symbol = if alteration < 0 { "b" } else { "#" };
            let name = format!(
                "{}{}",
                symbol.repeat(alteration.unsigned_abs() as usize),
                degree + 1
            );
            names.insert(0, name);
        }

        Ok(names)
    }

    pub fn description(&self) -> String {
        let mut description = format!("{} {}", self.root, self.quality.description);
        if let Some(over) = self.over {
            description += &format!(" over {}", over);
        }
        description
    }
}

pub fn chord_name_to_pitches(chord: &str) -> Result<Vec<Pitch>, ChordError> {
    Ok(chord.parse::<Chord>()?.pitches())
}

pub fn chord_name_to_note_names(chord: &str) -> Result<Vec<NoteName>, ChordError> {
    chord.parse::<Chord>()?.note_names()
}

pub fn chord_name_to_interval_names(chord: &str) -> Result<Vec<String>, ChordError> {
    chord.parse::<Chord>()?.interval_names()
}

pub fn chord_name_to_description(chord: &str) -> Result<String, ChordError> {
    Ok(chord.parse::<Chord>()?.description())
}

/// Name the chord formed by `pitches`, spelling notes as they are in `key`.
///
/// When the pitches don't form a known chord from their lowest note, the
/// lowest note is taken as the bass of a slash chord built on the rest.
pub fn chord_name_from_pitches(pitches: &[Pitch], key: &str) -> Result<Chord, ChordError> {
    let key: Key = key.parse()?;
    let spelling = spelling(&key)?;
    let unknown = || ChordError::UnknownChordQuality(pitches.to_vec());

    let (root, offsets) = unshift(pitches).ok_or_else(unknown)?;
    if let Some(quality) = quality_by_pitches(&offsets) {
        return Ok(Chord::new(spelling.name_of(root), quality));
    }

    let (root, offsets) = unshift(&pitches[1..]).ok_or_else(unknown)?;
    let quality = quality_by_pitches(&offsets).ok_or_else(unknown)?;

    Ok(Chord {
        root: spelling.name_of(root),
        quality,
        over: Some(spelling.name_of(pitches[0])),
    })
}

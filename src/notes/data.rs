use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::notes::error::NoteError;

/// A signed, unbounded semitone value. `0` is C, `12` is the C above it.
pub type Pitch = i32;

/// Reduce a pitch to its pitch class in `0..12`.
pub fn pitch_class(pitch: Pitch) -> u8 {
    pitch.rem_euclid(12) as u8
}

pub fn shift(root: Pitch, offsets: &[Pitch]) -> Vec<Pitch> {
    offsets.iter().map(|offset| root + offset).collect()
}

/// Split pitches into their first element and the offsets of every pitch from it.
pub fn unshift(pitches: &[Pitch]) -> Option<(Pitch, Vec<Pitch>)> {
    let root = *pitches.first()?;
    Some((root, pitches.iter().map(|pitch| pitch - root).collect()))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALPHABET: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn base_pitch(self) -> Pitch {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Advance `steps` letters through the alphabet, wrapping after `B`.
    pub fn step(self, steps: usize) -> Letter {
        Letter::ALPHABET[(self.index() + steps) % 7]
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// A spelled note: a letter and a run of sharps (positive) or flats (negative).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NoteName {
    pub letter: Letter,
    pub accidentals: i8,
}

impl NoteName {
    pub fn natural(letter: Letter) -> Self {
        NoteName {
            letter,
            accidentals: 0,
        }
    }

    pub fn new(letter: Letter, accidentals: i8) -> Self {
        NoteName {
            letter,
            accidentals,
        }
    }

    pub fn pitch_class(&self) -> u8 {
        pitch_class(self.letter.base_pitch() + Pitch::from(self.accidentals))
    }

    pub fn is_flat(&self) -> bool {
        self.accidentals < 0
    }

    /// Raise by a semitone: drop a flat if there is one, otherwise add a sharp.
    ///
    /// # Panics
    ///
    /// If the note already carries `i8::MAX` sharps.
    pub fn augment(self) -> Self {
        NoteName {
            accidentals: self.accidentals + 1,
            ..self
        }
    }

    /// Lower by a semitone: drop a sharp if there is one, otherwise add a flat.
    ///
    /// # Panics
    ///
    /// If the note already carries `i8::MAX` flats.
    pub fn diminish(self) -> Self {
        NoteName {
            accidentals: self.accidentals - 1,
            ..self
        }
    }

    pub fn accidental_text(&self) -> String {
        let symbol = if self.accidentals < 0 { "b" } else { "#" };
        symbol.repeat(self.accidentals.unsigned_abs() as usize)
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental_text())
    }
}

/// Split the letter from its accidentals, keeping the letter's case.
///
/// Runs longer than `i8::MAX` accidentals are rejected.
pub(crate) fn split_note_text(text: &str) -> Option<(char, Letter, i8)> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let letter = Letter::from_char(first)?;
    let rest = chars.as_str();
    let count = i8::try_from(rest.len()).ok()?;

    let accidentals = match rest.chars().next() {
        None => 0,
        Some('#') if rest.chars().all(|c| c == '#') => count,
        Some('b') if rest.chars().all(|c| c == 'b') => -count,
        Some(_) => return None,
    };

    Some((first, letter, accidentals))
}

impl FromStr for NoteName {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_note_text(s) {
            Some((first, letter, accidentals)) if first.is_ascii_uppercase() => {
                Ok(NoteName::new(letter, accidentals))
            }
            _ => Err(NoteError::InvalidNoteName(s.to_owned())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Major,
    Minor,
}

pub const MAJOR_SCALE: [Pitch; 7] = [0, 2, 4, 5, 7, 9, 11];
pub const MINOR_SCALE: [Pitch; 7] = [0, 2, 3, 5, 7, 8, 10];

pub const MAJOR_SCALE_ROMAN: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "viidim"];
pub const MINOR_SCALE_ROMAN: [&str; 7] = ["i", "iidim", "III", "iv", "v", "VI", "VII"];

impl Mode {
    pub fn intervals(self) -> &'static [Pitch; 7] {
        match self {
            Mode::Major => &MAJOR_SCALE,
            Mode::Minor => &MINOR_SCALE,
        }
    }

    /// The diatonic triads of the mode as roman numerals.
    pub fn romans(self) -> &'static [&'static str; 7] {
        match self {
            Mode::Major => &MAJOR_SCALE_ROMAN,
            Mode::Minor => &MINOR_SCALE_ROMAN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

/// A key, written with an uppercase root for major (`Eb`) and lowercase for minor (`eb`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub root: NoteName,
    pub mode: Mode,
}

impl Key {
    pub fn new(root: NoteName, mode: Mode) -> Self {
        Key { root, mode }
    }

    pub fn major(root: NoteName) -> Self {
        Key::new(root, Mode::Major)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let letter = match self.mode {
            Mode::Major => self.root.letter.as_char(),
            Mode::Minor => self.root.letter.as_char().to_ascii_lowercase(),
        };
        write!(f, "{}{}", letter, self.root.accidental_text())
    }
}

impl FromStr for Key {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, letter, accidentals) =
            split_note_text(s).ok_or_else(|| NoteError::InvalidKeyName(s.to_owned()))?;
        let mode = if first.is_ascii_uppercase() {
            Mode::Major
        } else {
            Mode::Minor
        };
        Ok(Key::new(NoteName::new(letter, accidentals), mode))
    }
}

//! Spelling of scales and pitches within a key.
//!
//! Each scale degree gets the next letter of the alphabet, with whatever
//! accidentals are needed to reach the degree's pitch. The letters never
//! repeat, which is what makes `Fb` major spell its fourth as `Bbb` rather
//! than `A`.

pub mod data;
pub mod error;
pub mod pretty;
pub mod signature;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use self::data::*;
use self::error::NoteError;
use self::signature::signature_of;

/// Accidentals a single scale degree may carry before the key is unwritable.
const MAX_ACCIDENTALS: usize = 2;

const SHARP_NAMES: [(Letter, i8); 12] = [
    (Letter::C, 0),
    (Letter::C, 1),
    (Letter::D, 0),
    (Letter::D, 1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::F, 1),
    (Letter::G, 0),
    (Letter::G, 1),
    (Letter::A, 0),
    (Letter::A, 1),
    (Letter::B, 0),
];

const FLAT_NAMES: [(Letter, i8); 12] = [
    (Letter::C, 0),
    (Letter::D, -1),
    (Letter::D, 0),
    (Letter::E, -1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::G, -1),
    (Letter::G, 0),
    (Letter::A, -1),
    (Letter::A, 0),
    (Letter::B, -1),
    (Letter::B, 0),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Sharp,
    Flat,
}

impl Direction {
    /// Flats when the signature has flats, or when the root itself is spelled
    /// with one. Keys outside the signature table rely on the second rule.
    pub fn of_key(key: &Key) -> Direction {
        let flat_signature = signature_of(key).map_or(false, |count| count < 0);

        if flat_signature || key.root.is_flat() {
            Direction::Flat
        } else {
            Direction::Sharp
        }
    }

    fn apply(self, note: NoteName) -> NoteName {
        match self {
            Direction::Sharp => note.augment(),
            Direction::Flat => note.diminish(),
        }
    }

    fn default_name(self, pitch_class: u8) -> NoteName {
        let names = match self {
            Direction::Sharp => &SHARP_NAMES,
            Direction::Flat => &FLAT_NAMES,
        };
        let (letter, accidentals) = names[pitch_class as usize];
        NoteName::new(letter, accidentals)
    }
}

/// The spelled scale of a key, and the name of every pitch class in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpelling {
    pub key: Key,
    pub direction: Direction,
    pub scale: [NoteName; 7],
    pub table: [NoteName; 12],
}

impl KeySpelling {
    pub fn name_of(&self, pitch: Pitch) -> NoteName {
        self.table[pitch_class(pitch) as usize]
    }
}

fn spell_degree(
    key: &Key,
    direction: Direction,
    letter: Letter,
    target: u8,
) -> Result<NoteName, NoteError> {
    let mut candidate = NoteName::natural(letter);

    for attempt in 0..=MAX_ACCIDENTALS {
        if candidate.pitch_class() == target {
            return Ok(candidate);
        }
        if attempt < MAX_ACCIDENTALS {
            candidate = direction.apply(candidate);
        }
    }

    Err(NoteError::TooManyAccidentals(key.to_string()))
}

/// Spell the seven degrees of `key` and fill in the chromatic pitch classes.
pub fn spell_key(key: &Key) -> Result<KeySpelling, NoteError> {
    let direction = Direction::of_key(key);
    let root_pitch = Pitch::from(key.root.pitch_class());
    let intervals = key.mode.intervals();

    let mut scale = [key.root; 7];
    for degree in 1..7 {
        let letter = key.root.letter.step(degree);
        let target = pitch_class(root_pitch + intervals[degree]);
        scale[degree] = spell_degree(key, direction, letter, target)?;
    }

    let mut table = [NoteName::natural(Letter::C); 12];
    for (pc, name) in table.iter_mut().enumerate() {
        *name = direction.default_name(pc as u8);
    }
    for name in &scale {
        table[name.pitch_class() as usize] = *name;
    }

    Ok(KeySpelling {
        key: *key,
        direction,
        scale,
        table,
    })
}

/// Memo table of key spellings.
///
/// Spellings are a pure function of the key, so entries are added on first
/// use and never invalidated. Keys that fail to spell are not stored.
#[derive(Debug, Default)]
pub struct Namer {
    spellings: RwLock<HashMap<Key, Arc<KeySpelling>>>,
}

impl Namer {
    pub fn new() -> Self {
        Namer::default()
    }

    pub fn spell(&self, key: &Key) -> Result<Arc<KeySpelling>, NoteError> {
        {
            let spellings = self.spellings.read().unwrap_or_else(|e| e.into_inner());
            if let Some(spelling) = spellings.get(key) {
                return Ok(Arc::clone(spelling));
            }
        }

        let spelling = Arc::new(spell_key(key)?);

        let mut spellings = self.spellings.write().unwrap_or_else(|e| e.into_inner());
        let spelling = spellings.entry(*key).or_insert(spelling);
        Ok(Arc::clone(spelling))
    }

    pub fn len(&self) -> usize {
        self.spellings.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

lazy_static! {
    static ref NAMER: Namer = Namer::new();
}

/// The shared spelling of `key`, computed at most once per process.
pub fn spelling(key: &Key) -> Result<Arc<KeySpelling>, NoteError> {
    NAMER.spell(key)
}

pub fn key_name_to_note_names(key: &str) -> Result<Vec<NoteName>, NoteError> {
    let key: Key = key.parse()?;
    Ok(spelling(&key)?.scale.to_vec())
}

/// Pitches of the scale, starting from the root's pitch class.
pub fn key_name_to_pitches(key: &str) -> Result<Vec<Pitch>, NoteError> {
    let key: Key = key.parse()?;
    let root = Pitch::from(key.root.pitch_class());
    Ok(shift(root, key.mode.intervals()))
}

pub fn note_name_to_pitch(name: &str) -> Result<u8, NoteError> {
    Ok(name.parse::<NoteName>()?.pitch_class())
}

pub fn note_name_from_pitch(pitch: Pitch, key: &str) -> Result<NoteName, NoteError> {
    let key: Key = key.parse()?;
    Ok(spelling(&key)?.name_of(pitch))
}

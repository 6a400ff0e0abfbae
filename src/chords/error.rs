use thiserror::Error;

use crate::notes::data::Pitch;
use crate::notes::error::NoteError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChordError {
    #[error("Could not parse chord notation `{0}`")]
    UnparseableChordName(String),

    #[error("No chord quality matches the pitches {0:?}")]
    UnknownChordQuality(Vec<Pitch>),

    #[error(transparent)]
    Note(#[from] NoteError),
}

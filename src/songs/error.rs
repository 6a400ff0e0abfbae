use thiserror::Error;

use crate::chords::error::ChordError;
use crate::roman::error::RomanError;
use crate::tracks::error::TrackError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SongError {
    #[error("Unknown song `{0}`")]
    UnknownSong(String),

    #[error("Invalid strum pattern `{0}`: each chunk must start with `D` or `U`, followed by `D`, `U` or `-`")]
    InvalidStrumPattern(String),

    #[error(transparent)]
    Roman(#[from] RomanError),

    #[error(transparent)]
    Chord(#[from] ChordError),

    #[error(transparent)]
    Track(#[from] TrackError),
}

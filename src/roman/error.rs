use thiserror::Error;

use crate::notes::error::NoteError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("Could not parse roman numeral `{0}`")]
    UnparseableRomanNumeral(String),

    #[error(transparent)]
    Note(#[from] NoteError),
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// A note that is not a letter `A` to `G` followed by a run of `#` or `b`.
    #[error("Unknown note `{0}`")]
    InvalidNoteName(String),

    /// The same malformed spelling as `InvalidNoteName`, met where a key was
    /// expected. Keys also accept a lowercase letter.
    #[error("Unknown key `{0}`")]
    InvalidKeyName(String),

    #[error("Scale {0} requires too many accidentals")]
    TooManyAccidentals(String),
}

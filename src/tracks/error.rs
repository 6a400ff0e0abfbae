use thiserror::Error;

use crate::notes::data::Pitch;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("Tempo of {0} beats per minute does not fit in a MIDI file")]
    InvalidTempo(u32),

    #[error("Pitch {0} is outside the MIDI note range 0-127")]
    PitchOutOfRange(Pitch),

    #[error("Failed to write MIDI data: {0}")]
    Write(String),
}

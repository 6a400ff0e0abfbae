//! Chord progressions strummed in rhythm.
//!
//! A strum pattern is a `/` separated list of chunks, one chunk per chord,
//! used in rotation. Each `D` (down) or `U` (up) strum lasts half a beat, and
//! every `-` holds the previous strum for another half beat.

pub mod data;
pub mod error;

use crate::chords::Chord;
use crate::notes::data::{NoteName, Pitch};
use crate::roman::chord_name_from_roman;
use crate::tracks::data::BeatFraction;
use crate::tracks::Track;

use self::data::*;
use self::error::SongError;

/// Chord pitches start from the C below middle C, which is MIDI note 48.
const OCTAVE_OFFSET: Pitch = 48;

pub fn parse_strum_pattern(pattern: &str) -> Result<Vec<StrumChunk>, SongError> {
    let invalid = || SongError::InvalidStrumPattern(pattern.to_owned());

    pattern
        .split('/')
        .map(|chunk| {
            let mut strums: StrumChunk = Vec::new();

            for c in chunk.chars() {
                let direction = match c {
                    'D' => StrumDirection::Down,
                    'U' => StrumDirection::Up,
                    '-' => {
                        let last = strums.last_mut().ok_or_else(invalid)?;
                        last.duration = last.duration + BeatFraction::half();
                        continue;
                    }
                    _ => return Err(invalid()),
                };

                strums.push(Strum {
                    direction,
                    duration: BeatFraction::half(),
                });
            }

            if strums.is_empty() {
                Err(invalid())
            } else {
                Ok(strums)
            }
        })
        .collect()
}

pub fn song(name: &str) -> Result<&'static Song, SongError> {
    SONGS
        .iter()
        .find(|song| song.name == name)
        .ok_or_else(|| SongError::UnknownSong(name.to_owned()))
}

impl Song {
    pub fn romans(&self) -> Vec<&'static str> {
        self.chord_pattern.split_whitespace().collect()
    }

    pub fn chords(&self) -> Result<Vec<Chord>, SongError> {
        self.romans()
            .into_iter()
            .map(|roman| chord_name_from_roman(roman, self.key).map_err(SongError::from))
            .collect()
    }

    /// Each distinct numeral of the progression in order of first use, with
    /// its chord and the chord's notes.
    pub fn key_chords(&self) -> Result<Vec<(&'static str, Chord, Vec<NoteName>)>, SongError> {
        let mut romans = self.romans();
        let mut seen = Vec::new();
        romans.retain(|roman| {
            if seen.contains(roman) {
                false
            } else {
                seen.push(*roman);
                true
            }
        });

        romans
            .into_iter()
            .map(|roman| -> Result<_, SongError> {
                let chord = chord_name_from_roman(roman, self.key)?;
                let notes = chord.note_names()?;
                Ok((roman, chord, notes))
            })
            .collect()
    }

    /// Play the progression `repeat` times. Strum chunks keep rotating across
    /// repeats rather than restarting.
    pub fn render(&self, repeat: usize) -> Result<Track, SongError> {
        let chords = self.chords()?;
        let strums = parse_strum_pattern(self.strum_pattern)?;
        let mut track = Track::new(self.beats_per_minute)?;

        let progression = chords.iter().cycle().take(chords.len() * repeat);

        for (chord, chunk) in progression.zip(strums.iter().cycle()) {
            let pitches = chord
                .pitches()
                .into_iter()
                .map(|pitch| pitch + OCTAVE_OFFSET)
                .collect::<Vec<_>>();

            for strum in chunk {
                track.add_notes(&pitches, strum.duration);
            }
        }

        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_beats(chunk: &[Strum]) -> Vec<(StrumDirection, u32)> {
        chunk
            .iter()
            .map(|strum| (strum.direction, strum.duration.ticks(2) as u32))
            .collect()
    }

    #[test]
    fn strum_patterns() {
        use self::StrumDirection::*;

        let chunks = parse_strum_pattern("D-D-D-D-").unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(half_beats(&chunks[0]), vec![(Down, 2), (Down, 2), (Down, 2), (Down, 2)]);

        let chunks = parse_strum_pattern("D-DU/DUD/U-UD/U-UD-").unwrap();
        assert_eq!(chunks.len(), 4);
        assert_eq!(half_beats(&chunks[0]), vec![(Down, 2), (Down, 1), (Up, 1)]);
        assert_eq!(half_beats(&chunks[1]), vec![(Down, 1), (Up, 1), (Down, 1)]);
        assert_eq!(half_beats(&chunks[2]), vec![(Up, 2), (Up, 1), (Down, 1)]);
        assert_eq!(half_beats(&chunks[3]), vec![(Up, 2), (Up, 1), (Down, 2)]);

        assert_eq!(
            half_beats(&parse_strum_pattern("D---").unwrap()[0]),
            vec![(Down, 4)]
        );
    }

    #[test]
    fn invalid_strum_patterns() {
        for bad in &["", "-D", "D//U", "D/", "DX", "d-d-"] {
            assert_eq!(
                parse_strum_pattern(bad),
                Err(SongError::InvalidStrumPattern(bad.to_string()))
            );
        }
    }

    #[test]
    fn every_song_renders() {
        for song in SONGS {
            let track = song.render(1).unwrap();
            assert!(!track.chords().is_empty(), "{} rendered nothing", song.name);
            assert_eq!(track.beats_per_minute(), song.beats_per_minute);
        }
    }

    #[test]
    fn unknown_songs() {
        assert_eq!(song("blues").unwrap().key, "A");
        assert_eq!(song("polka"), Err(SongError::UnknownSong("polka".to_owned())));
    }

    #[test]
    fn fifties_progression() {
        let fifties = song("50s").unwrap();
        let chords = fifties
            .chords()
            .unwrap()
            .iter()
            .map(|chord| chord.to_string())
            .collect::<Vec<_>>();
        assert_eq!(chords, vec!["C", "Am", "F", "G"]);

        let track = fifties.render(2).unwrap();
        // Four strums of a beat each, per chord.
        assert_eq!(track.chords().len(), 2 * 4 * 4);
        assert_eq!(track.duration(), BeatFraction::beats(32));
        assert_eq!(track.chords()[0].pitches, vec![48, 52, 55]);
        assert_eq!(track.chords()[4].pitches, vec![57, 60, 64]);
    }

    #[test]
    fn strum_chunks_rotate_across_repeats() {
        let blues7 = song("blues7").unwrap();
        let once = blues7.render(1).unwrap();
        let twice = blues7.render(2).unwrap();

        // Twelve chords alternate between a five and a six strum chunk.
        assert_eq!(once.chords().len(), 6 * 5 + 6 * 6);
        assert_eq!(twice.chords().len(), 2 * once.chords().len());
        assert_eq!(once.duration(), BeatFraction::beats(12 * 4));
    }

    #[test]
    fn slash_chords_put_the_bass_first() {
        let paint_it_black = song("paintitblack").unwrap();
        let chords = paint_it_black.chords().unwrap();
        let last = chords.last().unwrap();

        assert_eq!(last.to_string(), "B/A");
        assert_eq!(last.pitches(), vec![9, 11, 15, 18]);
    }

    #[test]
    fn key_chords_are_listed_once() {
        let romans = song("blues")
            .unwrap()
            .key_chords()
            .unwrap()
            .into_iter()
            .map(|(roman, chord, notes)| {
                let notes = notes.iter().map(|note| note.to_string()).collect::<Vec<_>>();
                (roman, chord.to_string(), notes.join(" "))
            })
            .collect::<Vec<_>>();

        assert_eq!(
            romans,
            vec![
                ("I7", "A7".to_owned(), "A C# E G".to_owned()),
                ("IV7", "D7".to_owned(), "D F# A C".to_owned()),
                ("V7", "E7".to_owned(), "E G# B D".to_owned()),
            ]
        );
    }
}

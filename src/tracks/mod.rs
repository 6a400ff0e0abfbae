//! A single MIDI track of block chords.

pub mod data;
pub mod error;

use rimd::{Event, MetaEvent, MidiMessage, SMFFormat, SMFWriter, TrackEvent, SMF};

use crate::notes::data::Pitch;

use self::data::*;
use self::error::TrackError;

const MICROSECONDS_PER_MIN: u32 = 60_000_000;

/// MIDI stores the microseconds per beat in three bytes.
const MAX_MICROSECONDS_PER_BEAT: u32 = 0xff_ffff;

#[derive(Debug, Clone)]
pub struct Track {
    beats_per_minute: u32,
    chords: Vec<TrackChord>,
}

fn midi_note(pitch: Pitch) -> Result<u8, TrackError> {
    u8::try_from(pitch)
        .ok()
        .filter(|&note| note < 128)
        .ok_or(TrackError::PitchOutOfRange(pitch))
}

impl Track {
    /// An empty track. The tempo must be between 4 and 60,000,000 beats per
    /// minute, the range a MIDI tempo event can hold.
    pub fn new(beats_per_minute: u32) -> Result<Self, TrackError> {
        let fits = MICROSECONDS_PER_MIN
            .checked_div(beats_per_minute)
            .map_or(false, |tempo| (1..=MAX_MICROSECONDS_PER_BEAT).contains(&tempo));
        if !fits {
            return Err(TrackError::InvalidTempo(beats_per_minute));
        }

        Ok(Track {
            beats_per_minute,
            chords: Vec::new(),
        })
    }

    pub fn beats_per_minute(&self) -> u32 {
        self.beats_per_minute
    }

    pub fn chords(&self) -> &[TrackChord] {
        &self.chords
    }

    /// Sound every pitch at once for `duration`, after whatever was added before.
    pub fn add_notes(&mut self, pitches: &[Pitch], duration: BeatFraction) {
        self.chords.push(TrackChord {
            pitches: pitches.to_vec(),
            duration,
        });
    }

    pub fn duration(&self) -> BeatFraction {
        self.chords
            .iter()
            .fold(BeatFraction::beats(0), |total, chord| total + chord.duration)
    }

    /// Serialize as a format 0 standard MIDI file.
    pub fn to_midi(&self, options: &MidiOptions) -> Result<Vec<u8>, TrackError> {
        let channel = options.channel;
        let tempo = MICROSECONDS_PER_MIN / self.beats_per_minute;

        let mut events = vec![
            TrackEvent {
                vtime: 0,
                event: Event::Meta(MetaEvent::tempo_setting(tempo)),
            },
            TrackEvent {
                vtime: 0,
                event: Event::Midi(MidiMessage::program_change(options.program, channel)),
            },
        ];

        for chord in &self.chords {
            let notes = chord
                .pitches
                .iter()
                .map(|&pitch| midi_note(pitch))
                .collect::<Result<Vec<_>, _>>()?;

            for &note in &notes {
                events.push(TrackEvent {
                    vtime: 0,
                    event: Event::Midi(MidiMessage::note_on(note, options.velocity, channel)),
                });
            }

            // The first release carries the whole length of the chord.
            let mut vtime = chord.duration.ticks(options.ticks_per_beat);
            for &note in &notes {
                events.push(TrackEvent {
                    vtime,
                    event: Event::Midi(MidiMessage::note_off(note, options.velocity, channel)),
                });
                vtime = 0;
            }
        }

        let smf = SMF {
            format: SMFFormat::Single,
            division: options.ticks_per_beat,
            tracks: vec![rimd::Track {
                copyright: None,
                name: None,
                events,
            }],
        };

        let writer = SMFWriter::from_smf(smf);
        let mut buffer = Vec::new();
        writer
            .write_all(&mut buffer)
            .map_err(|err| TrackError::Write(err.to_string()))?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    fn c_major_track() -> Track {
        let mut track = Track::new(100).unwrap();
        track.add_notes(&[60, 64, 67], BeatFraction::beats(1));
        track.add_notes(&[62, 65, 69], BeatFraction::half());
        track
    }

    #[test]
    fn duration_adds_up() {
        let track = c_major_track();
        assert_eq!(track.chords().len(), 2);
        assert_eq!(track.duration(), BeatFraction::new(3, 2).unwrap());
    }

    #[test]
    fn tempo_must_fit_a_midi_file() {
        for bpm in &[0, 1, 3, 60_000_001, u32::MAX] {
            assert_eq!(
                Track::new(*bpm).unwrap_err(),
                TrackError::InvalidTempo(*bpm)
            );
        }
        for bpm in &[4, 120, 60_000_000] {
            assert_eq!(Track::new(*bpm).unwrap().beats_per_minute(), *bpm);
        }
    }

    #[test]
    fn header() {
        let midi = c_major_track().to_midi(&MidiOptions::default()).unwrap();

        assert_eq!(&midi[0..4], b"MThd");
        // Length 6, format 0, one track, 480 ticks per beat.
        assert_eq!(&midi[4..14], &[0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xe0]);
        assert_eq!(&midi[14..18], b"MTrk");
    }

    #[test]
    fn tempo_and_program() {
        let midi = c_major_track().to_midi(&MidiOptions::default()).unwrap();

        // 600000 microseconds per beat is 100 bpm.
        assert!(contains(&midi, &[0xff, 0x51, 0x03, 0x09, 0x27, 0xc0]));
        assert!(contains(&midi, &[0xc0, 26]));
        assert!(contains(&midi, &[0x90, 60, 64]));
    }

    #[test]
    fn options_are_respected() {
        let options = MidiOptions {
            ticks_per_beat: 96,
            program: 0,
            channel: 2,
            velocity: 100,
        };
        let midi = c_major_track().to_midi(&options).unwrap();

        assert_eq!(&midi[12..14], &[0x00, 0x60]);
        assert!(contains(&midi, &[0xc2, 0]));
        assert!(contains(&midi, &[0x92, 60, 100]));
    }

    #[test]
    fn pitches_outside_midi_range_fail() {
        let mut track = Track::new(120).unwrap();
        track.add_notes(&[60, 128], BeatFraction::beats(1));

        match track.to_midi(&MidiOptions::default()) {
            Err(TrackError::PitchOutOfRange(128)) => {}
            other => panic!("Expected PitchOutOfRange, got {:?}", other),
        }

        let mut track = Track::new(120).unwrap();
        track.add_notes(&[-1], BeatFraction::beats(1));
        assert!(track.to_midi(&MidiOptions::default()).is_err());
    }
}

use std::ops::Add;

use crate::notes::data::Pitch;

/// A length of time measured in beats, kept as an exact fraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BeatFraction {
    pub numerator: u32,
    pub denominator: u32,
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl BeatFraction {
    /// `numerator / denominator` beats in lowest terms, or `None` for a zero
    /// denominator.
    pub fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            None
        } else {
            Some(BeatFraction::reduced(numerator, denominator))
        }
    }

    fn reduced(numerator: u32, denominator: u32) -> Self {
        let divisor = gcd(numerator, denominator).max(1);
        BeatFraction {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    pub fn beats(beats: u32) -> Self {
        BeatFraction {
            numerator: beats,
            denominator: 1,
        }
    }

    pub fn half() -> Self {
        BeatFraction {
            numerator: 1,
            denominator: 2,
        }
    }

    /// Length in MIDI ticks, rounded down.
    pub fn ticks(self, ticks_per_beat: i16) -> u64 {
        let ticks_per_beat = u64::from(ticks_per_beat.unsigned_abs());
        ticks_per_beat * u64::from(self.numerator) / u64::from(self.denominator)
    }
}

impl Add for BeatFraction {
    type Output = BeatFraction;

    fn add(self, other: BeatFraction) -> BeatFraction {
        BeatFraction::reduced(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

/// Notes that start together and stop together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackChord {
    pub pitches: Vec<Pitch>,
    pub duration: BeatFraction,
}

#[derive(Debug)]
pub struct MidiOptions {
    pub ticks_per_beat: i16,
    pub program: u8,
    pub channel: u8,
    pub velocity: u8,
}

impl Default for MidiOptions {
    fn default() -> Self {
        MidiOptions {
            ticks_per_beat: 480,
            // Acoustic Guitar (steel)
            program: 26,
            channel: 0,
            velocity: 64,
        }
    }
}

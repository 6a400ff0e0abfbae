use crate::tracks::data::BeatFraction;

pub const DEFAULT_BEATS_PER_MINUTE: u32 = 120;
pub const DEFAULT_STRUM_PATTERN: &str = "D-D-D-D-";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StrumDirection {
    Down,
    Up,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Strum {
    pub direction: StrumDirection,
    pub duration: BeatFraction,
}

/// The strums played over one chord.
pub type StrumChunk = Vec<Strum>;

/// A chord progression in roman numerals, with how to play it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: &'static str,
    pub key: &'static str,
    pub chord_pattern: &'static str,
    pub strum_pattern: &'static str,
    pub beats_per_minute: u32,
}

const fn song(name: &'static str, key: &'static str, chord_pattern: &'static str) -> Song {
    Song {
        name,
        key,
        chord_pattern,
        strum_pattern: DEFAULT_STRUM_PATTERN,
        beats_per_minute: DEFAULT_BEATS_PER_MINUTE,
    }
}

pub const SONGS: &[Song] = &[
    song("50s", "C", "I vi IV V"),
    Song {
        beats_per_minute: 90,
        strum_pattern: "D-D-D-D-",
        ..song("blueforyou", "D", "I7 IV7 I7 I7 IV7 IV7 I7 I7 V7 IV7 I7 V7")
    },
    song("blues", "A", "I7 I7 I7 I7 IV7 IV7 I7 I7 V7 IV7 I7 V7"),
    song(
        "blues-quick-change",
        "A",
        "I7 IV7 I7 I7 IV7 IV7 I7 I7 V7 IV7 I7 V7",
    ),
    song(
        "blues-slow-change",
        "A",
        "I7 I7 I7 I7 IV7 IV7 I7 I7 V7 V7 I7 I7",
    ),
    Song {
        beats_per_minute: 130,
        strum_pattern: "D-DU-UD-/D-DU-UDU",
        ..song("blues7", "A", "I IV I I7 IV IV7 I I7 V IV I V7")
    },
    Song {
        beats_per_minute: 150,
        strum_pattern: "D-D-D-DU",
        ..song(
            "heyjude",
            "F",
            concat!(
                "I I V V V7 V7 I I IV IV I I V V7 I I ",
                "I7 I7 IV IVmaj7/iii ii7 IV/I V7 V7 I I",
            ),
        )
    },
    song("key", "A", "I ii iii IV V vi viidim"),
    Song {
        beats_per_minute: 160,
        strum_pattern: "D-DU/DUD/U-UD/U-UD-",
        ..song(
            "paintitblack",
            "e",
            "i VII III VII i i i i i VII III VII IV IV V/iv V/iv",
        )
    },
    song("pop", "C", "I V vi IV"),
];

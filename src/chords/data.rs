use std::borrow::Cow;
use std::collections::HashMap;

use regex::Regex;

use crate::notes::data::{Pitch, MAJOR_SCALE};
use crate::trust::Trust;

/// A chord quality: its notation after the root, and the intervals it stacks.
#[derive(Debug, PartialEq, Eq)]
pub struct Quality {
    pub notation: &'static str,
    pub intervals: &'static [&'static str],
    pub description: &'static str,
    pub pitches: Vec<Pitch>,
}

impl Quality {
    fn new(
        notation: &'static str,
        intervals: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        let pitches = intervals
            .iter()
            .map(|interval| interval.parse::<Interval>().trust().pitch())
            .collect();

        Quality {
            notation,
            intervals,
            description,
            pitches,
        }
    }

    pub fn is_minor(&self) -> bool {
        self.notation.starts_with('m') && !self.notation.starts_with("maj")
    }

    pub fn is_diminished(&self) -> bool {
        self.notation.starts_with("dim")
    }
}

/// An interval above a chord root, written as a scale degree with
/// alterations: `3`, `b7`, `#11`, `bb7`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Interval {
    pub alterations: i8,
    /// Zero based: the root is `0`, the ninth is `8`.
    pub offset: usize,
}

impl Interval {
    pub fn pitch(&self) -> Pitch {
        let octaves = (self.offset / 7) as Pitch;
        MAJOR_SCALE[self.offset % 7] + 12 * octaves + Pitch::from(self.alterations)
    }
}

impl std::str::FromStr for Interval {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = INTERVAL_REGEX.captures(s).ok_or(())?;
        let alterations = captures[1]
            .chars()
            .map(|c| if c == '#' { 1 } else { -1 })
            .sum();
        let degree: usize = captures[2].parse().map_err(|_| ())?;

        if degree == 0 {
            return Err(());
        }

        Ok(Interval {
            alterations,
            offset: degree - 1,
        })
    }
}

lazy_static! {
    static ref INTERVAL_REGEX: Regex = Regex::new(r"^([b#]*)(\d+)$").trust();

    pub static ref CHORD_QUALITIES: Vec<Quality> = vec![
        // 3 notes
        Quality::new("", &["1", "3", "5"], "major triad"),
        Quality::new("m", &["1", "b3", "5"], "minor triad"),
        Quality::new("aug", &["1", "3", "#5"], "augmented triad"),
        Quality::new("dim", &["1", "b3", "b5"], "diminished triad"),
        Quality::new("sus2", &["1", "2", "5"], "suspended second"),
        Quality::new("sus4", &["1", "4", "5"], "suspended fourth"),
        // 4 notes
        Quality::new("6", &["1", "3", "5", "6"], "major sixth"),
        Quality::new("m6", &["1", "b3", "5", "6"], "minor sixth"),
        Quality::new("7", &["1", "3", "5", "b7"], "dominant seventh"),
        Quality::new("7b5", &["1", "3", "b5", "b7"], "dominant seventh flat five"),
        Quality::new("maj7", &["1", "3", "5", "7"], "major seventh"),
        Quality::new("m7", &["1", "b3", "5", "b7"], "minor seventh"),
        Quality::new("m7b5", &["1", "b3", "b5", "b7"], "minor seventh flat five"),
        Quality::new("mmaj7", &["1", "b3", "5", "7"], "minor major seventh"),
        Quality::new("aug7", &["1", "3", "#5", "b7"], "augmented seventh"),
        Quality::new("augmaj7", &["1", "3", "#5", "7"], "augmented major seventh"),
        Quality::new("dim7", &["1", "b3", "b5", "bb7"], "diminished seventh"),
        Quality::new("dimmaj7", &["1", "b3", "b5", "7"], "diminished major seventh"),
        Quality::new("add4", &["1", "3", "4", "5"], "major add fourth"),
        Quality::new("madd4", &["1", "b3", "4", "5"], "minor add fourth"),
        Quality::new("add9", &["1", "3", "4", "9"], "major add ninth"),
        Quality::new("madd9", &["1", "b3", "4", "9"], "minor add ninth"),
        // 5 notes
        Quality::new("9", &["1", "3", "5", "b7", "9"], "dominant ninth"),
        Quality::new("maj9", &["1", "3", "5", "7", "9"], "major ninth"),
        Quality::new("m9", &["1", "b3", "5", "b7", "9"], "minor ninth"),
        Quality::new("7b9", &["1", "3", "5", "b7", "b9"], "dominant seventh flat nine"),
        // 6 notes
        Quality::new("11", &["1", "3", "5", "b7", "9", "11"], "dominant eleventh"),
        Quality::new("7#11", &["1", "3", "5", "b7", "9", "#11"], "dominant sharp eleventh"),
        Quality::new("maj11", &["1", "3", "5", "7", "9", "11"], "major eleventh"),
        Quality::new("m11", &["1", "b3", "5", "b7", "9", "11"], "minor eleventh"),
    ];

    static ref QUALITY_BY_NOTATION: HashMap<&'static str, &'static Quality> = CHORD_QUALITIES
        .iter()
        .map(|quality| (quality.notation, quality))
        .collect();

    static ref QUALITY_BY_PITCHES: HashMap<Vec<Pitch>, &'static Quality> = {
        let mut qualities = HashMap::new();
        for quality in CHORD_QUALITIES.iter() {
            qualities.entry(quality.pitches.clone()).or_insert(quality);
        }
        qualities
    };
}

pub fn quality_by_notation(notation: &str) -> Option<&'static Quality> {
    QUALITY_BY_NOTATION.get(notation).copied()
}

/// The quality whose offsets from the root are exactly `offsets`.
pub fn quality_by_pitches(offsets: &[Pitch]) -> Option<&'static Quality> {
    QUALITY_BY_PITCHES.get(offsets).copied()
}

/// Build a regex matching `root quality [/bass]`, where the root and bass are
/// taken from `alphabet` with an optional single `#` or `b`.
///
/// Captures are `root`, `quality` and `over`. The major triad has an empty
/// notation, so `quality` is missing for it.
pub fn chord_regex(alphabet: &[&str]) -> Regex {
    let root = format!("(?:{})[b#]?", alphabet.join("|"));
    let qualities = CHORD_QUALITIES
        .iter()
        .filter(|quality| !quality.notation.is_empty())
        .map(|quality| regex::escape(quality.notation))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(
        "^(?P<root>{root})(?P<quality>{qualities})?(?:/(?P<over>{root}))?$",
        root = root,
        qualities = qualities
    ))
    .trust()
}

/// Rewrite the `°` sign as `dim`, the notation the quality table uses.
pub fn expand_degree_sign(symbol: &str) -> Cow<str> {
    if symbol.contains('°') {
        Cow::Owned(symbol.replace('°', "dim"))
    } else {
        Cow::Borrowed(symbol)
    }
}

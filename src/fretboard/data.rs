use crate::notes::data::Pitch;

pub const FRETS: usize = 15;

/// Open string pitches from the low E up, as MIDI note numbers.
pub const STANDARD_TUNING: [Pitch; 6] = [40, 45, 50, 55, 59, 64];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    Yellow,
}

impl Color {
    pub fn ansi(self) -> ansi_term::Colour {
        use ansi_term::Colour;

        match self {
            Color::Black => Colour::Black,
            Color::Red => Colour::Red,
            Color::Green => Colour::Green,
            Color::Blue => Colour::Blue,
            Color::Magenta => Colour::Purple,
            Color::Cyan => Colour::Cyan,
            Color::Yellow => Colour::Yellow,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
        }
    }

    pub fn rgb(self) -> (f64, f64, f64) {
        match self {
            Color::Black => (0.0, 0.0, 0.0),
            Color::Red => (1.0, 0.0, 0.0),
            Color::Green => (0.0, 0.5, 0.0),
            Color::Blue => (0.0, 0.0, 1.0),
            Color::Magenta => (1.0, 0.0, 1.0),
            Color::Cyan => (0.0, 1.0, 1.0),
            Color::Yellow => (1.0, 1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub color: Color,
    pub text: String,
}

/// A note to mark wherever its pitch class appears on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub pitch: Pitch,
    pub color: Color,
    pub text: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub fret: usize,
    pub string: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Strings run across the page, highest string on top.
    Landscape,
    /// Strings run down the page, nut at the top.
    Portrait,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Landscape
    }
}

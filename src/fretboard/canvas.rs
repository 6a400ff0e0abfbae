use super::data::*;
use super::Fretboard;

const PADDING: f64 = 10.0;
const FRET_SPACING: f64 = 30.0;
const STRING_SPACING: f64 = 20.0;
const MARKER_RADIUS: f64 = STRING_SPACING / 2.5;
const FONT_SIZE: f64 = 12.0;
const TEXT_BASELINE_OFFSET: f64 = 4.0;

/// Vector drawing primitives shared by the SVG and PDF writers.
///
/// Coordinates are in points with the origin at the top left.
pub trait Canvas {
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color);
    fn circle(&mut self, center: (f64, f64), radius: f64, stroke: Color);
    /// Draw text horizontally centred on `x`, with its baseline at `y`.
    fn text(&mut self, x: f64, y: f64, size: f64, text: &str, color: Color);
}

pub struct Layout {
    orientation: Orientation,
    strings: usize,
    frets: usize,
}

impl Layout {
    pub fn new(board: &Fretboard, orientation: Orientation) -> Self {
        Layout {
            orientation,
            strings: board.strings(),
            frets: board.frets(),
        }
    }

    /// Page size as (width, height).
    pub fn size(&self) -> (f64, f64) {
        let across = STRING_SPACING * (self.strings.saturating_sub(1)) as f64 + 2.0 * PADDING;
        let along = FRET_SPACING * self.frets as f64 + 2.0 * PADDING;

        match self.orientation {
            Orientation::Portrait => (across, along),
            Orientation::Landscape => (along, across),
        }
    }

    /// Map a distance along the neck, measured in frets, and a string index
    /// to page coordinates.
    fn point(&self, fret: f64, string: usize) -> (f64, f64) {
        let along = PADDING + fret * FRET_SPACING;

        match self.orientation {
            Orientation::Portrait => (PADDING + string as f64 * STRING_SPACING, along),
            Orientation::Landscape => {
                let row = self.strings - 1 - string;
                (along, PADDING + row as f64 * STRING_SPACING)
            }
        }
    }
}

/// Draw strings, frets and markers.
pub fn draw<C: Canvas>(board: &Fretboard, layout: &Layout, canvas: &mut C) {
    for string in 0..layout.strings {
        let from = layout.point(0.0, string);
        let to = layout.point(layout.frets as f64, string);
        canvas.line(from, to, Color::Black);
    }

    if layout.strings > 0 {
        for fret in 0..=layout.frets {
            let from = layout.point(fret as f64, 0);
            let to = layout.point(fret as f64, layout.strings - 1);
            canvas.line(from, to, Color::Black);
        }
    }

    for (position, cell) in board.cells() {
        let (x, y) = layout.point(position.fret as f64 + 0.5, position.string);
        canvas.circle((x, y), MARKER_RADIUS, cell.color);
        canvas.text(x, y + TEXT_BASELINE_OFFSET, FONT_SIZE, &cell.text, cell.color);
    }
}

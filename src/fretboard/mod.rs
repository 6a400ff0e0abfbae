//! A guitar neck with labelled markers, drawn for the terminal, SVG or PDF.
//!
//! Nothing in here knows about keys or chords: callers decide which pitches to
//! mark and what each marker says.

pub mod canvas;
pub mod data;
pub mod pdf;
pub mod svg;

use ansi_term::{Colour, Style};

use crate::notes::data::Pitch;

use self::canvas::{draw, Layout};
use self::data::*;
use self::pdf::PdfCanvas;
use self::svg::SvgCanvas;

#[derive(Debug, Clone)]
pub struct Fretboard {
    tuning: Vec<Pitch>,
    /// Indexed by fret, then string.
    cells: Vec<Vec<Option<Cell>>>,
}

impl Default for Fretboard {
    fn default() -> Self {
        Fretboard::with_tuning(&STANDARD_TUNING, FRETS)
    }
}

/// Centre short labels in a three character slot.
fn pad(text: &str) -> String {
    match text.chars().count() {
        1 => format!(" {} ", text),
        2 => format!(" {}", text),
        _ => text.to_owned(),
    }
}

impl Fretboard {
    pub fn new() -> Self {
        Fretboard::default()
    }

    pub fn with_tuning(tuning: &[Pitch], frets: usize) -> Self {
        Fretboard {
            tuning: tuning.to_vec(),
            cells: vec![vec![None; tuning.len()]; frets],
        }
    }

    pub fn strings(&self) -> usize {
        self.tuning.len()
    }

    pub fn frets(&self) -> usize {
        self.cells.len()
    }

    /// Mark a position. Returns `false`, leaving the board alone, when the
    /// position is off the board.
    pub fn set(&mut self, position: Position, cell: Cell) -> bool {
        match self
            .cells
            .get_mut(position.fret)
            .and_then(|row| row.get_mut(position.string))
        {
            Some(slot) => {
                *slot = Some(cell);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells
            .get(position.fret)
            .and_then(|row| row.get(position.string))
            .and_then(Option::as_ref)
    }

    /// Every position on the board with the pitch sounding there, string by string.
    pub fn walk(&self) -> impl Iterator<Item = (Position, Pitch)> + '_ {
        let frets = self.frets();
        self.tuning
            .iter()
            .enumerate()
            .flat_map(move |(string, &open)| {
                (0..frets).map(move |fret| (Position { fret, string }, open + fret as Pitch))
            })
    }

    /// Marked positions, fret by fret.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(fret, row)| {
            row.iter().enumerate().filter_map(move |(string, cell)| {
                cell.as_ref().map(|cell| (Position { fret, string }, cell))
            })
        })
    }

    /// Mark every position whose pitch class matches a marker's. The first
    /// matching marker wins.
    pub fn place(&mut self, markers: &[Marker]) {
        let placements = self
            .walk()
            .filter_map(|(position, pitch)| {
                markers
                    .iter()
                    .find(|marker| (marker.pitch - pitch).rem_euclid(12) == 0)
                    .map(|marker| {
                        let cell = Cell {
                            color: marker.color,
                            text: marker.text.clone(),
                        };
                        (position, cell)
                    })
            })
            .collect::<Vec<_>>();

        for (position, cell) in placements {
            self.set(position, cell);
        }
    }

    fn paint_cell(&self, cell: Option<&Cell>, empty: &str) -> String {
        let board = Style::new().on(Colour::White);

        match cell {
            Some(cell) => board.fg(cell.color.ansi()).paint(pad(&cell.text)).to_string(),
            None => board.fg(Colour::Black).paint(pad(empty)).to_string(),
        }
    }

    pub fn dump_ansi(&self, orientation: Orientation) -> String {
        match orientation {
            Orientation::Portrait => self.dump_ansi_portrait(),
            Orientation::Landscape => self.dump_ansi_landscape(),
        }
    }

    fn dump_ansi_portrait(&self) -> String {
        let board = Style::new().on(Colour::White).fg(Colour::Black);
        let gap = board.paint("  ").to_string();
        let width = 5 * self.strings() - 2;
        let mut output = String::new();

        for (fret, row) in self.cells.iter().enumerate() {
            let cells = row
                .iter()
                .map(|cell| self.paint_cell(cell.as_ref(), "|"))
                .collect::<Vec<_>>();
            output += &format!("{:02} {}\n", fret, cells.join(&gap));

            let marker = if fret == 0 { "=" } else { "-" };
            output += &format!("   {}\n", board.paint(marker.repeat(width)));
        }

        output
    }

    fn dump_ansi_landscape(&self) -> String {
        let board = Style::new().on(Colour::White).fg(Colour::Black);
        let mut output = String::from("  ");

        for fret in 0..self.frets() {
            output += &format!(" {:02} ", fret);
        }
        output.push('\n');

        for string in (0..self.strings()).rev() {
            output += "  ";
            for fret in 0..self.frets() {
                let cell = self.get(Position { fret, string });
                output += &self.paint_cell(cell, "-");
                let fret_wire = if fret == 0 { "‖" } else { "|" };
                output += &board.paint(fret_wire).to_string();
            }
            output.push('\n');
        }

        output
    }

    pub fn dump_svg(&self, orientation: Orientation) -> String {
        let layout = Layout::new(self, orientation);
        let mut canvas = SvgCanvas::new(layout.size());
        draw(self, &layout, &mut canvas);
        canvas.build()
    }

    pub fn dump_pdf(&self, orientation: Orientation) -> Vec<u8> {
        let layout = Layout::new(self, orientation);
        let mut canvas = PdfCanvas::new(layout.size());
        draw(self, &layout, &mut canvas);
        canvas.build()
    }
}

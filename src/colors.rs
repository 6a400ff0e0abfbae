//! Styles for the command line's status lines. Without the `color` feature
//! they are all plain.

use ansi_term::{Colour, Style};

const fn style(colour: Colour, is_bold: bool) -> Style {
    let enabled = cfg!(feature = "color");

    Style {
        foreground: if enabled { Some(colour) } else { None },
        background: None,
        is_bold: enabled && is_bold,
        is_dimmed: false,
        is_italic: false,
        is_underline: false,
        is_blink: false,
        is_reverse: false,
        is_hidden: false,
        is_strikethrough: false,
    }
}

pub const CYAN: Style = style(Colour::Cyan, true);
pub const GREEN: Style = style(Colour::Green, true);
pub const RED: Style = style(Colour::Red, true);
pub const WHITE: Style = style(Colour::White, false);

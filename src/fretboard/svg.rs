use std::fmt::Write;

use super::canvas::Canvas;
use super::data::Color;

pub struct SvgCanvas {
    width: f64,
    height: f64,
    elements: String,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl SvgCanvas {
    pub fn new((width, height): (f64, f64)) -> Self {
        SvgCanvas {
            width,
            height,
            elements: String::new(),
        }
    }

    pub fn build(self) -> String {
        format!(
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">{}</svg>"#,
            self.width, self.height, self.elements
        )
    }
}

// Writing to a String can't fail, so the `fmt::Result`s below are ignored.
impl Canvas for SvgCanvas {
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let _ = write!(
            self.elements,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            from.0,
            from.1,
            to.0,
            to.1,
            color.css()
        );
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, stroke: Color) {
        let _ = write!(
            self.elements,
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" fill="white"/>"#,
            center.0,
            center.1,
            radius,
            stroke.css()
        );
    }

    fn text(&mut self, x: f64, y: f64, size: f64, text: &str, color: Color) {
        let _ = write!(
            self.elements,
            r#"<text x="{}" y="{}" fill="{}" font-family="arial" font-size="{}px" text-anchor="middle">{}</text>"#,
            x,
            y,
            color.css(),
            size,
            escape(text)
        );
    }
}

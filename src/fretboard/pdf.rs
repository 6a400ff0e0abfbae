//! A single page PDF document drawn with the builtin Helvetica font.

use std::fmt::Write;

use super::canvas::Canvas;
use super::data::Color;

/// Control point distance for approximating a quarter circle with a Bézier curve.
const KAPPA: f64 = 0.552_284_75;

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f64 = 0.55;

pub struct PdfCanvas {
    width: f64,
    height: f64,
    content: String,
}

/// Standard fonts only cover Latin-1, so accidentals are written out in ascii.
fn pdf_text(text: &str) -> String {
    let mut result = String::new();

    for c in text.chars() {
        match c {
            '♯' => result.push('#'),
            '♭' => result.push('b'),
            '𝄪' => result.push_str("##"),
            '𝄫' => result.push_str("bb"),
            '°' => result.push_str("dim"),
            '(' | ')' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            c if c.is_ascii() => result.push(c),
            _ => result.push('?'),
        }
    }

    result
}

impl PdfCanvas {
    pub fn new((width, height): (f64, f64)) -> Self {
        PdfCanvas {
            width,
            height,
            content: String::new(),
        }
    }

    /// PDF's origin is the bottom left of the page.
    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }

    pub fn build(self) -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_owned(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_owned(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>",
                self.width, self.height
            ),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                self.content.len(),
                self.content
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_owned(),
        ];

        let mut document = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());

        for (index, object) in objects.iter().enumerate() {
            offsets.push(document.len());
            let _ = write!(document, "{} 0 obj\n{}\nendobj\n", index + 1, object);
        }

        let xref = document.len();
        let _ = write!(document, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            let _ = write!(document, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            document,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref
        );

        document.into_bytes()
    }
}

impl Canvas for PdfCanvas {
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let (r, g, b) = color.rgb();
        let (y1, y2) = (self.flip(from.1), self.flip(to.1));
        let _ = writeln!(
            self.content,
            "{:.2} {:.2} {:.2} RG {:.2} {:.2} m {:.2} {:.2} l S",
            r, g, b, from.0, y1, to.0, y2
        );
    }

    fn circle(&mut self, center: (f64, f64), radius: f64, stroke: Color) {
        let (r, g, b) = stroke.rgb();
        let (x, y) = (center.0, self.flip(center.1));
        let k = radius * KAPPA;

        let _ = writeln!(self.content, "1 1 1 rg {:.2} {:.2} {:.2} RG", r, g, b);
        let _ = writeln!(self.content, "{:.2} {:.2} m", x + radius, y);
        let quarters = [
            (x + radius, y + k, x + k, y + radius, x, y + radius),
            (x - k, y + radius, x - radius, y + k, x - radius, y),
            (x - radius, y - k, x - k, y - radius, x, y - radius),
            (x + k, y - radius, x + radius, y - k, x + radius, y),
        ];
        for (x1, y1, x2, y2, x3, y3) in quarters.iter() {
            let _ = writeln!(
                self.content,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
                x1, y1, x2, y2, x3, y3
            );
        }
        let _ = writeln!(self.content, "B");
    }

    fn text(&mut self, x: f64, y: f64, size: f64, text: &str, color: Color) {
        let (r, g, b) = color.rgb();
        let text = pdf_text(text);
        let glyphs = text.chars().filter(|&c| c != '\\').count();
        let width = glyphs as f64 * size * GLYPH_WIDTH;
        let _ = writeln!(
            self.content,
            "BT /F1 {:.2} Tf {:.2} {:.2} {:.2} rg {:.2} {:.2} Td ({}) Tj ET",
            size,
            r,
            g,
            b,
            x - width / 2.0,
            self.flip(y),
            text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_ascii_and_escaped() {
        assert_eq!(pdf_text("F♯"), "F#");
        assert_eq!(pdf_text("B𝄫"), "Bbb");
        assert_eq!(pdf_text("(R)"), "\\(R\\)");
    }

    #[test]
    fn document_structure() {
        let mut canvas = PdfCanvas::new((100.0, 50.0));
        canvas.line((0.0, 0.0), (100.0, 0.0), Color::Black);
        canvas.circle((50.0, 25.0), 8.0, Color::Red);
        canvas.text(50.0, 29.0, 12.0, "R", Color::Red);

        let document = String::from_utf8(canvas.build()).unwrap();

        assert!(document.starts_with("%PDF-1.4\n"));
        assert!(document.ends_with("%%EOF\n"));
        assert!(document.contains("/MediaBox [0 0 100.00 50.00]"));
        assert!(document.contains("0.00 50.00 m 100.00 50.00 l S"));
        assert!(document.contains("(R) Tj"));

        let xref = document.find("xref\n").unwrap();
        assert!(document.contains(&format!("startxref\n{}\n", xref)));

        let catalog = document.find("1 0 obj").unwrap();
        assert!(document.contains(&format!("{:010} 00000 n \n", catalog)));
    }
}

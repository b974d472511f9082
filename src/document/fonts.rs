//! Metrics for the two standard PDF fonts the itinerary uses.
//!
//! Helvetica and Helvetica-Bold are part of the base-14 set every PDF viewer
//! ships with, so nothing needs to be embedded and the artifact stays small
//! enough to pass through an email relay as a data URL. The trade-off is that we
//! have to carry the glyph widths ourselves; the tables below are the advance
//! widths from the Adobe AFM files, in thousandths of an em, for the printable
//! ASCII range. Text is written with WinAnsi encoding, so the handful of
//! typographic characters that encoding offers get their own widths and
//! everything else is replaced with `?` at serialisation time.

use crate::document::Pt;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const ASCENT: f32 = 718.0;

/// One of the fonts available to the layout engine
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    pub fn all() -> &'static [Font] {
        &[Font::Regular, Font::Bold]
    }

    /// The PostScript name of the base-14 font
    pub fn base_font(&self) -> &'static [u8] {
        match self {
            Font::Regular => b"Helvetica",
            Font::Bold => b"Helvetica-Bold",
        }
    }

    /// The name the font is registered under in each page's resources
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold => b"F2",
        }
    }

    /// Advance width of a character in thousandths of an em
    pub fn glyph_width(&self, c: char) -> u16 {
        let table = match self {
            Font::Regular => &HELVETICA_WIDTHS,
            Font::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        match c {
            ' '..='~' => table[c as usize - 32],
            '•' => 350,
            '–' | '€' => 556,
            '—' | '…' | '™' => 1000,
            '‘' | '’' | '‚' => match self {
                Font::Regular => 222,
                Font::Bold => 278,
            },
            '“' | '”' | '„' => match self {
                Font::Regular => 333,
                Font::Bold => 500,
            },
            '©' | '®' => 737,
            '·' => 278,
            // accented latin letters are close enough to an average lowercase glyph
            _ => 556,
        }
    }

    pub fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENT / 1000.0)
    }

    /// Distance between consecutive baselines for the given spacing factor
    pub fn line_height(&self, size: Pt, spacing: f32) -> Pt {
        size * spacing
    }
}

/// Width of a run of text set in a single font at a single size
pub fn width_of_text(text: &str, font: Font, size: Pt) -> Pt {
    let units: u32 = text.chars().map(|c| font.glyph_width(c) as u32).sum();
    Pt(units as f32 * *size / 1000.0)
}

/// Break text into lines no wider than `max_width`.
///
/// Words are packed greedily. Explicit newlines in the source start a new line,
/// and a blank source line is kept as an empty line so paragraphs stay visually
/// separated. A single word wider than the line is split between characters
/// rather than allowed to overflow into the page border.
pub fn wrap_text(text: &str, font: Font, size: Pt, max_width: Pt) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            if lines.last().is_some_and(|l| !l.is_empty()) {
                lines.push(String::new());
            }
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if width_of_text(&candidate, font, size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if width_of_text(word, font, size) <= max_width {
                current = word.to_string();
                continue;
            }

            for c in word.chars() {
                current.push(c);
                if width_of_text(&current, font, size) > max_width && current.chars().count() > 1
                {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    // trailing blank lines only add space below the paragraph
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines
}

/// Encode text for a simple font using WinAnsiEncoding
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

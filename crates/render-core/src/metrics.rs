//! Glyph widths of the standard Type1 fonts, in 1/1000 em.
//!
//! Only the printable ASCII range is tabulated; other WinAnsi bytes fall
//! back to an average width.

use crate::utils::to_win_ansi;

const FIRST_CHAR: u8 = 32;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    Courier,
}

impl StandardFont {
    /// Resolves a family name; `None` when no metrics are bundled for it.
    pub fn from_family(family: &str) -> Option<Self> {
        match family.to_ascii_lowercase().as_str() {
            "helvetica" | "arial" => Some(StandardFont::Helvetica),
            "courier" => Some(StandardFont::Courier),
            _ => None,
        }
    }

    pub fn base_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
        }
    }

    pub fn glyph_width(self, byte: u8, bold: bool) -> u16 {
        let table = match self {
            StandardFont::Courier => return COURIER_WIDTH,
            StandardFont::Helvetica if bold => &HELVETICA_BOLD,
            StandardFont::Helvetica => &HELVETICA,
        };
        byte.checked_sub(FIRST_CHAR)
            .and_then(|index| table.get(index as usize))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Width of `text` set at `font_size` points, in points.
    pub fn string_width(self, text: &str, bold: bool, font_size: f32) -> f32 {
        let units: u32 = to_win_ansi(text)
            .into_iter()
            .map(|b| u32::from(self.glyph_width(b, bold)))
            .sum();
        units as f32 * font_size / 1000.0
    }
}

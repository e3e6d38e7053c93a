//! Standard Type1 fonts and their metrics
//!
//! Only the two Helvetica faces are supported; they ship with every PDF
//! viewer so nothing needs embedding. Text is written in WinAnsiEncoding,
//! which carries ¼ ½ ¾ but none of the other vulgar fractions: those are
//! spelled out as "n/d".

use super::FontStyle;
use crate::fraction;
use crate::types::{JigError, Result};

/// Advance widths (1/1000 em) for codes 32..=126, Helvetica
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths (1/1000 em) for codes 32..=126, Helvetica-Bold
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of ¼ ½ ¾ in both faces
const FRACTION_GLYPH_WIDTH: u16 = 834;

/// Fallback width for the rest of the upper half of WinAnsi
const DEFAULT_GLYPH_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    /// Map a family name and style onto a standard font.
    ///
    /// "Arial" is accepted as an alias of Helvetica.
    pub fn resolve(family: &str, style: FontStyle) -> Result<Self> {
        match family.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "arial" => Ok(match style {
                FontStyle::Regular => StandardFont::Helvetica,
                FontStyle::Bold => StandardFont::HelveticaBold,
            }),
            _ => Err(JigError::AssetMissing(format!(
                "font family '{}' (available: Helvetica, Arial)",
                family
            ))),
        }
    }

    /// PostScript name used as `/BaseFont`
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Key of this font in the page resource dictionary
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    /// Advance width of a WinAnsi code in 1/1000 em
    pub fn glyph_width(self, code: u8) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match code {
            32..=126 => table[usize::from(code - 32)],
            0xBC..=0xBE => FRACTION_GLYPH_WIDTH,
            0xA0 => table[0],
            _ => DEFAULT_GLYPH_WIDTH,
        }
    }

    /// Advance width of `text` set at `size_pt`, in points
    pub fn text_width_pt(self, text: &str, size_pt: f64) -> f64 {
        let units: u32 = encode_win_ansi(text)
            .into_iter()
            .map(|code| u32::from(self.glyph_width(code)))
            .sum();
        f64::from(units) * size_pt / 1000.0
    }
}

/// Encode `text` as WinAnsi bytes.
///
/// Vulgar fractions outside the encoding become "n/d", separated by a
/// space from a preceding digit so "1⅛" reads "1 1/8".
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ' '..='~' => bytes.push(ch as u8),
            '\u{A0}'..='\u{FF}' => bytes.push(ch as u8),
            _ => match fraction::vulgar_parts(ch) {
                Some((num, den)) => {
                    log::debug!("no WinAnsi glyph for '{}', writing {}/{}", ch, num, den);
                    if bytes.last().is_some_and(u8::is_ascii_digit) {
                        bytes.push(b' ');
                    }
                    bytes.extend_from_slice(format!("{}/{}", num, den).as_bytes());
                }
                None => {
                    log::warn!("no WinAnsi glyph for '{}', writing '?'", ch);
                    bytes.push(b'?');
                }
            },
        }
    }
    bytes
}

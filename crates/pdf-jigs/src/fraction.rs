//! Human-readable labels for measurements
//!
//! Fractional parts that land on an eighth, fifth or quarter are shown as a
//! single vulgar fraction glyph ("1¾"); anything else falls back to one
//! decimal digit. Fractions are matched against a rational table within
//! [`TOLERANCE`], so values such as `0.1 + 0.2 + 0.075` that are eighths
//! mathematically but not bit-exactly still get their glyph.

use crate::constants::TOLERANCE;

/// Recognized fractional parts as (numerator, denominator, glyph)
const VULGAR_FRACTIONS: [(u32, u32, char); 11] = [
    (1, 8, '\u{215B}'),
    (1, 5, '\u{2155}'),
    (1, 4, '\u{00BC}'),
    (3, 8, '\u{215C}'),
    (2, 5, '\u{2156}'),
    (1, 2, '\u{00BD}'),
    (3, 5, '\u{2157}'),
    (5, 8, '\u{215D}'),
    (3, 4, '\u{00BE}'),
    (4, 5, '\u{2158}'),
    (7, 8, '\u{215E}'),
];

/// Glyph for a fractional part in `[0, 1)`, if it is a recognized denomination
pub fn vulgar_glyph(fraction: f64) -> Option<char> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(num, den, _)| (fraction - f64::from(*num) / f64::from(*den)).abs() <= TOLERANCE)
        .map(|(_, _, glyph)| *glyph)
}

/// Numerator and denominator of a vulgar fraction glyph
pub fn vulgar_parts(glyph: char) -> Option<(u32, u32)> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(_, _, g)| *g == glyph)
        .map(|(num, den, _)| (*num, *den))
}

/// Format a measurement for display, e.g. `1.75` → `"1¾"`, `2.0` → `"2"`.
pub fn format(value: f64) -> String {
    if value < 0.0 {
        return format!("-{}", format(-value));
    }

    let whole = value.floor();
    let fraction = value - whole;

    if fraction <= TOLERANCE {
        return whole_text(whole);
    }
    if 1.0 - fraction <= TOLERANCE {
        return whole_text(whole + 1.0);
    }

    match vulgar_glyph(fraction) {
        Some(glyph) if whole == 0.0 => glyph.to_string(),
        Some(glyph) => format!("{}{}", whole_text(whole), glyph),
        None => format!("{:.1}", value),
    }
}

/// Integral float without a decimal point; `abs` folds `-0` into `0`
fn whole_text(whole: f64) -> String {
    format!("{:.0}", whole.abs())
}

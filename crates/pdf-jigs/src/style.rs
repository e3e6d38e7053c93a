//! Line styles for laser cutting
//!
//! A hairline red stroke is cut through the material; black strokes are
//! engraved (scored) only.

use crate::constants::{CUT_LINE_WIDTH_PT, ENGRAVE_LINE_WIDTH_PT, THICK_ENGRAVE_LINE_WIDTH_PT};
use crate::surface::DrawingSurface;
use crate::types::Rgb;
use crate::units::{Unit, convert};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Cut,
    Engrave,
    ThickEngrave,
}

/// Resolved stroke parameters, width in the working unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgb,
}

impl LineStyle {
    pub fn width_pt(self) -> f64 {
        match self {
            LineStyle::Cut => CUT_LINE_WIDTH_PT,
            LineStyle::Engrave => ENGRAVE_LINE_WIDTH_PT,
            LineStyle::ThickEngrave => THICK_ENGRAVE_LINE_WIDTH_PT,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            LineStyle::Cut => Rgb::RED,
            LineStyle::Engrave | LineStyle::ThickEngrave => Rgb::BLACK,
        }
    }

    pub fn stroke(self, unit: Unit) -> Stroke {
        Stroke {
            width: convert(self.width_pt(), Unit::Point, unit),
            color: self.color(),
        }
    }

    /// Set this style as the current stroke on `surface`
    pub fn apply<S: DrawingSurface + ?Sized>(self, surface: &mut S) {
        let stroke = self.stroke(surface.unit());
        surface.set_line_width(stroke.width);
        surface.set_draw_color(stroke.color);
    }
}

//! Drawing surfaces
//!
//! Templates render through [`DrawingSurface`], an immediate-mode API in
//! physical units with the origin at the top-left corner of the page and
//! y growing downward. [`PdfSurface`] writes a PDF document;
//! [`RecordingSurface`] keeps the calls for inspection.

mod fonts;
mod pdf;
mod recording;

pub use fonts::{StandardFont, encode_win_ansi};
pub use pdf::PdfSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::types::{Orientation, Result, Rgb};
use crate::units::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontStyle {
    Regular,
    Bold,
}

pub trait DrawingSurface {
    /// Working unit of every coordinate and length passed in
    fn unit(&self) -> Unit;

    /// Start a new page; `format` is resolved through `orientation`
    fn add_page(&mut self, orientation: Orientation, format: (f64, f64));

    fn set_line_width(&mut self, width: f64);

    fn set_draw_color(&mut self, color: Rgb);

    /// Stroke a rectangle whose top-left corner is `(x, y)`
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Stroke the ellipse inscribed in the given rectangle
    fn draw_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Select a font; fails with `AssetMissing` for unknown families
    fn set_font(&mut self, family: &str, style: FontStyle, size_pt: f64) -> Result<()>;

    /// Advance width of `text` in the current font
    fn string_width(&self, text: &str) -> f64;

    /// Draw `text` with its baseline starting at `(x, y)`
    fn draw_text(&mut self, x: f64, y: f64, text: &str);
}

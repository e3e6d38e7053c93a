use super::fonts::StandardFont;
use super::{DrawingSurface, FontStyle};
use crate::types::{Orientation, Result, Rgb};
use crate::units::Unit;

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    AddPage {
        width: f64,
        height: f64,
    },
    LineWidth(f64),
    DrawColor(Rgb),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Ellipse {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Font {
        font: StandardFont,
        size_pt: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
    },
}

/// Surface that only remembers what was drawn.
///
/// Text is measured with the same Helvetica metrics as [`super::PdfSurface`],
/// so label placement matches the PDF output.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    unit: Unit,
    font: Option<(StandardFont, f64)>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            font: None,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Page sizes, in page order
    pub fn pages(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::AddPage { width, height } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }

    /// Every line as ((x1, y1), (x2, y2))
    pub fn lines(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line { x1, y1, x2, y2 } => Some(((*x1, *y1), (*x2, *y2))),
                _ => None,
            })
            .collect()
    }

    pub fn ellipse_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Ellipse { .. }))
            .count()
    }

    /// Every text draw as (x, y, text)
    pub fn texts(&self) -> Vec<(f64, f64, String)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { x, y, text } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn add_page(&mut self, orientation: Orientation, format: (f64, f64)) {
        let (width, height) = orientation.dimensions(format);
        self.commands.push(DrawCommand::AddPage { width, height });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::DrawColor(color));
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn draw_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Ellipse {
            x,
            y,
            width,
            height,
        });
    }

    fn set_font(&mut self, family: &str, style: FontStyle, size_pt: f64) -> Result<()> {
        let font = StandardFont::resolve(family, style)?;
        self.font = Some((font, size_pt));
        self.commands.push(DrawCommand::Font { font, size_pt });
        Ok(())
    }

    fn string_width(&self, text: &str) -> f64 {
        self.font.map_or(0.0, |(font, size_pt)| {
            self.unit.from_points(font.text_width_pt(text, size_pt))
        })
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }
}

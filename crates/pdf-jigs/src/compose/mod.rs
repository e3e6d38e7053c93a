//! Template composition
//!
//! A [`Template`] is one finished page: border, ruled edges, band marks,
//! holes and an optional centered label. Composers build templates as
//! plain values; [`Template::render`] replays one onto a drawing surface.

mod jig;
mod ruler;

pub use jig::{compose_belt_jig, compose_jig, compose_jig_with};
pub use ruler::compose_ruler;

use crate::constants::EM_HEIGHT_RATIO;
use crate::layout::{HoleSpec, TickRow};
use crate::style::LineStyle;
use crate::surface::{DrawingSurface, FontStyle};
use crate::types::{Edge, Orientation, Rect, Result};
use crate::units::Unit;

/// Text centered on the page
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub family: String,
    pub style: FontStyle,
    pub size_pt: f64,
}

/// A straight stroke in a given style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub style: LineStyle,
}

impl Segment {
    /// Horizontal segment at height `y`
    pub fn horizontal(x1: f64, x2: f64, y: f64, style: LineStyle) -> Self {
        Self {
            start: (x1, y),
            end: (x2, y),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub unit: Unit,
    pub orientation: Orientation,
    /// Page format as handed to the surface, before orientation
    pub format: (f64, f64),
    /// Size of the cut border
    pub width: f64,
    pub height: f64,
    pub tick_rows: Vec<TickRow>,
    pub side_marks: Vec<Segment>,
    pub holes: Vec<HoleSpec>,
    /// Rectangular cut-outs
    pub slots: Vec<Rect>,
    pub label: Option<Label>,
}

impl Template {
    /// Empty page with a border of `width` x `height`
    pub(crate) fn new(unit: Unit, format: (f64, f64), width: f64, height: f64) -> Self {
        Self {
            unit,
            orientation: Orientation::Landscape,
            format,
            width,
            height,
            tick_rows: Vec::new(),
            side_marks: Vec::new(),
            holes: Vec::new(),
            slots: Vec::new(),
            label: None,
        }
    }

    /// Page size as (width, height)
    pub fn page_size(&self) -> (f64, f64) {
        self.orientation.dimensions(self.format)
    }

    pub fn label_text(&self) -> &str {
        self.label.as_ref().map_or("", |label| label.text.as_str())
    }

    pub fn tick_count(&self) -> usize {
        self.tick_rows.iter().map(|row| row.ticks.len()).sum()
    }

    /// Draw the page onto `surface`
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.add_page(self.orientation, self.format);

        LineStyle::Cut.apply(surface);
        surface.draw_rect(0.0, 0.0, self.width, self.height);

        for row in &self.tick_rows {
            self.render_tick_row(row, surface);
        }

        for mark in &self.side_marks {
            mark.style.apply(surface);
            surface.draw_line(mark.start.0, mark.start.1, mark.end.0, mark.end.1);
        }

        if !self.holes.is_empty() || !self.slots.is_empty() {
            LineStyle::Cut.apply(surface);
        }
        for hole in &self.holes {
            let bounds = hole.bounds();
            surface.draw_ellipse(bounds.x, bounds.y, bounds.width, bounds.height);
        }
        for slot in &self.slots {
            surface.draw_rect(slot.x, slot.y, slot.width, slot.height);
        }

        if let Some(label) = &self.label {
            surface.set_font(&label.family, label.style, label.size_pt)?;
            let text_width = surface.string_width(&label.text);
            let em_width = surface.string_width("M");
            let (x, y) = center_text(self.width, self.height, text_width, em_width);
            surface.draw_text(x, y, &label.text);
        }

        Ok(())
    }

    fn render_tick_row<S: DrawingSurface + ?Sized>(&self, row: &TickRow, surface: &mut S) {
        for tick in &row.ticks {
            let style = if tick.emphasized {
                LineStyle::ThickEngrave
            } else {
                LineStyle::Engrave
            };
            style.apply(surface);

            let length = tick.length(row.max_length);
            let x = tick.position;
            match row.edge {
                Edge::Near => surface.draw_line(x, 0.0, x, length),
                Edge::Far => surface.draw_line(x, self.height, x, self.height - length),
            }
        }
    }
}

/// Baseline origin that centers a text run on a `width` x `height` page.
///
/// The run's height is approximated as 80% of the width of "M".
pub fn center_text(width: f64, height: f64, text_width: f64, em_width: f64) -> (f64, f64) {
    let text_height = em_width * EM_HEIGHT_RATIO;
    (
        width / 2.0 - text_width / 2.0,
        height / 2.0 + text_height / 2.0,
    )
}

//! Graduated rulers

use super::{Label, Segment, Template};
use crate::constants::{RULER_LABEL_DIVISOR, RULER_TICK_HEIGHT_RATIO};
use crate::fraction;
use crate::layout::{Graduation, layout_graduated, side_tick_length, slice_rows};
use crate::style::LineStyle;
use crate::surface::FontStyle;
use crate::types::{Edge, Result, ensure_positive};
use crate::units::Unit;

/// Compose a ruler `width` long and `height` tall, both in `unit`.
///
/// The page is rounded up to a whole `unit` in width; the cut border and
/// the scale follow the exact width. The left edge carries reference
/// ticks at thirds of the height and the right edge at quarters, each
/// [`side_tick_length`] long.
pub fn compose_ruler(width: f64, height: f64, unit: Unit) -> Result<Template> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    let graduation = Graduation::for_unit(unit)?;
    let side_tick = side_tick_length(unit)?;

    let mut template = Template::new(unit, (height, width.ceil()), width, height);

    let abbreviation = unit.abbreviation();
    template.label = Some(Label {
        text: format!(
            "{}{} x {}{}",
            fraction::format(height),
            abbreviation,
            fraction::format(width),
            abbreviation
        ),
        family: "Helvetica".to_string(),
        style: FontStyle::Regular,
        size_pt: unit.to_points(height) / RULER_LABEL_DIVISOR,
    });

    for y in slice_rows(height, 3) {
        template.side_marks.push(Segment::horizontal(
            0.0,
            side_tick,
            y,
            LineStyle::Engrave,
        ));
    }
    for y in slice_rows(height, 4) {
        template.side_marks.push(Segment::horizontal(
            width - side_tick,
            width,
            y,
            LineStyle::Engrave,
        ));
    }

    let max_length = height * RULER_TICK_HEIGHT_RATIO;
    template
        .tick_rows
        .push(layout_graduated(width, graduation, Edge::Near, max_length));
    template
        .tick_rows
        .push(layout_graduated(width, graduation, Edge::Far, max_length));

    log::debug!(
        "ruler {} x {} {}: {} graduations per edge",
        width,
        height,
        unit,
        template.tick_rows[0].ticks.len()
    );

    Ok(template)
}

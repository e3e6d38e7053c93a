//! Rivet and belt-loop punch jigs

use super::{Label, Segment, Template};
use crate::fraction;
use crate::layout::{
    BandPolicy, EmphasisRule, HoleSpec, NoEmphasis, RivetSpacing, StaggeredBands, TickOptions,
    hole_count, layout_holes, layout_ticks, slice_rows,
};
use crate::options::JigOptions;
use crate::style::LineStyle;
use crate::surface::FontStyle;
use crate::types::{Rect, Result, Side, ensure_positive};
use crate::units::Unit;

/// Compose a rivet jig with the default band policy and rivet-spacing
/// emphasis.
pub fn compose_jig(width: f64, height: f64, bold: bool, options: &JigOptions) -> Result<Template> {
    let emphasis = RivetSpacing {
        first_hole_at: options.first_hole_at,
        spacing: options.rivet_spacing,
    };
    compose_jig_with(
        width,
        height,
        bold,
        options,
        &StaggeredBands::default(),
        &emphasis,
    )
}

/// Compose a rivet jig.
///
/// # Arguments
/// * `width` - Sheet width (the ruled edges)
/// * `height` - Sheet height, also the size printed on the label
/// * `bold` - Emphasize the ticks picked by `emphasis`
/// * `options` - Jig geometry, in `options.unit`
/// * `bands` - How many hole rows each side gets
/// * `emphasis` - Which ruler ticks are bolded
pub fn compose_jig_with(
    width: f64,
    height: f64,
    bold: bool,
    options: &JigOptions,
    bands: &dyn BandPolicy,
    emphasis: &dyn EmphasisRule,
) -> Result<Template> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;

    let mut template = basic_template(width, height, bold, options, emphasis);

    let choice = bands.choose(height, options.hole_diameter);
    add_hole_rows(&mut template, Side::Right, choice.right, options);
    add_hole_rows(&mut template, Side::Left, choice.left, options);

    template.label = Some(Label {
        text: format!("{}{}", fraction::format(height), size_suffix(options.unit)),
        family: options.label_font_family.clone(),
        style: FontStyle::Bold,
        size_pt: options.label_font_size_pt,
    });

    log::debug!(
        "rivet jig {} x {}: {} bands left, {} right, {} holes",
        width,
        height,
        choice.left,
        choice.right,
        template.holes.len()
    );

    Ok(template)
}

/// Compose a belt-loop jig: one hole at each end and a strap slot between.
///
/// The sheet is `rivet_spacing` plus the first-hole margin on both sides
/// wide.
pub fn compose_belt_jig(height: f64, options: &JigOptions) -> Result<Template> {
    ensure_positive("height", height)?;

    let width = options.first_hole_at + options.rivet_spacing + options.first_hole_at;
    let mut template = basic_template(width, height, false, options, &NoEmphasis);

    let middle = height / 2.0;
    for x in [options.first_hole_at, width - options.first_hole_at] {
        template.holes.push(HoleSpec {
            center: (x, middle),
            diameter: options.hole_diameter,
        });
    }
    template.slots.push(Rect::centered(
        width / 2.0,
        middle,
        options.belt_slot_width,
        options.hole_diameter,
    ));

    log::debug!("belt jig {} x {}", width, height);

    Ok(template)
}

/// Border plus the two ruled edges shared by every jig
fn basic_template(
    width: f64,
    height: f64,
    bold: bool,
    options: &JigOptions,
    emphasis: &dyn EmphasisRule,
) -> Template {
    let mut template = Template::new(options.unit, (height, width), width, height);

    let near = TickOptions::new(width)
        .interval(options.hole_interval)
        .max_length(options.tick_length)
        .mark_special(bold);
    let far = near.margin(options.first_hole_at).inverted(true);

    template.tick_rows.push(layout_ticks(&near, emphasis));
    template.tick_rows.push(layout_ticks(&far, emphasis));
    template
}

/// Band marks at the page edge and a row of holes per band boundary
fn add_hole_rows(template: &mut Template, side: Side, bands: usize, options: &JigOptions) {
    let width = template.width;
    let count = hole_count(width / 2.0, options.first_hole_at, options.hole_interval);

    let (anchor_x, spacing, mark_from, mark_to) = match side {
        Side::Left => (
            options.first_hole_at,
            options.hole_interval,
            0.0,
            options.side_mark_length,
        ),
        Side::Right => (
            width - options.first_hole_at,
            -options.hole_interval,
            width - options.side_mark_length,
            width,
        ),
    };

    for y in slice_rows(template.height, bands) {
        template
            .side_marks
            .push(Segment::horizontal(mark_from, mark_to, y, LineStyle::Engrave));
        template.holes.extend(layout_holes(
            anchor_x,
            y,
            options.hole_diameter,
            spacing,
            count,
        ));
    }
}

/// Inches get the inch mark, other units their abbreviation
fn size_suffix(unit: Unit) -> &'static str {
    match unit {
        Unit::Inch => "\"",
        other => other.abbreviation(),
    }
}

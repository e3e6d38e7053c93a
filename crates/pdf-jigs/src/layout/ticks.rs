//! Tick placement along a ruled edge
//!
//! Two layouts live here:
//! - the jig ruler, ticked every hole interval from an optional margin,
//!   with a few ticks emphasized to mark the rivet spacing
//! - the graduated ruler scale, subdivided in eighths of an inch or
//!   tenths of a centimeter

use crate::constants::{
    FIRST_HOLE_AT_IN, HOLE_INTERVAL_IN, JIG_TICK_LENGTH_IN, MAJOR_TICK_FACTOR, MEDIUM_TICK_FACTOR,
    MINOR_TICK_FACTOR, RIVET_SPACING_IN, RULER_SIDE_TICK_LENGTH_CM, RULER_SIDE_TICK_LENGTH_IN,
    SHORT_TICK_FACTOR, TOLERANCE,
};
use crate::types::{Edge, JigError, Result};
use crate::units::{Unit, convert};

use super::{approx_eq, whole_steps};

// =============================================================================
// Tick Marks
// =============================================================================

/// How tall a tick is drawn relative to the row's full length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickWeight {
    /// Whole units
    Major,
    /// Halves
    Medium,
    /// Quarters on the inch scale
    Short,
    /// Everything else
    Minor,
}

impl TickWeight {
    pub fn length_factor(self) -> f64 {
        match self {
            TickWeight::Major => MAJOR_TICK_FACTOR,
            TickWeight::Medium => MEDIUM_TICK_FACTOR,
            TickWeight::Short => SHORT_TICK_FACTOR,
            TickWeight::Minor => MINOR_TICK_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Distance from the page's left edge
    pub position: f64,
    pub weight: TickWeight,
    /// Drawn with the thick engrave stroke
    pub emphasized: bool,
}

impl TickMark {
    pub fn length(&self, max_length: f64) -> f64 {
        max_length * self.weight.length_factor()
    }
}

/// One layout pass: ticks growing from a single page edge
#[derive(Debug, Clone, PartialEq)]
pub struct TickRow {
    pub edge: Edge,
    /// Length of a Major tick
    pub max_length: f64,
    pub ticks: Vec<TickMark>,
}

impl TickRow {
    pub fn emphasized_indices(&self) -> Vec<usize> {
        self.ticks
            .iter()
            .enumerate()
            .filter(|(_, tick)| tick.emphasized)
            .map(|(index, _)| index)
            .collect()
    }
}

// =============================================================================
// Emphasis Rules
// =============================================================================

/// What an emphasis rule knows about the row being laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Slot count of the row; the row holds `slots - 1` ticks
    pub slots: usize,
    pub interval: f64,
    /// Whether the row starts at a margin instead of the page edge
    pub margined: bool,
}

/// Decides which tick indices are drawn bold
pub trait EmphasisRule {
    fn is_emphasized(&self, index: usize, context: &TickContext) -> bool;
}

impl<F> EmphasisRule for F
where
    F: Fn(usize, &TickContext) -> bool,
{
    fn is_emphasized(&self, index: usize, context: &TickContext) -> bool {
        self(index, context)
    }
}

/// Never emphasizes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEmphasis;

impl EmphasisRule for NoEmphasis {
    fn is_emphasized(&self, _index: usize, _context: &TickContext) -> bool {
        false
    }
}

/// Bold the first hole and the hole `spacing` further on, from both ends.
///
/// With the default 2" spacing and 1/4" interval that is the 1st and 9th
/// hole from either edge, which puts the middle of a 2" rivet pair on a
/// visible mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RivetSpacing {
    pub first_hole_at: f64,
    pub spacing: f64,
}

impl Default for RivetSpacing {
    fn default() -> Self {
        Self {
            first_hole_at: FIRST_HOLE_AT_IN,
            spacing: RIVET_SPACING_IN,
        }
    }
}

impl RivetSpacing {
    /// Tick indices this rule emphasizes for a row
    pub fn special_indices(&self, context: &TickContext) -> Vec<usize> {
        let step = whole_steps(self.spacing, context.interval);
        let slots = context.slots;

        let candidates = if context.margined {
            [
                Some(0),
                Some(step),
                slots.checked_sub(2),
                slots.checked_sub(2 + step),
            ]
        } else {
            let first = whole_steps(self.first_hole_at, context.interval);
            [
                Some(first),
                Some(first + step),
                slots.checked_sub(2 + first),
                slots.checked_sub(2 + first + step),
            ]
        };

        let mut indices: Vec<usize> = candidates.into_iter().flatten().collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

impl EmphasisRule for RivetSpacing {
    fn is_emphasized(&self, index: usize, context: &TickContext) -> bool {
        self.special_indices(context).contains(&index)
    }
}

// =============================================================================
// Jig Ruler Layout
// =============================================================================

/// Parameters of one jig ruler pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOptions {
    /// Length of the ruled edge
    pub span: f64,
    /// Distance between neighbouring ticks
    pub interval: f64,
    /// Offset of the first tick from the page edge
    pub origin_margin: f64,
    /// Grow ticks from the far edge instead of the near one
    pub invert: bool,
    /// Consult the emphasis rule
    pub mark_special: bool,
    /// Length of a Major tick
    pub max_length: f64,
}

impl TickOptions {
    pub fn new(span: f64) -> Self {
        Self {
            span,
            interval: HOLE_INTERVAL_IN,
            origin_margin: 0.0,
            invert: false,
            mark_special: false,
            max_length: JIG_TICK_LENGTH_IN,
        }
    }

    pub fn interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub fn margin(mut self, origin_margin: f64) -> Self {
        self.origin_margin = origin_margin;
        self
    }

    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn mark_special(mut self, mark_special: bool) -> Self {
        self.mark_special = mark_special;
        self
    }

    pub fn max_length(mut self, max_length: f64) -> Self {
        self.max_length = max_length;
        self
    }

    fn is_margined(&self) -> bool {
        self.origin_margin.abs() > TOLERANCE
    }
}

/// Slot count of a jig ruler pass.
///
/// `floor((span - margin) / interval)`, plus two when the row starts at the
/// page edge so both edges get a tick.
pub fn slot_count(span: f64, interval: f64, origin_margin: f64) -> usize {
    let slices = whole_steps(span - origin_margin, interval);
    if origin_margin.abs() > TOLERANCE {
        slices
    } else {
        slices + 2
    }
}

/// Weight of a tick `offset` units from the start of its row
pub fn classify_offset(offset: f64) -> TickWeight {
    let fraction = offset - offset.floor();
    if approx_eq(fraction, 0.0) || approx_eq(fraction, 1.0) {
        TickWeight::Major
    } else if approx_eq(fraction, 0.5) {
        TickWeight::Medium
    } else {
        TickWeight::Minor
    }
}

/// Lay out one jig ruler pass.
///
/// Emits `slot_count - 1` ticks, the first at `origin_margin`, each
/// following tick exactly `interval` further along.
pub fn layout_ticks(options: &TickOptions, special_rule: &dyn EmphasisRule) -> TickRow {
    let slots = slot_count(options.span, options.interval, options.origin_margin);
    let context = TickContext {
        slots,
        interval: options.interval,
        margined: options.is_margined(),
    };

    let ticks = (0..slots.saturating_sub(1))
        .map(|index| {
            let offset = index as f64 * options.interval;
            TickMark {
                position: options.origin_margin + offset,
                weight: classify_offset(offset),
                emphasized: options.mark_special && special_rule.is_emphasized(index, &context),
            }
        })
        .collect();

    TickRow {
        edge: if options.invert { Edge::Far } else { Edge::Near },
        max_length: options.max_length,
        ticks,
    }
}

// =============================================================================
// Graduated Ruler Scale
// =============================================================================

/// Subdivision of a ruler scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Graduation {
    /// Eighths: Major every inch, Medium every half, Short every quarter
    Imperial,
    /// Tenths of the unit: Major every unit, Medium every half
    Metric { division: f64 },
}

impl Graduation {
    pub fn for_unit(unit: Unit) -> Result<Self> {
        match unit {
            Unit::Inch => Ok(Graduation::Imperial),
            Unit::Centimeter => Ok(Graduation::Metric { division: 0.1 }),
            Unit::Millimeter => Ok(Graduation::Metric { division: 1.0 }),
            Unit::Point => Err(JigError::InvalidUnit(format!(
                "no ruler graduation for {}",
                unit.abbreviation()
            ))),
        }
    }

    /// Distance between neighbouring ticks
    pub fn division(self) -> f64 {
        match self {
            Graduation::Imperial => 0.125,
            Graduation::Metric { division } => division,
        }
    }

    pub fn weight(self, index: usize) -> TickWeight {
        match self {
            Graduation::Imperial => {
                if index % 8 == 0 {
                    TickWeight::Major
                } else if index % 4 == 0 {
                    TickWeight::Medium
                } else if index % 2 == 0 {
                    TickWeight::Short
                } else {
                    TickWeight::Minor
                }
            }
            Graduation::Metric { .. } => {
                if index % 10 == 0 {
                    TickWeight::Major
                } else if index % 5 == 0 {
                    TickWeight::Medium
                } else {
                    TickWeight::Minor
                }
            }
        }
    }
}

/// Length of the reference ticks on a ruler's short edges, in `unit`.
///
/// Inch rulers use 1/4"; metric rulers use 2.5 cm whatever their unit.
pub fn side_tick_length(unit: Unit) -> Result<f64> {
    match unit {
        Unit::Inch => Ok(RULER_SIDE_TICK_LENGTH_IN),
        Unit::Centimeter | Unit::Millimeter => Ok(convert(
            RULER_SIDE_TICK_LENGTH_CM,
            Unit::Centimeter,
            unit,
        )),
        Unit::Point => Err(JigError::InvalidUnit(format!(
            "no ruler side ticks for {}",
            unit.abbreviation()
        ))),
    }
}

/// Lay out the interior graduations of a ruler scale.
///
/// Ticks sit at `k * division` for `k` in `1..slots`; the page edges carry
/// no tick. Major ticks are emphasized.
pub fn layout_graduated(span: f64, graduation: Graduation, edge: Edge, max_length: f64) -> TickRow {
    let division = graduation.division();
    let slots = whole_steps(span, division);

    let ticks = (1..slots)
        .map(|index| {
            let weight = graduation.weight(index);
            TickMark {
                position: index as f64 * division,
                weight,
                emphasized: weight == TickWeight::Major,
            }
        })
        .collect();

    TickRow {
        edge,
        max_length,
        ticks,
    }
}

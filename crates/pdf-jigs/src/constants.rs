//! Shared constants for template layout
//!
//! This module centralizes the physical measurements and magic numbers
//! used by the layout engines and the PDF surface.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PostScript point)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Tolerance used when comparing physical measurements
pub const TOLERANCE: f64 = 1e-9;

// =============================================================================
// Line Styles
// =============================================================================

/// Hairline width for cut lines (points)
pub const CUT_LINE_WIDTH_PT: f64 = 0.001;

/// Line width for engrave lines (points)
pub const ENGRAVE_LINE_WIDTH_PT: f64 = 1.0;

/// Line width for emphasized engrave lines (points)
pub const THICK_ENGRAVE_LINE_WIDTH_PT: f64 = 2.0;

// =============================================================================
// Tick Weights
// =============================================================================

pub const MAJOR_TICK_FACTOR: f64 = 1.0;
pub const MEDIUM_TICK_FACTOR: f64 = 0.7;
pub const SHORT_TICK_FACTOR: f64 = 0.5;
pub const MINOR_TICK_FACTOR: f64 = 0.4;

// =============================================================================
// Jig Geometry (inches)
// =============================================================================

/// Default sheet width of a rivet jig
pub const JIG_SHEET_WIDTH_IN: f64 = 6.0;

/// Distance from the page edge to the first hole
pub const FIRST_HOLE_AT_IN: f64 = 0.5;

/// Distance between neighbouring holes and ruler ticks
pub const HOLE_INTERVAL_IN: f64 = 0.25;

/// Punched hole diameter
pub const HOLE_DIAMETER_MM: f64 = 5.0;

/// Full-height tick length on the jig rulers
pub const JIG_TICK_LENGTH_IN: f64 = 0.1;

/// Rivet spacing highlighted by emphasized ticks
pub const RIVET_SPACING_IN: f64 = 2.0;

/// Length of the band marks drawn at the left and right page edges
pub const SIDE_MARK_LENGTH_IN: f64 = 0.25;

/// Width of the strap slot cut into belt-loop jigs
pub const BELT_SLOT_WIDTH_IN: f64 = 0.5;

/// Font size of the jig size label (points)
pub const LABEL_FONT_SIZE_PT: f64 = 14.0;

// =============================================================================
// Rulers
// =============================================================================

/// Label font size is the ruler height (in points) divided by this
pub const RULER_LABEL_DIVISOR: f64 = 3.5;

/// Full-height graduation length as a share of the ruler height
pub const RULER_TICK_HEIGHT_RATIO: f64 = 0.25;

/// Side reference tick length on inch rulers, in inches
pub const RULER_SIDE_TICK_LENGTH_IN: f64 = 0.25;

/// Side reference tick length on metric rulers, in centimeters
pub const RULER_SIDE_TICK_LENGTH_CM: f64 = 2.5;

// =============================================================================
// Text
// =============================================================================

/// Nominal cap height as a share of the width of "M"
pub const EM_HEIGHT_RATIO: f64 = 0.8;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// This magic number comes from: 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
/// Using 4 cubic Bezier curves with this factor gives a very close circle approximation.
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

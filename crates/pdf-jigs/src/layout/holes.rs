//! Hole rows for punch jigs
//!
//! A jig is sliced into equal horizontal bands; every interior band
//! boundary carries a row of holes running from the page edge toward the
//! middle.

use crate::types::Rect;

use super::whole_steps;

/// A circular hole, centered on `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleSpec {
    pub center: (f64, f64),
    pub diameter: f64,
}

impl HoleSpec {
    /// Square the hole is inscribed in
    pub fn bounds(&self) -> Rect {
        let (cx, cy) = self.center;
        Rect::centered(cx, cy, self.diameter, self.diameter)
    }
}

/// Place `count` holes starting at the anchor, `spacing` apart along x.
///
/// A negative `spacing` grows the row toward the left edge.
pub fn layout_holes(
    anchor_x: f64,
    anchor_y: f64,
    diameter: f64,
    spacing: f64,
    count: usize,
) -> Vec<HoleSpec> {
    (0..count)
        .map(|i| HoleSpec {
            center: (anchor_x + i as f64 * spacing, anchor_y),
            diameter,
        })
        .collect()
}

/// How many holes fit between `margin` and the middle of the page
pub fn hole_count(half_width: f64, margin: f64, spacing: f64) -> usize {
    whole_steps(half_width - margin, spacing.abs())
}

/// Interior boundaries of `bands` equal bands over `height`
pub fn slice_rows(height: f64, bands: usize) -> Vec<f64> {
    (1..bands)
        .map(|k| height * k as f64 / bands as f64)
        .collect()
}

// =============================================================================
// Band Policy
// =============================================================================

/// Band counts for the two sides of a jig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandChoice {
    pub left: usize,
    pub right: usize,
}

/// Chooses how many bands each side of a jig is sliced into
pub trait BandPolicy {
    fn choose(&self, height: f64, diameter: f64) -> BandChoice;
}

/// Largest band count up to `max` whose bands are taller than a hole,
/// falling back to two bands.
pub fn largest_fitting(height: f64, diameter: f64, max: usize) -> usize {
    (3..=max)
        .rev()
        .find(|&bands| height / bands as f64 > diameter)
        .unwrap_or(2)
}

/// Left side up to four bands, right side up to three, never both three.
///
/// The differing counts make the two sides of a printed jig easy to tell
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredBands {
    pub left_max: usize,
    pub right_max: usize,
}

impl Default for StaggeredBands {
    fn default() -> Self {
        Self {
            left_max: 4,
            right_max: 3,
        }
    }
}

impl BandPolicy for StaggeredBands {
    fn choose(&self, height: f64, diameter: f64) -> BandChoice {
        let left = largest_fitting(height, diameter, self.left_max);
        let mut right = largest_fitting(height, diameter, self.right_max);
        if left == 3 && right == 3 {
            right = 2;
        }
        BandChoice { left, right }
    }
}

/// Both sides use the same, largest fitting band count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformBands {
    pub max: usize,
}

impl BandPolicy for UniformBands {
    fn choose(&self, height: f64, diameter: f64) -> BandChoice {
        let bands = largest_fitting(height, diameter, self.max);
        BandChoice {
            left: bands,
            right: bands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_fitting_fallback() {
        assert_eq!(largest_fitting(0.1, 0.2, 4), 2);
        assert_eq!(largest_fitting(1.0, 0.2, 4), 4);
        assert_eq!(largest_fitting(1.0, 0.2, 2), 2);
    }

    #[test]
    fn test_hole_bounds() {
        let hole = HoleSpec {
            center: (1.0, 0.5),
            diameter: 0.2,
        };
        let bounds = hole.bounds();
        assert!((bounds.x - 0.9).abs() < 1e-12);
        assert!((bounds.y - 0.4).abs() < 1e-12);
        assert_eq!(bounds.width, 0.2);
    }
}

use crate::constants::*;
use crate::surface::{FontStyle, StandardFont};
use crate::types::*;
use crate::units::{Unit, convert};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Range of jig sizes produced by a batch.
///
/// Yields `start + k * step` for `k = 1, 2, ...` while the value does not
/// exceed `end`; `start` itself is not produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeSweep {
    pub start: f64,
    pub step: f64,
    pub end: f64,
}

impl Default for SizeSweep {
    fn default() -> Self {
        Self {
            start: 0.25,
            step: 0.25,
            end: 2.0,
        }
    }
}

impl SizeSweep {
    pub fn sizes(&self) -> Vec<f64> {
        if !(self.start.is_finite() && self.step.is_finite() && self.end.is_finite())
            || self.step <= 0.0
        {
            return Vec::new();
        }

        let mut sizes = Vec::new();
        let mut k = 1;
        loop {
            let size = self.start + k as f64 * self.step;
            if size > self.end + TOLERANCE {
                break;
            }
            sizes.push(size);
            k += 1;
        }
        sizes
    }
}

/// Jig geometry configuration.
///
/// Every length is expressed in `unit`; the defaults are inches.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JigOptions {
    pub unit: Unit,

    // Sheet
    pub sheet_width: f64,

    // Holes
    pub first_hole_at: f64,
    pub hole_interval: f64,
    pub hole_diameter: f64,
    pub side_mark_length: f64,

    // Rulers
    pub tick_length: f64,
    pub rivet_spacing: f64,

    // Belt loops
    pub belt_slot_width: f64,

    // Label
    pub label_font_family: String,
    pub label_font_size_pt: f64,

    // Batch
    pub sweep: SizeSweep,
}

impl Default for JigOptions {
    fn default() -> Self {
        Self {
            unit: Unit::Inch,
            sheet_width: JIG_SHEET_WIDTH_IN,
            first_hole_at: FIRST_HOLE_AT_IN,
            hole_interval: HOLE_INTERVAL_IN,
            hole_diameter: convert(HOLE_DIAMETER_MM, Unit::Millimeter, Unit::Inch),
            side_mark_length: SIDE_MARK_LENGTH_IN,
            tick_length: JIG_TICK_LENGTH_IN,
            rivet_spacing: RIVET_SPACING_IN,
            belt_slot_width: BELT_SLOT_WIDTH_IN,
            label_font_family: "Helvetica".to_string(),
            label_font_size_pt: LABEL_FONT_SIZE_PT,
            sweep: SizeSweep::default(),
        }
    }
}

impl JigOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| JigError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| JigError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        ensure_positive("sheet_width", self.sheet_width)?;
        ensure_positive("first_hole_at", self.first_hole_at)?;
        ensure_positive("hole_interval", self.hole_interval)?;
        ensure_positive("hole_diameter", self.hole_diameter)?;
        ensure_positive("side_mark_length", self.side_mark_length)?;
        ensure_positive("tick_length", self.tick_length)?;
        ensure_positive("rivet_spacing", self.rivet_spacing)?;
        ensure_positive("belt_slot_width", self.belt_slot_width)?;
        ensure_positive("label_font_size_pt", self.label_font_size_pt)?;

        if self.first_hole_at * 2.0 > self.sheet_width {
            return Err(JigError::Config(format!(
                "first hole at {} does not fit a {} wide sheet",
                self.first_hole_at, self.sheet_width
            )));
        }

        if !(self.sweep.step.is_finite() && self.sweep.step > 0.0) {
            return Err(JigError::Config(format!(
                "size sweep step must be positive, got {}",
                self.sweep.step
            )));
        }

        StandardFont::resolve(&self.label_font_family, FontStyle::Bold)?;

        Ok(())
    }
}

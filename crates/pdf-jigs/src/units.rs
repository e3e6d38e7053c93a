//! Physical units and conversion between them
//!
//! Every factor is expressed as an exact ratio against the inch
//! (72 pt, 254/10 mm, 254/100 cm) so conversions only pick up the
//! rounding of a single multiply and divide.

use crate::constants::POINTS_PER_INCH;
use crate::types::{JigError, Result};
use std::fmt;
use std::str::FromStr;

/// Units a measurement can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Point,
    #[default]
    Inch,
    Millimeter,
    Centimeter,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Point, Unit::Inch, Unit::Millimeter, Unit::Centimeter];

    /// How many of this unit fit in one inch, as (numerator, denominator)
    fn per_inch(self) -> (f64, f64) {
        match self {
            Unit::Point => (POINTS_PER_INCH, 1.0),
            Unit::Inch => (1.0, 1.0),
            Unit::Millimeter => (254.0, 10.0),
            Unit::Centimeter => (254.0, 100.0),
        }
    }

    /// Abbreviation used in labels and file names
    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Point => "pt",
            Unit::Inch => "in",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
        }
    }

    pub fn to_points(self, value: f64) -> f64 {
        convert(value, self, Unit::Point)
    }

    pub fn from_points(self, points: f64) -> f64 {
        convert(points, Unit::Point, self)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Unit {
    type Err = JigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "point" | "points" => Ok(Unit::Point),
            "in" | "inch" | "inches" => Ok(Unit::Inch),
            "mm" | "millimeter" | "millimeters" => Ok(Unit::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(Unit::Centimeter),
            _ => Err(JigError::InvalidUnit(s.to_string())),
        }
    }
}

/// Convert `value` from one unit to another
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    let (from_num, from_den) = from.per_inch();
    let (to_num, to_den) = to.per_inch();
    value * (to_num * from_den) / (to_den * from_num)
}

/// Convert between units given by name, e.g. `convert_named(1.0, "in", "mm")`
pub fn convert_named(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    Ok(convert(value, from, to))
}

/// A real number tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn points(value: f64) -> Self {
        Self::new(value, Unit::Point)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeter)
    }

    /// Magnitude of this measurement in `unit`
    pub fn to(self, unit: Unit) -> f64 {
        convert(self.value, self.unit, unit)
    }

    pub fn convert(self, unit: Unit) -> Measurement {
        Measurement::new(self.to(unit), unit)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_factors() {
        assert_eq!(convert(1.0, Unit::Inch, Unit::Point), 72.0);
        assert_eq!(convert(1.0, Unit::Inch, Unit::Millimeter), 25.4);
        assert_eq!(convert(1.0, Unit::Inch, Unit::Centimeter), 2.54);
        assert_eq!(convert(72.0, Unit::Point, Unit::Inch), 1.0);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("inches".parse::<Unit>().unwrap(), Unit::Inch);
        assert_eq!("CM".parse::<Unit>().unwrap(), Unit::Centimeter);
        assert_eq!(" pt ".parse::<Unit>().unwrap(), Unit::Point);
        assert!(matches!(
            "furlong".parse::<Unit>(),
            Err(JigError::InvalidUnit(name)) if name == "furlong"
        ));
    }
}

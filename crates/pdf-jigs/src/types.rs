use thiserror::Error;

#[derive(Error, Debug)]
pub enum JigError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    #[error("Invalid dimension: {name} must be a positive number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("Missing asset: {0}")]
    AssetMissing(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JigError>;

/// Reject zero, negative and non-finite lengths
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(JigError::InvalidDimension { name, value })
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Page format used as given: (width, height)
    Portrait,
    /// Page format swapped: the second dimension runs horizontally
    #[default]
    Landscape,
}

impl Orientation {
    /// Resolve a page format `(a, b)` into `(width, height)`
    pub fn dimensions(self, format: (f64, f64)) -> (f64, f64) {
        let (a, b) = format;
        match self {
            Orientation::Portrait => (a, b),
            Orientation::Landscape => (b, a),
        }
    }
}

/// The page edge a row of ticks grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Top edge (y = 0), ticks grow downward
    Near,
    /// Bottom edge (y = page height), ticks grow upward
    Far,
}

/// Left or right half of a jig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Stroke colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to the 0.0..=1.0 range used by PDF colour operators
    pub fn unit_channels(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Axis-aligned rectangle, origin at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `(cx, cy)`
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }
}

//! Printable rulers and hole-punch jigs for leather work.
//!
//! Layout engines place ticks, holes and labels at exact physical
//! positions; composers assemble them into page [`Template`]s which render
//! onto any [`DrawingSurface`], usually a [`PdfSurface`].

pub mod batch;
pub mod compose;
pub mod constants;
pub mod fraction;
pub mod layout;
mod options;
pub mod style;
pub mod surface;
mod types;
pub mod units;

pub use batch::{
    BatchReport, JigKind, compose_batch, ensure_output_dir, ruler_file_name, run_batch,
    write_ruler,
};
pub use compose::{
    Label, Segment, Template, center_text, compose_belt_jig, compose_jig, compose_jig_with,
    compose_ruler,
};
pub use layout::*;
pub use options::*;
pub use style::{LineStyle, Stroke};
pub use surface::{
    DrawCommand, DrawingSurface, FontStyle, PdfSurface, RecordingSurface, StandardFont,
};
pub use types::*;
pub use units::{Measurement, Unit, convert, convert_named};

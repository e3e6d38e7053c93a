//! Batch output: a sweep of jig sizes, or a single ruler
//!
//! A batch composes every page before anything touches the disk, so an
//! invalid size aborts the run without leaving a partial document behind.

use crate::compose::{Template, compose_belt_jig, compose_jig, compose_ruler};
use crate::options::JigOptions;
use crate::surface::PdfSurface;
use crate::types::Result;
use crate::units::Unit;
use std::path::{Path, PathBuf};

/// Which kind of jig a batch produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JigKind {
    Rivet,
    BeltLoop,
}

impl JigKind {
    pub fn title(self) -> &'static str {
        match self {
            JigKind::Rivet => "Rivet jigs",
            JigKind::BeltLoop => "Belt loop jigs",
        }
    }

    /// Multi-page document holding every size
    pub fn combined_file_name(self) -> &'static str {
        match self {
            JigKind::Rivet => "rivet-jigs.pdf",
            JigKind::BeltLoop => "belt-loop-jigs.pdf",
        }
    }

    /// Single-page document for one size
    pub fn page_file_name(self, size: f64) -> String {
        match self {
            JigKind::Rivet => format!("rivet-jig-{}.pdf", size),
            JigKind::BeltLoop => format!("belt-loop-jig-{}.pdf", size),
        }
    }

    pub fn compose(self, size: f64, options: &JigOptions) -> Result<Template> {
        match self {
            JigKind::Rivet => compose_jig(options.sheet_width, size, true, options),
            JigKind::BeltLoop => compose_belt_jig(size, options),
        }
    }
}

/// Files written by a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub combined: PathBuf,
    pub pages: Vec<PathBuf>,
    pub sizes: Vec<f64>,
}

/// Compose one template per size of the sweep
pub fn compose_batch(kind: JigKind, options: &JigOptions) -> Result<Vec<(f64, Template)>> {
    options.validate()?;
    options
        .sweep
        .sizes()
        .into_iter()
        .map(|size| kind.compose(size, options).map(|template| (size, template)))
        .collect()
}

/// Create `path` unless it already exists
pub fn ensure_output_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        log::info!("creating output directory {}", path.display());
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write the combined document and one single-page document per size
/// into `output_dir`.
pub fn run_batch(
    kind: JigKind,
    options: &JigOptions,
    output_dir: impl AsRef<Path>,
) -> Result<BatchReport> {
    let output_dir = output_dir.as_ref();
    let templates = compose_batch(kind, options)?;
    ensure_output_dir(output_dir)?;

    let mut combined = PdfSurface::new(kind.title(), options.unit);
    let mut singles = Vec::with_capacity(templates.len());
    for (size, template) in &templates {
        template.render(&mut combined)?;

        let mut single = PdfSurface::new(format!("{} {}", kind.title(), size), options.unit);
        template.render(&mut single)?;
        singles.push((output_dir.join(kind.page_file_name(*size)), single.to_bytes()?));
    }
    let combined_bytes = combined.to_bytes()?;

    let combined_path = output_dir.join(kind.combined_file_name());
    std::fs::write(&combined_path, combined_bytes)?;
    log::info!(
        "wrote {} page(s) to {}",
        combined.page_count(),
        combined_path.display()
    );

    let mut pages = Vec::with_capacity(singles.len());
    for (path, bytes) in singles {
        std::fs::write(&path, bytes)?;
        log::info!("wrote {}", path.display());
        pages.push(path);
    }

    Ok(BatchReport {
        combined: combined_path,
        pages,
        sizes: templates.iter().map(|(size, _)| *size).collect(),
    })
}

/// File name of a ruler, e.g. `ruler-1.0-x-12-in.pdf`.
///
/// `unit_label` is kept as the user spelled it ("in", "inches", ...).
pub fn ruler_file_name(height: f64, width: u32, unit_label: &str) -> String {
    format!("ruler-{:?}-x-{}-{}.pdf", height, width, unit_label)
}

/// Compose a ruler and write it into `output_dir`
pub fn write_ruler(
    width: u32,
    height: f64,
    unit: Unit,
    unit_label: &str,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    let template = compose_ruler(f64::from(width), height, unit)?;
    ensure_output_dir(output_dir)?;

    let mut surface = PdfSurface::new(format!("Ruler {}", template.label_text()), unit);
    template.render(&mut surface)?;

    let path = output_dir.join(ruler_file_name(height, width, unit_label));
    surface.save(&path)?;
    Ok(path)
}

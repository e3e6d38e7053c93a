//! PDF output through lopdf
//!
//! Draw calls are turned straight into content stream operators, one
//! stream per page. Coordinates arrive in the working unit with a
//! top-left origin and leave in points with PDF's bottom-left origin.

use super::fonts::{StandardFont, encode_win_ansi};
use super::{DrawingSurface, FontStyle};
use crate::constants::BEZIER_CIRCLE_FACTOR;
use crate::types::{Orientation, Result, Rgb};
use crate::units::Unit;
use lopdf::{Dictionary, Document, Object, Stream};
use std::fmt::Write as _;
use std::path::Path;

/// One page being built
#[derive(Debug, Clone)]
struct PageContent {
    width_pt: f64,
    height_pt: f64,
    ops: String,
}

#[derive(Debug, Clone)]
pub struct PdfSurface {
    title: String,
    unit: Unit,
    pages: Vec<PageContent>,
    font: Option<(StandardFont, f64)>,
}

impl PdfSurface {
    pub fn new(title: impl Into<String>, unit: Unit) -> Self {
        Self {
            title: title.into(),
            unit,
            pages: Vec::new(),
            font: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page sizes in points, in page order
    pub fn page_sizes_pt(&self) -> Vec<(f64, f64)> {
        self.pages
            .iter()
            .map(|page| (page.width_pt, page.height_pt))
            .collect()
    }

    fn pt(&self, value: f64) -> f64 {
        self.unit.to_points(value)
    }

    /// Convert a top-left based point into PDF user space
    fn to_user_space(&self, x: f64, y: f64) -> (f64, f64) {
        let height_pt = self.pages.last().map_or(0.0, |page| page.height_pt);
        (self.pt(x), height_pt - self.pt(y))
    }

    fn push_op(&mut self, op: &str) {
        match self.pages.last_mut() {
            Some(page) => {
                page.ops.push_str(op);
                page.ops.push('\n');
            }
            None => log::warn!("ignoring drawing operation before the first page: {}", op),
        }
    }

    /// Assemble the pages into a PDF document
    pub fn to_document(&self) -> Result<Document> {
        let mut doc = Document::with_version("1.5");

        // Create page tree root ID
        let pages_id = doc.new_object_id();

        // Shared font resources
        let mut fonts = Dictionary::new();
        for font in StandardFont::ALL {
            let font_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(font.base_font().as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]));
            fonts.set(font.resource_name(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(fonts),
        )]));

        let mut kids = Vec::new();
        for page in &self.pages {
            let content = format!("q\n{}Q\n", page.ops);
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(page.width_pt as f32),
                        Object::Real(page.height_pt as f32),
                    ]),
                ),
                ("Resources", Object::Reference(resources_id)),
                ("Contents", Object::Reference(content_id)),
            ]));
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(kids.len() as i64)),
            ("Kids", Object::Array(kids)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        let info_id = doc.add_object(Dictionary::from_iter(vec![(
            "Title",
            Object::string_literal(self.title.as_str()),
        )]));

        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }

    /// Serialize the document
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.to_document()?;
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        log::info!("wrote {} page(s) to {}", self.pages.len(), path.display());
        Ok(())
    }
}

/// Format a number for a content stream, without trailing zeros
fn num(value: f64) -> String {
    let mut text = format!("{:.4}", value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

impl DrawingSurface for PdfSurface {
    fn unit(&self) -> Unit {
        self.unit
    }

    fn add_page(&mut self, orientation: Orientation, format: (f64, f64)) {
        let (width, height) = orientation.dimensions(format);
        let page = PageContent {
            width_pt: self.pt(width),
            height_pt: self.pt(height),
            ops: String::new(),
        };
        log::debug!(
            "page {}: {} x {} {}",
            self.pages.len() + 1,
            width,
            height,
            self.unit
        );
        self.pages.push(page);
    }

    fn set_line_width(&mut self, width: f64) {
        let op = format!("{} w", num(self.pt(width)));
        self.push_op(&op);
    }

    fn set_draw_color(&mut self, color: Rgb) {
        let (r, g, b) = color.unit_channels();
        let op = format!("{} {} {} RG", num(r), num(g), num(b));
        self.push_op(&op);
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // `re` takes the bottom-left corner
        let (left, bottom) = self.to_user_space(x, y + height);
        let op = format!(
            "{} {} {} {} re S",
            num(left),
            num(bottom),
            num(self.pt(width)),
            num(self.pt(height))
        );
        self.push_op(&op);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (ax, ay) = self.to_user_space(x1, y1);
        let (bx, by) = self.to_user_space(x2, y2);
        let op = format!("{} {} m {} {} l S", num(ax), num(ay), num(bx), num(by));
        self.push_op(&op);
    }

    fn draw_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (cx, cy) = self.to_user_space(x + width / 2.0, y + height / 2.0);
        let rx = self.pt(width) / 2.0;
        let ry = self.pt(height) / 2.0;
        let kx = rx * BEZIER_CIRCLE_FACTOR;
        let ky = ry * BEZIER_CIRCLE_FACTOR;

        // Four quarter arcs, counter-clockwise from the rightmost point
        let mut op = String::new();
        let _ = writeln!(op, "{} {} m", num(cx + rx), num(cy));
        let arcs = [
            [(cx + rx, cy + ky), (cx + kx, cy + ry), (cx, cy + ry)],
            [(cx - kx, cy + ry), (cx - rx, cy + ky), (cx - rx, cy)],
            [(cx - rx, cy - ky), (cx - kx, cy - ry), (cx, cy - ry)],
            [(cx + kx, cy - ry), (cx + rx, cy - ky), (cx + rx, cy)],
        ];
        for [(x1, y1), (x2, y2), (x3, y3)] in arcs {
            let _ = writeln!(
                op,
                "{} {} {} {} {} {} c",
                num(x1),
                num(y1),
                num(x2),
                num(y2),
                num(x3),
                num(y3)
            );
        }
        op.push('S');
        self.push_op(&op);
    }

    fn set_font(&mut self, family: &str, style: FontStyle, size_pt: f64) -> Result<()> {
        let font = StandardFont::resolve(family, style)?;
        self.font = Some((font, size_pt));
        Ok(())
    }

    fn string_width(&self, text: &str) -> f64 {
        match self.font {
            Some((font, size_pt)) => self.unit.from_points(font.text_width_pt(text, size_pt)),
            None => 0.0,
        }
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        let Some((font, size_pt)) = self.font else {
            log::warn!("ignoring text '{}' drawn without a font", text);
            return;
        };
        let (tx, ty) = self.to_user_space(x, y);
        let hex: String = encode_win_ansi(text)
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect();
        let op = format!(
            "0 g\nBT /{} {} Tf {} {} Td <{}> Tj ET",
            font.resource_name(),
            num(size_pt),
            num(tx),
            num(ty),
            hex
        );
        self.push_op(&op);
    }
}

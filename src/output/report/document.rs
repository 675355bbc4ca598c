//! Paginated PDF document assembly
//!
//! [`ReportDocument`] wraps a `printpdf` document and exposes the three page
//! kinds the report needs: a centered title page, chart pages (a plotters
//! chart rendered into an in-memory RGB bitmap and embedded full-page), and
//! data table pages. Pages appear in the order the methods are called.
//!
//! All pages are A4 landscape. The document is held in memory until
//! [`ReportDocument::save`] writes it out in one pass; a failure mid-build
//! therefore never leaves a partial file behind.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{BitMapBackend, DrawingArea, IntoDrawingArea};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Px,
    Rgb,
};
use thiserror::Error as ThisError;

/// A4 landscape, matching the report's wide charts and tables.
const PAGE_WIDTH_MM: f32 = 297.0;
const PAGE_HEIGHT_MM: f32 = 210.0;

/// Resolution used when placing chart bitmaps on a page. At 110 dpi a
/// 1024x768 chart fills the page with comfortable margins.
const CHART_DPI: f32 = 110.0;

const MM_PER_INCH: f32 = 25.4;
const MM_PER_PT: f32 = 0.3528;

/// Page margin for text content.
const MARGIN_MM: f32 = 18.0;

/// Vertical distance between table rows.
const TABLE_ROW_STEP_MM: f32 = 7.0;

/// First table row baseline; rows run from here down to the bottom margin.
const TABLE_TOP_MM: f32 = 165.0;

/// Errors raised while assembling or writing the report document.
#[derive(Debug, ThisError)]
pub enum ReportError {
    /// The output file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF backend rejected an operation (font setup, serialization).
    #[error("PDF backend error: {0}")]
    Pdf(String),

    /// A chart failed to render into its page bitmap.
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

fn pdf_err(e: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(e.to_string())
}

/// A multi-page PDF report under construction.
///
/// # Example
///
/// ```rust,ignore
/// use dfs_report::output::report::ReportDocument;
///
/// let mut doc = ReportDocument::new("Performance Report")?;
/// doc.add_title_page(&["Distributed File Storage", "Performance Report"])?;
/// doc.add_chart_page(1024, 768, |root| draw_latency_chart(root, &series, &config))?;
/// doc.save("performance_report.pdf")?;
/// ```
pub struct ReportDocument {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    pages: usize,
}

impl ReportDocument {
    /// Create an empty document with the built-in Helvetica fonts loaded.
    pub fn new(title: &str) -> Result<Self, ReportError> {
        let doc = PdfDocument::empty(title);
        let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;

        Ok(Self {
            doc,
            font,
            bold,
            pages: 0,
        })
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Append a new blank page and return its drawing layer.
    fn new_page(&mut self, label: &str) -> PdfLayerReference {
        let (page, layer) =
            self.doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), label);
        self.pages += 1;
        self.doc.get_page(page).get_layer(layer)
    }

    /// Append a title page with the given lines centered on the page,
    /// plus a small generation timestamp near the bottom.
    pub fn add_title_page(&mut self, lines: &[&str]) -> Result<(), ReportError> {
        let layer = self.new_page("title");

        let title_size = 26.0;
        let line_step = 16.0;
        // Stack the block around the vertical center
        let mut y = PAGE_HEIGHT_MM / 2.0 + line_step * (lines.len() as f32 - 1.0) / 2.0;

        for line in lines {
            layer.use_text(
                line.to_string(),
                title_size,
                centered_x(line, title_size),
                Mm(y),
                &self.bold,
            );
            y -= line_step;
        }

        let stamp = format!("Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
        layer.use_text(
            stamp.clone(),
            10.0,
            centered_x(&stamp, 10.0),
            Mm(MARGIN_MM),
            &self.font,
        );

        Ok(())
    }

    /// Append a chart page.
    ///
    /// The closure draws a plotters chart onto an in-memory RGB bitmap of
    /// the given pixel dimensions; the bitmap is then embedded as a
    /// full-page image, centered.
    pub fn add_chart_page<F>(&mut self, width: u32, height: u32, draw: F) -> Result<(), ReportError>
    where
        F: for<'a> FnOnce(
            &DrawingArea<BitMapBackend<'a>, Shift>,
        ) -> Result<(), Box<dyn Error>>,
    {
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            draw(&root).map_err(|e| ReportError::Chart(e.to_string()))?;
            root.present().map_err(|e| ReportError::Chart(e.to_string()))?;
        }

        let layer = self.new_page("chart");

        let image = Image::from(ImageXObject {
            width: Px(width as usize),
            height: Px(height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: buffer,
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        });

        let img_w_mm = width as f32 / CHART_DPI * MM_PER_INCH;
        let img_h_mm = height as f32 / CHART_DPI * MM_PER_INCH;
        image.add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(((PAGE_WIDTH_MM - img_w_mm) / 2.0).max(0.0))),
                translate_y: Some(Mm(((PAGE_HEIGHT_MM - img_h_mm) / 2.0).max(0.0))),
                dpi: Some(CHART_DPI),
                ..Default::default()
            },
        );

        Ok(())
    }

    /// Append one or more data table pages.
    ///
    /// Columns are spread evenly across the page width. Every row is
    /// rendered; when the rows do not fit on one page, continuation pages
    /// are appended until they do.
    pub fn add_table_page(
        &mut self,
        title: &str,
        columns: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), ReportError> {
        let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let col_step = usable / columns.len() as f32;
        let col_x = |i: usize| Mm(MARGIN_MM + col_step * i as f32);

        let rows_per_page =
            ((TABLE_TOP_MM - MARGIN_MM) / TABLE_ROW_STEP_MM).floor() as usize;

        // One header-only page for an empty table, otherwise one page per chunk
        let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![&[][..]]
        } else {
            rows.chunks(rows_per_page).collect()
        };

        for (chunk_index, chunk) in chunks.iter().enumerate() {
            let layer = self.new_page("table");

            let page_title = if chunk_index == 0 {
                title.to_string()
            } else {
                format!("{title} (continued)")
            };
            layer.use_text(
                page_title.clone(),
                16.0,
                centered_x(&page_title, 16.0),
                Mm(PAGE_HEIGHT_MM - MARGIN_MM),
                &self.bold,
            );

            let header_y = TABLE_TOP_MM + TABLE_ROW_STEP_MM;
            for (i, name) in columns.iter().enumerate() {
                layer.use_text(name.to_string(), 10.0, col_x(i), Mm(header_y), &self.bold);
            }

            // Rule between header and rows
            layer.set_outline_color(Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None)));
            layer.set_outline_thickness(0.5);
            let rule_y = header_y - 2.5;
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(MARGIN_MM), Mm(rule_y)), false),
                    (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(rule_y)), false),
                ],
                is_closed: false,
            });

            let mut y = TABLE_TOP_MM;
            for row in *chunk {
                for (i, cell) in row.iter().enumerate() {
                    layer.use_text(cell.clone(), 10.0, col_x(i), Mm(y), &self.font);
                }
                y -= TABLE_ROW_STEP_MM;
            }
        }

        Ok(())
    }

    /// Serialize the document to `path` in one pass.
    pub fn save(self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let file = File::create(path.as_ref())?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(pdf_err)?;
        Ok(())
    }
}

/// Estimate a centered x position for Helvetica text of the given size.
///
/// Built-in PDF fonts carry no metrics here; 0.5 em per glyph is close
/// enough for centering titles and labels.
fn centered_x(text: &str, font_size_pt: f32) -> Mm {
    let est_width_mm = text.len() as f32 * font_size_pt * 0.5 * MM_PER_PT;
    Mm(((PAGE_WIDTH_MM - est_width_mm) / 2.0).max(MARGIN_MM))
}

// =================================================================================================
// Tests
// =================================================================================================

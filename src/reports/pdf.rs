//! PDF rendering of the monthly report
//!
//! Rendering happens in two steps. [`ReportLayout::build`] places every text
//! line on fixed-size pages, and [`render_monthly_pdf`] draws that layout
//! with printpdf.
//!
//! Page breaks are only considered before a month heading. A month with many
//! buckets keeps writing below the bottom margin.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;

use crate::error::{ContasError, ContasResult};

use super::monthly::{capitalize, MonthlyReport};

/// Document title, drawn once at the top of the first page
pub const REPORT_TITLE: &str = "Relatório Contas";

const LAYER_NAME: &str = "Camada 1";

/// Page size and margin, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 with a 50pt margin
    pub const A4: PageGeometry = PageGeometry {
        width: 595.2756,
        height: 841.8898,
        margin: 50.0,
    };

    /// Cursor position at the top of a fresh page
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// Typographic role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Heading,
    Body,
}

impl TextStyle {
    pub fn font_size(&self) -> f32 {
        match self {
            TextStyle::Title => 16.0,
            TextStyle::Heading | TextStyle::Body => 12.0,
        }
    }

    /// How far the cursor moves down after a line of this style
    pub fn advance(&self) -> f32 {
        match self {
            TextStyle::Title => 30.0,
            TextStyle::Heading => 20.0,
            TextStyle::Body => 15.0,
        }
    }

    fn font(&self) -> BuiltinFont {
        match self {
            TextStyle::Title | TextStyle::Heading => BuiltinFont::HelveticaBold,
            TextStyle::Body => BuiltinFont::Helvetica,
        }
    }
}

/// One line of text at a vertical position (points from the page bottom)
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub y: f32,
    pub style: TextStyle,
}

/// Lines drawn on one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub lines: Vec<PlacedLine>,
}

/// The whole document, page by page
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<LayoutPage>,
}

impl ReportLayout {
    /// Lay out the monthly report
    pub fn build(report: &MonthlyReport, geometry: PageGeometry, currency: &str) -> Self {
        let mut pages = vec![LayoutPage::default()];
        let mut y = geometry.top();

        place(&mut pages, &mut y, REPORT_TITLE.to_string(), TextStyle::Title);

        for month in &report.months {
            if y < geometry.margin {
                pages.push(LayoutPage::default());
                y = geometry.top();
            }

            place(
                &mut pages,
                &mut y,
                format!("Mês: {}", month.month),
                TextStyle::Heading,
            );

            for total in &month.totals {
                place(
                    &mut pages,
                    &mut y,
                    format!(
                        "{}: {} {:.2}",
                        capitalize(&total.bucket),
                        currency,
                        total.amount
                    ),
                    TextStyle::Body,
                );
            }
        }

        Self { geometry, pages }
    }
}

/// Put a line on the current (last) page and move the cursor down
fn place(pages: &mut [LayoutPage], y: &mut f32, text: String, style: TextStyle) {
    if let Some(page) = pages.last_mut() {
        page.lines.push(PlacedLine { text, y: *y, style });
    }
    *y -= style.advance();
}

/// What the renderer did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The PDF was written to this path
    Written(PathBuf),
    /// The report had no months; no file was written
    Empty,
}

/// Render the monthly report as a PDF at `path`
///
/// An empty report is not an error: nothing is written and
/// [`RenderOutcome::Empty`] is returned.
pub fn render_monthly_pdf(
    report: &MonthlyReport,
    path: &Path,
    currency: &str,
) -> ContasResult<RenderOutcome> {
    if report.is_empty() {
        return Ok(RenderOutcome::Empty);
    }

    let layout = ReportLayout::build(report, PageGeometry::A4, currency);
    write_pdf(&layout, path)?;
    info!(path = %path.display(), pages = layout.pages.len(), "rendered monthly report");

    Ok(RenderOutcome::Written(path.to_path_buf()))
}

fn write_pdf(layout: &ReportLayout, path: &Path) -> ContasResult<()> {
    let geometry = layout.geometry;
    let width = pt_to_mm(geometry.width);
    let height = pt_to_mm(geometry.height);

    let (doc, first_page, first_layer) = PdfDocument::new(REPORT_TITLE, width, height, LAYER_NAME);

    let bold = doc
        .add_builtin_font(TextStyle::Heading.font())
        .map_err(|e| ContasError::Report(format!("Failed to load font: {}", e)))?;
    let regular = doc
        .add_builtin_font(TextStyle::Body.font())
        .map_err(|e| ContasError::Report(format!("Failed to load font: {}", e)))?;

    let mut first = Some((first_page, first_layer));

    for page in &layout.pages {
        let (page_index, layer_index) = match first.take() {
            Some(indices) => indices,
            None => doc.add_page(width, height, LAYER_NAME),
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font = match line.style {
                TextStyle::Body => &regular,
                TextStyle::Title | TextStyle::Heading => &bold,
            };
            layer.use_text(
                line.text.clone(),
                line.style.font_size(),
                pt_to_mm(geometry.margin),
                pt_to_mm(line.y),
                font,
            );
        }
    }

    let file = File::create(path).map_err(|e| {
        ContasError::Report(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ContasError::Report(format!("Failed to write PDF: {}", e)))?;

    Ok(())
}

fn pt_to_mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

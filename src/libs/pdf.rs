//! PDF rendition of the assembled report document.
//!
//! Pages are drawn at absolute millimeter coordinates from the fixed
//! geometry in [`crate::libs::layout`]; there is no reflow and no
//! measurement pass. Text uses the built-in Helvetica faces, so the output
//! needs no embedded font assets.

use crate::libs::grid::{EmployeeSection, GridBlock, ReportDocument, StatusTone};
use crate::libs::layout::{
    cell_width, LABEL_COL_WIDTH_MM, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM, ROW_HEIGHT_MM,
};
use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};
use std::io::BufWriter;

const TITLE_FONT_PT: f64 = 14.0;
const COMPANY_FONT_PT: f64 = 11.0;
const META_FONT_PT: f64 = 9.0;
const SECTION_FONT_PT: f64 = 8.0;
const LABEL_FONT_PT: f64 = 6.5;
const CELL_FONT_PT: f64 = 6.0;
const FOOTER_FONT_PT: f64 = 7.0;

const SECTION_HEADER_MM: f64 = 6.0;
const BLOCK_GAP_MM: f64 = 3.0;
const SECTION_GAP_MM: f64 = 5.0;
const FOOTER_Y_MM: f64 = 6.0;

const PT_TO_MM: f64 = 0.352_778;

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Primary => Color::Rgb(Rgb::new(0.13, 0.13, 0.13, None)),
        StatusTone::Muted => Color::Rgb(Rgb::new(0.55, 0.57, 0.58, None)),
        StatusTone::Secondary => Color::Rgb(Rgb::new(0.33, 0.37, 0.40, None)),
    }
}

fn grid_line_color() -> Color {
    Color::Rgb(Rgb::new(0.78, 0.78, 0.78, None))
}

/// Rough Helvetica text width, good enough for centering and right-aligning
/// header and footer lines on a fixed page.
fn approx_text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * 0.5 * PT_TO_MM
}

fn stroke_line(layer: &PdfLayerReference, x1: f64, y1: f64, x2: f64, y2: f64) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x1 as f32), Mm(y1 as f32)), false),
            (Point::new(Mm(x2 as f32), Mm(y2 as f32)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn draw_centered(layer: &PdfLayerReference, text: &str, font_size_pt: f64, y: f64, font: &IndirectFontRef) {
    let x = (PAGE_WIDTH_MM - approx_text_width_mm(text, font_size_pt)) / 2.0;
    layer.use_text(text, font_size_pt as f32, Mm(x as f32), Mm(y as f32), font);
}

/// First-page report header: company, title, range, printed-on stamp.
/// Returns the new cursor position below the header.
fn draw_report_header(layer: &PdfLayerReference, document: &ReportDocument, bold: &IndirectFontRef, regular: &IndirectFontRef, top: f64) -> f64 {
    let mut cursor = top;

    layer.set_fill_color(tone_color(StatusTone::Primary));
    cursor -= 6.0;
    draw_centered(layer, &document.company_name, COMPANY_FONT_PT, cursor, bold);
    cursor -= 7.0;
    draw_centered(layer, &document.title, TITLE_FONT_PT, cursor, bold);
    cursor -= 5.5;
    let range = format!(
        "From {} To {}",
        document.start.format("%d-%m-%Y"),
        document.end.format("%d-%m-%Y")
    );
    draw_centered(layer, &range, META_FONT_PT, cursor, regular);
    cursor -= 5.0;
    let printed = format!("Printed on {}", document.generated_at.format("%d-%m-%Y %I:%M %p"));
    draw_centered(layer, &printed, META_FONT_PT, cursor, regular);

    cursor - 4.0
}

fn draw_footer(layer: &PdfLayerReference, document: &ReportDocument, font: &IndirectFontRef, page_number: usize, total_pages: usize) {
    layer.set_fill_color(tone_color(StatusTone::Muted));

    let stamp = document.generated_at.format("%d-%m-%Y %I:%M %p").to_string();
    layer.use_text(stamp, FOOTER_FONT_PT as f32, Mm(PAGE_MARGIN_MM as f32), Mm(FOOTER_Y_MM as f32), font);

    let counter = format!("Page {} of {}", page_number, total_pages);
    let x = PAGE_WIDTH_MM - PAGE_MARGIN_MM - approx_text_width_mm(&counter, FOOTER_FONT_PT);
    layer.use_text(counter, FOOTER_FONT_PT as f32, Mm(x as f32), Mm(FOOTER_Y_MM as f32), font);
}

/// Draws one grid block with its cell borders; returns the cursor below it.
fn draw_block(layer: &PdfLayerReference, block: &GridBlock, bold: &IndirectFontRef, regular: &IndirectFontRef, top: f64) -> f64 {
    let x0 = PAGE_MARGIN_MM;
    let cell_w = cell_width();
    let grid_right = x0 + LABEL_COL_WIDTH_MM + block.rows[0].cells.len() as f64 * cell_w;
    let row_count = block.rows.len();
    let bottom = top - row_count as f64 * ROW_HEIGHT_MM;

    for (row_index, row) in block.rows.iter().enumerate() {
        let y_text = top - row_index as f64 * ROW_HEIGHT_MM - ROW_HEIGHT_MM + 1.6;

        layer.set_fill_color(tone_color(StatusTone::Primary));
        layer.use_text(row.label, LABEL_FONT_PT as f32, Mm((x0 + 1.0) as f32), Mm(y_text as f32), bold);

        for (cell_index, cell) in row.cells.iter().enumerate() {
            if cell.text.is_empty() {
                continue;
            }
            layer.set_fill_color(tone_color(cell.tone));
            let x = x0 + LABEL_COL_WIDTH_MM + cell_index as f64 * cell_w + 0.8;
            layer.use_text(&cell.text, CELL_FONT_PT as f32, Mm(x as f32), Mm(y_text as f32), regular);
        }
    }

    // Cell borders.
    layer.set_outline_color(grid_line_color());
    layer.set_outline_thickness(0.2);
    for row_index in 0..=row_count {
        let y = top - row_index as f64 * ROW_HEIGHT_MM;
        stroke_line(layer, x0, y, grid_right, y);
    }
    stroke_line(layer, x0, top, x0, bottom);
    for col_index in 0..=block.rows[0].cells.len() {
        let x = x0 + LABEL_COL_WIDTH_MM + col_index as f64 * cell_w;
        stroke_line(layer, x, top, x, bottom);
    }

    bottom - BLOCK_GAP_MM
}

fn draw_section(layer: &PdfLayerReference, section: &EmployeeSection, bold: &IndirectFontRef, regular: &IndirectFontRef, top: f64) -> f64 {
    let mut cursor = top;

    layer.set_fill_color(tone_color(StatusTone::Primary));
    let heading = format!("{} ({})", section.employee_name, section.employee_code);
    cursor -= SECTION_HEADER_MM;
    layer.use_text(heading, SECTION_FONT_PT as f32, Mm(PAGE_MARGIN_MM as f32), Mm((cursor + 1.5) as f32), bold);

    for block in &section.blocks {
        cursor = draw_block(layer, block, bold, regular, cursor);
    }

    cursor - SECTION_GAP_MM
}

/// Renders the document into PDF bytes.
pub fn render_pdf(document: &ReportDocument) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(&document.title, Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "grid");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let total_pages = document.total_pages();
    for (page_index, page) in document.pages.iter().enumerate() {
        let (page_ref, layer_ref) = if page_index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "grid")
        };
        let layer = doc.get_page(page_ref).get_layer(layer_ref);

        let mut cursor = PAGE_HEIGHT_MM - PAGE_MARGIN_MM;
        if page_index == 0 {
            cursor = draw_report_header(&layer, document, &bold, &regular, cursor);
        }

        for section in &page.employees {
            cursor = draw_section(&layer, section, &bold, &regular, cursor);
        }

        draw_footer(&layer, document, &regular, page.number, total_pages);
    }

    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer)?;
    buffer.into_inner().map_err(|e| anyhow!("failed to flush PDF buffer: {}", e))
}

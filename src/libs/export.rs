//! Report export for the fixed-grid attendance document.
//!
//! Drives the complete pipeline from raw portal records to a file on disk:
//! grouping, date-block chunking, grid assembly, and the format-specific
//! writer. The pipeline is a pure transformation; the only validated
//! precondition is a non-empty record set, checked before any rendering
//! work starts. Individually malformed records never fail an export — they
//! degrade to placeholder cells.
//!
//! ## Export Formats
//!
//! - **PDF**: paginated fixed-geometry grid, the primary report format
//! - **Excel**: the same grid on a single worksheet with status tones as
//!   font colors
//! - **CSV**: sectioned plain-text rendition for spreadsheet import
//!
//! ## Usage
//!
//! ```rust,no_run
//! # fn main() -> anyhow::Result<()> {
//! use attrex::libs::export::{Exporter, ExportFormat};
//! use chrono::{Local, NaiveDate};
//!
//! # let records = Vec::new();
//! let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//! let exporter = Exporter::new(ExportFormat::Pdf, None, start, end);
//! exporter.export(&records, start, end, "Acme Corp", Local::now().naive_local())?;
//! # Ok(())
//! # }
//! ```

use crate::libs::attendance::{group_by_employee, AttendanceRecord};
use crate::libs::date_blocks::build_date_blocks;
use crate::libs::grid::{assemble_document, ReportDocument, StatusTone};
use crate::libs::messages::Message;
use crate::libs::pdf::render_pdf;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Paginated fixed-grid report, the format the portal dashboard offers.
    Pdf,
    /// Excel workbook with the same grid and status font colors.
    Excel,
    /// Sectioned CSV for universal spreadsheet compatibility.
    Csv,
}

/// Default output filename for a report over the given range.
///
/// Follows the dashboard's naming pattern:
/// `Attendance_Report_<DD-MM-YY>_to_<DD-MM-YY>` plus the format extension.
pub fn default_report_filename(format: ExportFormat, start: NaiveDate, end: NaiveDate) -> String {
    let extension = match format {
        ExportFormat::Pdf => "pdf",
        ExportFormat::Excel => "xlsx",
        ExportFormat::Csv => "csv",
    };
    format!(
        "Attendance_Report_{}_to_{}.{}",
        start.format("%d-%m-%y"),
        end.format("%d-%m-%y"),
        extension
    )
}

/// Export handler holding the output format and destination path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without a custom path the filename is derived
    /// from the range via [`default_report_filename`].
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, start: NaiveDate, end: NaiveDate) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_report_filename(format, start, end)));

        Self { format, output_path }
    }

    /// Runs the full export pipeline and writes the output file.
    ///
    /// Fails fast when `records` is empty — the one precondition the
    /// export validates. Everything downstream is total: unmatched dates,
    /// missing punches, and unknown statuses all render placeholders.
    pub fn export(
        &self,
        records: &[AttendanceRecord],
        start: NaiveDate,
        end: NaiveDate,
        company_name: &str,
        generated_at: NaiveDateTime,
    ) -> Result<()> {
        if records.is_empty() {
            msg_bail_anyhow!(Message::NoAttendanceData);
        }

        let groups = group_by_employee(records);
        let date_blocks = build_date_blocks(start, end);
        let document = assemble_document(&groups, &date_blocks, start, end, company_name, generated_at);

        match self.format {
            ExportFormat::Pdf => self.write_pdf(&document)?,
            ExportFormat::Excel => self.write_excel(&document)?,
            ExportFormat::Csv => self.write_csv(&document)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_pdf(&self, document: &ReportDocument) -> Result<()> {
        let bytes = render_pdf(document)?;
        fs::write(&self.output_path, bytes)?;
        Ok(())
    }

    /// Writes the grid to a single worksheet.
    ///
    /// Keeps the exact row set of the PDF blocks; status tones become font
    /// colors so the sheet mirrors the printed report.
    fn write_excel(&self, document: &ReportDocument) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let title_format = Format::new().set_bold().set_font_size(14.0);
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let label_format = Format::new().set_bold();
        let muted_format = Format::new().set_font_color(rust_xlsxwriter::Color::RGB(0x8C9194));
        let secondary_format = Format::new().set_font_color(rust_xlsxwriter::Color::RGB(0x545B62));

        worksheet.write_string_with_format(0, 0, &document.company_name, &title_format)?;
        worksheet.write_string_with_format(1, 0, &document.title, &title_format)?;
        worksheet.write_string(
            2,
            0,
            &format!("From {} To {}", document.start.format("%d-%m-%Y"), document.end.format("%d-%m-%Y")),
        )?;
        worksheet.write_string(3, 0, &format!("Printed on {}", document.generated_at.format("%d-%m-%Y %I:%M %p")))?;

        let mut row = 5;
        for page in &document.pages {
            for section in &page.employees {
                let heading = format!("{} ({})", section.employee_name, section.employee_code);
                worksheet.write_string_with_format(row, 0, &heading, &header_format)?;
                row += 1;

                for block in &section.blocks {
                    for grid_row in &block.rows {
                        worksheet.write_string_with_format(row, 0, grid_row.label, &label_format)?;
                        for (cell_index, cell) in grid_row.cells.iter().enumerate() {
                            let col = cell_index as u16 + 1;
                            match cell.tone {
                                StatusTone::Primary => worksheet.write_string(row, col, &cell.text)?,
                                StatusTone::Muted => worksheet.write_string_with_format(row, col, &cell.text, &muted_format)?,
                                StatusTone::Secondary => worksheet.write_string_with_format(row, col, &cell.text, &secondary_format)?,
                            };
                        }
                        row += 1;
                    }
                    row += 1;
                }
                row += 1;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    /// Writes the grid as sectioned CSV.
    fn write_csv(&self, document: &ReportDocument) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record([document.company_name.as_str()])?;
        wtr.write_record([
            document.title.clone(),
            format!("From {} To {}", document.start.format("%d-%m-%Y"), document.end.format("%d-%m-%Y")),
            format!("Printed on {}", document.generated_at.format("%d-%m-%Y %I:%M %p")),
        ])?;

        for page in &document.pages {
            for section in &page.employees {
                wtr.write_record([""])?;
                wtr.write_record(["Employee".to_string(), format!("{} ({})", section.employee_name, section.employee_code)])?;

                for block in &section.blocks {
                    for grid_row in &block.rows {
                        let mut record: Vec<&str> = Vec::with_capacity(grid_row.cells.len() + 1);
                        record.push(grid_row.label);
                        for cell in &grid_row.cells {
                            record.push(cell.text.as_str());
                        }
                        wtr.write_record(record)?;
                    }
                    wtr.write_record([""])?;
                }
            }
        }

        wtr.flush()?;
        Ok(())
    }
}

use crate::libs::date_blocks::DATE_BLOCK_LEN;
use crate::libs::grid::{ReportDocument, ROW_LABELS};
use anyhow::Result;
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the report as one table per employee, one row per day.
    ///
    /// The terminal view transposes the grid: the metric labels become the
    /// column headers and every real date slot becomes a row.
    pub fn report(document: &ReportDocument) -> Result<()> {
        for page in &document.pages {
            for section in &page.employees {
                println!("\n{} ({})", section.employee_name, section.employee_code);

                let mut table = Table::new();
                table.add_row(Row::new(ROW_LABELS.iter().map(|label| Cell::new(label)).collect()));

                for block in &section.blocks {
                    for slot in 0..DATE_BLOCK_LEN {
                        // Padded slots carry a blank date cell.
                        if block.rows[0].cells[slot].text.is_empty() {
                            continue;
                        }
                        table.add_row(Row::new(block.rows.iter().map(|row| Cell::new(&row.cells[slot].text)).collect()));
                    }
                }
                table.printstd();
            }
        }

        Ok(())
    }
}

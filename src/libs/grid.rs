//! Grid assembly for the date-range attendance report.
//!
//! One grid block is the rendered view of a single employee against a
//! single 31-slot date block: a fixed, ordered set of metric rows, each
//! holding a label cell plus 31 data cells aligned to the padded date
//! slots. Blocks are pure data; the PDF, Excel, CSV, and terminal writers
//! all consume the same [`ReportDocument`].

use crate::libs::attendance::{EmployeeGroup, EmployeeKey};
use crate::libs::date_blocks::pad_block;
use crate::libs::formatter::{format_clock_time, format_hours, late_flag, PLACEHOLDER};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Title string rendered on the first report page.
pub const REPORT_TITLE: &str = "Attendance Report";

/// Employees rendered per report page.
pub const EMPLOYEES_PER_PAGE: usize = 2;

/// Metric-row labels, in render order.
///
/// The portal dashboard titles the sixth row "Remain Hrs." while filling it
/// with the yes/no lateness flag; the label is kept verbatim.
pub const ROW_LABELS: [&str; 8] = ["Date", "Day", "In", "Out", "Working Hours", "Remain Hrs.", "OT", "Status"];

/// Text style bucket for a grid cell.
///
/// Status cells pick their bucket from the record's status; every other
/// cell renders in the primary tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Primary,
    Muted,
    Secondary,
}

/// Maps a raw status string onto its display tone.
///
/// Unknown and empty statuses deliberately fall back to the primary tone.
pub fn status_tone(status: &str) -> StatusTone {
    match status.trim().to_ascii_lowercase().as_str() {
        "absent" => StatusTone::Muted,
        "partial" => StatusTone::Secondary,
        _ => StatusTone::Primary,
    }
}

#[derive(Debug, Clone)]
pub struct GridCell {
    pub text: String,
    pub tone: StatusTone,
}

impl GridCell {
    fn plain(text: String) -> Self {
        Self {
            text,
            tone: StatusTone::Primary,
        }
    }
}

/// One metric row: a label plus exactly 31 data cells.
#[derive(Debug, Clone)]
pub struct GridRow {
    pub label: &'static str,
    pub cells: Vec<GridCell>,
}

/// The rendered metric rows for one employee against one date block.
#[derive(Debug, Clone)]
pub struct GridBlock {
    pub rows: Vec<GridRow>,
}

/// One employee's section: identity plus the complete block sequence.
#[derive(Debug, Clone)]
pub struct EmployeeSection {
    pub employee_name: String,
    pub employee_code: String,
    pub blocks: Vec<GridBlock>,
}

/// A printable page holding up to [`EMPLOYEES_PER_PAGE`] sections.
#[derive(Debug, Clone)]
pub struct ReportPage {
    pub number: usize,
    pub employees: Vec<EmployeeSection>,
}

/// The fully assembled report, ready for any writer.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub company_name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Wall-clock timestamp captured by the caller at export time.
    pub generated_at: NaiveDateTime,
    pub pages: Vec<ReportPage>,
}

impl ReportDocument {
    /// Total page count, as printed in every footer. Derived from the
    /// employee pagination only, never from date blocks.
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }
}

fn metric_row<F>(label: &'static str, slots: &[Option<NaiveDate>], mut cell: F) -> GridRow
where
    F: FnMut(NaiveDate) -> GridCell,
{
    let cells = slots
        .iter()
        .map(|slot| match slot {
            // Padded slots render as blank columns on every row.
            None => GridCell::plain(String::new()),
            Some(date) => cell(*date),
        })
        .collect();
    GridRow { label, cells }
}

/// Renders one employee against one date block.
///
/// The block is padded to 31 slots first so the row shape is fixed. A real
/// date without a record renders the placeholder on every value row.
pub fn render_block(group: &EmployeeGroup, dates: &[NaiveDate]) -> GridBlock {
    let slots = pad_block(dates);
    let record_at = |date: NaiveDate| group.by_date.get(&date);

    let rows = vec![
        metric_row("Date", &slots, |date| GridCell::plain(format!("{:02}", date.day()))),
        metric_row("Day", &slots, |date| GridCell::plain(date.format("%a").to_string())),
        metric_row("In", &slots, |date| {
            GridCell::plain(match record_at(date) {
                Some(record) => format_clock_time(&record.first_clock_in),
                None => PLACEHOLDER.to_string(),
            })
        }),
        metric_row("Out", &slots, |date| {
            GridCell::plain(match record_at(date) {
                Some(record) => format_clock_time(&record.last_clock_out),
                None => PLACEHOLDER.to_string(),
            })
        }),
        metric_row("Working Hours", &slots, |date| {
            GridCell::plain(match record_at(date) {
                Some(record) => format_hours(&record.hours),
                None => PLACEHOLDER.to_string(),
            })
        }),
        // Lateness flag; see the note on ROW_LABELS.
        metric_row("Remain Hrs.", &slots, |date| {
            GridCell::plain(match record_at(date) {
                Some(record) => late_flag(&record.late_hours),
                None => PLACEHOLDER.to_string(),
            })
        }),
        metric_row("OT", &slots, |date| {
            GridCell::plain(match record_at(date) {
                Some(record) => format_hours(&record.overtime_hours),
                None => PLACEHOLDER.to_string(),
            })
        }),
        metric_row("Status", &slots, |date| match record_at(date) {
            Some(record) if !record.status.trim().is_empty() => GridCell {
                text: record.status.clone(),
                tone: status_tone(&record.status),
            },
            _ => GridCell::plain(PLACEHOLDER.to_string()),
        }),
    ];

    GridBlock { rows }
}

/// Assembles the full report document.
///
/// Employees come out of the map already sorted by key. They are split into
/// fixed pages of [`EMPLOYEES_PER_PAGE`]; every employee's complete block
/// sequence stays together on their page, never interleaved with another
/// employee's blocks.
pub fn assemble_document(
    groups: &BTreeMap<EmployeeKey, EmployeeGroup>,
    date_blocks: &[Vec<NaiveDate>],
    start: NaiveDate,
    end: NaiveDate,
    company_name: &str,
    generated_at: NaiveDateTime,
) -> ReportDocument {
    let sections: Vec<EmployeeSection> = groups
        .values()
        .map(|group| EmployeeSection {
            employee_name: group.employee_name.clone(),
            employee_code: group.employee_code.clone(),
            blocks: date_blocks.iter().map(|block| render_block(group, block)).collect(),
        })
        .collect();

    let pages = sections
        .chunks(EMPLOYEES_PER_PAGE)
        .enumerate()
        .map(|(index, chunk)| ReportPage {
            number: index + 1,
            employees: chunk.to_vec(),
        })
        .collect();

    ReportDocument {
        title: REPORT_TITLE.to_string(),
        company_name: company_name.to_string(),
        start,
        end,
        generated_at,
        pages,
    }
}

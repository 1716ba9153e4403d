//! Report export command.
//!
//! Fetches the attendance records for the requested range and hands them to
//! the exporter. The output format defaults to PDF, matching the report the
//! portal dashboard produces; Excel and CSV renditions carry the same grid.
//!
//! ## Examples
//!
//! ```bash
//! # Export June as PDF with the default filename
//! attrex export --from 2024-06-01 --to 2024-06-30
//!
//! # Export a quarter to a named Excel workbook
//! attrex export --from 2024-01-01 --to 2024-03-31 --format excel --output q1.xlsx
//!
//! # Render a saved portal dump without network access
//! attrex export --from 2024-06-01 --to 2024-06-30 --input dump.json
//! ```

use crate::libs::{
    config::Config,
    export::{ExportFormat, Exporter},
    messages::Message,
};
use crate::msg_info;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Start of the date range (YYYY-MM-DD or 'today')
    #[arg(long)]
    from: String,

    /// End of the date range (YYYY-MM-DD or 'today')
    #[arg(long)]
    to: String,

    /// Output format for the report
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: ExportFormat,

    /// Custom output file path; derived from the range when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read records from a portal JSON dump instead of the portal
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Executes the export command.
///
/// The "printed on" timestamp is captured here, once per invocation, and
/// threaded through so every page of the document carries the same stamp.
pub async fn cmd(args: ExportArgs) -> Result<()> {
    let start = super::parse_date(&args.from)?;
    let end = super::parse_date(&args.to)?;

    let records = super::load_records(&args.input, start, end).await?;
    let config = Config::read()?;

    msg_info!(Message::ExportingReport(format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output, start, end);
    exporter.export(&records, start, end, &config.company_name(), Local::now().naive_local())?;

    Ok(())
}

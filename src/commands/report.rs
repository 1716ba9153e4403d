use crate::libs::{
    attendance::group_by_employee,
    config::Config,
    date_blocks::build_date_blocks,
    grid::assemble_document,
    messages::Message,
    view::View,
};
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Start of the date range (YYYY-MM-DD or 'today')
    #[arg(long)]
    from: String,
    /// End of the date range (YYYY-MM-DD or 'today')
    #[arg(long)]
    to: String,
    /// Read records from a portal JSON dump instead of the portal
    #[arg(short, long)]
    input: Option<PathBuf>,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let start = super::parse_date(&report_args.from)?;
    let end = super::parse_date(&report_args.to)?;

    let records = super::load_records(&report_args.input, start, end).await?;
    if records.is_empty() {
        msg_bail_anyhow!(Message::NoAttendanceData);
    }

    let config = Config::read()?;
    let groups = group_by_employee(&records);
    let date_blocks = build_date_blocks(start, end);
    let document = assemble_document(
        &groups,
        &date_blocks,
        start,
        end,
        &config.company_name(),
        Local::now().naive_local(),
    );

    msg_print!(
        Message::ReportHeader(start.format("%d-%m-%Y").to_string(), end.format("%d-%m-%Y").to_string()),
        true
    );
    msg_info!(Message::EmployeesInRange(groups.len()));
    View::report(&document)?;

    Ok(())
}

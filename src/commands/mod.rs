pub mod export;
pub mod init;
pub mod report;

use crate::api::Portal;
use crate::libs::attendance::AttendanceRecord;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_info};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Preview the attendance report in the terminal")]
    Report(report::ReportArgs),
    #[command(about = "Export the attendance report to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Parses a date argument supporting both 'today' and ISO format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}

/// Loads attendance records from a local JSON dump or the configured portal.
///
/// The local path takes precedence; it holds the same JSON array the portal
/// endpoint serves, so offline exports see identical data.
pub(crate) async fn load_records(input: &Option<PathBuf>, start: NaiveDate, end: NaiveDate) -> Result<Vec<AttendanceRecord>> {
    if let Some(path) = input {
        if !path.exists() {
            msg_bail_anyhow!(Message::InputFileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<AttendanceRecord> = serde_json::from_str(&raw)?;
        msg_debug!(format!("Loaded {} records from {}", records.len(), path.display()));
        return Ok(records);
    }

    let config = Config::read()?;
    let Some(portal_config) = config.portal else {
        msg_bail_anyhow!(Message::PortalNotConfigured);
    };

    msg_info!(Message::FetchingAttendance(
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string()
    ));
    let records = Portal::new(&portal_config).attendance_range(start, end).await?;
    msg_info!(Message::AttendanceReceived(records.len()));

    Ok(records)
}

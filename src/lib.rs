//! # Attrex - Attendance Report Exporter
//!
//! A command-line utility for pulling employee attendance records from an
//! HR portal and rendering fixed-grid date-range reports.
//!
//! ## Features
//!
//! - **Portal Integration**: Fetches attendance records over the portal's
//!   multipart REST endpoint
//! - **Fixed-Grid Reports**: 31-column date blocks, two employees per page,
//!   deterministic A4 landscape geometry
//! - **Report Output**: PDF, Excel, and CSV renditions of the same grid
//! - **Terminal Preview**: Per-employee day-by-day tables without leaving
//!   the shell
//! - **Offline Input**: Reads portal JSON dumps from disk for air-gapped use
//!
//! ## Usage
//!
//! ```rust,no_run
//! use attrex::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

//! Display implementation for attrex application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the terminal. Keeping every user-facing string in one place makes the
//! wording consistent and keeps format arguments type-checked at the call
//! site.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found. Run 'attrex init' first".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigSaveError => "Failed to save configuration file".to_string(),
            Message::ConfigModulePortal => "HR portal settings".to_string(),
            Message::ConfigModuleReport => "Report settings".to_string(),
            Message::PortalNotConfigured => "HR portal is not configured. Run 'attrex init' or pass --input".to_string(),

            // === PORTAL MESSAGES ===
            Message::FetchingAttendance(start, end) => {
                format!("Fetching attendance records from {} to {}", start, end)
            }
            Message::AttendanceReceived(count) => format!("Received {} attendance records", count),
            Message::PortalRequestFailed(reason) => format!("Portal request failed: {}", reason),
            Message::InputFileNotFound(path) => format!("Input file not found: {}", path),

            // === REPORT MESSAGES ===
            Message::ReportHeader(start, end) => format!("Attendance report {} - {}", start, end),
            Message::NoAttendanceData => "No attendance data available for the selected date range".to_string(),
            Message::EmployeesInRange(count) => format!("{} employees in range", count),

            // === EXPORT MESSAGES ===
            Message::ExportingReport(format) => format!("Exporting attendance report as {}", format),
            Message::ExportCompleted(path) => format!("Report written to: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the modules to configure".to_string(),
            Message::PromptPortalApiUrl => "Enter the HR portal API URL".to_string(),
            Message::PromptPortalToken => "Enter your HR portal access token".to_string(),
            Message::PromptCompanyName => "Enter the company name printed on reports".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigSaveError,
    ConfigModulePortal,
    ConfigModuleReport,
    PortalNotConfigured,

    // === PORTAL MESSAGES ===
    FetchingAttendance(String, String), // start, end
    AttendanceReceived(usize),          // record count
    PortalRequestFailed(String),        // best-effort server message
    InputFileNotFound(String),          // path

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // start, end
    NoAttendanceData,
    EmployeesInRange(usize),

    // === EXPORT MESSAGES ===
    ExportingReport(String), // format
    ExportCompleted(String), // output path

    // === PROMPTS ===
    PromptSelectModules,
    PromptPortalApiUrl,
    PromptPortalToken,
    PromptCompanyName,
}

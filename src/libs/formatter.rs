//! Cell-value formatting for the attendance grid.
//!
//! The portal stores punches and durations as loosely-typed strings, and the
//! report has a deliberate leniency policy: a value that cannot be
//! interpreted renders as a placeholder instead of failing the export. All
//! formatting here is pure string-in, string-out so the same helpers feed
//! the PDF, Excel, CSV, and terminal renditions.
//!
//! ## Format Specifications
//!
//! - **Clock times**: values already carrying `AM`/`PM` pass through
//!   unchanged; 24-hour `HH:MM[:SS]` converts to 12-hour with suffix
//!   (`13:05:00` → `1:05 PM`). Empty, `0`, or `00:00:00` means no punch.
//! - **Hour durations**: parsed as floating point and suffixed with `h`
//!   (`7.5` → `7.5h`); zero, empty, or unparseable renders the placeholder.
//! - **Lateness**: any positive `late_hours` value flags `Yes`, everything
//!   else `No`.

use chrono::NaiveTime;

/// Placeholder rendered for missing or unusable values.
pub const PLACEHOLDER: &str = "-";

/// Formats a stored punch time for display.
///
/// # Examples
///
/// ```rust
/// use attrex::libs::formatter::format_clock_time;
///
/// assert_eq!(format_clock_time("13:05:00"), "1:05 PM");
/// assert_eq!(format_clock_time("09:00 AM"), "09:00 AM");
/// assert_eq!(format_clock_time("00:00:00"), "-");
/// ```
pub fn format_clock_time(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" || raw == "00:00:00" {
        return PLACEHOLDER.to_string();
    }

    // Already formatted upstream; do not reformat.
    let upper = raw.to_ascii_uppercase();
    if upper.contains("AM") || upper.contains("PM") {
        return raw.to_string();
    }

    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| PLACEHOLDER.to_string())
}

/// Formats an hour-count string as `"<value>h"`.
///
/// The numeric value keeps the precision the portal sent; no rounding is
/// applied here.
pub fn format_hours(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value != 0.0 => format!("{}h", value),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Derives the `Yes`/`No` lateness flag from the stored late hours.
pub fn late_flag(raw: &str) -> String {
    let late = raw.trim().parse::<f64>().map(|value| value > 0.0).unwrap_or(false);
    if late { "Yes" } else { "No" }.to_string()
}

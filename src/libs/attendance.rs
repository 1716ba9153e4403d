//! Attendance records and per-employee grouping.
//!
//! The portal's attendance feed is a flat JSON array with one entry per
//! employee per day. Before anything can be rendered the feed is regrouped:
//! first by employee identity, then by calendar date, so that grid assembly
//! can look up "employee X on day Y" in constant time.
//!
//! Grouping is a pure function; every export invocation builds fresh maps
//! and discards them once the document is written.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One employee's clock data for a single calendar day, as served by the
/// portal's attendance feed.
///
/// Wire field names are preserved via serde renames, including the portal's
/// historical `attandance_*` spelling. Numeric durations arrive as strings
/// (`"7.5"`, `"0"`, `""`); interpretation happens at render time so that a
/// malformed value degrades to a placeholder cell instead of failing the
/// export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_code: String,
    /// Calendar date the record applies to, as the portal sends it.
    #[serde(default)]
    pub date: String,
    /// First punch of the day, `HH:MM:SS` or already formatted with AM/PM.
    #[serde(rename = "attandance_first_clock_in", default)]
    pub first_clock_in: String,
    /// Last punch of the day, same formats as the clock-in.
    #[serde(rename = "attandance_last_clock_out", default)]
    pub last_clock_out: String,
    /// Worked hours as a numeric string; `"0"` or empty means none.
    #[serde(rename = "attandance_hours", default)]
    pub hours: String,
    #[serde(default)]
    pub overtime_hours: String,
    #[serde(default)]
    pub late_hours: String,
    /// Free-text attendance status (`present`, `absent`, `partial`, ...).
    #[serde(default)]
    pub status: String,
}

/// Composite employee identity.
///
/// Name and code identify an employee as a pair, so `("A_1", "2")` and
/// `("A", "1_2")` are distinct employees. The derived `Ord` gives the
/// lexicographic name-then-code ordering the paginator relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeKey {
    pub name: String,
    pub code: String,
}

impl EmployeeKey {
    pub fn of(record: &AttendanceRecord) -> Self {
        Self {
            name: record.employee_name.clone(),
            code: record.employee_code.clone(),
        }
    }
}

/// All of one employee's records in the requested range, indexed by day.
#[derive(Debug, Clone, Default)]
pub struct EmployeeGroup {
    pub employee_name: String,
    pub employee_code: String,
    pub by_date: HashMap<NaiveDate, AttendanceRecord>,
}

/// Parses the portal's date field into a calendar date.
///
/// The feed mostly sends plain `YYYY-MM-DD`, but some endpoints append a
/// time-of-day. Only local calendar fields are read; there is no timezone
/// conversion that could shift a record to the neighboring day.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok().map(|dt| dt.date()))
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok().map(|dt| dt.date()))
}

/// Groups a flat record list by employee, then by date.
///
/// The group carries the name and code of the first record seen for its
/// key. When two records land on the same (employee, date) slot the later
/// one in input order wins. A record whose date does not parse can never
/// line up with a grid slot; the employee still appears in the report, with
/// that day left blank.
pub fn group_by_employee(records: &[AttendanceRecord]) -> BTreeMap<EmployeeKey, EmployeeGroup> {
    let mut groups: BTreeMap<EmployeeKey, EmployeeGroup> = BTreeMap::new();

    for record in records {
        let group = groups.entry(EmployeeKey::of(record)).or_insert_with(|| EmployeeGroup {
            employee_name: record.employee_name.clone(),
            employee_code: record.employee_code.clone(),
            by_date: HashMap::new(),
        });

        if let Some(date) = parse_record_date(&record.date) {
            group.by_date.insert(date, record.clone());
        }
    }

    groups
}

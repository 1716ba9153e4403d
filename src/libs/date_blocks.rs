//! Date-range chunking for the fixed-grid report.
//!
//! The report always renders 31 date columns per grid block, whatever the
//! month length or range size. A range is enumerated day by day, split into
//! 31-day chunks, and the final short chunk is padded with empty slots at
//! render time so every row keeps the fixed column count.

use chrono::NaiveDate;

/// Number of date slots in one grid block.
pub const DATE_BLOCK_LEN: usize = 31;

/// Splits `start..=end` into consecutive blocks of up to 31 calendar days.
///
/// Every day in the range appears exactly once, in order. An inverted range
/// yields no blocks rather than an error; the report simply comes out
/// empty-handed downstream.
pub fn build_date_blocks(start: NaiveDate, end: NaiveDate) -> Vec<Vec<NaiveDate>> {
    if start > end {
        return Vec::new();
    }

    let days: Vec<NaiveDate> = start.iter_days().take_while(|day| *day <= end).collect();
    days.chunks(DATE_BLOCK_LEN).map(|chunk| chunk.to_vec()).collect()
}

/// Pads a block to exactly [`DATE_BLOCK_LEN`] slots; trailing slots are `None`.
pub fn pad_block(dates: &[NaiveDate]) -> Vec<Option<NaiveDate>> {
    let mut slots: Vec<Option<NaiveDate>> = dates.iter().copied().map(Some).collect();
    slots.truncate(DATE_BLOCK_LEN);
    slots.resize(DATE_BLOCK_LEN, None);
    slots
}

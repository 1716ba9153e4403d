#[cfg(test)]
mod tests {
    use attrex::libs::attendance::{group_by_employee, AttendanceRecord};
    use attrex::libs::date_blocks::DATE_BLOCK_LEN;
    use attrex::libs::grid::{render_block, status_tone, StatusTone, ROW_LABELS};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn present_record(date: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_name: "Alice".to_string(),
            employee_code: "E01".to_string(),
            date: date.to_string(),
            first_clock_in: "09:00:00".to_string(),
            last_clock_out: "17:30:00".to_string(),
            hours: "7.5".to_string(),
            overtime_hours: "1".to_string(),
            late_hours: "0".to_string(),
            status: "present".to_string(),
        }
    }

    #[test]
    fn test_block_has_fixed_row_set_in_order() {
        let groups = group_by_employee(&[present_record("2024-06-01")]);
        let group = groups.values().next().unwrap();

        let block = render_block(group, &[date(2024, 6, 1)]);

        let labels: Vec<&str> = block.rows.iter().map(|row| row.label).collect();
        assert_eq!(labels, ROW_LABELS.to_vec());
        assert!(block.rows.iter().all(|row| row.cells.len() == DATE_BLOCK_LEN));
    }

    #[test]
    fn test_recorded_day_renders_formatted_values() {
        let groups = group_by_employee(&[present_record("2024-06-01")]);
        let group = groups.values().next().unwrap();

        let block = render_block(group, &[date(2024, 6, 1)]);

        assert_eq!(block.rows[0].cells[0].text, "01"); // Date
        assert_eq!(block.rows[1].cells[0].text, "Sat"); // Day
        assert_eq!(block.rows[2].cells[0].text, "9:00 AM"); // In
        assert_eq!(block.rows[3].cells[0].text, "5:30 PM"); // Out
        assert_eq!(block.rows[4].cells[0].text, "7.5h"); // Working Hours
        assert_eq!(block.rows[5].cells[0].text, "No"); // Remain Hrs. (lateness flag)
        assert_eq!(block.rows[6].cells[0].text, "1h"); // OT
        assert_eq!(block.rows[7].cells[0].text, "present"); // Status
    }

    #[test]
    fn test_day_without_record_renders_placeholders() {
        let groups = group_by_employee(&[present_record("2024-06-01")]);
        let group = groups.values().next().unwrap();

        // June 2nd is in the block but has no record.
        let block = render_block(group, &[date(2024, 6, 1), date(2024, 6, 2)]);

        assert_eq!(block.rows[0].cells[1].text, "02");
        assert_eq!(block.rows[1].cells[1].text, "Sun");
        for row in &block.rows[2..] {
            assert_eq!(row.cells[1].text, "-");
        }
    }

    #[test]
    fn test_padded_slots_render_blank_on_every_row() {
        let groups = group_by_employee(&[present_record("2024-06-01")]);
        let group = groups.values().next().unwrap();

        let block = render_block(group, &[date(2024, 6, 1)]);

        for row in &block.rows {
            for cell in &row.cells[1..] {
                assert!(cell.text.is_empty());
            }
        }
    }

    #[test]
    fn test_late_day_flags_yes() {
        let mut record = present_record("2024-06-01");
        record.late_hours = "1.25".to_string();
        let groups = group_by_employee(&[record]);
        let group = groups.values().next().unwrap();

        let block = render_block(group, &[date(2024, 6, 1)]);

        assert_eq!(block.rows[5].cells[0].text, "Yes");
    }

    #[test]
    fn test_status_tone_buckets() {
        assert_eq!(status_tone("present"), StatusTone::Primary);
        assert_eq!(status_tone("Absent"), StatusTone::Muted);
        assert_eq!(status_tone("PARTIAL"), StatusTone::Secondary);
        // Unknown and empty statuses fall back to the primary tone.
        assert_eq!(status_tone("vacation"), StatusTone::Primary);
        assert_eq!(status_tone(""), StatusTone::Primary);
    }

    #[test]
    fn test_status_cell_carries_its_tone() {
        let mut record = present_record("2024-06-01");
        record.status = "absent".to_string();
        let groups = group_by_employee(&[record]);
        let group = groups.values().next().unwrap();

        let block = render_block(group, &[date(2024, 6, 1)]);

        let status = &block.rows[7].cells[0];
        assert_eq!(status.text, "absent");
        assert_eq!(status.tone, StatusTone::Muted);
    }

    #[test]
    fn test_missing_status_renders_placeholder_with_primary_tone() {
        let mut record = present_record("2024-06-01");
        record.status = String::new();
        let groups = group_by_employee(&[record]);
        let group = groups.values().next().unwrap();

        let block = render_block(group, &[date(2024, 6, 1)]);

        let status = &block.rows[7].cells[0];
        assert_eq!(status.text, "-");
        assert_eq!(status.tone, StatusTone::Primary);
    }
}

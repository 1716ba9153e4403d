#[cfg(test)]
mod tests {
    use attrex::libs::attendance::{group_by_employee, AttendanceRecord, EmployeeKey};
    use chrono::NaiveDate;

    fn record(name: &str, code: &str, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_name: name.to_string(),
            employee_code: code.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_records_by_employee_and_date() {
        let records = vec![
            record("Alice", "E01", "2024-06-01"),
            record("Alice", "E01", "2024-06-02"),
            record("Bob", "E02", "2024-06-01"),
        ];

        let groups = group_by_employee(&records);

        assert_eq!(groups.len(), 2);
        let alice = &groups[&EmployeeKey {
            name: "Alice".to_string(),
            code: "E01".to_string(),
        }];
        assert_eq!(alice.employee_name, "Alice");
        assert_eq!(alice.employee_code, "E01");
        assert_eq!(alice.by_date.len(), 2);
        assert!(alice.by_date.contains_key(&NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(alice.by_date.contains_key(&NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()));
    }

    #[test]
    fn test_duplicate_day_keeps_last_record() {
        let mut first = record("Alice", "E01", "2024-06-01");
        first.hours = "4".to_string();
        let mut second = record("Alice", "E01", "2024-06-01");
        second.hours = "8".to_string();

        let groups = group_by_employee(&[first, second]);

        let alice = groups.values().next().unwrap();
        assert_eq!(alice.by_date.len(), 1);
        let day = alice.by_date.get(&NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap();
        // Later input wins on a duplicate (employee, date) slot.
        assert_eq!(day.hours, "8");
    }

    #[test]
    fn test_composite_key_keeps_lookalike_identities_distinct() {
        // With a concatenated string key, ("A_1", "2") and ("A", "1_2")
        // would both become "A_1_2" and merge into one employee. The
        // composite key keeps them apart.
        let records = vec![record("A_1", "2", "2024-06-01"), record("A", "1_2", "2024-06-01")];

        let groups = group_by_employee(&records);

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_sorted_iteration_order() {
        let records = vec![
            record("Charlie", "E03", "2024-06-01"),
            record("Alice", "E01", "2024-06-01"),
            record("Bob", "E02", "2024-06-01"),
        ];

        let groups = group_by_employee(&records);

        let names: Vec<&str> = groups.values().map(|g| g.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_malformed_date_drops_day_but_keeps_employee() {
        let records = vec![record("Alice", "E01", "not-a-date")];

        let groups = group_by_employee(&records);

        // The employee still shows up in the report; the record itself can
        // never match a grid slot.
        assert_eq!(groups.len(), 1);
        assert!(groups.values().next().unwrap().by_date.is_empty());
    }

    #[test]
    fn test_datetime_suffix_is_accepted() {
        let records = vec![record("Alice", "E01", "2024-06-01 08:30:00")];

        let groups = group_by_employee(&records);

        let alice = groups.values().next().unwrap();
        assert!(alice.by_date.contains_key(&NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }

    #[test]
    fn test_empty_input_builds_empty_map() {
        let groups = group_by_employee(&[]);
        assert!(groups.is_empty());
    }
}

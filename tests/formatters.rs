#[cfg(test)]
mod tests {
    use attrex::libs::formatter::{format_clock_time, format_hours, late_flag};

    #[test]
    fn test_format_clock_time_converts_24h_to_12h() {
        assert_eq!(format_clock_time("13:05:00"), "1:05 PM");
        assert_eq!(format_clock_time("09:15:00"), "9:15 AM");
        assert_eq!(format_clock_time("23:59:00"), "11:59 PM");
    }

    #[test]
    fn test_format_clock_time_noon_and_midnight_map_to_twelve() {
        assert_eq!(format_clock_time("12:00:00"), "12:00 PM");
        assert_eq!(format_clock_time("00:30:00"), "12:30 AM");
    }

    #[test]
    fn test_format_clock_time_passes_preformatted_values_through() {
        assert_eq!(format_clock_time("09:00 AM"), "09:00 AM");
        assert_eq!(format_clock_time("4:45 pm"), "4:45 pm");
    }

    #[test]
    fn test_format_clock_time_missing_punch_renders_placeholder() {
        assert_eq!(format_clock_time(""), "-");
        assert_eq!(format_clock_time("0"), "-");
        assert_eq!(format_clock_time("00:00:00"), "-");
    }

    #[test]
    fn test_format_clock_time_accepts_hours_and_minutes_only() {
        assert_eq!(format_clock_time("13:05"), "1:05 PM");
    }

    #[test]
    fn test_format_clock_time_garbage_renders_placeholder() {
        assert_eq!(format_clock_time("soon"), "-");
        assert_eq!(format_clock_time("25:00:00"), "-");
    }

    #[test]
    fn test_format_hours_keeps_source_precision() {
        assert_eq!(format_hours("7.5"), "7.5h");
        assert_eq!(format_hours("8"), "8h");
        assert_eq!(format_hours("0.25"), "0.25h");
    }

    #[test]
    fn test_format_hours_zero_and_empty_render_placeholder() {
        assert_eq!(format_hours("0"), "-");
        assert_eq!(format_hours(""), "-");
        assert_eq!(format_hours("n/a"), "-");
    }

    #[test]
    fn test_late_flag_positive_hours_flag_yes() {
        assert_eq!(late_flag("1.25"), "Yes");
        assert_eq!(late_flag("0.01"), "Yes");
    }

    #[test]
    fn test_late_flag_zero_empty_and_garbage_flag_no() {
        assert_eq!(late_flag("0"), "No");
        assert_eq!(late_flag(""), "No");
        assert_eq!(late_flag("none"), "No");
    }
}

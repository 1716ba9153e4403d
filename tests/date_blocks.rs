#[cfg(test)]
mod tests {
    use attrex::libs::date_blocks::{build_date_blocks, pad_block, DATE_BLOCK_LEN};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_splits_into_31_day_chunks() {
        // 2024-01-01..=2024-03-01 is 61 days: one full block and a 30-day tail.
        let blocks = build_date_blocks(date(2024, 1, 1), date(2024, 3, 1));

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].len(), 31);
        assert_eq!(blocks[1].len(), 30);
    }

    #[test]
    fn test_concatenated_blocks_reproduce_the_day_sequence() {
        let start = date(2024, 1, 1);
        let end = date(2024, 3, 1);
        let blocks = build_date_blocks(start, end);

        let all_days: Vec<NaiveDate> = blocks.into_iter().flatten().collect();
        let expected: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
        assert_eq!(all_days, expected);
    }

    #[test]
    fn test_short_range_is_a_single_partial_block() {
        let blocks = build_date_blocks(date(2024, 6, 1), date(2024, 6, 3));

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]);
    }

    #[test]
    fn test_single_day_range() {
        let blocks = build_date_blocks(date(2024, 6, 15), date(2024, 6, 15));

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], vec![date(2024, 6, 15)]);
    }

    #[test]
    fn test_inverted_range_yields_no_blocks() {
        let blocks = build_date_blocks(date(2024, 6, 2), date(2024, 6, 1));
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_pad_block_fills_to_fixed_width() {
        let slots = pad_block(&[date(2024, 6, 1), date(2024, 6, 2)]);

        assert_eq!(slots.len(), DATE_BLOCK_LEN);
        assert_eq!(slots[0], Some(date(2024, 6, 1)));
        assert_eq!(slots[1], Some(date(2024, 6, 2)));
        assert!(slots[2..].iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_pad_block_keeps_full_blocks_untouched() {
        let days: Vec<NaiveDate> = date(2024, 1, 1).iter_days().take(31).collect();
        let slots = pad_block(&days);

        assert_eq!(slots.len(), DATE_BLOCK_LEN);
        assert!(slots.iter().all(|slot| slot.is_some()));
    }
}

use admindash::table::{page_count, page_window, PageItem};

#[test]
fn test_page_count_is_ceiling_of_total_over_limit() {
    for total in 0u64..200 {
        for limit in 1u64..25 {
            let expected = if total == 0 { 0 } else { ((total + limit - 1) / limit) as usize };
            assert_eq!(page_count(total, limit), expected, "total {total} limit {limit}");
        }
    }
    assert_eq!(page_count(10, 0), 0);
}

#[test]
fn test_page_window_never_exceeds_budget_and_keeps_ends() {
    for total in 1usize..60 {
        for current in 0..total {
            let items = page_window(current, total, 7);
            assert!(items.len() <= 7, "total {total} current {current}: {items:?}");
            assert_eq!(items.first(), Some(&PageItem::Page(0)));
            assert_eq!(items.last(), Some(&PageItem::Page(total - 1)));
            assert!(items.contains(&PageItem::Page(current)));
        }
    }
}

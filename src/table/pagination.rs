//! Page arithmetic shared by the controller and the table footer.

/// Number of pages needed to show `total` rows, `limit` at a time.
///
/// Returns 0 when there are no rows or the limit is 0.
pub fn page_count(total: u64, limit: u64) -> usize {
    if total == 0 || limit == 0 {
        return 0;
    }
    total.div_ceil(limit) as usize
}

/// An entry of the page navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(usize),
    Ellipsis,
}

/// Page strip around `current` with at most `max_items` entries.
///
/// The first and last page are always shown; gaps are collapsed into
/// [`PageItem::Ellipsis`].
pub fn page_window(current: usize, total_pages: usize, max_items: usize) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let max_items = max_items.max(5);
    if total_pages <= max_items {
        return (0..total_pages).map(PageItem::Page).collect();
    }

    let last = total_pages - 1;
    let current = current.min(last);
    // slots left once first, last and both ellipses are placed
    let inner = max_items - 4;
    let half = inner / 2;

    let mut start = current.saturating_sub(half).max(1);
    let mut end = (start + inner).min(last);
    if end == last {
        start = end.saturating_sub(inner).max(1);
    }

    // absorb an ellipsis that would hide a single page
    if start == 2 {
        start = 1;
    }
    if end + 1 == last {
        end = last;
    }

    let mut items = vec![PageItem::Page(0)];
    if start > 1 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..end).map(PageItem::Page));
    if end < last {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(last));
    items
}

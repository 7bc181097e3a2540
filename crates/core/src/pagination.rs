//! Pagination over the filtered project list.
//!
//! Fixed page size with a sliding window of page-number buttons. All
//! helpers are pure functions over `(count, page)` so the dashboard state
//! can recompute them on every change.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of projects shown per page.
pub const PAGE_SIZE: usize = 5;

/// Number of page buttons shown in the navigation window.
pub const PAGE_WINDOW: usize = 5;

// ---------------------------------------------------------------------------
// Page math
// ---------------------------------------------------------------------------

/// Total pages for a filtered count. Zero when the list is empty.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page index into `[1, total_pages]`.
///
/// An empty list clamps to page 1 so the view always has a current page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The slice of items visible on a 1-based page.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = (page.max(1) - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// The contiguous range of page-number buttons around the current page.
///
/// Windows are aligned to multiples of [`PAGE_WINDOW`]: pages 1-5 share
/// the `{1..5}` window, pages 6-10 share `{6..10}`, and so on, truncated
/// at the last page. Empty when there are no pages.
pub fn page_window(page: usize, total_pages: usize) -> std::ops::RangeInclusive<usize> {
    let start = (page.max(1) - 1) / PAGE_WINDOW * PAGE_WINDOW + 1;
    let end = (start + PAGE_WINDOW - 1).min(total_pages);
    start..=end
}

/// 1-based `(first, last)` item positions for the "Showing X-Y of N" label.
///
/// Returns `(0, 0)` for an empty list.
pub fn showing_range(page: usize, count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let first = (page.max(1) - 1) * PAGE_SIZE + 1;
    let last = (first + PAGE_SIZE - 1).min(count);
    (first.min(count), last)
}

/// Previous page, a no-op at page 1.
pub fn prev_page(page: usize) -> usize {
    if page > 1 { page - 1 } else { page }
}

/// Next page, a no-op at the last page.
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if page < total_pages { page + 1 } else { page }
}

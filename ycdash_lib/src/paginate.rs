//! Fixed-size page slicing for table views.

use serde::Serialize;

/// Number of pages needed for `len` items, `ceil(len / page_size)`.
///
/// A zero page size has no pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Returns page `page_number` (1-indexed) of `records`.
///
/// The slice is `[(n-1)*size, n*size)` clipped to the input. Page 0, a zero
/// page size, or a page past the last one yields an empty slice; bogus page
/// numbers are not clamped here.
pub fn paginate<T>(records: &[T], page_size: usize, page_number: usize) -> &[T] {
    if page_size == 0 || page_number == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Caller-side policy: pull `page` back into `1..=total`.
///
/// Used when the filtered sequence shrinks under the current page. With no
/// pages at all the result is 1.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// One visible page plus the numbers a pager needs.
#[derive(Serialize, Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    /// Builds the page for `requested`, clamping it to the valid range first.
    pub fn clamped(records: &'a [T], page_size: usize, requested: usize) -> Self {
        let total = total_pages(records.len(), page_size);
        let number = clamp_page(requested, total);
        Page {
            items: paginate(records, page_size, number),
            number,
            total_pages: total,
            total_items: records.len(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

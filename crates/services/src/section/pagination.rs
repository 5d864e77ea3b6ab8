use std::ops::Range;

/// Entries shown per page of the question index.
pub const PAGE_SIZE: usize = 10;

/// Windowing state for the question index.
///
/// The current page is always clamped to `[0, total_pages - 1]` (or 0 when
/// there are no pages); out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
    current_page: usize,
}

/// Read-only view of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Item range of the current page (empty when there are no items).
    pub start: usize,
    pub end: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pagination {
    #[must_use]
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, PAGE_SIZE)
    }

    /// A zero page size is treated as 1.
    #[must_use]
    pub fn with_page_size(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page.saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = self
            .current_page
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        let range = self.range();
        let total_pages = self.total_pages();
        PageWindow {
            current_page: self.current_page,
            total_pages,
            page_size: self.page_size,
            start: range.start,
            end: range.end,
            has_prev: self.current_page > 0,
            has_next: self.current_page + 1 < total_pages,
        }
    }
}

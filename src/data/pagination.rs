use std::ops::{Range, RangeInclusive};

/// Page cursor over the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Current page, 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        log::debug!("Table page {} -> {page}", self.page);
        self.page = page;
    }

    /// `ceil(total / page_size)`.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Positions of the current page within a view of `total` rows.
    /// Pages past the end give an empty range.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size);
        start.min(total)..end.min(total)
    }

    /// The current page's slice of `items`.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Page numbers that get a button: none for a single page, otherwise the
    /// first `limit` pages.
    pub fn page_buttons(&self, total: usize, limit: usize) -> RangeInclusive<usize> {
        let pages = self.total_pages(total);
        let last = if pages <= 1 { 0 } else { pages.min(limit) };
        1..=last
    }
}

use serde::Serialize;

/// Records per page
pub const PAGE_SIZE: usize = 10;

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page number into the valid range. With no pages at all,
/// page 1 is still the current page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// One page of a filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Number of records in the filtered view
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Slice `page` out of `items`, clamping out-of-range pages.
    pub fn of(items: Vec<T>, page: usize) -> Self {
        let total = items.len();
        let total_pages = total_pages(total);
        let page = clamp_page(page, total_pages);
        let start = (page - 1) * PAGE_SIZE;

        let items = items.into_iter().skip(start).take(PAGE_SIZE).collect();

        Self {
            total,
            page,
            total_pages,
            items,
        }
    }

    /// Navigation is only worth showing with more than one page
    pub fn has_controls(&self) -> bool {
        self.total_pages > 1
    }
}

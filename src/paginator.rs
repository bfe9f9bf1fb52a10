//! Fixed-size pagination over the filtered list.
//!
//! The page index is 1-based and always clamped to `[1, total_pages]`, where an
//! empty list still has one (empty) page. Navigation never errors at the edges.

/// One page of the filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> PageView<'_, T> {
    /// 1-based position of the first item on this page, 0 when empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based position of the last item on this page, 0 when empty.
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages for a list length, never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// Slice `items` for the requested page, clamping the page number.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> PageView<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    PageView {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
        page_size,
    }
}

/// Current page position for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn view<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        paginate(items, self.page_size, self.page)
    }

    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, total_items: usize) -> bool {
        self.go_to(self.page + 1, total_items)
    }

    /// Go back one page; no-op on the first page.
    pub fn previous(&mut self, total_items: usize) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.go_to(self.page - 1, total_items)
    }

    /// Jump to page `n`. Out-of-range requests leave the position unchanged.
    ///
    /// Returns whether the page changed.
    pub fn go_to(&mut self, n: usize, total_items: usize) -> bool {
        let last = total_pages(total_items, self.page_size);
        if n < 1 || n > last || n == self.page {
            return false;
        }
        self.page = n;
        true
    }

    pub fn last(&mut self, total_items: usize) -> bool {
        self.go_to(total_pages(total_items, self.page_size), total_items)
    }

    /// Re-clamp after the list shrank.
    pub fn clamp(&mut self, total_items: usize) {
        self.page = self.page.clamp(1, total_pages(total_items, self.page_size));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

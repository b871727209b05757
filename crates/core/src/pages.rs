//! Fixed-size paging over loaded rows for raw data review.

/// Number of rows shown per page of raw data.
pub const PAGE_SIZE: usize = 5;

/// A contiguous slice of rows starting at `start`.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub start: usize,
    pub rows: &'a [T],
}

impl<T> Page<'_, T> {
    /// Index one past the last row of the page.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.rows.len()
    }
}

/// Walks a slice forward one page at a time. The cursor only moves when a
/// page is taken.
#[derive(Debug)]
pub struct Pager<'a, T> {
    rows: &'a [T],
    offset: usize,
    page_size: usize,
}

impl<'a, T> Pager<'a, T> {
    #[must_use]
    pub fn new(rows: &'a [T], page_size: usize) -> Self {
        Self {
            rows,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.offset < self.rows.len()
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn next_page(&mut self) -> Option<Page<'a, T>> {
        if !self.has_more() {
            return None;
        }

        let start = self.offset;
        let end = (start + self.page_size).min(self.rows.len());
        self.offset = end;

        Some(Page {
            start,
            rows: &self.rows[start..end],
        })
    }
}

impl<'a, T> Iterator for Pager<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_page()
    }
}

//! Pagination stage and page navigation.

use serde::{Deserialize, Serialize};

/// Number of pages needed for `count` rows; zero when there are no rows.
pub fn total_pages(count: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 0;
    }
    count.div_ceil(rows_per_page)
}

/// The rows of 1-based `page`, clipped to the available items.
///
/// Page 0 and pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(rows_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(rows_per_page).min(items.len());
    &items[start..end]
}

/// A page navigation request from the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRequest {
    First,
    Previous,
    Next,
    Last,
    GoTo(usize),
}

/// Current page and page size.
///
/// Navigation never validates bounds. After the filtered set shrinks the
/// current page may point past the end until [`Pagination::clamp`] is
/// called explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    rows_per_page: usize,
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            current_page: 1,
            rows_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.rows_per_page)
    }

    /// Resolve a navigation request and make it current. Returns the new page.
    pub fn navigate(&mut self, request: PageRequest, total_pages: usize) -> usize {
        self.current_page = match request {
            PageRequest::First => 1,
            PageRequest::Previous => self.current_page.saturating_sub(1),
            PageRequest::Next => self.current_page.saturating_add(1),
            PageRequest::Last => total_pages,
            PageRequest::GoTo(page) => page,
        };
        self.current_page
    }

    /// Pull the current page back into `[1, max(1, total_pages)]`.
    pub fn clamp(&mut self, count: usize) -> usize {
        let last = self.total_pages(count).max(1);
        self.current_page = self.current_page.clamp(1, last);
        self.current_page
    }

    /// Slice the current page out of `items`.
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.rows_per_page)
    }

    /// Page numbers a pager renders as buttons.
    pub fn page_numbers(&self, count: usize) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages(count)
    }

    pub fn is_active(&self, page: usize) -> bool {
        self.current_page == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_paginate_clips_last_page() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn test_navigation_has_no_bounds() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.navigate(PageRequest::Previous, 3), 0);
        assert_eq!(pagination.navigate(PageRequest::Previous, 3), 0);
        assert_eq!(pagination.navigate(PageRequest::GoTo(7), 3), 7);
        assert_eq!(pagination.navigate(PageRequest::Next, 3), 8);
        assert_eq!(pagination.navigate(PageRequest::Last, 3), 3);
        assert_eq!(pagination.navigate(PageRequest::First, 3), 1);
    }

    #[test]
    fn test_last_on_empty_set_is_page_zero() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.navigate(PageRequest::Last, 0), 0);
        assert!(pagination.page::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_clamp() {
        let mut pagination = Pagination::new(10);
        pagination.navigate(PageRequest::GoTo(3), 3);
        assert_eq!(pagination.clamp(5), 1);

        pagination.navigate(PageRequest::GoTo(0), 1);
        assert_eq!(pagination.clamp(0), 1);
    }

    #[test]
    fn test_page_numbers() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.page_numbers(25).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pagination.page_numbers(0).count(), 0);
        assert!(pagination.is_active(1));
    }
}

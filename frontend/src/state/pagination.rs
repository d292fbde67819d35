//! Page bookkeeping shared by the server-paginated and client-paginated tables.

/// Current page, page count and page size.
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    total_pages: usize,
    /// `None` when the server slices the pages.
    items_per_page: Option<usize>,
}

impl PaginationState {
    /// Client-side pagination, `items_per_page` items per page.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            items_per_page: Some(items_per_page.max(1)),
        }
    }

    /// Pagination whose page count comes from the server and whose rows
    /// arrive one page at a time.
    pub fn server_paged() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            items_per_page: None,
        }
    }

    /// Pagination over `len` locally held items, positioned on page 1.
    pub fn for_items(len: usize, items_per_page: usize) -> Self {
        let mut state = Self::new(items_per_page);
        state.set_item_count(len);
        state
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn items_per_page(&self) -> Option<usize> {
        self.items_per_page
    }

    pub fn is_server_paged(&self) -> bool {
        self.items_per_page.is_none()
    }

    /// Adopt the page count reported by the server, clamping the current page.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Recompute the page count for `len` locally held items.
    ///
    /// Server-paged state keeps the count the server last reported.
    pub fn set_item_count(&mut self, len: usize) {
        if let Some(per_page) = self.items_per_page {
            self.set_total_pages(len.div_ceil(per_page));
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `page` if it lies in `[1, total_pages]`.
    ///
    /// Returns the page moved to, or `None` when the request was ignored.
    /// Moving to the page already shown still counts as a move.
    pub fn go_to(&mut self, page: usize) -> Option<usize> {
        if page < 1 || page > self.total_pages {
            return None;
        }
        self.current_page = page;
        Some(page)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Whether page navigation is worth showing at all.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    /// Items of the current page out of a locally held list.
    ///
    /// Server-paged state holds only the current page, so all of it is shown.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Some(per_page) = self.items_per_page else {
            return items;
        };
        let start = (self.current_page - 1) * per_page;
        if start >= items.len() {
            return &[];
        }
        let end = (start + per_page).min(items.len());
        &items[start..end]
    }

    /// "Page X of Y" label.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut state = PaginationState::new(10);
        state.set_total_pages(4);

        assert_eq!(state.go_to(0), None);
        assert_eq!(state.go_to(5), None);
        assert_eq!(state.current_page(), 1);

        assert_eq!(state.go_to(3), Some(3));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.go_to(3), Some(3));
    }

    #[test]
    fn test_shrinking_total_clamps_current_page() {
        let mut state = PaginationState::new(10);
        state.set_total_pages(6);
        state.go_to(6);
        state.set_total_pages(2);
        assert_eq!(state.current_page(), 2);

        state.set_total_pages(0);
        assert_eq!(state.current_page(), 1);
        assert!(!state.has_multiple_pages());
    }

    #[test]
    fn test_client_side_slices() {
        let items: Vec<u32> = (1..=12).collect();
        let mut state = PaginationState::for_items(items.len(), 5);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_of(&items), &[1, 2, 3, 4, 5]);

        state.next();
        state.next();
        assert_eq!(state.page_of(&items), &[11, 12]);
        assert!(state.is_last());
        assert_eq!(state.next(), None);

        state.previous();
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.label(), "Page 2 of 3");
    }

    #[test]
    fn test_server_paged_shows_the_page_it_was_sent() {
        let rows: Vec<u32> = (21..=30).collect();
        let mut state = PaginationState::server_paged();
        assert!(state.is_server_paged());
        assert_eq!(state.items_per_page(), None);

        state.set_total_pages(5);
        state.go_to(3);
        state.set_item_count(rows.len());
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.page_of(&rows), rows.as_slice());
    }

    #[test]
    fn test_empty_list() {
        let state = PaginationState::for_items(0, 5);
        let items: Vec<u32> = Vec::new();
        assert_eq!(state.current_page(), 1);
        assert!(state.page_of(&items).is_empty());
        assert_eq!(state.label(), "Page 1 of 1");
    }
}

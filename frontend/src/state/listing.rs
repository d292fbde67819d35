//! Server-paginated listing of dissected test cases.
//!
//! Every navigation yields a [`PageRequest`] that the view sends as-is;
//! pages are never cached, so going back re-fetches.

use crate::state::PaginationState;
use crate::types::{DissectResponse, FileReference, TestCaseRow};

/// What to ask the dissect endpoint for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    /// One page, 1-based.
    Page(usize),
    /// Every row at once.
    All,
}

impl PageRequest {
    /// Query parameter selecting this request: `page=N` or `all=true`.
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            PageRequest::Page(page) => ("page", page.to_string()),
            PageRequest::All => ("all", "true".to_string()),
        }
    }
}

/// View state of the dissected table.
#[derive(Clone, Debug, PartialEq)]
pub struct DissectListing {
    rows: Vec<TestCaseRow>,
    pagination: PaginationState,
    show_all: bool,
    processed_file_url: Option<FileReference>,
}

impl Default for DissectListing {
    fn default() -> Self {
        Self::new()
    }
}

impl DissectListing {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            pagination: PaginationState::server_paged(),
            show_all: false,
            processed_file_url: None,
        }
    }

    fn current_request(&self) -> PageRequest {
        if self.show_all {
            PageRequest::All
        } else {
            PageRequest::Page(self.pagination.current_page())
        }
    }

    /// Start over on page 1 in the current mode, e.g. for a new file.
    pub fn open(&mut self) -> PageRequest {
        self.pagination.reset();
        self.current_request()
    }

    /// Flip between paged and "show all" mode, back on page 1.
    pub fn toggle_show_all(&mut self) -> PageRequest {
        self.show_all = !self.show_all;
        self.open()
    }

    /// Navigate to `page`; `None` when out of range or in "show all" mode.
    pub fn go_to(&mut self, page: usize) -> Option<PageRequest> {
        if self.show_all {
            return None;
        }
        self.pagination.go_to(page).map(PageRequest::Page)
    }

    /// Store a dissect response. The last response applied wins.
    pub fn apply(&mut self, response: DissectResponse) {
        self.rows = response.data;
        if !self.show_all {
            if let Some(total) = response.total_pages {
                self.pagination.set_total_pages(total);
            }
        }
        if let Some(url) = response.processed_file_url.and_then(FileReference::non_empty) {
            self.processed_file_url = Some(url);
        }
    }

    pub fn rows(&self) -> &[TestCaseRow] {
        &self.rows
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn processed_file_url(&self) -> Option<&FileReference> {
        self.processed_file_url.as_ref()
    }

    /// Pagination controls appear only in paged mode with more than one page.
    pub fn shows_pagination(&self) -> bool {
        !self.show_all && self.pagination.has_multiple_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(rows: usize, total_pages: Option<usize>) -> DissectResponse {
        DissectResponse {
            data: (0..rows)
                .map(|i| TestCaseRow {
                    test_case_id: format!("TC-{i}"),
                    ..Default::default()
                })
                .collect(),
            total_pages,
            current_page: Some(1),
            processed_file_url: Some("/media/dissected.csv".into()),
        }
    }

    #[test]
    fn test_single_page_hides_controls() {
        let mut listing = DissectListing::new();
        assert_eq!(listing.open(), PageRequest::Page(1));
        listing.apply(response(2, Some(1)));

        assert_eq!(listing.rows().len(), 2);
        assert!(!listing.shows_pagination());
        assert_eq!(
            listing.processed_file_url().map(FileReference::as_str),
            Some("/media/dissected.csv")
        );
    }

    #[test]
    fn test_page_count_comes_from_the_server() {
        let mut listing = DissectListing::new();
        assert!(listing.pagination().is_server_paged());

        listing.open();
        listing.apply(response(25, Some(7)));
        assert_eq!(listing.pagination().total_pages(), 7);
        assert_eq!(listing.pagination().page_of(listing.rows()).len(), 25);
    }

    #[test]
    fn test_navigation_issues_one_request_per_valid_move() {
        let mut listing = DissectListing::new();
        listing.open();
        listing.apply(response(10, Some(3)));
        assert!(listing.shows_pagination());

        assert_eq!(listing.go_to(0), None);
        assert_eq!(listing.go_to(4), None);
        assert_eq!(listing.go_to(2), Some(PageRequest::Page(2)));
        assert_eq!(listing.pagination().current_page(), 2);
        // Going back is a fresh request, nothing is cached.
        assert_eq!(listing.go_to(1), Some(PageRequest::Page(1)));
    }

    #[test]
    fn test_show_all_resets_to_first_page() {
        let mut listing = DissectListing::new();
        listing.open();
        listing.apply(response(10, Some(3)));
        listing.go_to(3);

        let request = listing.toggle_show_all();
        assert_eq!(request, PageRequest::All);
        assert_eq!(request.query_pair(), ("all", "true".to_string()));
        assert_eq!(listing.pagination().current_page(), 1);
        assert!(!listing.shows_pagination());
        assert_eq!(listing.go_to(2), None);

        listing.apply(response(25, None));
        assert_eq!(listing.rows().len(), 25);

        let request = listing.toggle_show_all();
        assert_eq!(request, PageRequest::Page(1));
        assert_eq!(request.query_pair(), ("page", "1".to_string()));
    }
}

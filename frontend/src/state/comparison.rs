//! In-memory search, facet filter and pagination over comparison results.
//!
//! The full result set is fetched once; every filter change is applied
//! locally and puts the table back on page 1.

use std::collections::BTreeSet;

use crate::config::COMPARISON_RESULTS_PER_PAGE;
use crate::state::PaginationState;
use crate::types::ComparisonResult;

/// Free-text search plus an optional exact transaction-type facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonFilter {
    pub search: String,
    pub transaction_type: Option<String>,
}

impl ComparisonFilter {
    pub fn matches(&self, result: &ComparisonResult) -> bool {
        if let Some(kind) = &self.transaction_type {
            if &result.transaction_type != kind {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &result.transaction_type,
            &result.test_case_1,
            &result.test_case_2,
            &result.differences,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonBrowser {
    results: Vec<ComparisonResult>,
    filter: ComparisonFilter,
    pagination: PaginationState,
}

impl Default for ComparisonBrowser {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ComparisonBrowser {
    pub fn new(results: Vec<ComparisonResult>) -> Self {
        let mut browser = Self {
            results,
            filter: ComparisonFilter::default(),
            pagination: PaginationState::new(COMPARISON_RESULTS_PER_PAGE),
        };
        browser.refilter();
        browser
    }

    /// Replace the result set, keeping the current filter.
    pub fn set_results(&mut self, results: Vec<ComparisonResult>) {
        self.results = results;
        self.refilter();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.refilter();
    }

    /// `None` or an empty string clears the facet.
    pub fn set_transaction_type(&mut self, kind: Option<String>) {
        self.filter.transaction_type = kind.filter(|k| !k.is_empty());
        self.refilter();
    }

    fn refilter(&mut self) {
        let count = self.filtered().len();
        self.pagination.set_item_count(count);
        self.pagination.reset();
    }

    pub fn filter(&self) -> &ComparisonFilter {
        &self.filter
    }

    pub fn results(&self) -> &[ComparisonResult] {
        &self.results
    }

    pub fn filtered(&self) -> Vec<&ComparisonResult> {
        self.results.iter().filter(|r| self.filter.matches(r)).collect()
    }

    /// Rows of the current page of the filtered set.
    pub fn page(&self) -> Vec<&ComparisonResult> {
        let filtered = self.filtered();
        self.pagination.page_of(&filtered).to_vec()
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn go_to(&mut self, page: usize) -> Option<usize> {
        self.pagination.go_to(page)
    }

    /// Distinct transaction types of the whole set, sorted, for the facet.
    pub fn transaction_types(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| r.transaction_type.clone())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Extra column names, taken from the first result.
    pub fn extra_columns(&self) -> Vec<String> {
        self.results
            .first()
            .map(|r| r.extra.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: &str, tc1: &str, tc2: &str, diff: &str) -> ComparisonResult {
        ComparisonResult {
            transaction_type: kind.into(),
            test_case_1: tc1.into(),
            test_case_2: tc2.into(),
            differences: diff.into(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ComparisonResult> {
        vec![
            result("VISA Sale", "TC-1", "TC-2", "amount"),
            result("Refund", "TC-3", "TC-4", "card: Visa vs Amex"),
            result("Refund", "TC-5", "TC-6", "currency"),
            result("Void", "visa-7", "TC-8", ""),
            result("Void", "TC-9", "TC-10", "none"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_across_four_fields() {
        let mut browser = ComparisonBrowser::new(sample());
        browser.set_search("visa");

        let ids: Vec<&str> = browser.filtered().iter().map(|r| r.test_case_1.as_str()).collect();
        assert_eq!(ids, vec!["TC-1", "TC-3", "visa-7"]);
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        let mut browser = ComparisonBrowser::new(vec![
            result("Sale", "TC-1", "TC-2", "visa card"),
            result("Sale", "TC-3", "TC-4", "visa"),
            result("Sale", "TC-5", "TC-6", "amex"),
        ]);

        browser.set_search("visa ");
        let ids: Vec<&str> = browser.filtered().iter().map(|r| r.test_case_1.as_str()).collect();
        assert_eq!(ids, vec!["TC-1"]);

        browser.set_search(" ");
        assert_eq!(browser.filtered().len(), 1);

        browser.set_search("");
        assert_eq!(browser.filtered().len(), 3);
    }

    #[test]
    fn test_facet_is_exact_and_combines_with_search() {
        let mut browser = ComparisonBrowser::new(sample());
        browser.set_transaction_type(Some("Refund".into()));
        assert_eq!(browser.filtered().len(), 2);

        browser.set_search("VISA");
        assert_eq!(browser.filtered().len(), 1);
        assert_eq!(browser.filtered()[0].test_case_1, "TC-3");

        browser.set_transaction_type(Some("refund".into()));
        assert!(browser.filtered().is_empty());

        browser.set_transaction_type(Some(String::new()));
        assert_eq!(browser.filter().transaction_type, None);
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        let results: Vec<ComparisonResult> = (0..35)
            .map(|i| result("Sale", &format!("TC-{i}"), "TC-X", if i % 2 == 0 { "visa" } else { "" }))
            .collect();
        let mut browser = ComparisonBrowser::new(results);
        assert_eq!(browser.pagination().total_pages(), 4);

        browser.go_to(3);
        assert_eq!(browser.pagination().current_page(), 3);

        browser.set_search("visa");
        assert_eq!(browser.pagination().current_page(), 1);
        assert_eq!(browser.pagination().total_pages(), 2);
        assert_eq!(browser.page().len(), 10);

        browser.go_to(2);
        browser.set_transaction_type(Some("Sale".into()));
        assert_eq!(browser.pagination().current_page(), 1);
    }

    #[test]
    fn test_transaction_types_are_distinct_and_sorted() {
        let browser = ComparisonBrowser::new(sample());
        assert_eq!(browser.transaction_types(), vec!["Refund", "VISA Sale", "Void"]);
    }
}

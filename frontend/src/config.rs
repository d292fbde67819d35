//! Application configuration.
//!
//! Centralized configuration for the Caseflow frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The analysis backend serving uploads, dissection, labeling and comparison.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "Caseflow";

/// File types offered by the native file pickers.
pub const ACCEPTED_FILE_TYPES: &str = ".csv,.xlsx,.xls";

/// Rows per page of the pre-processed results table.
pub const PREPROCESS_RESULTS_PER_PAGE: usize = 5;

/// Rows per page of the comparison results table.
pub const COMPARISON_RESULTS_PER_PAGE: usize = 10;

/// Maximum activity log entries to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

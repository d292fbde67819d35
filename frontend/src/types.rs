//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Reference Types** - Opaque backend file references
//! - **Row Types** - Test cases, mappings, comparisons, feedback
//! - **API Types** - Request and response bodies of the backend endpoints
//! - **Log Types** - Activity log entries
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Reference Types
// =============================================================================

/// Opaque reference to a file stored on the backend.
///
/// Created from an upload or processing response and passed forward
/// untouched. The wrapped string is exactly what the server returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference(String);

impl FileReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `None` for an empty reference, which the backend uses for "absent".
    pub fn non_empty(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        if url.is_empty() {
            None
        } else {
            Some(Self(url))
        }
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Row Types
// =============================================================================

/// Render a JSON cell the way the tables display it.
///
/// `null` becomes an empty cell, strings are shown unquoted.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accept strings, numbers, booleans or null where a display string is expected.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(display_value(&value))
}

/// A single dissected test case.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCaseRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub test_case_id: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "Transactions", default, deserialize_with = "lenient_string")]
    pub transactions: String,
}

/// One row of the transaction summary editor.
///
/// `transaction` and `count` come from the backend; `target` is edited locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionMappingEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub transaction: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub target: String,
}

impl TransactionMappingEntry {
    /// Chosen target, or the transaction name itself when none is chosen.
    pub fn effective_target(&self) -> &str {
        if self.target.is_empty() {
            &self.transaction
        } else {
            &self.target
        }
    }
}

/// A pairwise comparison between two test cases sharing a transaction type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(rename = "Transaction_Type", default, deserialize_with = "lenient_string")]
    pub transaction_type: String,
    #[serde(
        rename = "Test_Case_1",
        alias = "Test Case 1",
        default,
        deserialize_with = "lenient_string"
    )]
    pub test_case_1: String,
    #[serde(
        rename = "Test_Case_2",
        alias = "Test Case 2",
        default,
        deserialize_with = "lenient_string"
    )]
    pub test_case_2: String,
    #[serde(rename = "Differences", default, deserialize_with = "lenient_string")]
    pub differences: String,
    /// Additional columns (similarity scores, containment, ...) in server order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A feedback row: column name to cell value, in server order.
pub type FeedbackRow = Map<String, Value>;

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .iter()
        .filter(|v| !v.is_null())
        .map(display_value)
        .collect())
}

// =============================================================================
// API Types
// =============================================================================

/// Error body returned by the backend on non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from the upload endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_url: FileReference,
}

/// Response from the dissect endpoint, paged or full.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DissectResponse {
    #[serde(default)]
    pub data: Vec<TestCaseRow>,
    /// Absent in "all" mode.
    #[serde(default)]
    pub total_pages: Option<usize>,
    #[serde(default)]
    pub current_page: Option<usize>,
    #[serde(default)]
    pub processed_file_url: Option<String>,
}

/// Body of the label processing request.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessLabelsRequest<'a> {
    pub csv_file_url: &'a FileReference,
    pub metadata_url: &'a FileReference,
}

/// Response from label processing and test-case pre-processing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub processed_file_url: Option<String>,
}

/// Mapped, unmapped and baseline transaction names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummaryResponse {
    #[serde(default)]
    pub mapped: Vec<TransactionMappingEntry>,
    #[serde(default)]
    pub unmapped: Vec<TransactionMappingEntry>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub baselined: Vec<String>,
}

/// One source-to-target rename submitted with the edited summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub source_transaction: String,
    pub target_transaction: String,
}

/// Body of the summary update request.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateSummaryRequest<'a> {
    pub csv_file_url: &'a FileReference,
    pub metadata_url: &'a FileReference,
    pub synonyms: Vec<Synonym>,
}

/// Response from the summary update endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateSummaryResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub updated_csv: Option<String>,
    #[serde(default)]
    pub processed_file_url: Option<String>,
}

/// Which transaction group to pre-process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Mapped,
    Unmapped,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Mapped => "Mapped",
            TransactionType::Unmapped => "Unmapped",
        }
    }
}

/// Body of the pre-processing request.
#[derive(Clone, Debug, Serialize)]
pub struct PreProcessRequest {
    pub transaction_type: TransactionType,
}

/// Response listing pre-processed test cases.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProcessedTestCasesResponse {
    #[serde(default)]
    pub processed_data: Option<Vec<TestCaseRow>>,
}

/// Response from the comparison endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ComparisonResponse {
    #[serde(default)]
    pub comparison_results: Option<Vec<ComparisonResult>>,
    #[serde(default)]
    pub comparison_results_file: Option<String>,
    #[serde(default)]
    pub excel_output_path: Option<String>,
}

/// Response from the feedback upload endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeedbackUploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub feedback_json: Option<Vec<FeedbackRow>>,
}

/// Body of the save-feedback request.
#[derive(Clone, Debug, Serialize)]
pub struct SaveFeedbackRequest<'a> {
    pub feedback_json: &'a [FeedbackRow],
}

/// Generic acknowledgement.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl AckResponse {
    /// The server message, or `fallback` when it is absent or blank.
    pub fn message_or(self, fallback: &str) -> String {
        self.message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Activity log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }
}

/// A single activity log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Flat taxonomy: every variant is rendered inline as a single message.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submit pressed without choosing a file.
    #[error("Please select a file.")]
    NoFileSelected,

    /// A prerequisite reference or input is missing.
    #[error("{0}")]
    MissingInput(String),

    /// Upload rejected by the backend.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Any other backend request rejected or unreadable.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Request never reached the backend.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered without the expected data.
    #[error("No {0} found.")]
    NoData(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_accepts_numbers_and_nulls() {
        let json = r#"{"test_case_id": 42, "Description": null, "Transactions": "Visa Sale|Refund"}"#;
        let row: TestCaseRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.test_case_id, "42");
        assert_eq!(row.description, "");
        assert_eq!(row.transactions, "Visa Sale|Refund");
    }

    #[test]
    fn test_mapping_entry_target_fallback() {
        let json = r#"[{"transaction": "Sale", "count": 3}, {"transaction": "Refund", "count": 1, "target": "Return"}]"#;
        let entries: Vec<TransactionMappingEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].target, "");
        assert_eq!(entries[0].effective_target(), "Sale");
        assert_eq!(entries[1].effective_target(), "Return");
    }

    #[test]
    fn test_comparison_result_aliases_and_extra_columns() {
        let json = r#"{
            "Transaction_Type": "Sale",
            "Test Case 1": "TC-1",
            "Test Case 2": 7,
            "Similarity Score": 0.91,
            "Profile": "Gold"
        }"#;
        let result: ComparisonResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.test_case_1, "TC-1");
        assert_eq!(result.test_case_2, "7");
        assert_eq!(result.differences, "");
        let keys: Vec<&String> = result.extra.keys().collect();
        assert_eq!(keys, vec!["Similarity Score", "Profile"]);
    }

    #[test]
    fn test_file_reference_is_untouched() {
        let reference: FileReference = serde_json::from_str(r#""/media/My File (1).csv""#).unwrap();
        assert_eq!(reference.as_str(), "/media/My File (1).csv");
        assert!(FileReference::non_empty("").is_none());
    }

    #[test]
    fn test_summary_response_deserialization() {
        let json = r#"{
            "mapped": [{"transaction": "Visa Sale", "count": 4}],
            "unmapped": [{"transaction": "Amex Refnd", "count": 1}],
            "baselined": ["Sale", "Refund", null, 3]
        }"#;
        let summary: TransactionSummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(summary.mapped[0].count, 4);
        assert_eq!(summary.unmapped[0].transaction, "Amex Refnd");
        assert_eq!(summary.baselined, vec!["Sale", "Refund", "3"]);
    }

    #[test]
    fn test_pre_process_request_serialization() {
        let body = PreProcessRequest {
            transaction_type: TransactionType::Unmapped,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"transaction_type":"unmapped"}"#
        );
    }

    #[test]
    fn test_ack_message_falls_back_when_missing() {
        let ack: AckResponse = serde_json::from_str(r#"{"message": "Saved 3 rows"}"#).unwrap();
        assert_eq!(ack.message_or("Feedback saved successfully."), "Saved 3 rows");

        let ack: AckResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.message_or("Feedback saved successfully."), "Feedback saved successfully.");

        let ack: AckResponse = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert_eq!(ack.message_or("Feedback saved successfully."), "Feedback saved successfully.");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::NoFileSelected.to_string(), "Please select a file.");
        assert_eq!(
            AppError::Upload("No file provided.".into()).to_string(),
            "Upload failed: No file provided."
        );
        assert_eq!(AppError::NoData("processed data".into()).to_string(), "No processed data found.");
    }
}

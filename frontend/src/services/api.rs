//! HTTP client for the analysis backend.
//!
//! URL construction is plain string work so it can be tested natively;
//! the async request methods go through `gloo-net`.

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BACKEND_URL;
use crate::state::PageRequest;
use crate::types::{
    AckResponse, AppError, AppResult, ComparisonResponse, DissectResponse, ErrorBody, FeedbackRow,
    FileReference, PreProcessRequest, ProcessLabelsRequest, ProcessResponse, ProcessedTestCasesResponse,
    SaveFeedbackRequest, Synonym, TestCaseRow, TransactionSummaryResponse, TransactionType,
    UpdateSummaryRequest, UpdateSummaryResponse,
};

/// Characters left as-is in query values, same as `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Append percent-encoded `key=value` pairs to `path`.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

/// Message to show for a failed response.
///
/// Prefers the backend's `{"error": "..."}` body, else the status code.
pub fn server_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Decode a JSON response, turning non-2xx answers into `on_error`.
pub(crate) async fn read_json<T>(response: Response, on_error: fn(String) -> AppError) -> AppResult<T>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(on_error(server_message(status, &body)));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Fetch(format!("invalid response: {}", e)))
}

pub(crate) fn network_error(error: gloo_net::Error) -> AppError {
    AppError::Network(error.to_string())
}

/// Backend API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path such as `/api/upload/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn dissect_url(&self, file: &FileReference, request: PageRequest) -> String {
        let (key, value) = request.query_pair();
        with_query(
            &self.endpoint("/api/dissect-test-cases/"),
            &[("file_url", file.as_str().to_string()), (key, value)],
        )
    }

    pub fn summary_url(&self, metadata: &FileReference, processed: &FileReference) -> String {
        with_query(
            &self.endpoint("/api/get-transaction-summary/"),
            &[
                ("metadata_url", metadata.as_str().to_string()),
                ("processed_file_url", processed.as_str().to_string()),
            ],
        )
    }

    pub fn processed_test_cases_url(&self, file: &FileReference) -> String {
        with_query(
            &self.endpoint("/api/get-processed-test-cases/"),
            &[("file_url", file.as_str().to_string())],
        )
    }

    pub fn comparison_url(&self, file: &FileReference) -> String {
        with_query(
            &self.endpoint("/api/compare-test-cases/"),
            &[("file_url", file.as_str().to_string())],
        )
    }

    /// Link streaming a backend file as a download.
    pub fn download_url(&self, file: &FileReference) -> String {
        with_query(&self.endpoint("/download/"), &[("file_url", file.as_str().to_string())])
    }

    /// Link to a generated artefact served from the media directory.
    pub fn media_url(&self, name: &str) -> String {
        self.endpoint(&format!("/media/{}", name.trim_start_matches('/')))
    }

    async fn get_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("GET {}", url);
        let response = Request::get(url).send().await.map_err(network_error)?;
        read_json(response, AppError::Fetch).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        log::debug!("POST {}", url);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| AppError::Fetch(format!("failed to build request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response, AppError::Fetch).await
    }

    /// One page, or all rows, of the dissected test cases.
    pub async fn dissect(&self, file: &FileReference, request: PageRequest) -> AppResult<DissectResponse> {
        self.get_json(&self.dissect_url(file, request)).await
    }

    /// Label the dissected file against the metadata baseline.
    pub async fn process_labels(&self, csv_file: &FileReference, metadata: &FileReference) -> AppResult<ProcessResponse> {
        let body = ProcessLabelsRequest {
            csv_file_url: csv_file,
            metadata_url: metadata,
        };
        self.post_json("/api/process-labels/", &body).await
    }

    pub async fn transaction_summary(
        &self,
        metadata: &FileReference,
        processed: &FileReference,
    ) -> AppResult<TransactionSummaryResponse> {
        self.get_json(&self.summary_url(metadata, processed)).await
    }

    /// Submit the edited mapping as a synonym list.
    pub async fn update_transaction_summary(
        &self,
        csv_file: &FileReference,
        metadata: &FileReference,
        synonyms: Vec<Synonym>,
    ) -> AppResult<UpdateSummaryResponse> {
        let body = UpdateSummaryRequest {
            csv_file_url: csv_file,
            metadata_url: metadata,
            synonyms,
        };
        self.post_json("/api/update-transaction-summary/", &body).await
    }

    pub async fn pre_process(&self, transaction_type: TransactionType) -> AppResult<ProcessResponse> {
        self.post_json("/api/pre-process-test-cases/", &PreProcessRequest { transaction_type })
            .await
    }

    pub async fn processed_test_cases(&self, file: &FileReference) -> AppResult<Vec<TestCaseRow>> {
        let response: ProcessedTestCasesResponse = self.get_json(&self.processed_test_cases_url(file)).await?;
        response
            .processed_data
            .ok_or_else(|| AppError::NoData("processed data".to_string()))
    }

    pub async fn compare(&self, file: &FileReference) -> AppResult<ComparisonResponse> {
        let response: ComparisonResponse = self.get_json(&self.comparison_url(file)).await?;
        if response.comparison_results.is_none() {
            return Err(AppError::NoData("comparison results".to_string()));
        }
        Ok(response)
    }

    /// Send the whole edited feedback grid in one request.
    pub async fn save_feedback(&self, rows: &[FeedbackRow]) -> AppResult<AckResponse> {
        if rows.is_empty() {
            return Err(AppError::MissingInput("No data to save.".to_string()));
        }
        self.post_json("/api/save-feedback/", &SaveFeedbackRequest { feedback_json: rows })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dissect_url_switches_between_page_and_all() {
        let api = ApiClient::new("http://localhost:8000/");
        let file = FileReference::new("/media/test cases.csv");

        assert_eq!(
            api.dissect_url(&file, PageRequest::Page(2)),
            "http://localhost:8000/api/dissect-test-cases/?file_url=%2Fmedia%2Ftest%20cases.csv&page=2"
        );
        assert_eq!(
            api.dissect_url(&file, PageRequest::All),
            "http://localhost:8000/api/dissect-test-cases/?file_url=%2Fmedia%2Ftest%20cases.csv&all=true"
        );
    }

    #[test]
    fn test_summary_and_download_urls() {
        let api = ApiClient::default();
        let metadata = FileReference::new("/media/meta.xlsx");
        let processed = FileReference::new("/media/transaction_summary.xlsx");

        assert_eq!(
            api.summary_url(&metadata, &processed),
            "http://localhost:8000/api/get-transaction-summary/?metadata_url=%2Fmedia%2Fmeta.xlsx&processed_file_url=%2Fmedia%2Ftransaction_summary.xlsx"
        );
        assert_eq!(
            api.download_url(&processed),
            "http://localhost:8000/download/?file_url=%2Fmedia%2Ftransaction_summary.xlsx"
        );
        assert_eq!(api.media_url("comparison.xlsx"), "http://localhost:8000/media/comparison.xlsx");
    }

    #[test]
    fn test_query_encoding_matches_uri_component() {
        assert_eq!(
            with_query("/x", &[("q", "a&b=c (1)~*'!".to_string())]),
            "/x?q=a%26b%3Dc%20(1)~*'!"
        );
        assert_eq!(with_query("/x", &[]), "/x");
    }

    #[test]
    fn test_server_message_prefers_error_body() {
        assert_eq!(server_message(400, r#"{"error": "No file provided."}"#), "No file provided.");
        assert_eq!(server_message(500, "<html>boom</html>"), "HTTP 500");
        assert_eq!(server_message(404, r#"{"error": ""}"#), "HTTP 404");
    }
}

//! Multipart file uploads to the backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::api::{network_error, read_json, ApiClient};
use crate::types::{AppError, AppResult, FeedbackRow, FeedbackUploadResponse, FileReference, UploadResponse};

/// Which upload endpoint a file goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadKind {
    /// Raw or dissected test-case file.
    TestCases,
    /// Metadata file with baseline transaction names.
    Metadata,
    /// Reviewed feedback file.
    Feedback,
}

impl UploadKind {
    pub fn path(&self) -> &'static str {
        match self {
            UploadKind::TestCases => "/api/upload/",
            UploadKind::Metadata => "/api/upload-metadata/",
            UploadKind::Feedback => "/api/upload-feedback/",
        }
    }

    /// Multipart field name the backend reads the file from.
    pub fn field(&self) -> &'static str {
        match self {
            UploadKind::Feedback => "feedback_file",
            UploadKind::TestCases | UploadKind::Metadata => "file",
        }
    }

    /// Message shown when submitting without a file.
    pub fn missing_file_message(&self) -> &'static str {
        match self {
            UploadKind::TestCases => "Please select a file.",
            UploadKind::Metadata => "Please select a metadata file.",
            UploadKind::Feedback => "Please select a file first.",
        }
    }

    /// Fail before any request when nothing was picked.
    pub fn require_file(&self, file: Option<File>) -> AppResult<File> {
        file.ok_or_else(|| match self {
            UploadKind::TestCases => AppError::NoFileSelected,
            _ => AppError::MissingInput(self.missing_file_message().to_string()),
        })
    }
}

impl ApiClient {
    async fn post_file<T>(&self, kind: UploadKind, file: &File) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let form_data =
            FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob(kind.field(), file)
            .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

        let url = self.endpoint(kind.path());
        log::info!("📤 Uploading {} to {}", file.name(), url);
        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        read_json(response, AppError::Upload).await
    }

    /// Upload a test-case or metadata file and return its reference unchanged.
    pub async fn upload(&self, kind: UploadKind, file: &File) -> AppResult<FileReference> {
        let response: UploadResponse = self.post_file(kind, file).await?;
        Ok(response.file_url)
    }

    /// Upload a feedback file and return the rows the backend extracted.
    pub async fn upload_feedback(&self, file: &File) -> AppResult<Vec<FeedbackRow>> {
        let response: FeedbackUploadResponse = self.post_file(UploadKind::Feedback, file).await?;
        match response.feedback_json {
            Some(rows) if !rows.is_empty() => Ok(rows),
            _ => Err(AppError::NoData("feedback data".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_never_reaches_the_network() {
        let err = UploadKind::TestCases.require_file(None).unwrap_err();
        assert_eq!(err, AppError::NoFileSelected);
        assert_eq!(err.to_string(), "Please select a file.");

        let err = UploadKind::Metadata.require_file(None).unwrap_err();
        assert_eq!(err.to_string(), "Please select a metadata file.");
    }

    #[test]
    fn test_upload_response_keeps_reference_verbatim() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"file_url": "/media/Test Cases_v2.xlsx", "processing_result": "ok", "output_file_path": "/srv/x.csv"}"#,
        )
        .unwrap();
        assert_eq!(response.file_url.as_str(), "/media/Test Cases_v2.xlsx");
    }

    #[test]
    fn test_feedback_field_name() {
        assert_eq!(UploadKind::Feedback.field(), "feedback_file");
        assert_eq!(UploadKind::Metadata.field(), "file");
        assert_eq!(UploadKind::Metadata.path(), "/api/upload-metadata/");
    }

    #[test]
    fn test_feedback_response_deserialization() {
        let response: FeedbackUploadResponse = serde_json::from_str(
            r#"{
                "message": "Feedback file uploaded successfully",
                "file_path": "feedback_files/review.xlsx",
                "feedback_json": [{"test_case_id": "TC-1", "Verdict": "Duplicate"}]
            }"#,
        )
        .unwrap();
        let rows = response.feedback_json.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Verdict"], "Duplicate");
    }
}

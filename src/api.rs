//! HTTP client for the Q&A backend.
//!
//! One method per backend endpoint:
//!
//! | Method | Endpoint | Success body |
//! |--------|----------|--------------|
//! | [`ApiClient::upload`] | `POST /api/upload` (multipart) | `{ inserted }` |
//! | [`ApiClient::similarity_search`] | `POST /api/similarity_search` | `[SearchResult]` |
//! | [`ApiClient::journal_chunks`] | `GET /api/{journal_id}` | `{ journal_id, chunks }` |
//!
//! Routing is decided by HTTP status alone: 2xx takes the success path,
//! anything else is a [`WorkflowError::Server`] carrying the backend's
//! message field when one can be parsed out of the body (`detail` for
//! upload, `error` for search and lookup), else a workflow-specific
//! fallback. A request that never produces a response is a
//! [`WorkflowError::Transport`].
//!
//! No client-enforced timeout, no retries, no authentication headers.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::WorkflowError;
use crate::models::{JournalResponse, SearchRequest, SearchResult, UploadResult};

/// Fallback message when an upload fails without a parseable `detail`.
pub const UPLOAD_FAILED: &str = "Upload failed";
/// Fallback message when a search fails without a parseable `error`.
pub const SEARCH_FAILED: &str = "An error occurred while searching";
/// Fallback message when a lookup fails without a parseable `error`.
pub const LOOKUP_FAILED: &str = "An error occurred while fetching chunks";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against a backend base origin (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a file as multipart form content to the ingestion endpoint.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult, WorkflowError> {
        let url = format!("{}/api/upload", self.base_url);
        debug!(%url, file_name, content_type, "uploading document");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| WorkflowError::Validation(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|_| WorkflowError::transport())?;

        into_result(response, "detail", UPLOAD_FAILED).await
    }

    /// Run a ranked similarity search. The response order is the backend's
    /// ranking and is preserved as received.
    pub async fn similarity_search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SearchResult>, WorkflowError> {
        let url = format!("{}/api/similarity_search", self.base_url);
        debug!(%url, query = %request.query, k = request.k, "similarity search");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|_| WorkflowError::transport())?;

        into_result(response, "error", SEARCH_FAILED).await
    }

    /// Fetch all chunks belonging to one journal. The identifier is
    /// percent-encoded into the path.
    pub async fn journal_chunks(
        &self,
        journal_id: &str,
    ) -> Result<JournalResponse, WorkflowError> {
        let url = format!("{}/api/{}", self.base_url, urlencoding::encode(journal_id));
        debug!(%url, journal_id, "journal chunk lookup");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|_| WorkflowError::transport())?;

        into_result(response, "error", LOOKUP_FAILED).await
    }
}

/// Route a response by status: 2xx deserializes the success body, anything
/// else becomes a server error with a best-effort message.
async fn into_result<T: DeserializeOwned>(
    response: reqwest::Response,
    error_field: &str,
    fallback: &str,
) -> Result<T, WorkflowError> {
    let status = response.status();
    debug!(status = %status, "backend response");

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| WorkflowError::Server(format!("Unexpected response from server: {}", e)))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(WorkflowError::Server(error_message(
            &body,
            error_field,
            fallback,
        )))
    }
}

/// Pull the server's message field out of a failure body, best-effort.
///
/// The exact error schema is not guaranteed by the backend, so any body
/// that is not JSON or lacks the expected field falls back to a generic
/// workflow-specific message.
fn error_message(body: &str, field: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get(field).and_then(|m| m.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

//! Upload workflow controller.
//!
//! Owns the document-upload state machine: file selection with a client-side
//! content-type filter, a single multipart submission to `POST /api/upload`,
//! and the per-attempt success/failure status.
//!
//! Selection accepts exactly one file, and only PDF or JSON documents; any
//! other type is rejected synchronously (no request is issued) and the
//! previously accepted file is cleared. The backend may still apply its own
//! stricter validation.

use std::path::{Path, PathBuf};

use crate::api::ApiClient;
use crate::error::WorkflowError;
use crate::models::UploadResult;
use crate::workflow::Phase;

/// Validation message for a rejected content type.
pub const BAD_FILE_TYPE: &str = "Please select a PDF or JSON file";

/// A locally selected file that passed the content-type filter.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: &'static str,
}

/// Map a file's extension to its declared content type.
///
/// Returns `None` for anything other than a PDF or JSON document.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "json" => Some("application/json"),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct UploadController {
    file: Option<SelectedFile>,
    pub phase: Phase<UploadResult>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the file to upload, replacing any previous selection.
    ///
    /// A file with a rejected content type clears the previous selection and
    /// returns a validation error without issuing any request. A valid
    /// selection discards the previous attempt's status.
    pub fn select_file(&mut self, path: &Path) -> Result<(), WorkflowError> {
        match content_type_for(path) {
            Some(content_type) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.file = Some(SelectedFile {
                    path: path.to_path_buf(),
                    file_name,
                    content_type,
                });
                self.phase = Phase::Idle;
                Ok(())
            }
            None => {
                self.file = None;
                Err(WorkflowError::Validation(BAD_FILE_TYPE.to_string()))
            }
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Submission is possible only with a valid file and no request in flight.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.phase.is_in_flight()
    }

    /// Submit the selected file to the ingestion endpoint.
    ///
    /// On success the selection is cleared so the same file can be re-picked
    /// immediately; on any failure it is kept for resubmission.
    pub async fn submit(&mut self, api: &ApiClient) {
        if !self.can_submit() {
            return;
        }
        // can_submit guarantees a selection
        let Some(file) = self.file.clone() else {
            return;
        };

        let bytes = match std::fs::read(&file.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                // Local read failure: no request issued
                self.phase = Phase::Failed(format!(
                    "Failed to read {}: {}",
                    file.path.display(),
                    e
                ));
                return;
            }
        };

        self.phase.begin();
        let result = api.upload(&file.file_name, file.content_type, bytes).await;
        if result.is_ok() {
            self.file = None;
        }
        self.phase.complete(result);
    }

    /// The user-visible status for the current attempt, if any.
    pub fn status_line(&self) -> Option<String> {
        match &self.phase {
            Phase::Idle => None,
            Phase::InFlight => Some("Uploading...".to_string()),
            Phase::Succeeded(result) => Some(success_message(result)),
            Phase::Failed(message) => Some(message.clone()),
        }
    }
}

/// Success wording, including the backend's chunk count.
pub fn success_message(result: &UploadResult) -> String {
    format!(
        "Successfully uploaded! {} chunks created.",
        result.inserted
    )
}

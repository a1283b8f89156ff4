//! Workflow error taxonomy.
//!
//! Every submission failure falls into exactly one of three kinds, handled
//! uniformly across all workflows:
//!
//! | Kind | When | Example |
//! |------|------|---------|
//! | [`WorkflowError::Validation`] | Before any request is sent | bad file type, empty query |
//! | [`WorkflowError::Server`] | Non-2xx response received | backend's `detail`/`error` message |
//! | [`WorkflowError::Transport`] | No response obtained | connection refused |
//!
//! Errors are always terminal for the current submission and local to their
//! workflow; they are surfaced as user-visible text, never propagated to the
//! shell.

use thiserror::Error;

/// Generic connectivity message shared by all workflows.
pub const CONNECT_FAILED: &str = "Failed to connect to the server";

#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    /// Rejected client-side; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The backend responded with a non-2xx status. Carries the server's
    /// message field when present, otherwise a workflow-specific fallback.
    #[error("{0}")]
    Server(String),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
}

impl WorkflowError {
    /// The user-visible message for this error.
    pub fn message(&self) -> &str {
        match self {
            WorkflowError::Validation(m)
            | WorkflowError::Server(m)
            | WorkflowError::Transport(m) => m,
        }
    }

    /// Shorthand for the shared connectivity error.
    pub fn transport() -> Self {
        WorkflowError::Transport(CONNECT_FAILED.to_string())
    }
}

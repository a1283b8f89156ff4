//! Composition root for the three workflows.
//!
//! The shell holds which single workflow is currently active and whether the
//! upload workflow is presented as an overlay. Workflows never communicate
//! with each other; switching the active workflow does not reset or cancel
//! the inactive one, and the upload overlay can be opened or closed without
//! touching either.

use crate::lookup::LookupController;
use crate::search::SearchController;
use crate::upload::UploadController;

/// The currently visible workflow. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workflow {
    #[default]
    SimilaritySearch,
    ChunkLookup,
}

#[derive(Debug, Default)]
pub struct Shell {
    pub active: Workflow,
    upload_open: bool,
    pub upload: UploadController,
    pub search: SearchController,
    pub lookup: LookupController,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the visible workflow. The previously active controller keeps
    /// its last state.
    pub fn activate(&mut self, workflow: Workflow) {
        self.active = workflow;
    }

    /// Present the upload workflow as an overlay. Does not affect the
    /// active workflow.
    pub fn open_upload(&mut self) {
        self.upload_open = true;
    }

    /// Hide the upload overlay. Abandons any displayed status but does not
    /// cancel an in-flight upload.
    pub fn close_upload(&mut self) {
        self.upload_open = false;
    }

    pub fn upload_open(&self) -> bool {
        self.upload_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Phase;

    #[test]
    fn test_default_workflow_is_search() {
        let shell = Shell::new();
        assert_eq!(shell.active, Workflow::SimilaritySearch);
        assert!(!shell.upload_open());
    }

    #[test]
    fn test_switching_tabs_retains_inactive_state() {
        let mut shell = Shell::new();
        shell.search.query = "cover crops".to_string();
        shell.search.phase = Phase::Failed("boom".to_string());

        shell.activate(Workflow::ChunkLookup);
        shell.activate(Workflow::SimilaritySearch);

        assert_eq!(shell.search.query, "cover crops");
        assert_eq!(shell.search.phase.error(), Some("boom"));
    }

    #[test]
    fn test_upload_overlay_does_not_touch_active_tab() {
        let mut shell = Shell::new();
        shell.activate(Workflow::ChunkLookup);
        shell.lookup.journal_id = "doc1".to_string();

        shell.open_upload();
        assert!(shell.upload_open());
        assert_eq!(shell.active, Workflow::ChunkLookup);

        shell.close_upload();
        assert!(!shell.upload_open());
        assert_eq!(shell.lookup.journal_id, "doc1");
    }
}

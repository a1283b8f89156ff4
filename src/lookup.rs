//! Chunk lookup workflow controller.
//!
//! Fetches every chunk belonging to one journal (source document) by its
//! string identifier via `GET /api/{journal_id}`, with the identifier
//! percent-encoded into the path. Mirrors the search workflow's state
//! machine.
//!
//! A response with zero chunks is a successful, empty result: it renders
//! the journal identifier and an explicit empty-state message, not an error.

use crate::api::ApiClient;
use crate::models::JournalResponse;
use crate::search::EMPTY_TEXT;
use crate::workflow::Phase;

#[derive(Debug, Default)]
pub struct LookupController {
    pub journal_id: String,
    pub phase: Phase<JournalResponse>,
}

impl LookupController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission requires a non-whitespace identifier and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.journal_id.trim().is_empty() && !self.phase.is_in_flight()
    }

    pub async fn submit(&mut self, api: &ApiClient) {
        if !self.can_submit() {
            return;
        }

        let journal_id = self.journal_id.clone();
        self.phase.begin();
        let result = api.journal_chunks(&journal_id).await;
        self.phase.complete(result);
    }

    pub fn render(&self) -> String {
        match &self.phase {
            Phase::Idle => String::new(),
            Phase::InFlight => "Fetching chunks for journal ID...".to_string(),
            Phase::Failed(message) => message.clone(),
            Phase::Succeeded(response) => render_journal(response),
        }
    }
}

/// Render a journal lookup response, preserving the backend's chunk order.
pub fn render_journal(response: &JournalResponse) -> String {
    let mut out = format!("Journal: {}\n", response.journal_id);
    out.push_str(&format!("Found {} chunks\n", response.chunks.len()));

    if response.chunks.is_empty() {
        out.push_str("\nNo chunks found for this journal ID.\n");
        return out;
    }

    for (i, chunk) in response.chunks.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("Chunk {} | ID: {}", i + 1, chunk.id));
        if let Some(original_id) = &chunk.payload.original_id {
            out.push_str(&format!(" | Original ID: {}", original_id));
        }
        out.push('\n');
        let text = if chunk.text.is_empty() {
            EMPTY_TEXT
        } else {
            chunk.text.as_str()
        };
        out.push_str(&format!("   {}\n", text));
        out.push_str(&format!(
            "   Section: {} | Journal: {} | Year: {} | Usage: {}\n",
            chunk.payload.section_heading,
            chunk.payload.journal,
            chunk.payload.publish_year,
            chunk.payload.usage_count
        ));
        if !chunk.payload.attributes.is_empty() {
            out.push_str(&format!(
                "   Tags: {}\n",
                chunk.payload.attributes.join(", ")
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chunk, ChunkPayload};

    fn make_chunk(id: &str, original_id: Option<&str>) -> Chunk {
        Chunk {
            id: id.to_string(),
            text: "chunk text".to_string(),
            payload: ChunkPayload {
                section_heading: "Results".to_string(),
                journal: "extension_brief_mucuna.pdf".to_string(),
                publish_year: 2019,
                usage_count: 2,
                attributes: Vec::new(),
                original_id: original_id.map(|s| s.to_string()),
            },
        }
    }

    #[test]
    fn test_render_empty_journal_is_not_an_error() {
        let response = JournalResponse {
            journal_id: "doc1".to_string(),
            chunks: Vec::new(),
        };
        let out = render_journal(&response);
        assert!(out.contains("Journal: doc1"));
        assert!(out.contains("Found 0 chunks"));
        assert!(out.contains("No chunks found for this journal ID."));
    }

    #[test]
    fn test_render_chunk_with_original_id() {
        let response = JournalResponse {
            journal_id: "extension_brief_mucuna.pdf".to_string(),
            chunks: vec![make_chunk("c9", Some("x1"))],
        };
        let out = render_journal(&response);
        assert!(out.contains("Found 1 chunks"));
        assert!(out.contains("Chunk 1 | ID: c9 | Original ID: x1"));
    }

    #[test]
    fn test_render_chunk_without_original_id_omits_field() {
        let response = JournalResponse {
            journal_id: "doc1".to_string(),
            chunks: vec![make_chunk("c1", None)],
        };
        let out = render_journal(&response);
        assert!(out.contains("Chunk 1 | ID: c1\n"));
        assert!(!out.contains("Original ID"));
        assert!(!out.contains("undefined"));
    }

    #[test]
    fn test_render_preserves_chunk_order_with_ordinals() {
        let response = JournalResponse {
            journal_id: "doc1".to_string(),
            chunks: vec![make_chunk("b", None), make_chunk("a", None)],
        };
        let out = render_journal(&response);
        let pos_b = out.find("Chunk 1 | ID: b").unwrap();
        let pos_a = out.find("Chunk 2 | ID: a").unwrap();
        assert!(pos_b < pos_a, "chunk order must be preserved as received");
    }

    #[test]
    fn test_cannot_submit_blank_identifier() {
        let mut controller = LookupController::new();
        assert!(!controller.can_submit());
        controller.journal_id = " \t".to_string();
        assert!(!controller.can_submit());
        controller.journal_id = "doc1".to_string();
        assert!(controller.can_submit());
    }

    #[test]
    fn test_cannot_submit_while_in_flight() {
        let mut controller = LookupController::new();
        controller.journal_id = "doc1".to_string();
        controller.phase.begin();
        assert!(!controller.can_submit());
    }
}

//! Wire types shared with the Document Q&A backend.
//!
//! These mirror the JSON bodies exchanged with the backend verbatim. They are
//! transient view-models: each response is deserialized fresh, held for the
//! lifetime of the current render, and dropped on the next submission.

use serde::{Deserialize, Serialize};

/// Metadata attached to every chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkPayload {
    pub section_heading: String,
    /// Identifier of the owning source document (e.g. the original filename).
    pub journal: String,
    pub publish_year: i64,
    pub usage_count: i64,
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Pre-ingestion identifier. Only present on chunks returned by a
    /// journal-scoped lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
}

/// A retrievable unit of text belonging to one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    /// May be empty; rendering substitutes a placeholder for empty text.
    pub text: String,
    pub payload: ChunkPayload,
}

/// A chunk annotated with a relevance score in `[0, 1]`, higher is better.
///
/// Results arrive from the backend already sorted by descending score and
/// are never re-sorted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
    pub text: String,
    pub payload: ChunkPayload,
}

/// Body sent to `POST /api/similarity_search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub k: u32,
    pub min_score: f64,
}

/// Response from a journal-scoped lookup. Chunk order is defined by the
/// backend and preserved as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalResponse {
    pub journal_id: String,
    pub chunks: Vec<Chunk>,
}

/// Response from a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResult {
    /// Number of chunks the backend created from the uploaded file.
    pub inserted: u64,
}

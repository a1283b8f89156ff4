//! Similarity search workflow controller.
//!
//! Owns the search parameters (query, top-K, minimum score), the client-side
//! clamping rules, a single JSON submission to `POST /api/similarity_search`,
//! and the rendering of ranked results.
//!
//! Parameter bounds are enforced before anything is sent:
//!
//! | Field | Default | Bound |
//! |-------|---------|-------|
//! | `query` | "" | required non-empty after trim |
//! | `k` | 3 | clamped to `[1, 20]`; non-numeric input falls back to 3 |
//! | `min_score` | 0.2 | clamped to `[0, 1]`; non-numeric input falls back to 0.2 |
//!
//! Results arrive rank-sorted by descending score and are rendered in
//! received order; the client never re-sorts. A new submission fully
//! replaces the prior result set, and a failed submission clears it so no
//! stale results are shown under a misleading query.

use crate::api::ApiClient;
use crate::models::{SearchRequest, SearchResult};
use crate::workflow::Phase;

pub const DEFAULT_K: u32 = 3;
pub const K_MIN: u32 = 1;
pub const K_MAX: u32 = 20;
pub const DEFAULT_MIN_SCORE: f64 = 0.2;

/// Placeholder rendered in place of empty chunk text.
pub const EMPTY_TEXT: &str = "No text content available";

/// Parse a top-K entry, falling back to the default for invalid input and
/// clamping into `[1, 20]`.
pub fn k_from_input(raw: &str) -> u32 {
    let parsed = raw.trim().parse::<i64>().unwrap_or(i64::from(DEFAULT_K));
    clamp_k(parsed)
}

pub fn clamp_k(k: i64) -> u32 {
    k.clamp(i64::from(K_MIN), i64::from(K_MAX)) as u32
}

/// Parse a minimum-score entry, falling back to the default for invalid
/// input and clamping into `[0, 1]`.
pub fn min_score_from_input(raw: &str) -> f64 {
    let parsed = raw.trim().parse::<f64>().unwrap_or(DEFAULT_MIN_SCORE);
    clamp_min_score(parsed)
}

pub fn clamp_min_score(score: f64) -> f64 {
    if score.is_nan() {
        return DEFAULT_MIN_SCORE;
    }
    score.clamp(0.0, 1.0)
}

/// Render a relevance score as a percentage with one decimal digit.
///
/// Presentation only: the stored score value is never mutated.
pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[derive(Debug)]
pub struct SearchController {
    pub query: String,
    pub k: u32,
    pub min_score: f64,
    pub phase: Phase<Vec<SearchResult>>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self {
            query: String::new(),
            k: DEFAULT_K,
            min_score: DEFAULT_MIN_SCORE,
            phase: Phase::Idle,
        }
    }
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission requires a non-whitespace query and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty() && !self.phase.is_in_flight()
    }

    /// Submit the current parameters. On completion the prior result set is
    /// fully replaced; a failure clears it.
    pub async fn submit(&mut self, api: &ApiClient) {
        if !self.can_submit() {
            return;
        }

        let request = SearchRequest {
            query: self.query.clone(),
            k: self.k,
            min_score: self.min_score,
        };

        self.phase.begin();
        let result = api.similarity_search(&request).await;
        self.phase.complete(result);
    }

    /// Render the current state as user-visible text.
    pub fn render(&self) -> String {
        match &self.phase {
            Phase::Idle => String::new(),
            Phase::InFlight => "Searching for similar documents...".to_string(),
            Phase::Failed(message) => message.clone(),
            Phase::Succeeded(results) => render_results(results),
        }
    }
}

/// Render a result set in received (rank) order.
pub fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results.".to_string();
    }

    let mut out = format!("Search Results ({})\n", results.len());
    for (i, result) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. Score: {}\n", i + 1, format_score(result.score)));
        let text = if result.text.is_empty() {
            EMPTY_TEXT
        } else {
            result.text.as_str()
        };
        out.push_str(&format!("   {}\n", text));
        out.push_str(&format!(
            "   Section: {} | Journal: {} | Year: {} | Usage: {}\n",
            result.payload.section_heading,
            result.payload.journal,
            result.payload.publish_year,
            result.payload.usage_count
        ));
        if !result.payload.attributes.is_empty() {
            out.push_str(&format!(
                "   Tags: {}\n",
                result.payload.attributes.join(", ")
            ));
        }
    }
    out
}

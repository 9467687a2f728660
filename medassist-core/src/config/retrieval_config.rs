use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Default number of snippets kept after ranking.
    pub top_k: usize,
    /// Default score threshold, applied after truncation to `top_k`.
    pub min_score: f64,
    /// Title used when a document has none.
    pub default_title: String,
    /// Source used when a document has none.
    pub default_source: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            min_score: defaults::DEFAULT_MIN_SCORE,
            default_title: defaults::DEFAULT_SNIPPET_TITLE.to_string(),
            default_source: defaults::DEFAULT_SNIPPET_SOURCE.to_string(),
        }
    }
}

use serde::{Deserialize, Serialize};

use super::ScoredDocument;

/// A ranked, display-ready projection of a knowledge document.
///
/// Owned by the caller; localizing one produces a new copy and never
/// touches the stored [`Document`](super::Document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    pub score: f64,
}

impl Snippet {
    /// Project a scored document, filling absent title/source with the given placeholders.
    pub fn from_scored(scored: &ScoredDocument<'_>, default_title: &str, default_source: &str) -> Self {
        let doc = scored.document;
        Self {
            id: doc.id.clone(),
            title: doc
                .title
                .clone()
                .unwrap_or_else(|| default_title.to_string()),
            content: doc.content.clone(),
            source: doc
                .source
                .clone()
                .unwrap_or_else(|| default_source.to_string()),
            score: scored.score,
        }
    }
}

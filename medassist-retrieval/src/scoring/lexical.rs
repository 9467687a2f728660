use medassist_core::models::Document;

use crate::query::Query;

/// Keyword-overlap scorer used when the semantic backend is unavailable.
///
/// Score is the number of query tokens that occur, case-insensitively, as
/// substrings of the document's title and content. Tokens are matched whole,
/// so "body ache" only counts if that exact phrase appears.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer;

impl LexicalScorer {
    pub fn score(&self, query: &Query, document: &Document) -> f64 {
        let text = document.scoring_text().to_lowercase();
        query
            .tokens
            .iter()
            .filter(|token| !token.is_empty() && text.contains(&token.to_lowercase()))
            .count() as f64
    }
}

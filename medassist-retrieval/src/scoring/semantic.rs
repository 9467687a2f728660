use std::sync::Arc;

use medassist_core::errors::{EmbeddingError, MedAssistResult};
use medassist_core::models::Document;
use medassist_core::traits::ISemanticEncoder;
use medassist_embeddings::{cosine_similarity, EmbeddingCache};

use crate::query::Query;

/// Dense-embedding cosine scorer.
pub struct SemanticScorer<'a> {
    encoder: Arc<dyn ISemanticEncoder>,
    cache: &'a EmbeddingCache,
}

impl<'a> SemanticScorer<'a> {
    pub fn new(encoder: Arc<dyn ISemanticEncoder>, cache: &'a EmbeddingCache) -> Self {
        Self { encoder, cache }
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    /// Cosine similarity between query text and `"{title}. {content}"`.
    ///
    /// # Errors
    /// Encoder failures, dimension mismatches and non-finite scores.
    pub fn score(&self, query: &Query, document: &Document) -> MedAssistResult<f64> {
        let query_vec = self.cache.get_or_encode(self.encoder.as_ref(), &query.text)?;
        let doc_vec = self
            .cache
            .get_or_encode(self.encoder.as_ref(), &document.scoring_text())?;
        let score = cosine_similarity(&query_vec, &doc_vec)?;
        if !score.is_finite() {
            return Err(EmbeddingError::NonFiniteScore {
                document_id: document.id.clone(),
            }
            .into());
        }
        Ok(score)
    }
}

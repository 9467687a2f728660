use crate::errors::MedAssistResult;
use crate::models::Snippet;

/// Ranked knowledge retrieval.
pub trait IRetriever: Send + Sync {
    /// Rank the knowledge store for the given canonical symptoms and diagnosis.
    fn retrieve(
        &self,
        symptoms: &[String],
        primary_diagnosis: &str,
        top_k: usize,
        min_score: f64,
    ) -> MedAssistResult<Vec<Snippet>>;
}
